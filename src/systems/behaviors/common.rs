use crate::core::RandomSource;

use super::UpdateContext;

/// Move the acting particle by (dx, dy) if the destination is on the canvas
/// and holds no live particle. The occupancy index follows the move.
#[inline]
pub fn try_move<R: RandomSource>(ctx: &mut UpdateContext<R>, dx: i32, dy: i32) -> bool {
    let from_x = ctx.particle.x;
    let from_y = ctx.particle.y;
    let to_x = from_x + dx;
    let to_y = from_y + dy;

    if !ctx.occupancy.is_vacant(to_x, to_y) {
        return false;
    }

    ctx.occupancy.relocate(from_x, from_y, to_x, to_y);
    ctx.particle.x = to_x;
    ctx.particle.y = to_y;
    true
}
