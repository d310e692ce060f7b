//! LiquidBehavior - water
//!
//! Falls straight down, otherwise flows sideways: a random side first, then
//! the opposite one. Never moves diagonally, so it spreads instead of piling.

use crate::core::RandomSource;

use super::{try_move, Behavior, UpdateContext, UpdateOutcome};

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for LiquidBehavior {
    fn update<R: RandomSource>(&self, ctx: &mut UpdateContext<R>) -> UpdateOutcome {
        if try_move(ctx, 0, 1) {
            return UpdateOutcome::Moved;
        }

        let dir = ctx.rng.sign();
        if try_move(ctx, dir, 0) {
            return UpdateOutcome::Moved;
        }
        UpdateOutcome::from_moved(try_move(ctx, -dir, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Material, Particle};
    use crate::spatial::OccupancyGrid;
    use crate::systems::behaviors::test_support::ConstantRng;

    #[test]
    fn falls_back_to_opposite_side() {
        let mut occ = OccupancyGrid::new(5, 3);
        // sign +1 first, right neighbour is taken
        let mut rng = ConstantRng(1);
        let mut water = Particle::spawn(2, 2, Material::Water, 100, &mut rng);
        occ.occupy(2, 2);
        occ.occupy(3, 2);

        let mut ctx = UpdateContext {
            particle: &mut water,
            occupancy: &mut occ,
            rng: &mut rng,
        };
        assert_eq!(LiquidBehavior::new().update(&mut ctx), UpdateOutcome::Moved);
        assert_eq!((water.x, water.y), (1, 2));
    }

    #[test]
    fn ignores_open_diagonal() {
        let mut occ = OccupancyGrid::new(3, 3);
        let mut rng = ConstantRng(0);
        let mut water = Particle::spawn(1, 1, Material::Water, 100, &mut rng);
        occ.occupy(1, 1);
        occ.occupy(1, 2);
        occ.occupy(0, 1);
        occ.occupy(2, 1);

        let mut ctx = UpdateContext {
            particle: &mut water,
            occupancy: &mut occ,
            rng: &mut rng,
        };
        // (0,2) and (2,2) are free but water only flows sideways.
        assert_eq!(LiquidBehavior::new().update(&mut ctx), UpdateOutcome::Idle);
        assert_eq!((water.x, water.y), (1, 1));
    }
}
