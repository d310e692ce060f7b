//! EnergyBehavior - fire
//!
//! Fire burns down by a random 0..5 each tick and turns into the `Empty`
//! tombstone once its lifetime is gone. While alive it rises, drifting to a
//! random upper neighbour when straight up is taken.

use crate::core::RandomSource;
use crate::domain::Material;

use super::{try_move, Behavior, UpdateContext, UpdateOutcome};

/// Lifetime lost per tick is drawn from `0..FIRE_DECAY_RANGE`.
pub const FIRE_DECAY_RANGE: u32 = 5;

pub struct EnergyBehavior;

impl EnergyBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for EnergyBehavior {
    fn update<R: RandomSource>(&self, ctx: &mut UpdateContext<R>) -> UpdateOutcome {
        ctx.particle.lifetime -= ctx.rng.below(FIRE_DECAY_RANGE) as i32;
        if ctx.particle.lifetime <= 0 {
            // Tombstone no longer occupies its cell; compaction drops it at end of tick.
            ctx.occupancy.release(ctx.particle.x, ctx.particle.y);
            ctx.particle.material = Material::Empty;
            return UpdateOutcome::Extinguished;
        }

        if try_move(ctx, 0, -1) {
            return UpdateOutcome::Moved;
        }

        let dx = ctx.rng.below(3) as i32 - 1;
        UpdateOutcome::from_moved(try_move(ctx, dx, -1))
    }
}
