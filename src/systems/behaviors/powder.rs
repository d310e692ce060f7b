//! PowderBehavior - sand
//!
//! Falls straight down, otherwise rolls diagonally down to a random side.
//! Only one diagonal is tried per tick, which is what builds piles.

use crate::core::RandomSource;

use super::{try_move, Behavior, UpdateContext, UpdateOutcome};

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for PowderBehavior {
    fn update<R: RandomSource>(&self, ctx: &mut UpdateContext<R>) -> UpdateOutcome {
        if try_move(ctx, 0, 1) {
            return UpdateOutcome::Moved;
        }

        let dir = ctx.rng.sign();
        UpdateOutcome::from_moved(try_move(ctx, dir, 1))
    }
}
