//! Behaviors - per-material update rules
//!
//! Each rule issues an ordered list of candidate moves; the first move that
//! succeeds wins and a rule with no successful candidate leaves the particle
//! where it is. Stone has no behavior.

mod common;
mod energy;
mod liquid;
mod powder;

pub use common::try_move;
pub use energy::EnergyBehavior;
pub use liquid::LiquidBehavior;
pub use powder::PowderBehavior;

use crate::core::RandomSource;
use crate::domain::{Material, Particle};
use crate::spatial::OccupancyGrid;

/// Update context passed to behaviors
pub struct UpdateContext<'a, R: RandomSource> {
    pub particle: &'a mut Particle,
    pub occupancy: &'a mut OccupancyGrid,
    pub rng: &'a mut R,
}

/// Result of running one particle's rule for one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Idle,
    Moved,
    /// Particle turned into the `Empty` tombstone and released its cell
    Extinguished,
}

impl UpdateOutcome {
    #[inline]
    pub(crate) fn from_moved(moved: bool) -> Self {
        if moved { UpdateOutcome::Moved } else { UpdateOutcome::Idle }
    }
}

/// Behavior trait - each material family implements this
pub trait Behavior {
    fn update<R: RandomSource>(&self, ctx: &mut UpdateContext<R>) -> UpdateOutcome;
}

/// Behavior registry - dispatch by material
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    energy: EnergyBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            energy: EnergyBehavior::new(),
        }
    }

    pub fn update<R: RandomSource>(&self, ctx: &mut UpdateContext<R>) -> UpdateOutcome {
        match ctx.particle.material {
            Material::Sand => self.powder.update(ctx),
            Material::Water => self.liquid.update(ctx),
            Material::Fire => self.energy.update(ctx),
            Material::Stone | Material::Empty => UpdateOutcome::Idle,
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
