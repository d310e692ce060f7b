//! Simulation - owns the particle list and steps it
//!
//! `SimulationCore` only orchestrates:
//! - spawning and clearing live in commands/
//! - the per-tick pass lives in step/
//! - snapshot/frame extraction lives in render/
//! - material rules live in systems/behaviors
//!
//! The particle list is authoritative. The occupancy index is kept in sync on
//! every spawn, move and burnout; the density grid is rebuilt every tick.

use crate::behaviors::BehaviorRegistry;
use crate::core::{RandomSource, XorShift32};
use crate::domain::{EngineConfig, Material, Particle, ParticleView};
use crate::spatial::{DensityGrid, OccupancyGrid};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::{BG_COLOR, SNAPSHOT_STRIDE};

use perf_timer::PerfTimer;

/// The simulation engine
pub struct SimulationCore<R: RandomSource = XorShift32> {
    config: EngineConfig,
    particles: Vec<Particle>,
    occupancy: OccupancyGrid,
    density: DensityGrid,
    behaviors: BehaviorRegistry,
    rng: R,

    // State
    frame: u64,
    capacity_warned: bool,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore<XorShift32> {
    /// Default 1280x720 canvas with a 50,000 particle cap
    pub fn new() -> Self {
        init::create_default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, String> {
        let rng = XorShift32::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl Default for SimulationCore<XorShift32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> SimulationCore<R> {
    /// Build an engine that draws every random decision from `rng`.
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self, String> {
        init::create_simulation(config, rng)
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn width(&self) -> u32 { self.config.width }

    pub fn height(&self) -> u32 { self.config.height }

    pub fn capacity(&self) -> usize { self.config.max_particles }

    /// Number of completed ticks since creation or the last `clear`
    pub fn frame(&self) -> u64 { self.frame }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    /// Read-only view of the particle list, newest last
    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn count_by_material(&self, material: Material) -> usize {
        self.particles.iter().filter(|p| p.material == material).count()
    }

    /// True iff (x, y) is on the canvas and no live particle occupies it.
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        self.occupancy.is_vacant(x, y)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Fill a disc around (x, y) with `material`
    pub fn spawn(&mut self, x: i32, y: i32, radius: i32, material: Material) {
        commands::spawn(self, x, y, radius, material);
    }

    /// Remove every particle
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Advance the simulation by one step
    pub fn tick(&mut self) {
        step::tick(self);
    }

    /// Live particles in list order, as of the last tick
    pub fn snapshot(&self) -> Vec<ParticleView> {
        render_extract::snapshot(self)
    }

    /// Rasterize live particles into a `width * height` ABGR buffer.
    /// Returns the number of particles painted.
    pub fn fill_frame(&self, buffer: &mut [u32]) -> Result<usize, String> {
        render_extract::fill_frame(self, buffer)
    }

    /// Append `[x, y, abgr]` triples for every live particle to `out`.
    pub fn write_snapshot(&self, out: &mut Vec<u32>) -> usize {
        render_extract::write_snapshot(self, out)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
