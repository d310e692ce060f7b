use crate::behaviors::BehaviorRegistry;
use crate::core::{RandomSource, XorShift32};
use crate::domain::EngineConfig;
use crate::spatial::{DensityGrid, OccupancyGrid};

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_default() -> SimulationCore<XorShift32> {
    let config = EngineConfig::default();
    let rng = XorShift32::new(config.seed);
    build(config, rng)
}

pub(super) fn create_simulation<R: RandomSource>(config: EngineConfig, rng: R) -> Result<SimulationCore<R>, String> {
    config.validate()?;
    Ok(build(config, rng))
}

fn build<R: RandomSource>(config: EngineConfig, rng: R) -> SimulationCore<R> {
    console_log!(
        "Simulation created: {}x{}, capacity {}",
        config.width,
        config.height,
        config.max_particles
    );

    SimulationCore {
        occupancy: OccupancyGrid::new(config.width, config.height),
        density: DensityGrid::new(
            config.width,
            config.height,
            config.density_cell_size,
            config.density_cap,
        ),
        // Start small; the list grows with the brush up to the cap.
        particles: Vec::with_capacity(config.max_particles.min(4096)),
        behaviors: BehaviorRegistry::new(),
        rng,
        frame: 0,
        capacity_warned: false,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}
