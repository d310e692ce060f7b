use crate::core::RandomSource;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics<R: RandomSource>(sim: &mut SimulationCore<R>, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats<R: RandomSource>(sim: &SimulationCore<R>) -> PerfStats {
    sim.perf_stats.clone()
}
