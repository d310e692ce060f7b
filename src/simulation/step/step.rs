#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::behaviors::{UpdateContext, UpdateOutcome};
use crate::core::RandomSource;
use crate::domain::Particle;

use super::{PerfTimer, SimulationCore};

/// Clear every particle's per-tick marker.
fn reset_processed(particles: &mut [Particle]) {
    #[cfg(feature = "parallel")]
    {
        particles.par_iter_mut().for_each(|p| p.processed = false);
    }
    #[cfg(not(feature = "parallel"))]
    {
        for p in particles.iter_mut() {
            p.processed = false;
        }
    }
}

pub(super) fn tick<R: RandomSource>(sim: &mut SimulationCore<R>) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Derived state first: density counts and the "moved this tick" markers.
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    sim.density.rebuild(&sim.particles);
    reset_processed(&mut sim.particles);
    if let Some(t0) = t0 {
        sim.perf_stats.rebuild_ms = t0.elapsed_ms();
        sim.perf_stats.density_max = sim.density.max_count();
    }

    // Newest particles first. The processed flag is what guarantees
    // at most one rule application per particle; the order is a tie-break.
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    let mut processed = 0u32;
    let mut moved = 0u32;
    let mut extinguished = 0u32;
    for particle in sim.particles.iter_mut().rev() {
        if particle.processed || particle.is_empty() {
            continue;
        }

        let mut ctx = UpdateContext {
            particle,
            occupancy: &mut sim.occupancy,
            rng: &mut sim.rng,
        };
        let outcome = sim.behaviors.update(&mut ctx);
        ctx.particle.processed = true;

        processed += 1;
        match outcome {
            UpdateOutcome::Moved => moved += 1,
            UpdateOutcome::Extinguished => extinguished += 1,
            UpdateOutcome::Idle => {}
        }
    }
    if let Some(t0) = t0 {
        sim.perf_stats.update_ms = t0.elapsed_ms();
    }

    // Compact: drop burnt-out tombstones
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    if extinguished > 0 {
        sim.particles.retain(|p| !p.is_empty());
    }
    if let Some(t0) = t0 {
        sim.perf_stats.compact_ms = t0.elapsed_ms();
    }

    if perf_on {
        sim.perf_stats.particles_processed = processed;
        sim.perf_stats.particles_moved = moved;
        sim.perf_stats.fires_extinguished = extinguished;
        sim.perf_stats.particle_count = sim.particles.len() as u32;
        if let Some(start) = step_start {
            sim.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    sim.frame += 1;
}
