use crate::core::RandomSource;
use crate::domain::ParticleView;

use super::SimulationCore;

// Background color in ABGR format (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA])
pub const BG_COLOR: u32 = 0xFF0A0A0A;

/// Values written per particle by `write_snapshot`: x, y, abgr
pub const SNAPSHOT_STRIDE: usize = 3;

pub(super) fn snapshot<R: RandomSource>(sim: &SimulationCore<R>) -> Vec<ParticleView> {
    sim.particles
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.view())
        .collect()
}

pub(super) fn write_snapshot<R: RandomSource>(sim: &SimulationCore<R>, out: &mut Vec<u32>) -> usize {
    out.reserve(sim.particles.len() * SNAPSHOT_STRIDE);
    let mut written = 0usize;
    for p in sim.particles.iter().filter(|p| !p.is_empty()) {
        out.push(p.x as u32);
        out.push(p.y as u32);
        out.push(p.color.to_abgr());
        written += 1;
    }
    written
}

pub(super) fn fill_frame<R: RandomSource>(sim: &SimulationCore<R>, buffer: &mut [u32]) -> Result<usize, String> {
    let width = sim.config.width as usize;
    let expected = width * (sim.config.height as usize);
    if buffer.len() != expected {
        return Err(format!(
            "frame buffer has {} pixels, canvas needs {} ({}x{})",
            buffer.len(),
            expected,
            sim.config.width,
            sim.config.height
        ));
    }

    buffer.fill(BG_COLOR);

    let mut painted = 0usize;
    for p in sim.particles.iter().filter(|p| !p.is_empty()) {
        let idx = sim.occupancy.index(p.x, p.y);
        buffer[idx] = p.color.to_abgr();
        painted += 1;
    }
    Ok(painted)
}
