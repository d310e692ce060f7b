use crate::core::RandomSource;
use crate::domain::{Material, Particle};

use super::SimulationCore;

/// Brush offsets along one axis: `-radius, -radius + step, ..., <= radius`,
/// restricted to those that land inside `0..extent` once added to `center`.
/// Clipping keeps the sampling lattice anchored at `-radius`.
fn clipped_offsets(center: i32, radius: i32, step: i32, extent: u32) -> impl Iterator<Item = i32> {
    let center = center as i64;
    let radius = radius as i64;
    let step = step as i64;

    let lo = (-radius).max(-center);
    let hi = radius.min(extent as i64 - 1 - center);

    // First lattice point >= lo
    let skip = (lo + radius + step - 1).div_euclid(step).max(0);
    let start = -radius + skip * step;

    let mut next = start;
    std::iter::from_fn(move || {
        if next > hi {
            return None;
        }
        let out = next;
        next += step;
        Some(out as i32)
    })
}

pub(super) fn spawn<R: RandomSource>(sim: &mut SimulationCore<R>, cx: i32, cy: i32, radius: i32, material: Material) {
    if material.is_empty() || radius < 0 {
        return;
    }

    let step = material.stamp_step();
    let r2 = (radius as i64) * (radius as i64);
    let capacity = sim.config.max_particles;
    let fire_lifetime = sim.config.fire_lifetime;

    for dy in clipped_offsets(cy, radius, step, sim.config.height) {
        for dx in clipped_offsets(cx, radius, step, sim.config.width) {
            if (dx as i64) * (dx as i64) + (dy as i64) * (dy as i64) > r2 {
                continue;
            }
            if sim.particles.len() >= capacity {
                if !sim.capacity_warned {
                    sim.capacity_warned = true;
                    console_warn!("Particle cap of {} reached; brush input ignored", capacity);
                }
                return;
            }

            let x = cx + dx;
            let y = cy + dy;
            debug_assert!(sim.occupancy.in_bounds(x, y));

            if !sim.density.has_room(x, y) {
                continue;
            }

            sim.particles.push(Particle::spawn(x, y, material, fire_lifetime, &mut sim.rng));
            sim.density.add(x, y);
            sim.occupancy.occupy(x, y);
        }
    }
}

pub(super) fn clear<R: RandomSource>(sim: &mut SimulationCore<R>) {
    sim.particles.clear();
    sim.density.clear();
    sim.occupancy.clear();
    sim.capacity_warned = false;
    sim.frame = 0;
}
