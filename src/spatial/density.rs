//! Density grid - coarse per-cell particle counts
//!
//! Only the spawner reads it: a brush stroke stops filling a cell once the
//! cell holds `cap` particles. Movement never consults it. Counts are derived
//! state and are rebuilt from the particle list at the top of every tick.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::Particle;

pub struct DensityGrid {
    cell_size: u32,
    cells_x: u32,
    cells_y: u32,
    cap: u32,
    counts: Vec<u32>,
}

#[inline]
fn cell_index_for(cell_size: u32, cells_x: u32, x: i32, y: i32) -> usize {
    let cx = (x as u32) / cell_size;
    let cy = (y as u32) / cell_size;
    (cy * cells_x + cx) as usize
}

impl DensityGrid {
    pub fn new(world_width: u32, world_height: u32, cell_size: u32, cap: u32) -> Self {
        let cells_x = world_width.div_ceil(cell_size);
        let cells_y = world_height.div_ceil(cell_size);
        Self {
            cell_size,
            cells_x,
            cells_y,
            cap,
            counts: vec![0; (cells_x * cells_y) as usize],
        }
    }

    #[cfg(test)]
    fn dimensions(&self) -> (u32, u32) {
        (self.cells_x, self.cells_y)
    }

    /// Cell index for an on-canvas coordinate.
    #[inline]
    pub fn cell_index(&self, x: i32, y: i32) -> usize {
        debug_assert!(x >= 0 && y >= 0, "cell_index: negative coordinate ({}, {})", x, y);
        cell_index_for(self.cell_size, self.cells_x, x, y)
    }

    #[inline]
    pub fn count_at(&self, x: i32, y: i32) -> u32 {
        self.counts[self.cell_index(x, y)]
    }

    /// Whether the spawner may still add a particle to the cell holding (x, y).
    #[inline]
    pub fn has_room(&self, x: i32, y: i32) -> bool {
        self.count_at(x, y) < self.cap
    }

    #[inline]
    pub fn add(&mut self, x: i32, y: i32) {
        let idx = self.cell_index(x, y);
        self.counts[idx] = self.counts[idx].saturating_add(1);
    }

    pub fn clear(&mut self) {
        self.counts.fill(0);
    }

    /// Recount every cell from the authoritative particle list.
    pub fn rebuild(&mut self, particles: &[Particle]) {
        let cell_size = self.cell_size;
        let cells_x = self.cells_x;
        let len = self.counts.len();

        #[cfg(feature = "parallel")]
        {
            self.counts = particles
                .par_iter()
                .filter(|p| !p.is_empty())
                .fold(
                    || vec![0u32; len],
                    |mut acc, p| {
                        let idx = cell_index_for(cell_size, cells_x, p.x, p.y);
                        acc[idx] = acc[idx].saturating_add(1);
                        acc
                    },
                )
                .reduce(
                    || vec![0u32; len],
                    |mut a, b| {
                        for (dst, src) in a.iter_mut().zip(b) {
                            *dst = dst.saturating_add(src);
                        }
                        a
                    },
                );
        }

        #[cfg(not(feature = "parallel"))]
        {
            debug_assert_eq!(self.counts.len(), len);
            self.counts.fill(0);
            for p in particles.iter().filter(|p| !p.is_empty()) {
                let idx = cell_index_for(cell_size, cells_x, p.x, p.y);
                self.counts[idx] = self.counts[idx].saturating_add(1);
            }
        }
    }

    /// Expose counts for diagnostics
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
