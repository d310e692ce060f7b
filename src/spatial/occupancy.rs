//! Occupancy index - exact per-coordinate live particle counts
//!
//! Replaces a linear scan over every particle with an O(1) lookup. A count
//! rather than a flag keeps stacked spawns (two particles dropped on the same
//! coordinate) consistent: the cell only reads as vacant once all of them
//! have left.

pub struct OccupancyGrid {
    width: u32,
    height: u32,
    live: Vec<u16>,
}

impl OccupancyGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            live: vec![0; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Index for coordinates already validated with `in_bounds`.
    #[inline(always)]
    pub fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(
            self.in_bounds(x, y),
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// True iff (x, y) is on the canvas and no live particle sits there.
    #[inline]
    pub fn is_vacant(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        *fast!(self.live, [idx]) == 0
    }

    /// Number of live particles at (x, y); 0 off-canvas.
    pub fn live_at(&self, x: i32, y: i32) -> u16 {
        if !self.in_bounds(x, y) {
            return 0;
        }
        self.live[self.index(x, y)]
    }

    #[inline]
    pub fn occupy(&mut self, x: i32, y: i32) {
        let idx = self.index(x, y);
        let v = fast!(self.live, [idx]).saturating_add(1);
        fast!(self.live, [idx] = v);
    }

    #[inline]
    pub fn release(&mut self, x: i32, y: i32) {
        let idx = self.index(x, y);
        let v = fast!(self.live, [idx]).saturating_sub(1);
        fast!(self.live, [idx] = v);
    }

    #[inline]
    pub fn relocate(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) {
        self.release(from_x, from_y);
        self.occupy(to_x, to_y);
    }

    pub fn clear(&mut self) {
        self.live.fill(0);
    }

    /// Sum of all counts; equals the live particle count when consistent.
    pub fn total(&self) -> u64 {
        self.live.iter().map(|&v| v as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_never_vacant() {
        let grid = OccupancyGrid::new(4, 3);
        assert!(grid.is_vacant(0, 0));
        assert!(grid.is_vacant(3, 2));
        assert!(!grid.is_vacant(-1, 0));
        assert!(!grid.is_vacant(4, 0));
        assert!(!grid.is_vacant(0, 3));
        assert_eq!(grid.live_at(10, 10), 0);
    }

    #[test]
    fn stacked_cell_stays_occupied_until_all_leave() {
        let mut grid = OccupancyGrid::new(4, 4);
        grid.occupy(1, 1);
        grid.occupy(1, 1);
        assert_eq!(grid.live_at(1, 1), 2);

        grid.relocate(1, 1, 2, 1);
        assert!(!grid.is_vacant(1, 1));
        assert!(!grid.is_vacant(2, 1));

        grid.relocate(1, 1, 1, 2);
        assert!(grid.is_vacant(1, 1));
        assert_eq!(grid.total(), 2);
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut grid = OccupancyGrid::new(2, 2);
        grid.occupy(0, 0);
        grid.occupy(1, 1);
        grid.clear();
        assert_eq!(grid.total(), 0);
        assert!(grid.is_vacant(0, 0) && grid.is_vacant(1, 1));
    }
}
