//! Spatial structures: the exact occupancy index and the coarse density grid.

pub mod density;
pub mod occupancy;

pub use density::DensityGrid;
pub use occupancy::OccupancyGrid;
