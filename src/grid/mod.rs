//! Board storage: occupancy, per-cell status flags, and the root registry.
//!
//! The grid holds no rules. Cells are addressed by `Coordinate` into flat
//! persistent vectors, so cloning a grid for a before/after comparison is
//! O(1).

pub mod status;
#[allow(clippy::module_inception)]
pub mod grid;

pub use grid::Grid;
pub use status::CellStatus;
