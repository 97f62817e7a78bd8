//! Jump-pattern paths and the catalog that selects them per link mode.
//!
//! A path is a list of relative steps. Anchored at a base cell it yields
//! absolute cells by cumulative addition; the first of them is the cell
//! the connection reaches, the rest must be clear for the jump to work.

pub mod catalog;

pub use catalog::{Path, PathCatalog};
