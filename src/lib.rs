//! # mark-link
//!
//! Rules engine for turn-based connection board games where every piece
//! must stay linked to its owner's first placement.
//!
//! ## Rules in Brief
//!
//! 1. **Roots**: a player's first placement is always legal and becomes the
//!    permanent root of their network.
//!
//! 2. **Links**: every later placement must reach an existing connected
//!    piece of the same mark through one of the catalog's jump paths, with
//!    the path's intermediate cells clear.
//!
//! 3. **Missing nodes** (modern mode): after each action connectivity is
//!    recomputed from all roots. Cut-off pieces are flagged missing and can
//!    no longer relay links.
//!
//! 4. **Cannons** (optional): a connected non-root piece may become a
//!    one-shot cannon that removes the first opposing piece along a line.
//!    A cannon that loses its connection dies.
//!
//! 5. **Combo actions** (optional): orphaning opponents or reconnecting
//!    your own pieces earns extra actions.
//!
//! ## Modules
//!
//! - `core`: Coordinates, marks, player budgets, configuration, errors
//! - `grid`: Board occupancy, cell status, root registry
//! - `paths`: Jump-pattern paths and the path catalog
//! - `rules`: The `ConnectivityJudge`
//! - `session`: A small orchestrator applying actions turn by turn

pub mod core;
pub mod grid;
pub mod paths;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Coordinate, Mark,
    PlayerId, PlayerActionBudget,
    JudgeOptions, LinkMode, SessionConfig,
    Error, Result,
};

pub use crate::grid::{CellStatus, Grid};

pub use crate::paths::{Path, PathCatalog};

pub use crate::rules::{ConnectivityJudge, MissingNodeDelta, PropagationSummary};

pub use crate::session::{ActionOutcome, GameSession};
