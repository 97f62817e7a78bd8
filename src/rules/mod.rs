//! The connectivity judge: every rule of the game lives here.
//!
//! `ConnectivityJudge` is built once per game from `JudgeOptions` and a
//! `PathCatalog`, then queried against a borrowed `Grid`:
//! - placement legality and the link condition (`judge`)
//! - missing-node propagation (`propagation`)
//! - cannon eligibility and fire resolution (`cannon`)
//! - combo-action scoring (`combo`)
//!
//! Predicates are total: off-board coordinates are simply ineligible.

pub mod judge;
pub mod propagation;
pub mod cannon;
pub mod combo;

pub use judge::ConnectivityJudge;
pub use propagation::PropagationSummary;
pub use combo::MissingNodeDelta;
