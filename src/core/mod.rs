//! Core types: coordinates, marks, players, configuration, errors.
//!
//! Everything here is rule-agnostic. Games configure the engine via
//! `JudgeOptions` and `SessionConfig` rather than modifying the rules.

pub mod coordinate;
pub mod mark;
pub mod player;
pub mod config;
pub mod error;

pub use coordinate::Coordinate;
pub use mark::Mark;
pub use player::{PlayerActionBudget, PlayerId};
pub use config::{JudgeOptions, LinkMode, SessionConfig};
pub use error::{Error, Result};
