//! A minimal game session wiring the judge to a grid and player budgets.
//!
//! The session applies actions in the order the rules require: check,
//! mutate, propagate, score, and hand the turn on when the budget runs out.

mod game;

pub use game::{ActionOutcome, GameSession};
