//! Player identification and per-turn action budgets.
//!
//! ## PlayerId
//!
//! Seat index of a player, 0-based, supporting up to 255 players.
//!
//! ## PlayerActionBudget
//!
//! The only player bookkeeping the rules engine touches: which mark the
//! player owns and how many actions remain in the current turn. Combo
//! scoring is the sole writer of `actions_remaining`.

use serde::{Deserialize, Serialize};

use super::Mark;

/// Player seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player's mark and the actions left in their current turn.
///
/// The counter is signed: combo scoring may subtract below zero in
/// principle, and callers treat any value `<= 0` as "turn over".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerActionBudget {
    pub mark: Mark,
    pub actions_remaining: i32,
}

impl PlayerActionBudget {
    /// A budget holding a single action, the state at the start of a turn.
    #[must_use]
    pub const fn new(mark: Mark) -> Self {
        Self {
            mark,
            actions_remaining: 1,
        }
    }

    /// Apply a signed adjustment (usually -1 plus any combo bonus).
    pub fn adjust(&mut self, delta: i32) {
        self.actions_remaining += delta;
    }

    /// Reset to a fresh single-action turn.
    pub fn refill(&mut self) {
        self.actions_remaining = 1;
    }

    /// True while the player may still act this turn.
    #[must_use]
    pub const fn has_actions(&self) -> bool {
        self.actions_remaining > 0
    }
}
