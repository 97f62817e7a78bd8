//! Engine and session configuration.
//!
//! Games configure the engine once at startup:
//! - `LinkMode`: which path catalog applies and whether missing nodes exist
//! - `JudgeOptions`: link mode plus the cannon and combo feature toggles
//! - `SessionConfig`: player count and board size for a `GameSession`
//!
//! The judge never changes its options after construction.

use serde::{Deserialize, Serialize};

use super::{Error, Mark, Result};

/// Rule family selecting the path catalog.
///
/// `Classic` has no notion of missing nodes; propagation is skipped and
/// combo scoring never grants bonuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkMode {
    Classic,
    #[default]
    Modern,
}

impl LinkMode {
    /// True when missing-node propagation runs in this mode.
    #[must_use]
    pub const fn tracks_missing_nodes(self) -> bool {
        matches!(self, LinkMode::Modern)
    }
}

impl std::fmt::Display for LinkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkMode::Classic => write!(f, "classic"),
            LinkMode::Modern => write!(f, "modern"),
        }
    }
}

/// Construction-time options for a `ConnectivityJudge`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeOptions {
    /// Path catalog and propagation behaviour.
    pub link_mode: LinkMode,

    /// Allow connected cells to become one-shot cannons.
    pub can_use_cannon: bool,

    /// Grant bonus actions for orphaning opponents or reconnecting own nodes.
    pub can_use_combo_action: bool,
}

impl JudgeOptions {
    /// Options for the given mode with both features disabled.
    #[must_use]
    pub fn new(link_mode: LinkMode) -> Self {
        Self {
            link_mode,
            ..Self::default()
        }
    }

    /// Enable cannons.
    #[must_use]
    pub fn with_cannon(mut self) -> Self {
        self.can_use_cannon = true;
        self
    }

    /// Enable combo actions.
    #[must_use]
    pub fn with_combo_action(mut self) -> Self {
        self.can_use_combo_action = true;
        self
    }

    /// True when combo scoring is live (feature on and modern mode).
    #[must_use]
    pub fn combo_active(&self) -> bool {
        self.can_use_combo_action && self.link_mode.tracks_missing_nodes()
    }
}

/// Configuration for a `GameSession`.
///
/// Deserialized configurations are checked with [`SessionConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionConfigData")]
pub struct SessionConfig {
    /// Number of players (1-8, one per mark symbol).
    pub player_count: usize,

    /// Square board side. `None` means `4 * player_count + 1`.
    #[serde(default)]
    pub board_size: Option<usize>,

    /// Options handed to the judge.
    #[serde(default)]
    pub options: JudgeOptions,
}

#[derive(Deserialize)]
struct SessionConfigData {
    player_count: usize,
    #[serde(default)]
    board_size: Option<usize>,
    #[serde(default)]
    options: JudgeOptions,
}

impl TryFrom<SessionConfigData> for SessionConfig {
    type Error = Error;

    fn try_from(data: SessionConfigData) -> Result<Self> {
        let config = Self {
            player_count: data.player_count,
            board_size: data.board_size,
            options: data.options,
        };
        config.validate()?;
        Ok(config)
    }
}

impl SessionConfig {
    /// Create a session configuration with default options.
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(
            player_count <= Mark::SYMBOLS.len(),
            "At most {} players supported",
            Mark::SYMBOLS.len()
        );

        Self {
            player_count,
            board_size: None,
            options: JudgeOptions::default(),
        }
    }

    /// Override the board side.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = Some(size);
        self
    }

    /// Set the judge options.
    #[must_use]
    pub fn with_options(mut self, options: JudgeOptions) -> Self {
        self.options = options;
        self
    }

    /// Effective board side.
    #[must_use]
    pub fn side(&self) -> usize {
        self.board_size.unwrap_or(self.player_count * 4 + 1)
    }

    /// Check the player count and board side a session would be built from.
    pub fn validate(&self) -> Result<()> {
        if self.player_count == 0 || self.player_count > Mark::SYMBOLS.len() {
            return Err(Error::InvalidConfig(format!(
                "player count {} is outside 1..={}",
                self.player_count,
                Mark::SYMBOLS.len()
            )));
        }
        let side = self.side();
        if side == 0 || side > i32::MAX as usize {
            return Err(Error::InvalidConfig(format!("board side {} is not usable", side)));
        }
        Ok(())
    }
}
