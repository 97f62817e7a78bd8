//! Per-cell status record.

use serde::{Deserialize, Serialize};

/// Status flags of a single cell. Every flag defaults to `false`.
///
/// `is_missing` and `is_dead` are written only by missing-node
/// propagation. `is_missing_candidate` is scratch space for that pass and
/// is always `false` between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellStatus {
    /// The cell is its mark's first placement. Permanent.
    pub is_root: bool,

    /// The cell has been turned into a cannon.
    pub is_cannon: bool,

    /// The cannon has fired its single shot.
    pub is_cannon_used: bool,

    /// The cell is not reachable from its mark's root.
    pub is_missing: bool,

    /// The cell was a cannon cut off from its root. Permanent.
    pub is_dead: bool,

    /// Tentatively disconnected during propagation.
    pub is_missing_candidate: bool,
}

impl CellStatus {
    /// Status of a freshly registered root cell.
    #[must_use]
    pub fn root() -> Self {
        Self {
            is_root: true,
            ..Self::default()
        }
    }

    /// Status left behind after the cell's piece is removed.
    ///
    /// Only the permanent flags survive.
    #[must_use]
    pub fn cleared(self) -> Self {
        Self {
            is_root: self.is_root,
            ..Self::default()
        }
    }

    /// True when the cell can fire: a cannon, unused, and not dead.
    #[must_use]
    pub fn can_fire(&self) -> bool {
        self.is_cannon && !self.is_cannon_used && !self.is_dead
    }
}
