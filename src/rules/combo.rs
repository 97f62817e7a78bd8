//! Combo-action scoring.
//!
//! A move that orphans opponent territory, or reconnects the mover's own,
//! earns bonus actions. Scoring compares missing-node counts of a grid
//! snapshot taken before the move with the grid after propagation.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::ConnectivityJudge;
use crate::core::{Mark, PlayerActionBudget};
use crate::grid::Grid;

/// Per-mark change in missing-node count (`after - before`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MissingNodeDelta {
    changes: FxHashMap<Mark, i32>,
}

impl MissingNodeDelta {
    /// Build a delta from explicit per-mark changes.
    pub fn from_changes(changes: impl IntoIterator<Item = (Mark, i32)>) -> Self {
        Self {
            changes: changes.into_iter().collect(),
        }
    }

    /// Change for `mark`; zero for marks without an entry.
    #[must_use]
    pub fn get(&self, mark: Mark) -> i32 {
        self.changes.get(&mark).copied().unwrap_or(0)
    }

    /// Iterate over `(mark, change)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Mark, i32)> + '_ {
        self.changes.iter().map(|(&m, &d)| (m, d))
    }

    /// True when no mark's count changed.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.changes.values().all(|&d| d == 0)
    }
}

impl ConnectivityJudge {
    /// Missing-count change for every mark with a root in `after`.
    #[must_use]
    pub fn missing_node_delta(&self, before: &Grid, after: &Grid) -> MissingNodeDelta {
        MissingNodeDelta::from_changes(after.roots().map(|(mark, _)| {
            let change = after.missing_count(mark) as i32 - before.missing_count(mark) as i32;
            (mark, change)
        }))
    }

    /// Net action adjustment for `acting` given `delta`.
    ///
    /// Starts at -1 for the action just spent, +1 per other mark that gained
    /// missing nodes, +1 if `acting` itself lost missing nodes.
    ///
    /// ```
    /// use mark_link::core::Mark;
    /// use mark_link::rules::{ConnectivityJudge, MissingNodeDelta};
    ///
    /// let delta = MissingNodeDelta::from_changes([(Mark('A'), 0), (Mark('B'), 1)]);
    /// assert_eq!(ConnectivityJudge::extra_actions(&delta, Mark('A')), 0);
    /// ```
    #[must_use]
    pub fn extra_actions(delta: &MissingNodeDelta, acting: Mark) -> i32 {
        let orphaned = delta
            .iter()
            .filter(|&(mark, change)| mark != acting && change > 0)
            .count() as i32;
        let reconnected = i32::from(delta.get(acting) < 0);

        -1 + orphaned + reconnected
    }

    /// Charge `budget` for an action that turned `before` into `after`.
    ///
    /// With combos inactive (feature off or classic mode) every action costs
    /// exactly one. Returns the adjustment applied.
    pub fn apply_combo(&self, before: &Grid, after: &Grid, budget: &mut PlayerActionBudget) -> i32 {
        let adjustment = if self.options().combo_active() {
            let delta = self.missing_node_delta(before, after);
            Self::extra_actions(&delta, budget.mark)
        } else {
            -1
        };

        budget.adjust(adjustment);
        debug!(mark = %budget.mark, adjustment, remaining = budget.actions_remaining, "actions charged");
        adjustment
    }
}
