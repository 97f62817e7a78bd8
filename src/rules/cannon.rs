//! Cannon eligibility and fire resolution.
//!
//! The judge only answers questions here. Turning a cell into a cannon,
//! clearing a hit cell, and spending the shot are the caller's job.

use tracing::trace;

use super::ConnectivityJudge;
use crate::core::{Coordinate, Mark};
use crate::grid::Grid;

impl ConnectivityJudge {
    /// True if `c` may become a cannon for `mark`.
    ///
    /// Requires the cannon feature, a source-eligible cell holding `mark`,
    /// and that the cell is not a root.
    #[must_use]
    pub fn check_cannon_eligible(&self, grid: &Grid, c: Coordinate, mark: Mark) -> bool {
        self.options().can_use_cannon
            && self.has_mark(grid, c, mark)
            && self.is_source_eligible(grid, c)
            && !grid.status(c).is_root
    }

    /// Find what a cannon at `c` would hit when firing towards `direction`.
    ///
    /// Passable cells are skipped. The first blocking cell is the target,
    /// unless it holds `mark` (blocked). Running off the board, an unknown
    /// direction, or a cell that cannot fire all yield `None`.
    #[must_use]
    pub fn resolve_cannon_fire(
        &self,
        grid: &Grid,
        c: Coordinate,
        direction: Coordinate,
        mark: Mark,
    ) -> Option<Coordinate> {
        if !self.options().can_use_cannon
            || !self.has_mark(grid, c, mark)
            || !grid.status(c).can_fire()
            || !self.catalog().is_fire_direction(direction)
        {
            return None;
        }

        let mut cursor = c.checked_add(direction);
        while let Some(cell) = cursor.filter(|&cell| grid.is_valid(cell)) {
            if !self.is_passable(grid, cell) {
                let target = (!self.has_mark(grid, cell, mark)).then_some(cell);
                trace!(from = %c, to = %cell, hit = target.is_some(), "cannon fire");
                return target;
            }
            cursor = cell.checked_add(direction);
        }

        trace!(from = %c, "cannon fire left the board");
        None
    }
}
