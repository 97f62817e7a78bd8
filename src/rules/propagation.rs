//! Missing-node propagation.
//!
//! After every applied action the judge recomputes, from scratch, which
//! cells are still reachable from their mark's root. Anything unreachable
//! is flagged missing; a missing cannon dies for good.

use tracing::debug;

use super::ConnectivityJudge;
use crate::core::Coordinate;
use crate::grid::Grid;

/// Outcome counts of one propagation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationSummary {
    /// Cells popped from the worklist (roots included).
    pub sources_visited: usize,
    /// Occupied cells flagged missing after the pass.
    pub missing: usize,
    /// Cannons that died in this pass.
    pub newly_dead: usize,
}

impl ConnectivityJudge {
    /// Recompute `is_missing` for every cell and kill starved cannons.
    ///
    /// No-op in classic mode. Runs to a fixed point; calling it twice in a
    /// row leaves the grid unchanged. A cannon killed by a sweep becomes
    /// passable, which can open new jumps, so sweeps repeat until no more
    /// cannons die.
    pub fn propagate_missing_nodes(&self, grid: &mut Grid) -> PropagationSummary {
        if !self.link_mode().tracks_missing_nodes() {
            return PropagationSummary::default();
        }

        let cells: Vec<Coordinate> = grid.coordinates().collect();
        let mut summary = PropagationSummary::default();

        loop {
            summary.sources_visited = self.sweep_from_roots(grid, &cells);
            let (missing, newly_dead) = settle(grid, &cells);
            summary.missing = missing;
            summary.newly_dead += newly_dead;

            if newly_dead == 0 {
                break;
            }
        }

        debug!(
            sources = summary.sources_visited,
            missing = summary.missing,
            newly_dead = summary.newly_dead,
            "missing-node propagation"
        );
        summary
    }

    /// Flag every occupied non-root cell a candidate, then clear the flag on
    /// all cells reachable from a live root. Returns the number of sources used.
    ///
    /// Root cells are never candidates, so a root stays unflagged even after
    /// a capture lets another mark occupy it.
    fn sweep_from_roots(&self, grid: &mut Grid, cells: &[Coordinate]) -> usize {
        let mut worklist: Vec<Coordinate> = grid
            .roots()
            .filter(|&(mark, root)| grid.mark(root) == Some(mark) && !grid.status(root).is_dead)
            .map(|(_, root)| root)
            .collect();

        for &c in cells {
            let occupied = grid.mark(c).is_some();
            grid.update_status(c, |s| {
                s.is_missing = false;
                s.is_missing_candidate = occupied && !s.is_root;
            });
        }

        let mut visited = 0;
        while let Some(source) = worklist.pop() {
            let Some(mark) = grid.mark(source) else {
                continue;
            };
            visited += 1;
            grid.update_status(source, |s| s.is_missing_candidate = false);

            for target in self.link_targets(grid, source, mark) {
                if !grid.status(target).is_missing_candidate {
                    continue;
                }
                grid.update_status(target, |s| s.is_missing_candidate = false);

                if self.is_source_eligible(grid, target) {
                    worklist.push(target);
                }
            }
        }
        visited
    }
}

/// Turn leftover candidates into missing cells and kill missing cannons.
/// Returns `(missing, newly_dead)`.
fn settle(grid: &mut Grid, cells: &[Coordinate]) -> (usize, usize) {
    let mut missing = 0;
    let mut newly_dead = 0;

    for &c in cells {
        grid.update_status(c, |s| {
            s.is_missing = s.is_missing_candidate;
            s.is_missing_candidate = false;

            if s.is_missing {
                missing += 1;
                if s.is_cannon && !s.is_dead {
                    s.is_dead = true;
                    newly_dead += 1;
                }
            }
        });
    }
    (missing, newly_dead)
}

#[cfg(test)]
mod tests {
    use crate::core::{Coordinate, JudgeOptions, LinkMode, Mark};
    use crate::grid::Grid;
    use crate::paths::{Path, PathCatalog};
    use crate::rules::ConnectivityJudge;

    const X: Mark = Mark('X');
    const O: Mark = Mark('O');

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn place(grid: &mut Grid, cell: Coordinate, mark: Mark) {
        grid.set_mark(cell, Some(mark));
        grid.register_root(mark, cell);
    }

    #[test]
    fn test_unreachable_cell_is_missing() {
        let judge = ConnectivityJudge::new(JudgeOptions::default());
        let mut grid = Grid::square(3);
        place(&mut grid, c(0, 0), X);
        grid.set_mark(c(2, 2), Some(X));

        let summary = judge.propagate_missing_nodes(&mut grid);

        assert!(grid.status(c(2, 2)).is_missing);
        assert!(!grid.status(c(0, 0)).is_missing);
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.sources_visited, 1);
    }

    #[test]
    fn test_chain_stays_connected() {
        let judge = ConnectivityJudge::new(JudgeOptions::default());
        let mut grid = Grid::square(5);
        place(&mut grid, c(0, 0), X);
        for cell in [c(1, 0), c(3, 0), c(4, 1)] {
            grid.set_mark(cell, Some(X));
        }

        let summary = judge.propagate_missing_nodes(&mut grid);
        assert_eq!(summary.missing, 0);
        assert_eq!(summary.sources_visited, 4);
    }

    #[test]
    fn test_cut_cascades_through_subtree() {
        let judge = ConnectivityJudge::new(JudgeOptions::default());
        let mut grid = Grid::square(5);
        place(&mut grid, c(0, 0), X);
        for cell in [c(0, 1), c(0, 2), c(0, 3), c(0, 4)] {
            grid.set_mark(cell, Some(X));
        }
        assert_eq!(judge.propagate_missing_nodes(&mut grid).missing, 0);

        // A single gap is still bridged by the two-cell jump.
        grid.set_mark(c(0, 1), None);
        let summary = judge.propagate_missing_nodes(&mut grid);
        assert!(!grid.status(c(0, 2)).is_missing);
        assert!(!grid.status(c(0, 4)).is_missing);
        assert_eq!(summary.missing, 0);

        // A second gap cuts off everything beyond it.
        grid.set_mark(c(0, 2), None);
        let summary = judge.propagate_missing_nodes(&mut grid);
        assert!(grid.status(c(0, 3)).is_missing);
        assert!(grid.status(c(0, 4)).is_missing);
        assert_eq!(summary.missing, 2);
    }

    #[test]
    fn test_cannon_is_reached_but_does_not_relay() {
        let judge = ConnectivityJudge::new(JudgeOptions::default().with_cannon());
        let mut grid = Grid::new(4, 1);
        place(&mut grid, c(0, 0), X);
        grid.set_mark(c(1, 0), Some(X));
        grid.update_status(c(1, 0), |s| s.is_cannon = true);
        grid.set_mark(c(2, 0), Some(X));
        grid.set_mark(c(3, 0), Some(X));

        let summary = judge.propagate_missing_nodes(&mut grid);

        assert!(!grid.status(c(1, 0)).is_missing);
        assert!(!grid.status(c(1, 0)).is_dead);
        // (2, 0) is only reachable through the cannon, and the jump over it is blocked.
        assert!(grid.status(c(2, 0)).is_missing);
        assert!(grid.status(c(3, 0)).is_missing);
        assert_eq!(summary.newly_dead, 0);
    }

    #[test]
    fn test_starved_cannon_dies() {
        let judge = ConnectivityJudge::new(JudgeOptions::default().with_cannon());
        let mut grid = Grid::new(5, 1);
        place(&mut grid, c(0, 0), X);
        grid.set_mark(c(1, 0), Some(X));
        grid.set_mark(c(2, 0), Some(X));
        grid.update_status(c(2, 0), |s| s.is_cannon = true);
        judge.propagate_missing_nodes(&mut grid);
        assert!(!grid.status(c(2, 0)).is_dead);

        grid.set_mark(c(1, 0), None);
        grid.set_mark(c(1, 0), Some(O));
        let summary = judge.propagate_missing_nodes(&mut grid);

        let status = grid.status(c(2, 0));
        assert!(status.is_missing);
        assert!(status.is_dead);
        assert_eq!(summary.newly_dead, 1);

        // Dead stays dead, and is not recounted.
        grid.set_mark(c(1, 0), Some(X));
        let summary = judge.propagate_missing_nodes(&mut grid);
        assert!(grid.status(c(2, 0)).is_dead);
        assert_eq!(summary.newly_dead, 0);
    }

    #[test]
    fn test_dead_cannon_opens_a_jump_in_the_same_pass() {
        // Jump-only catalog: the root cannot reach the cannon next to it,
        // and the jump over the cannon only opens once the cannon is dead.
        let jumps = vec![
            Path::from_steps(&[(2, 0), (-1, 0)]),
            Path::from_steps(&[(-2, 0), (1, 0)]),
        ];
        let catalog = PathCatalog::new(jumps.clone(), jumps, vec![]).unwrap();
        let judge = ConnectivityJudge::with_catalog(JudgeOptions::default().with_cannon(), catalog);

        let mut grid = Grid::new(3, 1);
        place(&mut grid, c(0, 0), X);
        grid.set_mark(c(1, 0), Some(X));
        grid.update_status(c(1, 0), |s| s.is_cannon = true);
        grid.set_mark(c(2, 0), Some(X));

        let summary = judge.propagate_missing_nodes(&mut grid);

        assert!(grid.status(c(1, 0)).is_dead);
        assert!(!grid.status(c(2, 0)).is_missing);
        assert_eq!(summary.missing, 1);
        assert_eq!(summary.newly_dead, 1);

        let once = grid.clone();
        judge.propagate_missing_nodes(&mut grid);
        assert_eq!(once, grid);
    }

    #[test]
    fn test_idempotent() {
        let judge = ConnectivityJudge::new(JudgeOptions::default());
        let mut grid = Grid::square(5);
        place(&mut grid, c(0, 0), X);
        place(&mut grid, c(4, 4), O);
        for cell in [c(1, 1), c(3, 3), c(2, 4)] {
            grid.set_mark(cell, Some(X));
        }
        grid.set_mark(c(3, 4), Some(O));

        judge.propagate_missing_nodes(&mut grid);
        let once = grid.clone();
        judge.propagate_missing_nodes(&mut grid);
        assert_eq!(once, grid);
    }

    #[test]
    fn test_reoccupied_root_is_never_missing() {
        let judge = ConnectivityJudge::new(JudgeOptions::default());
        let mut grid = Grid::square(5);
        place(&mut grid, c(0, 0), X);
        place(&mut grid, c(4, 4), O);

        // Capture X's root, then let O occupy it far from O's own network.
        let hit = grid.status(c(0, 0)).cleared();
        grid.set_mark(c(0, 0), None);
        grid.set_status(c(0, 0), hit);
        grid.set_mark(c(0, 0), Some(O));

        let summary = judge.propagate_missing_nodes(&mut grid);

        let status = grid.status(c(0, 0));
        assert!(status.is_root);
        assert!(!status.is_missing);
        assert_eq!(summary.missing, 0);
        assert_eq!(grid.root_of(X), Some(c(0, 0)));
    }

    #[test]
    fn test_classic_mode_skips() {
        let judge = ConnectivityJudge::new(JudgeOptions::new(LinkMode::Classic));
        let mut grid = Grid::square(3);
        place(&mut grid, c(0, 0), X);
        grid.set_mark(c(2, 2), Some(X));

        let summary = judge.propagate_missing_nodes(&mut grid);
        assert_eq!(summary, Default::default());
        assert!(!grid.status(c(2, 2)).is_missing);
    }

    #[test]
    fn test_transient_flag_is_cleared() {
        let judge = ConnectivityJudge::new(JudgeOptions::default());
        let mut grid = Grid::square(3);
        place(&mut grid, c(0, 0), X);
        grid.set_mark(c(2, 2), Some(X));
        judge.propagate_missing_nodes(&mut grid);

        assert!(grid.coordinates().all(|cell| !grid.status(cell).is_missing_candidate));
    }
}
