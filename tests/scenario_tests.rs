//! Rule scenarios exercised directly against the judge and a grid.
//!
//! Each test sets up a small board by hand, the way an orchestrator would
//! after applying moves, and checks the judge's verdicts.

use mark_link::core::{Coordinate, JudgeOptions, LinkMode, Mark};
use mark_link::grid::Grid;
use mark_link::paths::{Path, PathCatalog};
use mark_link::rules::{ConnectivityJudge, MissingNodeDelta};

const X: Mark = Mark('X');
const O: Mark = Mark('O');

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

/// Apply a placement the way an orchestrator does: occupy, then register
/// the root if this is the mark's first piece.
fn apply_placement(grid: &mut Grid, cell: Coordinate, mark: Mark) {
    grid.set_mark(cell, Some(mark));
    grid.register_root(mark, cell);
}

fn orthogonal_catalog() -> PathCatalog {
    let steps = vec![
        Path::from_steps(&[(1, 0)]),
        Path::from_steps(&[(-1, 0)]),
        Path::from_steps(&[(0, 1)]),
        Path::from_steps(&[(0, -1)]),
    ];
    PathCatalog::new(steps.clone(), steps, vec![]).unwrap()
}

/// First placement is always legal and registers the root.
#[test]
fn test_root_establishment() {
    let judge = ConnectivityJudge::new(JudgeOptions::default());
    let mut grid = Grid::square(3);

    assert!(judge.check_placement_legal(&grid, c(1, 1), X));
    apply_placement(&mut grid, c(1, 1), X);

    assert_eq!(grid.root_of(X), Some(c(1, 1)));
    assert!(grid.status(c(1, 1)).is_root);
    assert_eq!(grid.root_of(O), None);
}

/// After the root, a placement must link to a source cell of the same mark.
#[test]
fn test_link_required_after_root() {
    for mode in [LinkMode::Classic, LinkMode::Modern] {
        let judge = ConnectivityJudge::with_catalog(JudgeOptions::new(mode), orthogonal_catalog());
        let mut grid = Grid::square(3);
        apply_placement(&mut grid, c(1, 1), X);

        assert!(judge.check_placement_legal(&grid, c(2, 1), X));
        assert!(!judge.check_placement_legal(&grid, c(0, 0), X));
    }
}

/// An occupied cell is never a legal placement, whatever the links.
#[test]
fn test_occupied_cell_is_illegal() {
    let judge = ConnectivityJudge::new(JudgeOptions::default());
    let mut grid = Grid::square(3);
    apply_placement(&mut grid, c(1, 1), X);
    apply_placement(&mut grid, c(2, 1), O);

    assert!(!judge.check_placement_legal(&grid, c(2, 1), X));
    assert!(!judge.check_placement_legal(&grid, c(1, 1), O));
}

/// A piece with no connecting path is missing; the root never is.
#[test]
fn test_propagation_flags_disconnected_piece() {
    let judge = ConnectivityJudge::new(JudgeOptions::new(LinkMode::Modern));
    let mut grid = Grid::square(3);
    apply_placement(&mut grid, c(0, 0), X);
    grid.set_mark(c(2, 2), Some(X));

    judge.propagate_missing_nodes(&mut grid);

    assert!(grid.status(c(2, 2)).is_missing);
    assert!(!grid.status(c(0, 0)).is_missing);
}

/// Missing pieces cannot relay links to new placements.
#[test]
fn test_missing_piece_is_not_a_source() {
    let judge = ConnectivityJudge::new(JudgeOptions::default());
    let mut grid = Grid::square(5);
    apply_placement(&mut grid, c(0, 0), X);
    grid.set_mark(c(4, 4), Some(X));
    judge.propagate_missing_nodes(&mut grid);

    assert!(!judge.check_placement_legal(&grid, c(3, 4), X));
    assert!(judge.check_placement_legal(&grid, c(1, 0), X));
}

/// A cannon that loses its link dies in the same pass and cannot fire.
#[test]
fn test_cannon_starvation() {
    let judge = ConnectivityJudge::new(JudgeOptions::default().with_cannon());
    let mut grid = Grid::square(5);
    apply_placement(&mut grid, c(0, 0), X);
    grid.set_mark(c(1, 1), Some(X));
    grid.set_mark(c(2, 2), Some(X));
    apply_placement(&mut grid, c(4, 2), O);
    judge.propagate_missing_nodes(&mut grid);

    assert!(judge.check_cannon_eligible(&grid, c(2, 2), X));
    grid.update_status(c(2, 2), |s| s.is_cannon = true);
    assert_eq!(judge.resolve_cannon_fire(&grid, c(2, 2), c(1, 0), X), Some(c(4, 2)));

    // The link at (1, 1) is shot away.
    grid.set_mark(c(1, 1), None);
    judge.propagate_missing_nodes(&mut grid);

    let status = grid.status(c(2, 2));
    assert!(status.is_missing);
    assert!(status.is_dead);
    assert_eq!(judge.resolve_cannon_fire(&grid, c(2, 2), c(1, 0), X), None);
}

/// Orphaning one opponent piece refunds the action just spent.
#[test]
fn test_combo_scoring_example() {
    let delta = MissingNodeDelta::from_changes([(Mark('A'), 0), (Mark('B'), 1)]);
    assert_eq!(ConnectivityJudge::extra_actions(&delta, Mark('A')), 0);
}
