//! Cell predicates, the link condition, and placement legality.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Coordinate, JudgeOptions, LinkMode, Mark};
use crate::grid::Grid;
use crate::paths::{Path, PathCatalog};

/// Rules engine for one game.
///
/// Holds only immutable configuration; all game state is in the `Grid`
/// passed to each call.
///
/// ## Example
///
/// ```
/// use mark_link::core::{Coordinate, JudgeOptions, Mark};
/// use mark_link::grid::Grid;
/// use mark_link::rules::ConnectivityJudge;
///
/// let judge = ConnectivityJudge::new(JudgeOptions::default());
/// let mut grid = Grid::square(5);
/// let x = Mark('X');
///
/// // The first placement of a mark is always legal and becomes its root.
/// assert!(judge.check_placement_legal(&grid, Coordinate::new(2, 2), x));
/// grid.set_mark(Coordinate::new(2, 2), Some(x));
/// grid.register_root(x, Coordinate::new(2, 2));
///
/// // Afterwards a placement must link back to the network.
/// assert!(judge.check_placement_legal(&grid, Coordinate::new(3, 2), x));
/// assert!(!judge.check_placement_legal(&grid, Coordinate::new(0, 0), x));
/// ```
#[derive(Clone, Debug)]
pub struct ConnectivityJudge {
    options: JudgeOptions,
    catalog: PathCatalog,
}

impl ConnectivityJudge {
    /// Create a judge using the built-in path catalog.
    #[must_use]
    pub fn new(options: JudgeOptions) -> Self {
        Self::with_catalog(options, PathCatalog::default())
    }

    /// Create a judge with an injected catalog.
    #[must_use]
    pub fn with_catalog(options: JudgeOptions, catalog: PathCatalog) -> Self {
        Self { options, catalog }
    }

    #[must_use]
    pub fn options(&self) -> &JudgeOptions {
        &self.options
    }

    #[must_use]
    pub fn catalog(&self) -> &PathCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn link_mode(&self) -> LinkMode {
        self.options.link_mode
    }

    /// Paths of the active link mode.
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        self.catalog.paths(self.options.link_mode)
    }

    // === Cell predicates ===

    /// On the board and unoccupied.
    #[must_use]
    pub fn is_cell_empty(&self, grid: &Grid, c: Coordinate) -> bool {
        grid.is_valid(c) && grid.mark(c).is_none()
    }

    #[must_use]
    pub fn has_mark(&self, grid: &Grid, c: Coordinate, mark: Mark) -> bool {
        grid.mark(c) == Some(mark)
    }

    /// Occupied and not a cannon, missing, or dead.
    #[must_use]
    pub fn is_source_eligible(&self, grid: &Grid, c: Coordinate) -> bool {
        if grid.mark(c).is_none() {
            return false;
        }
        let status = grid.status(c);
        !(status.is_cannon || status.is_missing || status.is_dead)
    }

    /// Occupied and not dead.
    #[must_use]
    pub fn is_target_eligible(&self, grid: &Grid, c: Coordinate) -> bool {
        grid.mark(c).is_some() && !grid.status(c).is_dead
    }

    /// Empty or dead. Off-board cells never pass.
    #[must_use]
    pub fn is_passable(&self, grid: &Grid, c: Coordinate) -> bool {
        grid.is_valid(c) && (grid.mark(c).is_none() || grid.status(c).is_dead)
    }

    // === Paths ===

    /// Anchor `path` at `base`, or `None` if any cell falls off the board or
    /// outside the `i32` coordinate range.
    pub(crate) fn anchor_in_bounds(
        &self,
        grid: &Grid,
        path: &Path,
        base: Coordinate,
    ) -> Option<SmallVec<[Coordinate; 4]>> {
        let cells = path.anchored(base)?;
        cells.iter().all(|&c| grid.is_valid(c)).then_some(cells)
    }

    /// Every anchored, in-bounds path at `base` whose interior is clear.
    ///
    /// Yields the full absolute cell list; the first cell is the endpoint.
    fn clear_paths<'a>(
        &'a self,
        grid: &'a Grid,
        base: Coordinate,
    ) -> impl Iterator<Item = SmallVec<[Coordinate; 4]>> + 'a {
        self.paths()
            .iter()
            .filter_map(move |path| self.anchor_in_bounds(grid, path, base))
            .filter(move |cells| cells[1..].iter().all(|&c| self.is_passable(grid, c)))
    }

    /// Some path anchored at `c` ends on a source-eligible cell holding `mark`.
    #[must_use]
    pub fn check_link_condition(&self, grid: &Grid, c: Coordinate, mark: Mark) -> bool {
        self.clear_paths(grid, c).any(|cells| {
            let source = cells[0];
            self.is_source_eligible(grid, source) && self.has_mark(grid, source, mark)
        })
    }

    /// Endpoints of paths anchored at `source` that are target-eligible and
    /// hold `mark`. These are the cells `source` keeps connected.
    #[must_use]
    pub fn link_targets(&self, grid: &Grid, source: Coordinate, mark: Mark) -> Vec<Coordinate> {
        self.clear_paths(grid, source)
            .map(|cells| cells[0])
            .filter(|&t| self.is_target_eligible(grid, t) && self.has_mark(grid, t, mark))
            .collect()
    }

    // === Placement ===

    /// Empty cell, and either `mark` has no root yet or the link condition holds.
    #[must_use]
    pub fn check_placement_legal(&self, grid: &Grid, c: Coordinate, mark: Mark) -> bool {
        let legal = self.is_cell_empty(grid, c)
            && (!grid.has_root(mark) || self.check_link_condition(grid, c, mark));
        trace!(%c, %mark, legal, "placement check");
        legal
    }

    /// All coordinates where `mark` may legally place, x-major.
    #[must_use]
    pub fn legal_placements(&self, grid: &Grid, mark: Mark) -> Vec<Coordinate> {
        grid.coordinates()
            .filter(|&c| self.check_placement_legal(grid, c, mark))
            .collect()
    }

    /// True if `mark` has at least one legal placement.
    #[must_use]
    pub fn can_take_action(&self, grid: &Grid, mark: Mark) -> bool {
        grid.coordinates()
            .any(|c| self.check_placement_legal(grid, c, mark))
    }
}
