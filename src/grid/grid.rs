//! The `Grid` container.

use im::{OrdMap, Vector};

use super::CellStatus;
use crate::core::{Coordinate, Mark};

/// Rectangular board with occupancy, status, and the root registry.
///
/// Cells are stored x-major in flat vectors: `index = x * height + y`.
/// Out-of-bounds reads behave like an empty cell with default status, and
/// out-of-bounds writes are ignored (the setter returns `false`).
///
/// ## Example
///
/// ```
/// use mark_link::core::{Coordinate, Mark};
/// use mark_link::grid::Grid;
///
/// let mut grid = Grid::new(3, 3);
/// let center = Coordinate::new(1, 1);
///
/// assert!(grid.set_mark(center, Some(Mark('X'))));
/// assert!(grid.register_root(Mark('X'), center));
/// assert_eq!(grid.root_of(Mark('X')), Some(center));
/// assert!(grid.status(center).is_root);
///
/// // Snapshots are cheap and independent.
/// let before = grid.clone();
/// grid.set_mark(Coordinate::new(0, 0), Some(Mark('O')));
/// assert_eq!(before.mark(Coordinate::new(0, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    marks: Vector<Option<Mark>>,
    status: Vector<CellStatus>,
    roots: OrdMap<Mark, Coordinate>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Grid must have at least one cell");
        assert!(
            width <= i32::MAX as usize && height <= i32::MAX as usize,
            "Grid dimensions must fit in i32 coordinates"
        );

        let cells = width * height;
        Self {
            width,
            height,
            marks: std::iter::repeat(None).take(cells).collect(),
            status: std::iter::repeat(CellStatus::default()).take(cells).collect(),
            roots: OrdMap::new(),
        }
    }

    /// Create an empty square grid.
    #[must_use]
    pub fn square(side: usize) -> Self {
        Self::new(side, side)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether a coordinate lies on the board.
    #[must_use]
    pub fn is_valid(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.width && (c.y as usize) < self.height
    }

    fn index(&self, c: Coordinate) -> Option<usize> {
        self.is_valid(c)
            .then(|| c.x as usize * self.height + c.y as usize)
    }

    // === Occupancy ===

    /// Mark occupying a cell, or `None` when empty or off the board.
    #[must_use]
    pub fn mark(&self, c: Coordinate) -> Option<Mark> {
        self.index(c).and_then(|i| self.marks[i])
    }

    /// Set or clear a cell's occupant. Returns `false` when off the board.
    pub fn set_mark(&mut self, c: Coordinate, mark: Option<Mark>) -> bool {
        match self.index(c) {
            Some(i) => {
                self.marks.set(i, mark);
                true
            }
            None => false,
        }
    }

    // === Status ===

    /// Status of a cell. Off-board cells report the default status.
    #[must_use]
    pub fn status(&self, c: Coordinate) -> CellStatus {
        self.index(c)
            .map(|i| self.status[i])
            .unwrap_or_default()
    }

    /// Replace a cell's status. Returns `false` when off the board.
    pub fn set_status(&mut self, c: Coordinate, status: CellStatus) -> bool {
        match self.index(c) {
            Some(i) => {
                self.status.set(i, status);
                true
            }
            None => false,
        }
    }

    /// Modify a cell's status in place. Returns `false` when off the board.
    pub fn update_status(&mut self, c: Coordinate, f: impl FnOnce(&mut CellStatus)) -> bool {
        match self.index(c) {
            Some(i) => {
                f(&mut self.status[i]);
                true
            }
            None => false,
        }
    }

    // === Enumeration ===

    /// All coordinates, x-major.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let height = self.height as i32;
        (0..self.width as i32).flat_map(move |x| (0..height).map(move |y| Coordinate::new(x, y)))
    }

    /// Coordinates holding any mark, x-major.
    pub fn occupied(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.coordinates().filter(move |&c| self.mark(c).is_some())
    }

    /// Number of cells of `mark` currently flagged missing.
    #[must_use]
    pub fn missing_count(&self, mark: Mark) -> usize {
        self.occupied()
            .filter(|&c| self.mark(c) == Some(mark) && self.status(c).is_missing)
            .count()
    }

    // === Roots ===

    /// Root coordinate of a mark, if it has placed anything yet.
    #[must_use]
    pub fn root_of(&self, mark: Mark) -> Option<Coordinate> {
        self.roots.get(&mark).copied()
    }

    /// True once `mark` has a registered root.
    #[must_use]
    pub fn has_root(&self, mark: Mark) -> bool {
        self.roots.contains_key(&mark)
    }

    /// Register `c` as the root of `mark` and flag the cell `is_root`.
    ///
    /// Write-once: returns `false` without changes if the mark already has
    /// a root or `c` is off the board.
    pub fn register_root(&mut self, mark: Mark, c: Coordinate) -> bool {
        if self.has_root(mark) || !self.is_valid(c) {
            return false;
        }
        self.roots.insert(mark, c);
        self.update_status(c, |s| s.is_root = true)
    }

    /// Registered roots in mark order.
    pub fn roots(&self) -> impl Iterator<Item = (Mark, Coordinate)> + '_ {
        self.roots.iter().map(|(&m, &c)| (m, c))
    }
}
