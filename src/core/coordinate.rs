//! Board coordinates and relative deltas.
//!
//! A `Coordinate` is used both as an absolute cell address and as a
//! relative step inside a path. Validity against a board is a property of
//! the grid, not of the coordinate, so negative values are representable.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Integer cell address `(x, y)`, or a relative delta between two cells.
///
/// ```
/// use mark_link::core::Coordinate;
///
/// let base = Coordinate::new(2, 1);
/// let step = Coordinate::new(-1, 0);
/// assert_eq!(base + step, Coordinate::new(1, 1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The zero delta.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// True for the eight king-step deltas (both components in -1..=1, not zero).
    #[must_use]
    pub const fn is_unit_step(self) -> bool {
        self.x >= -1 && self.x <= 1 && self.y >= -1 && self.y <= 1 && !(self.x == 0 && self.y == 0)
    }

    /// Component-wise sum, or `None` if either component overflows `i32`.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self.x.checked_add(rhs.x), self.y.checked_add(rhs.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
