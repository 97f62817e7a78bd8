//! Path and catalog types plus the built-in catalog.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coordinate, Error, LinkMode, Result};

/// Ordered relative steps describing one jump pattern.
///
/// Most patterns are one or two steps, so deltas are stored inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    deltas: SmallVec<[Coordinate; 4]>,
}

impl Path {
    /// Create a path from its steps.
    #[must_use]
    pub fn new(deltas: &[Coordinate]) -> Self {
        Self {
            deltas: SmallVec::from_slice(deltas),
        }
    }

    /// Shorthand for building catalogs from `(dx, dy)` pairs.
    #[must_use]
    pub fn from_steps(steps: &[(i32, i32)]) -> Self {
        Self {
            deltas: steps.iter().map(|&s| Coordinate::from(s)).collect(),
        }
    }

    #[must_use]
    pub fn deltas(&self) -> &[Coordinate] {
        &self.deltas
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Absolute cells of this path anchored at `base`; `base` itself is excluded.
    ///
    /// Iteration stops at the first step whose sum overflows `i32`.
    ///
    /// ```
    /// use mark_link::core::Coordinate;
    /// use mark_link::paths::Path;
    ///
    /// let jump = Path::from_steps(&[(2, 0), (-1, 0)]);
    /// let cells: Vec<_> = jump.anchor(Coordinate::new(0, 0)).collect();
    /// assert_eq!(cells, vec![Coordinate::new(2, 0), Coordinate::new(1, 0)]);
    /// ```
    pub fn anchor(&self, base: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        self.deltas.iter().scan(base, |cursor, &delta| {
            *cursor = cursor.checked_add(delta)?;
            Some(*cursor)
        })
    }

    /// The anchored path collected into a small buffer, or `None` if any
    /// step leaves the `i32` coordinate range.
    #[must_use]
    pub fn anchored(&self, base: Coordinate) -> Option<SmallVec<[Coordinate; 4]>> {
        let cells: SmallVec<[Coordinate; 4]> = self.anchor(base).collect();
        (cells.len() == self.deltas.len()).then_some(cells)
    }
}

/// Immutable connectivity configuration: one path set per link mode and the
/// straight-line directions cannons may fire in.
///
/// `PathCatalog::default()` is the built-in table; custom tables go through
/// [`PathCatalog::new`] (or deserialization), which validates them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogData")]
pub struct PathCatalog {
    classic: Vec<Path>,
    modern: Vec<Path>,
    fire_directions: Vec<Coordinate>,
}

#[derive(Deserialize)]
struct CatalogData {
    classic: Vec<Path>,
    modern: Vec<Path>,
    fire_directions: Vec<Coordinate>,
}

impl TryFrom<CatalogData> for PathCatalog {
    type Error = Error;

    fn try_from(data: CatalogData) -> Result<Self> {
        Self::new(data.classic, data.modern, data.fire_directions)
    }
}

/// The eight king steps, clockwise from east.
const KING_STEPS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Orthogonal unit steps.
const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

impl PathCatalog {
    /// Build a validated catalog.
    ///
    /// Rejects empty path sets, empty paths, zero steps, and fire directions
    /// that are not unit king steps.
    pub fn new(classic: Vec<Path>, modern: Vec<Path>, fire_directions: Vec<Coordinate>) -> Result<Self> {
        for (mode, paths) in [(LinkMode::Classic, &classic), (LinkMode::Modern, &modern)] {
            if paths.is_empty() {
                return Err(Error::InvalidCatalog(format!("{} catalog has no paths", mode)));
            }
            for (i, path) in paths.iter().enumerate() {
                if path.is_empty() {
                    return Err(Error::InvalidCatalog(format!("{} path {} is empty", mode, i)));
                }
                if path.deltas().contains(&Coordinate::ORIGIN) {
                    return Err(Error::InvalidCatalog(format!("{} path {} has a zero step", mode, i)));
                }
            }
        }

        if let Some(bad) = fire_directions.iter().find(|d| !d.is_unit_step()) {
            return Err(Error::InvalidCatalog(format!("fire direction {} is not a unit step", bad)));
        }

        Ok(Self {
            classic,
            modern,
            fire_directions,
        })
    }

    /// Paths used for connectivity in `mode`.
    #[must_use]
    pub fn paths(&self, mode: LinkMode) -> &[Path] {
        match mode {
            LinkMode::Classic => &self.classic,
            LinkMode::Modern => &self.modern,
        }
    }

    /// Straight-line directions a cannon may fire in.
    #[must_use]
    pub fn fire_directions(&self) -> &[Coordinate] {
        &self.fire_directions
    }

    /// True if `direction` is one of the catalog's fire directions.
    #[must_use]
    pub fn is_fire_direction(&self, direction: Coordinate) -> bool {
        self.fire_directions.contains(&direction)
    }
}

impl Default for PathCatalog {
    /// Built-in table.
    ///
    /// - classic: the eight single king steps
    /// - modern: the eight king steps plus orthogonal two-cell jumps whose
    ///   middle cell must be clear
    /// - fire directions: the eight king steps
    fn default() -> Self {
        let singles: Vec<Path> = KING_STEPS.iter().map(|&s| Path::from_steps(&[s])).collect();

        let jumps = ORTHOGONAL
            .iter()
            .map(|&(dx, dy)| Path::from_steps(&[(2 * dx, 2 * dy), (-dx, -dy)]));

        Self {
            classic: singles.clone(),
            modern: singles.into_iter().chain(jumps).collect(),
            fire_directions: KING_STEPS.iter().map(|&s| Coordinate::from(s)).collect(),
        }
    }
}
