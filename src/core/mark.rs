//! Player marks.
//!
//! A mark is the symbol a player stamps on the board. The engine never
//! interprets it beyond equality; games choose the symbols at startup.

use serde::{Deserialize, Serialize};

/// Opaque symbol identifying one player's pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Mark(pub char);

impl Mark {
    /// Symbols handed out, in order, when a session assigns marks to players.
    pub const SYMBOLS: [char; 8] = ['X', 'O', 'A', 'B', 'C', 'D', 'E', 'F'];

    /// Create a new mark.
    #[must_use]
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Get the underlying symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }

    /// The first `count` marks of [`Mark::SYMBOLS`].
    ///
    /// ```
    /// use mark_link::core::Mark;
    ///
    /// let marks: Vec<_> = Mark::first(3).collect();
    /// assert_eq!(marks, vec![Mark('X'), Mark('O'), Mark('A')]);
    /// ```
    pub fn first(count: usize) -> impl Iterator<Item = Mark> {
        Self::SYMBOLS.into_iter().take(count).map(Mark)
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
