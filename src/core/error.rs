//! Error type for fallible operations outside the pure rule predicates.
//!
//! Legality checks in the judge are plain booleans. Errors only arise when
//! a caller asks the session to *apply* something the judge rejects, or
//! when an injected path catalog or session config is malformed.

use thiserror::Error;

use super::{Coordinate, Mark};

/// Errors raised by catalog validation and session actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coordinate),

    #[error("mark {mark} cannot be placed at {coordinate}")]
    IllegalPlacement { coordinate: Coordinate, mark: Mark },

    #[error("cell {coordinate} cannot become a cannon for mark {mark}")]
    CannonNotAllowed { coordinate: Coordinate, mark: Mark },

    #[error("cannon at {coordinate} has no target towards {direction}")]
    NoCannonTarget { coordinate: Coordinate, direction: Coordinate },

    #[error("{0} is not a fire direction of the active catalog")]
    UnknownDirection(Coordinate),

    #[error("the game is over")]
    GameOver,

    #[error("invalid path catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid session config: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::IllegalPlacement {
            coordinate: Coordinate::new(0, 0),
            mark: Mark('X'),
        };
        assert_eq!(err.to_string(), "mark X cannot be placed at (0, 0)");

        let err = Error::OutOfBounds(Coordinate::new(-1, 3));
        assert_eq!(err.to_string(), "coordinate (-1, 3) is outside the board");
    }
}
