//! Error types for board and game operations.
//!
//! Boundary-facing operations validate their inputs and reject with one of
//! these errors *before* touching the board, so a rejected call never leaves
//! a partially applied turn behind.

use thiserror::Error;

use super::piece::Colour;

/// Errors raised by the rule engine and the game facade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PentagoError {
    /// Row or column outside `0..6`.
    #[error("invalid coordinate ({row}, {col}): row and column must be in 0..6")]
    InvalidCoordinate { row: i64, col: i64 },

    /// Quadrant id outside `0..4`.
    #[error("invalid quadrant {0}: must be in 0..4")]
    InvalidQuadrant(i64),

    /// Placement target already holds a stone.
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    /// Colour identifier other than 1 or 2.
    #[error("invalid player id {0}: must be 1 or 2")]
    InvalidPlayerId(i64),

    /// A cache entry or turn list could not be allocated.
    #[error("failed to allocate memory for the position cache")]
    AllocationFailure,

    /// A turn was submitted by the colour that is not to move (strict games only).
    #[error("it is not {0}'s turn")]
    NotYourTurn(Colour),

    /// A turn was submitted after the game ended (strict games only).
    #[error("the game is already over")]
    GameOver,

    /// Malformed compact turn notation.
    #[error("invalid turn notation {0:?}")]
    InvalidNotation(String),
}

/// Result type alias for Pentago operations.
pub type PentagoResult<T> = Result<T, PentagoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PentagoError::CellOccupied { row: 2, col: 4 };
        assert_eq!(err.to_string(), "cell (2, 4) is already occupied");

        let err = PentagoError::InvalidQuadrant(7);
        assert_eq!(err.to_string(), "invalid quadrant 7: must be in 0..4");

        let err = PentagoError::NotYourTurn(Colour::PlayerB);
        assert_eq!(err.to_string(), "it is not PlayerB's turn");
    }
}
