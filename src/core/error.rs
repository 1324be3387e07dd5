//! Engine error taxonomy.
//!
//! Every error here is local and recoverable. An illegal move leaves the state
//! untouched; a malformed remote update leaves the last-known-good state in
//! place. A side without legal moves is a game result, not an error.

use thiserror::Error;

use super::coord::Coord;

/// Why a move failed validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is already over")]
    GameOver,
    #[error("{0} is outside the board")]
    OutOfBounds(Coord),
    #[error("there is no piece at {0}")]
    EmptyOrigin(Coord),
    #[error("it is not this side's turn")]
    WrongSide,
    #[error("{0} is already occupied")]
    Occupied(Coord),
    #[error("not a legal step for this piece")]
    InvalidStep,
    #[error("there is no piece to jump over")]
    NoCapturedPiece,
    #[error("cannot jump over a piece of the same side")]
    OwnPiece,
    #[error("the piece at {0} must continue capturing")]
    MustContinueChain(Coord),
    #[error("a capture is available and must be taken")]
    CaptureRequired,
    #[error("not one of the legal moves in this position")]
    NotLegal,
}

/// Errors surfaced by rules engines and sessions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] Rejection),
    #[error("the session is not in progress")]
    NotInProgress,
    #[error("no AI seat holds the turn")]
    NotAiTurn,
    #[error("malformed external update: {0}")]
    MalformedExternalUpdate(String),
}

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_converts_into_engine_error() {
        let err: EngineError = Rejection::Occupied(Coord::new(1, 2)).into();
        assert_eq!(err.to_string(), "illegal move: (1, 2) is already occupied");
    }

    #[test]
    fn test_malformed_update_message() {
        let err = EngineError::MalformedExternalUpdate("wrong dimensions".into());
        assert_eq!(err.to_string(), "malformed external update: wrong dimensions");
    }
}
