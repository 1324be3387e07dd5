//! Chess through an external rules provider.
//!
//! Chess legality is not implemented here. A provider implementing
//! [`ChessRules`] supplies move generation, move application, and game-end
//! detection; [`ChessGame`] adapts it to [`RulesEngine`](crate::rules::RulesEngine)
//! so sessions and AI policies treat chess like any other game.

pub mod adapter;
pub mod material;

#[cfg(test)]
pub(crate) mod testing;

use serde::{Deserialize, Serialize};

use crate::core::Side;

pub use adapter::{ChessGame, ChessRules};
pub use material::{material, material_balance};

/// A chess side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChessColor {
    White,
    Black,
}

impl Side for ChessColor {
    fn opponent(self) -> Self {
        match self {
            ChessColor::White => ChessColor::Black,
            ChessColor::Black => ChessColor::White,
        }
    }

    fn both() -> [Self; 2] {
        [ChessColor::White, ChessColor::Black]
    }
}

impl std::fmt::Display for ChessColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChessColor::White => f.write_str("White"),
            ChessColor::Black => f.write_str("Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessPiece {
    pub color: ChessColor,
    pub kind: PieceKind,
}

impl ChessPiece {
    #[must_use]
    pub const fn new(color: ChessColor, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// How a finished chess game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChessOutcome {
    Checkmate { winner: ChessColor },
    Stalemate,
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl ChessOutcome {
    #[must_use]
    pub fn winner(self) -> Option<ChessColor> {
        match self {
            ChessOutcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}
