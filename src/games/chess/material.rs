//! Static material counting.

use super::{ChessColor, ChessPiece, ChessRules, PieceKind};
use crate::core::{Coord, Side};

impl PieceKind {
    /// Conventional material value; kings count zero.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

/// Total material of `color`.
#[must_use]
pub fn material<R: ChessRules>(position: &R, color: ChessColor) -> i32 {
    sum(&position.pieces(), color)
}

/// Material of `color` minus the opponent's.
#[must_use]
pub fn material_balance<R: ChessRules>(position: &R, color: ChessColor) -> i32 {
    let pieces = position.pieces();
    sum(&pieces, color) - sum(&pieces, color.opponent())
}

fn sum(pieces: &[(Coord, ChessPiece)], color: ChessColor) -> i32 {
    pieces
        .iter()
        .filter(|(_, p)| p.color == color)
        .map(|(_, p)| p.kind.value())
        .sum()
}
