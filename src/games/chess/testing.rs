//! A toy chess provider for tests.
//!
//! Every piece moves one square in any direction and captures by landing on
//! an opposing piece. Losing the king counts as checkmate.

use super::{ChessColor, ChessOutcome, ChessPiece, ChessRules, PieceKind};
use crate::core::{Coord, Side};

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ToyMove {
    pub from: Coord,
    pub to: Coord,
}

impl ToyMove {
    pub(crate) fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ToyChess {
    turn: ChessColor,
    pieces: Vec<(Coord, ChessPiece)>,
}

impl ToyChess {
    pub(crate) fn from_pieces(turn: ChessColor, pieces: Vec<(Coord, ChessPiece)>) -> Self {
        Self { turn, pieces }
    }

    /// White king e1, queen d4; Black king e8, rook e5, pawn c5.
    pub(crate) fn skirmish() -> Self {
        use ChessColor::{Black, White};
        Self::from_pieces(
            White,
            vec![
                (Coord::new(7, 4), ChessPiece::new(White, PieceKind::King)),
                (Coord::new(4, 3), ChessPiece::new(White, PieceKind::Queen)),
                (Coord::new(0, 4), ChessPiece::new(Black, PieceKind::King)),
                (Coord::new(3, 4), ChessPiece::new(Black, PieceKind::Rook)),
                (Coord::new(3, 2), ChessPiece::new(Black, PieceKind::Pawn)),
            ],
        )
    }

    fn piece_at(&self, at: Coord) -> Option<ChessPiece> {
        self.pieces.iter().find(|(c, _)| *c == at).map(|(_, p)| *p)
    }

    fn has_king(&self, color: ChessColor) -> bool {
        self.pieces
            .iter()
            .any(|(_, p)| p.color == color && p.kind == PieceKind::King)
    }
}

impl ChessRules for ToyChess {
    type Move = ToyMove;

    fn turn(&self) -> ChessColor {
        self.turn
    }

    fn legal_moves(&self) -> Vec<ToyMove> {
        let mut moves = Vec::new();
        for (from, piece) in self.pieces.iter().filter(|(_, p)| p.color == self.turn) {
            for (d_row, d_col) in DIRECTIONS {
                let Some(to) = from.offset(d_row, d_col).filter(|c| c.row < 8 && c.col < 8)
                else {
                    continue;
                };
                if self.piece_at(to).is_some_and(|p| p.color == piece.color) {
                    continue;
                }
                moves.push(ToyMove::new(*from, to));
            }
        }
        moves
    }

    fn apply(&mut self, mv: &ToyMove) {
        self.pieces.retain(|(at, _)| *at != mv.to);
        if let Some(entry) = self.pieces.iter_mut().find(|(at, _)| *at == mv.from) {
            entry.0 = mv.to;
        }
        self.turn = self.turn.opponent();
    }

    fn outcome(&self) -> Option<ChessOutcome> {
        for color in ChessColor::both() {
            if !self.has_king(color) {
                return Some(ChessOutcome::Checkmate {
                    winner: color.opponent(),
                });
            }
        }
        if self.pieces.iter().all(|(_, p)| p.kind == PieceKind::King) {
            return Some(ChessOutcome::InsufficientMaterial);
        }
        if self.legal_moves().is_empty() {
            return Some(ChessOutcome::Stalemate);
        }
        None
    }

    fn pieces(&self) -> Vec<(Coord, ChessPiece)> {
        self.pieces.clone()
    }
}
