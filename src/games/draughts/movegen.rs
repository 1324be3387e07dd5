//! Draughts move generation and validation.
//!
//! ## Movement
//!
//! - A step moves one row forward and one column sideways; kings step both ways.
//! - A jump moves two rows and two columns over an opposing piece. Jumps are
//!   legal in all four diagonal directions for every piece.
//! - While a capture chain is open only jumps by the chaining piece are legal.
//! - With `forced_capture` on, a side with any jump available must jump.
//!
//! [`check_move`] and [`moves_for`] describe the same set of moves: a move is
//! generated exactly when it passes the check.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::{Color, Piece};
use crate::core::{Coord, Grid, Rejection};

/// Diagonal directions as (row, col) deltas.
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A single step or jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Whether this move is a two-square jump.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        let (d_row, d_col) = self.from.delta(self.to);
        d_row.abs() == 2 && d_col.abs() == 2
    }

    /// Square jumped over, for captures.
    #[must_use]
    pub fn captured_square(&self) -> Option<Coord> {
        if self.is_capture() {
            self.from.midpoint(self.to)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// Moves from one square. Never more than four.
pub type MoveList = SmallVec<[Move; 4]>;

/// Jumps available to the piece at `from`.
#[must_use]
pub fn captures_from(board: &Grid<Piece>, from: Coord) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.get(from) else {
        return moves;
    };

    for (d_row, d_col) in DIAGONALS {
        let (Some(over), Some(to)) = (from.offset(d_row, d_col), from.offset(2 * d_row, 2 * d_col))
        else {
            continue;
        };
        let jumps_opponent = board.get(over).is_some_and(|p| p.color != piece.color);
        if jumps_opponent && board.is_vacant(to) {
            moves.push(Move::new(from, to));
        }
    }

    moves
}

/// Non-capturing steps available to the piece at `from`.
#[must_use]
pub fn steps_from(board: &Grid<Piece>, from: Coord) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.get(from) else {
        return moves;
    };

    for (d_row, d_col) in DIAGONALS {
        if !piece.crowned && d_row != piece.color.forward() {
            continue;
        }
        if let Some(to) = from.offset(d_row, d_col).filter(|&to| board.is_vacant(to)) {
            moves.push(Move::new(from, to));
        }
    }

    moves
}

/// Whether any piece of `color` can jump.
#[must_use]
pub fn has_capture(board: &Grid<Piece>, color: Color) -> bool {
    board
        .occupied()
        .filter(|(_, p)| p.color == color)
        .any(|(at, _)| !captures_from(board, at).is_empty())
}

/// Every legal move for `color`.
///
/// With a chain open only the chaining piece's jumps are returned.
#[must_use]
pub fn moves_for(
    board: &Grid<Piece>,
    color: Color,
    chain: Option<Coord>,
    forced_capture: bool,
) -> Vec<Move> {
    if let Some(at) = chain {
        return captures_from(board, at).into_vec();
    }

    let own: Vec<Coord> = board
        .occupied()
        .filter(|(_, p)| p.color == color)
        .map(|(at, _)| at)
        .collect();

    let captures: Vec<Move> = own
        .iter()
        .flat_map(|&at| captures_from(board, at))
        .collect();
    if forced_capture && !captures.is_empty() {
        return captures;
    }

    let mut moves = captures;
    moves.extend(own.iter().flat_map(|&at| steps_from(board, at)));
    moves
}

/// Check a move for the side `turn` under the movement rules.
///
/// Checks run in a fixed order and the first failure is reported.
pub fn check_move(
    board: &Grid<Piece>,
    turn: Color,
    chain: Option<Coord>,
    forced_capture: bool,
    mv: &Move,
) -> Result<(), Rejection> {
    if !board.contains(mv.from) {
        return Err(Rejection::OutOfBounds(mv.from));
    }
    if !board.contains(mv.to) {
        return Err(Rejection::OutOfBounds(mv.to));
    }

    let piece = board.get(mv.from).ok_or(Rejection::EmptyOrigin(mv.from))?;
    if piece.color != turn {
        return Err(Rejection::WrongSide);
    }
    if let Some(at) = chain.filter(|&at| at != mv.from) {
        return Err(Rejection::MustContinueChain(at));
    }
    if !board.is_vacant(mv.to) {
        return Err(Rejection::Occupied(mv.to));
    }

    let (d_row, d_col) = mv.from.delta(mv.to);
    match (d_row.abs(), d_col.abs()) {
        (1, 1) => {
            if let Some(at) = chain {
                return Err(Rejection::MustContinueChain(at));
            }
            if forced_capture && has_capture(board, turn) {
                return Err(Rejection::CaptureRequired);
            }
            if !piece.crowned && d_row != i16::from(piece.color.forward()) {
                return Err(Rejection::InvalidStep);
            }
            Ok(())
        }
        (2, 2) => {
            let over = mv.captured_square().ok_or(Rejection::InvalidStep)?;
            match board.get(over) {
                None => Err(Rejection::NoCapturedPiece),
                Some(p) if p.color == piece.color => Err(Rejection::OwnPiece),
                Some(_) => Ok(()),
            }
        }
        _ => Err(Rejection::InvalidStep),
    }
}
