//! Capture resolution.
//!
//! Applies a validated move to a [`DraughtsState`]: moves the piece, removes
//! the jumped piece, crowns on arrival at the promotion row, and decides
//! whether the turn passes or a capture chain stays open. Draw bookkeeping is
//! updated here as well.

use serde::{Deserialize, Serialize};

use super::movegen::{captures_from, Move};
use super::piece::Piece;
use super::state::DraughtsState;
use crate::core::{Coord, Side};

/// What a resolved move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Square and piece removed by a jump.
    pub captured: Option<(Coord, Piece)>,
    /// The moving piece was crowned by this move.
    pub crowned: bool,
    /// The mover keeps the turn to jump again from `mv.to`.
    pub chain: bool,
}

/// Apply a move that already passed validation.
///
/// A move from an empty square leaves the state untouched.
pub fn resolve(state: &mut DraughtsState, mv: &Move) -> Resolution {
    let Some(mut piece) = state.board.take(mv.from) else {
        return Resolution {
            captured: None,
            crowned: false,
            chain: false,
        };
    };

    let captured = mv
        .captured_square()
        .and_then(|over| state.board.take(over).map(|p| (over, p)));

    let was_crowned = piece.crowned;
    if !piece.crowned && mv.to.row == piece.color.promotion_row(state.board.rows()) {
        piece.crowned = true;
    }
    state.board.set(mv.to, piece);

    let chain = captured.is_some() && !captures_from(&state.board, mv.to).is_empty();
    if chain {
        state.chain = Some(mv.to);
    } else {
        state.chain = None;
        state.turn = state.turn.opponent();
    }

    // Captures and uncrowned moves can never be undone, so earlier positions
    // cannot recur.
    if captured.is_some() || !was_crowned {
        state.quiet_plies = 0;
        state.seen.clear();
    } else {
        state.quiet_plies += 1;
    }
    state.record_position();

    Resolution {
        captured,
        crowned: piece.crowned && !was_crowned,
        chain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::draughts::{Color, Layout};

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn test_capture_removes_piece_and_passes_turn() {
        let mut state = DraughtsState::from_pieces(
            Layout::Standard,
            &[
                (at(4, 3), Piece::man(Color::Red)),
                (at(3, 2), Piece::man(Color::Black)),
            ],
            Color::Red,
        );

        let res = resolve(&mut state, &Move::new(at(4, 3), at(2, 1)));

        assert_eq!(res.captured, Some((at(3, 2), Piece::man(Color::Black))));
        assert!(!res.chain);
        assert_eq!(state.piece_at(at(3, 2)), None);
        assert_eq!(state.piece_at(at(2, 1)), Some(Piece::man(Color::Red)));
        assert_eq!(state.turn(), Color::Black);
        assert_eq!(state.chain(), None);
    }

    #[test]
    fn test_capture_chain_keeps_turn() {
        let mut state = DraughtsState::from_pieces(
            Layout::Standard,
            &[
                (at(4, 3), Piece::man(Color::Red)),
                (at(3, 2), Piece::man(Color::Black)),
                (at(1, 2), Piece::man(Color::Black)),
            ],
            Color::Red,
        );

        let res = resolve(&mut state, &Move::new(at(4, 3), at(2, 1)));

        assert!(res.chain);
        assert_eq!(state.turn(), Color::Red);
        assert_eq!(state.chain(), Some(at(2, 1)));

        let res = resolve(&mut state, &Move::new(at(2, 1), at(0, 3)));
        assert!(res.crowned);
        assert!(!res.chain);
        assert_eq!(state.turn(), Color::Black);
        assert_eq!(state.piece_count(Color::Black), 0);
    }

    #[test]
    fn test_crowned_on_arrival() {
        let mut state = DraughtsState::from_pieces(
            Layout::Standard,
            &[(at(6, 1), Piece::man(Color::Black))],
            Color::Black,
        );

        let res = resolve(&mut state, &Move::new(at(6, 1), at(7, 2)));

        assert!(res.crowned);
        assert_eq!(state.piece_at(at(7, 2)), Some(Piece::king(Color::Black)));
    }

    #[test]
    fn test_quiet_plies_and_repetitions() {
        let mut state = DraughtsState::from_pieces(
            Layout::Standard,
            &[
                (at(0, 1), Piece::king(Color::Red)),
                (at(7, 6), Piece::king(Color::Black)),
            ],
            Color::Red,
        );

        resolve(&mut state, &Move::new(at(0, 1), at(1, 2)));
        resolve(&mut state, &Move::new(at(7, 6), at(6, 5)));
        resolve(&mut state, &Move::new(at(1, 2), at(0, 1)));
        resolve(&mut state, &Move::new(at(6, 5), at(7, 6)));

        assert_eq!(state.quiet_plies(), 4);
        assert_eq!(state.repetitions(), 2);
    }

    #[test]
    fn test_man_move_resets_bookkeeping() {
        let mut state = DraughtsState::from_pieces(
            Layout::Standard,
            &[
                (at(0, 1), Piece::king(Color::Red)),
                (at(2, 1), Piece::man(Color::Black)),
            ],
            Color::Red,
        );

        resolve(&mut state, &Move::new(at(0, 1), at(1, 2)));
        assert_eq!(state.quiet_plies(), 1);

        resolve(&mut state, &Move::new(at(2, 1), at(3, 0)));
        assert_eq!(state.quiet_plies(), 0);
        assert_eq!(state.repetitions(), 1);
    }
}
