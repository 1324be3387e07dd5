//! Adapter from a chess rules provider to [`RulesEngine`].

use std::fmt::Debug;

use super::{ChessColor, ChessOutcome, ChessPiece, PieceKind};
use crate::core::{Coord, Rejection};
use crate::rules::{GameStatus, RulesEngine};

/// The capabilities this crate needs from a chess library.
///
/// A provider value is a complete position. Squares use [`Coord`] with
/// rank 8 as row 0 and the a-file as column 0.
pub trait ChessRules: Clone + Debug + Send + Sync + 'static {
    /// Move type of the provider.
    type Move: Clone + Debug + PartialEq + Send + Sync;

    /// Side to move.
    fn turn(&self) -> ChessColor;

    /// Legal moves for the side to move.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play a legal move.
    fn apply(&mut self, mv: &Self::Move);

    /// How the game ended, if it has.
    fn outcome(&self) -> Option<ChessOutcome>;

    /// Every piece on the board with its square.
    fn pieces(&self) -> Vec<(Coord, ChessPiece)>;

    /// Whether the game has ended.
    fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}

/// Chess played through a [`ChessRules`] provider.
#[derive(Clone, Debug)]
pub struct ChessGame<R> {
    start: R,
}

impl<R: ChessRules> ChessGame<R> {
    /// Games start from `start`.
    #[must_use]
    pub fn new(start: R) -> Self {
        Self { start }
    }
}

impl<R: ChessRules + Default> Default for ChessGame<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: ChessRules> RulesEngine for ChessGame<R> {
    type State = R;
    type Move = R::Move;
    type Side = ChessColor;

    fn name(&self) -> &'static str {
        "chess"
    }

    fn initial_state(&self) -> R {
        self.start.clone()
    }

    fn turn(&self, state: &R) -> ChessColor {
        state.turn()
    }

    fn legal_moves(&self, state: &R, side: ChessColor) -> Vec<R::Move> {
        if side != state.turn() || state.is_game_over() {
            return Vec::new();
        }
        state.legal_moves()
    }

    fn validate(&self, state: &R, mv: &R::Move) -> Result<(), Rejection> {
        if state.is_game_over() {
            return Err(Rejection::GameOver);
        }
        if !state.legal_moves().contains(mv) {
            return Err(Rejection::NotLegal);
        }
        Ok(())
    }

    fn resolve(&self, state: &mut R, mv: &R::Move) {
        state.apply(mv);
    }

    fn status(&self, state: &R) -> GameStatus<ChessColor> {
        match state.outcome() {
            None => GameStatus::InProgress,
            Some(ChessOutcome::Checkmate { winner }) => GameStatus::Win(winner),
            Some(_) => GameStatus::Draw,
        }
    }

    fn validate_snapshot(&self, state: &R) -> Result<(), String> {
        let pieces = state.pieces();

        for color in [ChessColor::White, ChessColor::Black] {
            let own: Vec<_> = pieces.iter().filter(|(_, p)| p.color == color).collect();
            let kings = own.iter().filter(|(_, p)| p.kind == PieceKind::King).count();
            if kings != 1 {
                return Err(format!("{color} has {kings} kings"));
            }
            if own.len() > 16 {
                return Err(format!("{color} has {} pieces", own.len()));
            }
        }

        for (at, piece) in &pieces {
            if at.row > 7 || at.col > 7 {
                return Err(format!("piece off the board at {at}"));
            }
            if piece.kind == PieceKind::Pawn && (at.row == 0 || at.row == 7) {
                return Err(format!("{} pawn on a back rank at {at}", piece.color));
            }
        }

        Ok(())
    }
}
