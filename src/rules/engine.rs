//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What moves are legal
//! - How a validated move changes the state
//! - When the game is over and who won

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::trace;

use crate::core::{EngineError, Rejection, Side};

/// Result of evaluating a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus<S> {
    /// The game continues.
    InProgress,
    /// `S` won.
    Win(S),
    /// Nobody won.
    Draw,
    /// `S` had to move and could not; `S` lost.
    NoLegalMoves(S),
}

impl<S: Side> GameStatus<S> {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning side, if any.
    #[must_use]
    pub fn winner(&self) -> Option<S> {
        match *self {
            GameStatus::Win(side) => Some(side),
            GameStatus::NoLegalMoves(loser) => Some(loser.opponent()),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: S) -> bool {
        self.winner() == Some(side)
    }
}

/// Outcome of an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition<S> {
    /// Status after the move.
    pub status: GameStatus<S>,
    /// Side holding the turn after the move.
    pub turn: S,
    /// True when the mover keeps the turn to continue a capture chain.
    pub chain_continues: bool,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty if `side` can't act (not its turn, game over)
/// - `validate`: Must reject exactly the moves `legal_moves` omits
/// - `resolve`: Only ever called with validated moves; must be deterministic
/// - `status`: Pure function of the state
pub trait RulesEngine {
    /// Complete game state, including the turn holder.
    type State: Clone + Debug;

    /// A single move.
    type Move: Clone + Debug + PartialEq;

    /// The sides of this game.
    type Side: Side;

    /// Short game name for logs.
    fn name(&self) -> &'static str;

    /// Fresh state at game start.
    fn initial_state(&self) -> Self::State;

    /// Side holding the turn.
    fn turn(&self, state: &Self::State) -> Self::Side;

    /// Enumerate all legal moves for `side`.
    fn legal_moves(&self, state: &Self::State, side: Self::Side) -> Vec<Self::Move>;

    /// Decide whether a move is legal for the turn holder.
    fn validate(&self, state: &Self::State, mv: &Self::Move) -> Result<(), Rejection>;

    /// Apply a move that already passed [`validate`](Self::validate).
    fn resolve(&self, state: &mut Self::State, mv: &Self::Move);

    /// Evaluate the state.
    fn status(&self, state: &Self::State) -> GameStatus<Self::Side>;

    /// Structural sanity checks for a state received from elsewhere.
    ///
    /// Checks shape and piece consistency only; it does not replay history.
    fn validate_snapshot(&self, state: &Self::State) -> Result<(), String>;

    // === Convenience Methods ===

    /// Check whether a move is legal.
    fn is_legal(&self, state: &Self::State, mv: &Self::Move) -> bool {
        self.validate(state, mv).is_ok()
    }

    /// Validate, apply, and evaluate a move.
    ///
    /// On rejection the state is untouched.
    fn apply_move(
        &self,
        state: &mut Self::State,
        mv: &Self::Move,
    ) -> Result<Transition<Self::Side>, EngineError> {
        self.validate(state, mv)?;

        let mover = self.turn(state);
        self.resolve(state, mv);

        let status = self.status(state);
        let turn = self.turn(state);
        trace!(game = self.name(), ?mv, %mover, ?status, "move applied");

        Ok(Transition {
            status,
            turn,
            chain_continues: !status.is_over() && turn == mover,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Player {
        First,
        Second,
    }

    impl std::fmt::Display for Player {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self)
        }
    }

    impl Side for Player {
        fn opponent(self) -> Self {
            match self {
                Player::First => Player::Second,
                Player::Second => Player::First,
            }
        }

        fn both() -> [Self; 2] {
            [Player::First, Player::Second]
        }
    }

    /// Race to ten: each move adds 1 or 2 to a shared counter.
    struct RaceToTen;

    #[derive(Clone, Debug)]
    struct Race {
        total: u8,
        turn: Player,
    }

    impl RulesEngine for RaceToTen {
        type State = Race;
        type Move = u8;
        type Side = Player;

        fn name(&self) -> &'static str {
            "race"
        }

        fn initial_state(&self) -> Race {
            Race {
                total: 0,
                turn: Player::First,
            }
        }

        fn turn(&self, state: &Race) -> Player {
            state.turn
        }

        fn legal_moves(&self, state: &Race, side: Player) -> Vec<u8> {
            if side != state.turn || self.status(state).is_over() {
                return vec![];
            }
            vec![1, 2]
        }

        fn validate(&self, state: &Race, mv: &u8) -> Result<(), Rejection> {
            if self.status(state).is_over() {
                return Err(Rejection::GameOver);
            }
            if !(1..=2).contains(mv) {
                return Err(Rejection::InvalidStep);
            }
            Ok(())
        }

        fn resolve(&self, state: &mut Race, mv: &u8) {
            state.total += mv;
            state.turn = state.turn.opponent();
        }

        fn status(&self, state: &Race) -> GameStatus<Player> {
            if state.total >= 10 {
                GameStatus::Win(state.turn.opponent())
            } else {
                GameStatus::InProgress
            }
        }

        fn validate_snapshot(&self, _state: &Race) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn test_status_winner() {
        let win = GameStatus::Win(Player::Second);
        assert!(win.is_over());
        assert!(win.is_winner(Player::Second));
        assert!(!win.is_winner(Player::First));

        let blocked = GameStatus::NoLegalMoves(Player::First);
        assert_eq!(blocked.winner(), Some(Player::Second));

        assert_eq!(GameStatus::<Player>::Draw.winner(), None);
        assert!(!GameStatus::<Player>::InProgress.is_over());
    }

    #[test]
    fn test_apply_move_rejects_without_mutation() {
        let engine = RaceToTen;
        let mut state = engine.initial_state();

        let err = engine.apply_move(&mut state, &3).unwrap_err();
        assert_eq!(err, EngineError::IllegalMove(Rejection::InvalidStep));
        assert_eq!(state.total, 0);
        assert_eq!(state.turn, Player::First);
    }

    #[test]
    fn test_apply_move_reports_transition() {
        let engine = RaceToTen;
        let mut state = engine.initial_state();

        let t = engine.apply_move(&mut state, &2).unwrap();
        assert_eq!(t.turn, Player::Second);
        assert_eq!(t.status, GameStatus::InProgress);
        assert!(!t.chain_continues);

        state.total = 9;
        let t = engine.apply_move(&mut state, &1).unwrap();
        assert_eq!(t.status, GameStatus::Win(Player::Second));
        assert!(!t.chain_continues);
        assert!(!engine.is_legal(&state, &1));
    }
}
