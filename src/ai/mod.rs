//! Computer opponents.
//!
//! Each game maps a [`Difficulty`] to a [`MovePolicy`] through
//! [`AiOpponent`]. [`choose_ai_move`] is the single entry point sessions use:
//! it never mutates the state and always returns a legal move when one
//! exists.
//!
//! ```
//! use tabletop::ai::{choose_ai_move, Difficulty};
//! use tabletop::core::GameRng;
//! use tabletop::games::tictactoe::{Mark, TicTacToe, TicTacToeState};
//!
//! let game = TicTacToe::default();
//! let state: TicTacToeState = "XX. .O. ...".parse().unwrap();
//! let mut rng = GameRng::new(42);
//!
//! let mv = choose_ai_move(&game, &state, Mark::O, Difficulty::Hard, &mut rng).unwrap();
//! assert_eq!(mv.cell, 2);
//! ```

pub mod chess;
pub mod difficulty;
pub mod draughts;
pub mod policy;
pub mod tictactoe;

use tracing::{debug, warn};

use crate::core::GameRng;
use crate::rules::RulesEngine;

pub use chess::{CapturePreferringPolicy, MaterialPolicy};
pub use difficulty::{Difficulty, UnknownDifficulty};
pub use draughts::WeightedCapturePolicy;
pub use policy::{MovePolicy, UniformPolicy};
pub use tictactoe::{ForkPolicy, MinimaxPolicy, PositionalPolicy, Strategy};

/// A game that can field a computer opponent.
pub trait AiOpponent: RulesEngine + Sized + 'static {
    /// Policy playing at `difficulty`.
    fn policy(&self, difficulty: Difficulty) -> Box<dyn MovePolicy<Self>>;
}

/// Choose a move for `side` at `difficulty`.
///
/// Returns `None` only when `side` has no legal move. A policy answer that is
/// not legal is replaced by a uniform pick.
pub fn choose_ai_move<E: AiOpponent>(
    engine: &E,
    state: &E::State,
    side: E::Side,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Option<E::Move> {
    let policy = engine.policy(difficulty);
    debug!(game = engine.name(), %side, %difficulty, policy = policy.name(), "AI to move");
    choose_with(engine, policy.as_ref(), state, side, rng)
}

/// Run `policy` and keep its answer only if it is legal.
pub fn choose_with<E: RulesEngine>(
    engine: &E,
    policy: &dyn MovePolicy<E>,
    state: &E::State,
    side: E::Side,
    rng: &mut GameRng,
) -> Option<E::Move> {
    let legal = engine.legal_moves(state, side);
    if legal.is_empty() {
        debug!(game = engine.name(), %side, "no legal moves for AI");
        return None;
    }

    match policy.select(engine, state, side, rng) {
        Some(mv) if legal.contains(&mv) => {
            debug!(game = engine.name(), %side, ?mv, "AI move");
            Some(mv)
        }
        other => {
            warn!(game = engine.name(), policy = policy.name(), answer = ?other, "policy gave no legal move");
            rng.choose(&legal).cloned()
        }
    }
}
