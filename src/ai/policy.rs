//! Move selection policies.
//!
//! A policy picks one move for a side from a position. Policies never touch
//! the live state; anything they need to look ahead at is cloned.

use crate::core::GameRng;
use crate::rules::RulesEngine;

/// Policy for choosing a move.
pub trait MovePolicy<E: RulesEngine>: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Choose a move for `side`.
    ///
    /// Returns `None` if `side` has no legal move.
    fn select(
        &self,
        engine: &E,
        state: &E::State,
        side: E::Side,
        rng: &mut GameRng,
    ) -> Option<E::Move>;
}

/// Uniform random policy.
///
/// Selects uniformly from legal moves. Works for every engine.
#[derive(Clone, Debug, Default)]
pub struct UniformPolicy;

impl<E: RulesEngine> MovePolicy<E> for UniformPolicy {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn select(
        &self,
        engine: &E,
        state: &E::State,
        side: E::Side,
        rng: &mut GameRng,
    ) -> Option<E::Move> {
        let moves = engine.legal_moves(state, side);
        rng.choose(&moves).cloned()
    }
}

/// Pick uniformly among `candidates`, or `None` if there are none.
pub(crate) fn pick<T: Clone>(candidates: &[T], rng: &mut GameRng) -> Option<T> {
    rng.choose(candidates).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, TicTacToe, TicTacToeState};

    #[test]
    fn test_uniform_picks_legal_moves() {
        let game = TicTacToe::default();
        let state: TicTacToeState = "XO. ... ...".parse().unwrap();
        let mut rng = GameRng::new(7);

        for _ in 0..20 {
            let mv = UniformPolicy.select(&game, &state, Mark::X, &mut rng).unwrap();
            assert!(game.is_legal(&state, &mv));
        }
    }

    #[test]
    fn test_uniform_none_when_blocked() {
        let game = TicTacToe::default();
        let state: TicTacToeState = "XO. ... ...".parse().unwrap();
        let mut rng = GameRng::new(7);

        assert_eq!(UniformPolicy.select(&game, &state, Mark::O, &mut rng), None);
    }

    #[test]
    fn test_uniform_is_deterministic_per_seed() {
        let game = TicTacToe::default();
        let state = TicTacToeState::new();

        let a = UniformPolicy.select(&game, &state, Mark::X, &mut GameRng::new(99));
        let b = UniformPolicy.select(&game, &state, Mark::X, &mut GameRng::new(99));
        assert_eq!(a, b);
    }
}
