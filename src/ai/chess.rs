//! Chess opponents.
//!
//! - Easy: uniform random
//! - Medium: random capture if any, else random move
//! - Hard and above: one-ply material count, taking mate when offered

use super::difficulty::Difficulty;
use super::policy::{pick, MovePolicy, UniformPolicy};
use super::AiOpponent;
use crate::core::{GameRng, Side};
use crate::games::chess::{material, material_balance, ChessColor, ChessGame, ChessRules};
use crate::rules::RulesEngine;

impl<R: ChessRules> AiOpponent for ChessGame<R> {
    fn policy(&self, difficulty: Difficulty) -> Box<dyn MovePolicy<Self>> {
        match difficulty {
            Difficulty::Easy => Box::new(UniformPolicy),
            Difficulty::Medium => Box::new(CapturePreferringPolicy),
            Difficulty::Hard | Difficulty::Insane => Box::new(MaterialPolicy),
        }
    }
}

/// Random capture when one exists.
#[derive(Clone, Debug, Default)]
pub struct CapturePreferringPolicy;

impl<R: ChessRules> MovePolicy<ChessGame<R>> for CapturePreferringPolicy {
    fn name(&self) -> &'static str {
        "capture-preferring"
    }

    fn select(
        &self,
        engine: &ChessGame<R>,
        state: &R,
        side: ChessColor,
        rng: &mut GameRng,
    ) -> Option<R::Move> {
        let moves = engine.legal_moves(state, side);
        let before = material(state, side.opponent());
        let captures: Vec<R::Move> = moves
            .iter()
            .filter(|mv| {
                let mut next = state.clone();
                next.apply(mv);
                material(&next, side.opponent()) < before
            })
            .cloned()
            .collect();

        if captures.is_empty() {
            pick(&moves, rng)
        } else {
            pick(&captures, rng)
        }
    }
}

/// Best static material balance after one ply. First best wins ties.
#[derive(Clone, Debug, Default)]
pub struct MaterialPolicy;

impl<R: ChessRules> MovePolicy<ChessGame<R>> for MaterialPolicy {
    fn name(&self) -> &'static str {
        "material"
    }

    fn select(
        &self,
        engine: &ChessGame<R>,
        state: &R,
        side: ChessColor,
        _rng: &mut GameRng,
    ) -> Option<R::Move> {
        let mut best: Option<(R::Move, i32)> = None;

        for mv in engine.legal_moves(state, side) {
            let mut next = state.clone();
            next.apply(&mv);
            if next.outcome().and_then(|o| o.winner()) == Some(side) {
                return Some(mv);
            }

            let score = material_balance(&next, side);
            if best.as_ref().map_or(true, |(_, s)| score > *s) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv)
    }
}
