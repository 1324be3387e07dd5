//! Draughts opponent.
//!
//! ## Weighted capture selection
//!
//! Every legal move gets a weight: captures 1.0, other moves the tier's
//! weight. Only the heaviest moves stay in the running, so any tier takes a
//! capture when one exists. Among the survivors, with probability equal to
//! the tier weight, a one-ply look at each move breaks the tie; otherwise the
//! pick is uniform.

use tracing::trace;

use super::difficulty::Difficulty;
use super::policy::{pick, MovePolicy};
use super::AiOpponent;
use crate::core::{Coord, GameRng, Side};
use crate::games::draughts::capture;
use crate::games::draughts::movegen::captures_from;
use crate::games::draughts::{Color, Draughts, DraughtsState, Move};
use crate::rules::RulesEngine;

impl AiOpponent for Draughts {
    fn policy(&self, difficulty: Difficulty) -> Box<dyn MovePolicy<Self>> {
        Box::new(WeightedCapturePolicy::new(
            self.config().weights.weight(difficulty),
        ))
    }
}

/// Capture-first random play with a tunable appetite for good quiet moves.
#[derive(Clone, Debug)]
pub struct WeightedCapturePolicy {
    weight: f64,
}

impl WeightedCapturePolicy {
    /// Policy with non-capturing move weight `weight`, clamped to `[0, 1]`.
    #[must_use]
    pub fn new(weight: f64) -> Self {
        let weight = if weight.is_nan() { 0.0 } else { weight.clamp(0.0, 1.0) };
        Self { weight }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    fn move_weight(&self, mv: &Move) -> f64 {
        if mv.is_capture() {
            1.0
        } else {
            self.weight
        }
    }
}

impl MovePolicy<Draughts> for WeightedCapturePolicy {
    fn name(&self) -> &'static str {
        "weighted-capture"
    }

    fn select(
        &self,
        engine: &Draughts,
        state: &DraughtsState,
        side: Color,
        rng: &mut GameRng,
    ) -> Option<Move> {
        let moves = engine.legal_moves(state, side);
        let heaviest = moves
            .iter()
            .map(|mv| self.move_weight(mv))
            .fold(f64::NEG_INFINITY, f64::max);
        let top: Vec<Move> = moves
            .into_iter()
            .filter(|mv| self.move_weight(mv) >= heaviest)
            .collect();

        if top.len() > 1 && rng.gen_bool(self.weight) {
            let scored: Vec<(Move, i32)> = top.iter().map(|&mv| (mv, lookahead(state, mv))).collect();
            let best = scored.iter().map(|&(_, s)| s).max().unwrap_or(0);
            let finalists: Vec<Move> = scored
                .into_iter()
                .filter(|&(_, s)| s == best)
                .map(|(mv, _)| mv)
                .collect();
            trace!(candidates = top.len(), finalists = finalists.len(), best, "heuristic tie-break");
            return pick(&finalists, rng);
        }

        pick(&top, rng)
    }
}

/// One-ply score of a move for the side making it.
fn lookahead(state: &DraughtsState, mv: Move) -> i32 {
    let Some(piece) = state.piece_at(mv.from) else {
        return 0;
    };

    let mut next = state.clone();
    let res = capture::resolve(&mut next, &mv);

    let mut score = 0;
    if res.chain {
        score += 4;
    }
    if res.crowned {
        score += 3;
    }
    if !piece.crowned {
        let (d_row, _) = mv.from.delta(mv.to);
        if d_row.signum() == i16::from(piece.color.forward()) {
            score += 1;
        }
    }
    if !res.chain && en_prise(&next, mv.to, piece.color) {
        score -= 3;
    }
    score
}

/// Whether the opponent of `owner` could jump the piece at `at`.
fn en_prise(state: &DraughtsState, at: Coord, owner: Color) -> bool {
    let board = state.board();
    board
        .occupied()
        .filter(|(_, p)| p.color == owner.opponent())
        .flat_map(|(from, _)| captures_from(board, from))
        .any(|jump| jump.captured_square() == Some(at))
}
