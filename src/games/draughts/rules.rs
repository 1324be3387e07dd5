//! Draughts rules engine.

use tracing::debug;

use super::capture;
use super::layout::{is_dark, Layout};
use super::movegen::{captures_from, check_move, moves_for, Move};
use super::piece::Color;
use super::state::DraughtsState;
use crate::config::DraughtsConfig;
use crate::core::{Rejection, Side};
use crate::rules::{GameStatus, RulesEngine};

/// Draughts on a configurable layout.
///
/// ```
/// use tabletop::games::draughts::Draughts;
/// use tabletop::rules::{GameStatus, RulesEngine};
///
/// let game = Draughts::default();
/// let mut state = game.initial_state();
/// let opening = game.legal_moves(&state, game.turn(&state))[0];
///
/// let t = game.apply_move(&mut state, &opening).unwrap();
/// assert_eq!(t.status, GameStatus::InProgress);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Draughts {
    config: DraughtsConfig,
}

impl Draughts {
    #[must_use]
    pub fn new(config: DraughtsConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DraughtsConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.config.layout
    }

    /// Moves for the turn holder, ignoring whether the game has ended.
    fn turn_moves(&self, state: &DraughtsState) -> Vec<Move> {
        moves_for(&state.board, state.turn, state.chain, self.config.forced_capture)
    }
}

impl RulesEngine for Draughts {
    type State = DraughtsState;
    type Move = Move;
    type Side = Color;

    fn name(&self) -> &'static str {
        "draughts"
    }

    fn initial_state(&self) -> DraughtsState {
        DraughtsState::new(self.config.layout)
    }

    fn turn(&self, state: &DraughtsState) -> Color {
        state.turn
    }

    fn legal_moves(&self, state: &DraughtsState, side: Color) -> Vec<Move> {
        if side != state.turn || self.status(state).is_over() {
            return Vec::new();
        }
        self.turn_moves(state)
    }

    fn validate(&self, state: &DraughtsState, mv: &Move) -> Result<(), Rejection> {
        if self.status(state).is_over() {
            return Err(Rejection::GameOver);
        }
        check_move(
            &state.board,
            state.turn,
            state.chain,
            self.config.forced_capture,
            mv,
        )
    }

    fn resolve(&self, state: &mut DraughtsState, mv: &Move) {
        let res = capture::resolve(state, mv);
        if let Some((at, piece)) = res.captured {
            debug!(%mv, %at, victim = %piece.color, chain = res.chain, "capture");
        }
        if res.crowned {
            debug!(at = %mv.to, "piece crowned");
        }
    }

    fn status(&self, state: &DraughtsState) -> GameStatus<Color> {
        for color in Color::both() {
            if state.piece_count(color) == 0 {
                return GameStatus::Win(color.opponent());
            }
        }

        if self.turn_moves(state).is_empty() {
            return GameStatus::Win(state.turn.opponent());
        }

        let quiet_limit = self.config.quiet_move_limit;
        if quiet_limit > 0 && state.quiet_plies >= quiet_limit {
            return GameStatus::Draw;
        }
        // Every position counts itself once, so a limit below 2 never fires.
        let repetition_limit = self.config.repetition_limit;
        if repetition_limit >= 2 && state.repetitions() >= repetition_limit {
            return GameStatus::Draw;
        }

        GameStatus::InProgress
    }

    fn validate_snapshot(&self, state: &DraughtsState) -> Result<(), String> {
        let layout = self.config.layout;
        let board = &state.board;

        if !board.is_well_formed() || (board.rows(), board.cols()) != (layout.rows(), layout.cols())
        {
            return Err(format!(
                "expected a {}x{} board, got {}x{}",
                layout.rows(),
                layout.cols(),
                board.rows(),
                board.cols()
            ));
        }

        for (at, piece) in board.occupied() {
            if !is_dark(at) {
                return Err(format!("piece on light square {at}"));
            }
            if !piece.crowned && at.row == piece.color.promotion_row(board.rows()) {
                return Err(format!("uncrowned {} piece on its promotion row at {at}", piece.color));
            }
        }

        for color in Color::both() {
            let count = state.piece_count(color);
            if count > layout.pieces_per_side() {
                return Err(format!("{color} has {count} pieces"));
            }
        }

        if let Some(at) = state.chain {
            match board.get(at) {
                Some(piece) if piece.color == state.turn => {}
                _ => return Err(format!("chain square {at} holds no {} piece", state.turn)),
            }
            if captures_from(board, at).is_empty() {
                return Err(format!("chain square {at} has no capture to continue"));
            }
        }

        Ok(())
    }
}
