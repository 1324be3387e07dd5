//! Tic-tac-toe rules engine.

use super::board::{Mark, Move, TicTacToeState, CELLS, LINES, SIZE};
use crate::config::TicTacToeConfig;
use crate::core::{Rejection, Side};
use crate::rules::{GameStatus, RulesEngine};

/// Standard 3×3 tic-tac-toe, X first.
#[derive(Clone, Debug, Default)]
pub struct TicTacToe {
    config: TicTacToeConfig,
}

impl TicTacToe {
    #[must_use]
    pub fn new(config: TicTacToeConfig) -> Self {
        Self { config }
    }

    /// Strategy table for AI opponents.
    #[must_use]
    pub fn config(&self) -> &TicTacToeConfig {
        &self.config
    }
}

impl RulesEngine for TicTacToe {
    type State = TicTacToeState;
    type Move = Move;
    type Side = Mark;

    fn name(&self) -> &'static str {
        "tictactoe"
    }

    fn initial_state(&self) -> TicTacToeState {
        TicTacToeState::new()
    }

    fn turn(&self, state: &TicTacToeState) -> Mark {
        state.turn
    }

    fn legal_moves(&self, state: &TicTacToeState, side: Mark) -> Vec<Move> {
        if side != state.turn || self.status(state).is_over() {
            return Vec::new();
        }
        state
            .empty_cells()
            .into_iter()
            .map(|cell| Move::new(cell, side))
            .collect()
    }

    fn validate(&self, state: &TicTacToeState, mv: &Move) -> Result<(), Rejection> {
        if self.status(state).is_over() {
            return Err(Rejection::GameOver);
        }
        if mv.cell as usize >= CELLS {
            return Err(Rejection::OutOfBounds(mv.coord()));
        }
        if mv.mark != state.turn {
            return Err(Rejection::WrongSide);
        }
        if state.cell(mv.cell as usize).is_some() {
            return Err(Rejection::Occupied(mv.coord()));
        }
        Ok(())
    }

    fn resolve(&self, state: &mut TicTacToeState, mv: &Move) {
        state.place(mv.cell, mv.mark);
    }

    fn status(&self, state: &TicTacToeState) -> GameStatus<Mark> {
        if let Some(mark) = state.winner() {
            GameStatus::Win(mark)
        } else if state.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    fn validate_snapshot(&self, state: &TicTacToeState) -> Result<(), String> {
        let board = &state.board;
        if !board.is_well_formed() || (board.rows(), board.cols()) != (SIZE, SIZE) {
            return Err(format!(
                "expected a 3x3 board, got {}x{}",
                board.rows(),
                board.cols()
            ));
        }

        let (x, o) = state.counts();
        if x != o && x != o + 1 {
            return Err(format!("impossible mark counts: {x} X, {o} O"));
        }
        let expected = if x == o { Mark::X } else { Mark::O };
        if state.turn != expected {
            return Err(format!("{} to move with {x} X and {o} O", state.turn));
        }

        let lines_for = |mark: Mark| {
            LINES
                .iter()
                .filter(|line| line.iter().all(|&i| state.cell(i) == Some(mark)))
                .count()
        };
        if lines_for(Mark::X) > 0 && lines_for(Mark::O) > 0 {
            return Err("both sides have a completed line".to_string());
        }
        if let Some(winner) = state.winner() {
            // The winner made the last move.
            if state.turn != winner.opponent() {
                return Err(format!("{winner} won but holds the turn"));
            }
        }

        Ok(())
    }
}
