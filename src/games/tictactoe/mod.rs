//! Tic-tac-toe.
//!
//! Cells are numbered 0..=8 row-major, so cell `i` sits at row `i / 3`,
//! column `i % 3`. X moves first. Three in a row wins; a full board without
//! a line is a draw.

pub mod board;
pub mod rules;
pub mod solver;

pub use board::{Mark, Move, TicTacToeState, LINES};
pub use rules::TicTacToe;
pub use solver::{SearchStats, Solution};
