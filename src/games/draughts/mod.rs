//! Draughts (checkers).
//!
//! ## Rules
//!
//! - Red moves first, toward row 0; Black moves toward the last row
//! - Pieces step one square diagonally forward; crowned pieces step both ways
//! - Jumps over an opposing piece remove it, in any diagonal direction
//! - A piece that can jump again after a jump must keep jumping
//! - A piece reaching its promotion row is crowned at once
//! - A side with no pieces, or no move on its turn, loses
//!
//! Optional rules (see [`DraughtsConfig`](crate::config::DraughtsConfig)):
//! forced capture, a quiet-move draw, and a repetition draw.

pub mod capture;
pub mod layout;
pub mod movegen;
pub mod piece;
pub mod rules;
pub mod state;

pub use capture::Resolution;
pub use layout::Layout;
pub use movegen::Move;
pub use piece::{Color, Piece};
pub use rules::Draughts;
pub use state::DraughtsState;
