//! Game implementations.
//!
//! Each game implements [`RulesEngine`](crate::rules::RulesEngine) and, through
//! [`AiOpponent`](crate::ai::AiOpponent), maps difficulty tiers to move
//! policies.

pub mod chess;
pub mod draughts;
pub mod tictactoe;
