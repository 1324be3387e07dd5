//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each state
//! - How validated moves modify state
//! - Win/loss/draw conditions
//!
//! Sessions and AI policies call into `RulesEngine` but never interpret
//! game-specific concepts directly.

pub mod engine;

pub use engine::{GameStatus, RulesEngine, Transition};
