//! The side-to-move abstraction shared by every game.
//!
//! All games here are two-sided. Each game defines its own side type
//! (draughts colors, tic-tac-toe marks, chess colors) and implements [`Side`]
//! so the rules engine, AI policies, and session can stay generic.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A participant in a two-sided game.
pub trait Side: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// The other side.
    #[must_use]
    fn opponent(self) -> Self;

    /// Both sides, in the order they move at game start.
    fn both() -> [Self; 2];
}
