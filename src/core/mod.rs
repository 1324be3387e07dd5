//! Core engine types: coordinates, boards, sides, errors, RNG.
//!
//! This module contains the fundamental building blocks that are game-agnostic.
//! Games pick board sizes and occupant types rather than modifying the core.

pub mod board;
pub mod coord;
pub mod error;
pub mod rng;
pub mod side;

pub use board::Grid;
pub use coord::Coord;
pub use error::{ConfigError, EngineError, Rejection};
pub use rng::GameRng;
pub use side::Side;
