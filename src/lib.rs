//! # tabletop
//!
//! Rules engines and computer opponents for two-sided board games.
//!
//! ## Design Principles
//!
//! 1. **One move pipeline**: Human moves, AI moves, and remote updates all
//!    pass through `validate → resolve → status`. A rejected move never
//!    touches the state.
//!
//! 2. **Game-Agnostic Sessions**: Sessions and AI selection only see the
//!    [`RulesEngine`] trait. Board geometry stays inside each game.
//!
//! 3. **Deterministic**: Every random choice draws from a seeded
//!    [`GameRng`], so a seed replays a whole session.
//!
//! ## Modules
//!
//! - `core`: Coordinates, grids, sides, errors, RNG
//! - `rules`: `RulesEngine` trait and game status
//! - `games`: Draughts, tic-tac-toe, and the chess adapter
//! - `ai`: Difficulty tiers and move policies
//! - `config`: TOML configuration with environment overrides
//! - `session`: Lifecycle, AI pacing, history, scoreboard, multiplayer

pub mod ai;
pub mod config;
pub mod core;
pub mod games;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ConfigError, Coord, EngineError, GameRng, Grid, Rejection, Side};

pub use crate::rules::{GameStatus, RulesEngine, Transition};

pub use crate::ai::{choose_ai_move, AiOpponent, Difficulty, MovePolicy};

pub use crate::config::{DraughtsConfig, EngineConfig, SessionConfig, TicTacToeConfig};

pub use crate::session::{AiTicket, GameSession, SessionPhase, Snapshot};
