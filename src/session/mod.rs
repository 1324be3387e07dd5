//! Game sessions.
//!
//! A [`GameSession`] owns one engine and its state and walks the lifecycle
//! SETUP → IN_PROGRESS → GAME_OVER. It seats AI opponents, keeps move
//! history and a scoreboard across restarts, and accepts state from a remote
//! participant.
//!
//! ## AI pacing
//!
//! AI moves are two-phase: [`GameSession::schedule_ai_move`] issues an
//! [`AiTicket`] and [`GameSession::resolve_ai_move`] spends it. A restart or
//! any applied move in between makes the ticket stale.

pub mod game;
pub mod history;
pub mod pacing;
pub mod remote;
pub mod score;

pub use game::{GameSession, SessionPhase};
pub use history::{History, MoveRecord};
pub use pacing::AiTicket;
pub use remote::{RemoteEvent, SessionRole, Snapshot};
pub use score::Scoreboard;
