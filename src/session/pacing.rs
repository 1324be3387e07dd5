//! AI move pacing.
//!
//! The session never sleeps. Scheduling an AI move yields an [`AiTicket`]
//! carrying the delay; the host's event loop waits however it likes and then
//! hands the ticket back. A ticket is only honoured if nothing happened to
//! the game in between.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A pending AI move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTicket {
    /// Session generation when the ticket was issued.
    pub generation: u64,
    /// History length when the ticket was issued.
    pub ply: u32,
    /// How long to wait before resolving the ticket.
    pub delay: Duration,
}

impl AiTicket {
    /// Whether the ticket still matches the session.
    #[must_use]
    pub fn is_current(&self, generation: u64, ply: u32) -> bool {
        self.generation == generation && self.ply == ply
    }
}
