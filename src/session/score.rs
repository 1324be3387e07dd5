//! Running tally of finished games.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::core::Side;
use crate::rules::GameStatus;

/// Wins per side and draws across a session's games.
///
/// Survives restarts; each finished game is recorded once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard<S> {
    /// Wins, indexed like `S::both()`.
    wins: [u32; 2],
    draws: u32,
    #[serde(skip)]
    _side: PhantomData<S>,
}

impl<S> Default for Scoreboard<S> {
    fn default() -> Self {
        Self {
            wins: [0, 0],
            draws: 0,
            _side: PhantomData,
        }
    }
}

impl<S: Side> Scoreboard<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game. In-progress statuses are ignored.
    pub fn record(&mut self, status: &GameStatus<S>) {
        match status.winner() {
            Some(side) => self.wins[Self::slot(side)] += 1,
            None if status.is_over() => self.draws += 1,
            None => {}
        }
    }

    #[must_use]
    pub fn wins(&self, side: S) -> u32 {
        self.wins[Self::slot(side)]
    }

    #[must_use]
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Finished games recorded.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins[0] + self.wins[1] + self.draws
    }

    fn slot(side: S) -> usize {
        usize::from(side != S::both()[0])
    }
}

impl<S: Side> std::fmt::Display for Scoreboard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [first, second] = S::both();
        write!(
            f,
            "{first} {} - {second} {} ({} draws)",
            self.wins(first),
            self.wins(second),
            self.draws
        )
    }
}
