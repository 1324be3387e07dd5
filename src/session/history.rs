//! Move history.
//!
//! History is an `im::Vector`, so snapshotting a session for a UI or a
//! replay costs O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

/// One applied move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord<S, M> {
    /// Side that moved.
    pub side: S,
    pub mv: M,
    /// Ply number, starting at 1.
    pub ply: u32,
}

/// Moves applied in the current game, oldest first.
pub type History<S, M> = Vector<MoveRecord<S, M>>;

/// Append a move and return its record.
pub(crate) fn push<S: Clone, M: Clone>(history: &mut History<S, M>, side: S, mv: M) -> MoveRecord<S, M> {
    let record = MoveRecord {
        side,
        mv,
        ply: history.len() as u32 + 1,
    };
    history.push_back(record.clone());
    record
}
