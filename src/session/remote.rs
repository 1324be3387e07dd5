//! Multiplayer plumbing.
//!
//! Transport is out of scope; a host relays [`Snapshot`]s and
//! [`RemoteEvent`]s over whatever channel it has. Snapshots travel as
//! `bincode`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// This participant's part in a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionRole {
    /// Both sides play on this device.
    #[default]
    Local,
    /// Owns the authoritative state and relays it.
    Host,
    /// Accepts the host's state verbatim after sanity checks.
    Guest,
}

/// Full game state sent between participants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<S> {
    /// Plies played when the snapshot was taken.
    pub ply: u32,
    pub state: S,
}

impl<S: Serialize> Snapshot<S> {
    /// Encode for the wire.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }
}

impl<S: DeserializeOwned> Snapshot<S> {
    /// Decode from the wire. Undecodable input is a malformed update.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        bincode::deserialize(bytes).map_err(|e| EngineError::MalformedExternalUpdate(e.to_string()))
    }
}

/// Session lifecycle events from the other participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteEvent<S> {
    /// The host assigned this participant a side.
    AssignSide(S),
    /// A side asked for a rematch.
    RematchRequested(S),
    /// The other participant left.
    OpponentExited,
}
