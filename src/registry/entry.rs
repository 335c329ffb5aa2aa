//! # Message Entry
//!
//! The value type held by every registry index: one packet definition with
//! its numeric wire id, travel direction, structural hash, and symbolic
//! name.
//!
//! Wire ids churn between client builds; structural hashes do not. An
//! entry whose hash did not resolve to exactly one id in the current build
//! carries [`UNRESOLVED_ID`] and stays reachable by name only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved id meaning "no numeric id is known for the current build".
///
/// Entries carrying this value are never indexed by id.
pub const UNRESOLVED_ID: u16 = u16::MAX;

/// Which way a message travels across the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Server to client.
    Incoming,
    /// Client to server.
    Outgoing,
}

impl Direction {
    /// Suffix appended to a hash so the same base hash cannot collide
    /// across directions.
    pub fn tag(self) -> &'static str {
        match self {
            Direction::Incoming => "MessageEvent",
            Direction::Outgoing => "MessageComposer",
        }
    }

    pub fn is_outgoing(self) -> bool {
        matches!(self, Direction::Outgoing)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Incoming => write!(f, "incoming"),
            Direction::Outgoing => write!(f, "outgoing"),
        }
    }
}

/// One packet definition.
///
/// Pure value; the registry re-tags `direction` when an entry is added so
/// every entry in a store shares the store's configured direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntry {
    /// Numeric wire identifier, or [`UNRESOLVED_ID`].
    pub id: u16,
    /// Travel direction; forced to the owning registry's direction.
    pub direction: Direction,
    /// Direction-tagged structural hash; may be empty for ad-hoc entries.
    pub hash: String,
    /// Symbolic name; may be empty for anonymous entries.
    pub name: String,
}

impl MessageEntry {
    /// Entry with a known wire id for the current build.
    pub fn resolved(
        id: u16,
        direction: Direction,
        hash: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            direction,
            hash: hash.into(),
            name: name.into(),
        }
    }

    /// Entry whose hash had zero or several candidate ids; queryable by
    /// name, absent from the id index.
    pub fn unresolved(direction: Direction, hash: impl Into<String>, name: impl Into<String>) -> Self {
        Self::resolved(UNRESOLVED_ID, direction, hash, name)
    }

    /// Whether a numeric id is known for the current build.
    pub fn is_resolved(&self) -> bool {
        self.id != UNRESOLVED_ID
    }
}
