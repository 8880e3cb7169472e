//! Core domain models for the room store.

use serde::{Deserialize, Serialize};

use super::value_object::{RoomId, RoomName, Timestamp};

/// Represents a room persisted in the datastore
///
/// The repository only ever inspects `id`; the remaining fields are payload
/// copied by value on every read and write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Human-readable room name
    pub name: RoomName,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
}

impl Room {
    /// Create a new room with the given ID, name and creation timestamp
    pub fn new(id: RoomId, name: RoomName, created_at: Timestamp) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}
