//! Domain factories for creating domain entities and value objects.

use kura_shared::time::get_jst_timestamp;

use super::{
    entity::Room,
    error::ValueObjectError,
    value_object::{RoomId, RoomName, Timestamp},
};

/// Factory for generating RoomId instances.
///
/// This factory encapsulates the logic for generating new room identifiers,
/// separating the generation concern from the validation logic in RoomId.
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// Generate a new RoomId with a random UUID v4.
    ///
    /// # Returns
    ///
    /// A Result containing a new RoomId with a randomly generated UUID v4
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for consistency
    /// with the domain error handling pattern.
    pub fn generate() -> Result<RoomId, ValueObjectError> {
        let uuid = uuid::Uuid::new_v4();
        RoomId::from_uuid(uuid)
    }
}

/// Factory for creating Room entities.
pub struct RoomFactory;

impl RoomFactory {
    /// Create a new Room with a generated ID and the current JST timestamp.
    pub fn create(name: RoomName) -> Result<Room, ValueObjectError> {
        let id = RoomIdFactory::generate()?;
        let created_at = Timestamp::new(get_jst_timestamp());
        Ok(Room::new(id, name, created_at))
    }
}
