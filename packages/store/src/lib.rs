//! File-backed room persistence library.
//!
//! This library provides CRUD persistence for room entities on top of a
//! whole-dataset load/save datastore, split into a domain layer (entities,
//! value objects, repository trait) and an infrastructure layer (datastore
//! implementations, repository implementation).

pub mod domain;
pub mod infrastructure;

// Re-export the main entry points
pub use domain::{
    RepositoryError, Room, RoomFactory, RoomId, RoomIdFactory, RoomName, RoomRepository, Timestamp,
};
pub use infrastructure::{DatastoreRoomRepository, InMemoryDatastore, JsonFileDatastore};
