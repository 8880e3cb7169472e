//! Domain layer for the room store.
//!
//! This module contains business logic that is independent of
//! infrastructure concerns such as file formats.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::Room;
pub use error::{RepositoryError, ValueObjectError};
pub use factory::{RoomFactory, RoomIdFactory};
pub use repository::RoomRepository;
pub use value_object::{RoomId, RoomName, Timestamp};
