//! Infrastructure layer for the room store.
//!
//! データストアの実装と Repository 実装を提供します。
//! ファイルフォーマットの知識はこの層に閉じています。

pub mod datastore;
pub mod repository;

pub use datastore::{Dataset, Datastore, DatastoreError, InMemoryDatastore, JsonFileDatastore};
pub use repository::DatastoreRoomRepository;
