//! 永続化ハンドル（Datastore）の抽象と実装
//!
//! Repository はこの trait 経由でデータセット全体のロード・保存を行います。
//! キー単位の読み書きは提供しません。ロードと保存の間、データセットは
//! 丸ごとメモリ上に保持されます。

pub mod inmemory;
pub mod json_file;

pub use inmemory::InMemoryDatastore;
pub use json_file::JsonFileDatastore;

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Room, RoomId};

/// The full in-memory mapping of RoomId to Room
pub type Dataset = HashMap<RoomId, Room>;

/// Errors surfaced by datastore implementations
#[derive(Debug, Error)]
pub enum DatastoreError {
    /// Underlying file I/O failed
    #[error("datastore I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset could not be encoded or decoded
    #[error("dataset serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// 永続化ハンドル
///
/// データセット全体を単位としたロード・保存だけを提供します。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Datastore: Send + Sync {
    /// Load the entire dataset into memory.
    async fn load_all(&self) -> Result<Dataset, DatastoreError>;

    /// Persist the entire dataset, replacing whatever was stored before.
    async fn save_all(&self, dataset: &Dataset) -> Result<(), DatastoreError>;
}
