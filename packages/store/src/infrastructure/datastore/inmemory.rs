//! InMemory Datastore 実装
//!
//! HashMap をインメモリ DB として使用する実装。永続化が不要な用途や
//! ユニットテストで JsonFileDatastore の代わりに利用できます。

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Dataset, Datastore, DatastoreError};

/// インメモリ Datastore 実装
#[derive(Default)]
pub struct InMemoryDatastore {
    /// データセット全体（ロードでコピー、保存で丸ごと置き換え）
    dataset: Mutex<Dataset>,
}

impl InMemoryDatastore {
    /// Create an empty in-memory datastore
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Datastore for InMemoryDatastore {
    async fn load_all(&self) -> Result<Dataset, DatastoreError> {
        let dataset = self.dataset.lock().await;
        Ok(dataset.clone())
    }

    async fn save_all(&self, dataset: &Dataset) -> Result<(), DatastoreError> {
        let mut stored = self.dataset.lock().await;
        *stored = dataset.clone();
        Ok(())
    }
}
