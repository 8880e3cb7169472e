//! JSON ファイルを使った Datastore 実装
//!
//! データセット全体を 1 つの JSON ファイルとして保存します。小規模な
//! 組み込み用途を想定した実装で、呼び出しごとにファイル全体を読み書き
//! します。ファイルが存在しない場合は空のデータセットとして扱います。

use std::{io, path::PathBuf};

use async_trait::async_trait;

use super::{Dataset, Datastore, DatastoreError};

/// ファイルバックエンドの Datastore 実装
pub struct JsonFileDatastore {
    /// データセットを保存する JSON ファイルのパス
    path: PathBuf,
}

impl JsonFileDatastore {
    /// Create a datastore backed by the JSON file at `path`.
    ///
    /// The file does not have to exist yet; a missing file loads as an
    /// empty dataset.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Datastore for JsonFileDatastore {
    async fn load_all(&self) -> Result<Dataset, DatastoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "datastore file missing, loading empty dataset");
                return Ok(Dataset::new());
            }
            Err(e) => return Err(DatastoreError::Io(e)),
        };

        let dataset: Dataset = serde_json::from_slice(&bytes)?;
        tracing::debug!(path = %self.path.display(), rooms = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    async fn save_all(&self, dataset: &Dataset) -> Result<(), DatastoreError> {
        let json = serde_json::to_vec_pretty(dataset)?;
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!(path = %self.path.display(), rooms = dataset.len(), "dataset saved");
        Ok(())
    }
}
