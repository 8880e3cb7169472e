//! Datastore-backed Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! 操作ごとにデータセット全体を Datastore からロードし、1 キーを
//! 検査・変更してから全体を保存し直します。
//!
//! ロード → 変更 → 保存のラウンドトリップは op_lock で直列化されるため、
//! 同一インスタンスを共有する呼び出し同士で更新が失われることはありません。
//! 別プロセスから同じファイルを開いた場合の同期は対象外です。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{RepositoryError, Room, RoomId, RoomRepository},
    infrastructure::datastore::{Datastore, DatastoreError},
};

/// Datastore 越しに Room を永続化する Repository 実装
pub struct DatastoreRoomRepository {
    /// 永続化ハンドル（データアクセス層の抽象化）
    datastore: Arc<dyn Datastore>,
    /// ロード → 変更 → 保存のラウンドトリップを直列化するロック
    op_lock: Mutex<()>,
}

impl DatastoreRoomRepository {
    /// 新しい DatastoreRoomRepository を作成
    pub fn new(datastore: Arc<dyn Datastore>) -> Self {
        Self {
            datastore,
            op_lock: Mutex::new(()),
        }
    }
}

fn persistence_failure(e: DatastoreError) -> RepositoryError {
    RepositoryError::PersistenceFailure(e.to_string())
}

#[async_trait]
impl RoomRepository for DatastoreRoomRepository {
    async fn create(&self, room: Room) -> Result<Room, RepositoryError> {
        let _guard = self.op_lock.lock().await;

        let mut dataset = self
            .datastore
            .load_all()
            .await
            .map_err(persistence_failure)?;

        if dataset.contains_key(&room.id) {
            return Err(RepositoryError::RoomAlreadyExists(room.id.to_string()));
        }

        dataset.insert(room.id.clone(), room.clone());
        self.datastore
            .save_all(&dataset)
            .await
            .map_err(persistence_failure)?;

        tracing::debug!(room_id = %room.id, "room created");
        Ok(room)
    }

    async fn find_by_id(&self, id: &RoomId) -> Result<Room, RepositoryError> {
        let _guard = self.op_lock.lock().await;

        let dataset = self
            .datastore
            .load_all()
            .await
            .map_err(persistence_failure)?;

        dataset
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::RoomNotFound(id.to_string()))
    }

    async fn update(&self, room: Room) -> Result<Room, RepositoryError> {
        let _guard = self.op_lock.lock().await;

        let mut dataset = self
            .datastore
            .load_all()
            .await
            .map_err(persistence_failure)?;

        if !dataset.contains_key(&room.id) {
            return Err(RepositoryError::RoomNotFound(room.id.to_string()));
        }

        dataset.insert(room.id.clone(), room.clone());
        self.datastore
            .save_all(&dataset)
            .await
            .map_err(persistence_failure)?;

        tracing::debug!(room_id = %room.id, "room updated");
        Ok(room)
    }

    async fn delete(&self, id: &RoomId) -> Result<(), RepositoryError> {
        let _guard = self.op_lock.lock().await;

        let mut dataset = self
            .datastore
            .load_all()
            .await
            .map_err(persistence_failure)?;

        if dataset.remove(id).is_none() {
            return Err(RepositoryError::RoomNotFound(id.to_string()));
        }

        self.datastore
            .save_all(&dataset)
            .await
            .map_err(persistence_failure)?;

        tracing::debug!(room_id = %id, "room deleted");
        Ok(())
    }
}
