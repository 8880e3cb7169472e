//! Repository trait for room persistence.
//!
//! ドメイン層が Repository の抽象を定義し、infrastructure 層が実装します
//! （依存性の逆転）。上位層は `Arc<dyn RoomRepository>` として扱い、
//! 具体的なデータストアには依存しません。

use async_trait::async_trait;

use super::{entity::Room, error::RepositoryError, value_object::RoomId};

/// Room に対する CRUD 操作の抽象
///
/// すべての操作はデータセット全体のロード → 1 キーの検査・変更 →
/// （変更系のみ）全体の保存、というラウンドトリップで実現されます。
/// ロードまたは保存の失敗は即座に呼び出し元へ伝播し、操作は適用されません。
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Create a new room. Fails with `RoomAlreadyExists` if the ID is taken.
    async fn create(&self, room: Room) -> Result<Room, RepositoryError>;

    /// Find a room by ID. Returns an owned copy of the stored room.
    async fn find_by_id(&self, id: &RoomId) -> Result<Room, RepositoryError>;

    /// Overwrite an existing room. Fails with `RoomNotFound` if absent.
    async fn update(&self, room: Room) -> Result<Room, RepositoryError>;

    /// Delete a room by ID. Fails with `RoomNotFound` if absent.
    async fn delete(&self, id: &RoomId) -> Result<(), RepositoryError>;
}
