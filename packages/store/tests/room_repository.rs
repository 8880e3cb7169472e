//! Room repository integration tests.
//!
//! Tests for the CRUD contract over the real JSON file datastore
//! (create / find_by_id / update / delete, plus durability across reopen).

mod fixtures;
use fixtures::TestStore;

use kura_shared::time::get_jst_timestamp;
use kura_store::{RepositoryError, Room, RoomFactory, RoomId, RoomName, RoomRepository, Timestamp};

fn test_room(id: &str, name: &str) -> Room {
    Room::new(
        RoomId::new(id.to_string()).unwrap(),
        RoomName::new(name.to_string()).unwrap(),
        Timestamp::new(get_jst_timestamp()),
    )
}

#[tokio::test]
async fn test_create_and_find_room() {
    // テスト項目: 新規ルームを作成し、ID で同じ値を取得できる
    // given (前提条件):
    let store = TestStore::new();
    let room = RoomFactory::create(RoomName::new("General".to_string()).unwrap()).unwrap();

    // when (操作):
    let created = store.repository.create(room.clone()).await;

    // then (期待する結果):
    assert!(created.is_ok());
    assert_eq!(created.unwrap(), room);

    let found = store.repository.find_by_id(&room.id).await;
    assert!(found.is_ok());
    assert_eq!(found.unwrap(), room);
}

#[tokio::test]
async fn test_find_room_in_fresh_store_fails() {
    // テスト項目: ファイルがまだ無い新規ストアでの find_by_id は RoomNotFound になる
    // given (前提条件):
    let store = TestStore::new();
    let id = RoomId::new("nonexistent".to_string()).unwrap();

    // when (操作):
    let result = store.repository.find_by_id(&id).await;

    // then (期待する結果):
    assert_eq!(
        result,
        Err(RepositoryError::RoomNotFound("nonexistent".to_string()))
    );
}

#[tokio::test]
async fn test_create_duplicate_room_id_fails() {
    // テスト項目: 同じ ID での 2 回目の create は RoomAlreadyExists になり、
    //             最初の値が保持される
    // given (前提条件):
    let store = TestStore::new();
    let first = test_room("general", "General");
    let second = test_room("general", "Impostor");
    store.repository.create(first.clone()).await.unwrap();

    // when (操作):
    let result = store.repository.create(second).await;

    // then (期待する結果):
    assert_eq!(
        result,
        Err(RepositoryError::RoomAlreadyExists("general".to_string()))
    );

    let found = store.repository.find_by_id(&first.id).await.unwrap();
    assert_eq!(found.name.as_str(), "General");
}

#[tokio::test]
async fn test_update_room() {
    // テスト項目: update 後の find_by_id は更新後のペイロードを返す
    // given (前提条件):
    let store = TestStore::new();
    let room = test_room("general", "General");
    store.repository.create(room.clone()).await.unwrap();

    // when (操作):
    let mut updated = room.clone();
    updated.name = RoomName::new("Renamed".to_string()).unwrap();
    let result = store.repository.update(updated.clone()).await;

    // then (期待する結果):
    assert!(result.is_ok());

    let found = store.repository.find_by_id(&room.id).await.unwrap();
    assert_eq!(found, updated);
    assert_ne!(found, room);
}

#[tokio::test]
async fn test_update_nonexistent_room_fails() {
    // テスト項目: 存在しない ID の update は RoomNotFound になる
    // given (前提条件):
    let store = TestStore::new();
    let room = test_room("ghost", "Ghost");

    // when (操作):
    let result = store.repository.update(room).await;

    // then (期待する結果):
    assert_eq!(
        result,
        Err(RepositoryError::RoomNotFound("ghost".to_string()))
    );
}

#[tokio::test]
async fn test_delete_room() {
    // テスト項目: delete 後の find_by_id は RoomNotFound になる
    // given (前提条件):
    let store = TestStore::new();
    let room = test_room("general", "General");
    store.repository.create(room.clone()).await.unwrap();

    // when (操作):
    let result = store.repository.delete(&room.id).await;

    // then (期待する結果):
    assert!(result.is_ok());
    assert_eq!(
        store.repository.find_by_id(&room.id).await,
        Err(RepositoryError::RoomNotFound("general".to_string()))
    );
}

#[tokio::test]
async fn test_delete_nonexistent_room_fails() {
    // テスト項目: 存在しない ID の delete は RoomNotFound になる
    // given (前提条件):
    let store = TestStore::new();
    let id = RoomId::new("ghost".to_string()).unwrap();

    // when (操作):
    let result = store.repository.delete(&id).await;

    // then (期待する結果):
    assert_eq!(
        result,
        Err(RepositoryError::RoomNotFound("ghost".to_string()))
    );
}

#[tokio::test]
async fn test_delete_one_room_leaves_others_untouched() {
    // テスト項目: ルーム A を削除してもルーム B は影響を受けない
    // given (前提条件):
    let store = TestStore::new();
    let room_a = test_room("room-a", "Room A");
    let room_b = test_room("room-b", "Room B");
    store.repository.create(room_a.clone()).await.unwrap();
    store.repository.create(room_b.clone()).await.unwrap();

    // when (操作):
    store.repository.delete(&room_a.id).await.unwrap();

    // then (期待する結果):
    assert_eq!(
        store.repository.find_by_id(&room_a.id).await,
        Err(RepositoryError::RoomNotFound("room-a".to_string()))
    );
    assert_eq!(store.repository.find_by_id(&room_b.id).await, Ok(room_b));
}

#[tokio::test]
async fn test_rooms_survive_reopen() {
    // テスト項目: 作成したルームは同じファイルを開き直した Repository からも見える
    // given (前提条件):
    let store = TestStore::new();
    let room = test_room("general", "General");
    store.repository.create(room.clone()).await.unwrap();

    // when (操作):
    let reopened = store.reopen();
    let found = reopened.find_by_id(&room.id).await;

    // then (期待する結果):
    assert_eq!(found, Ok(room));
}
