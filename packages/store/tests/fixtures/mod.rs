//! Test fixtures for the room store integration tests.

use std::{path::PathBuf, sync::Arc};

use kura_store::{DatastoreRoomRepository, JsonFileDatastore};

/// JSON ファイルを使った Repository のテストフィクスチャ
///
/// テストごとに一意なファイルパスを払い出し、Drop でファイルを削除します。
pub struct TestStore {
    pub repository: DatastoreRoomRepository,
    path: PathBuf,
}

impl TestStore {
    pub fn new() -> Self {
        kura_shared::logger::setup_logger("kura_store", "debug");

        let path =
            std::env::temp_dir().join(format!("kura-store-test-{}.json", uuid::Uuid::new_v4()));
        let datastore = Arc::new(JsonFileDatastore::new(path.clone()));
        Self {
            repository: DatastoreRoomRepository::new(datastore),
            path,
        }
    }

    /// 同じファイルを指す新しい Repository を開く（永続性の検証用）
    pub fn reopen(&self) -> DatastoreRoomRepository {
        DatastoreRoomRepository::new(Arc::new(JsonFileDatastore::new(self.path.clone())))
    }
}

impl Drop for TestStore {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
