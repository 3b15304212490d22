use tracing::info;

use crate::models::game::GameRecord;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::kv_store::KeyValueSession;

/// Stores game records as JSON under `game:<gameId>` over one open session.
pub struct GameRepository {
    session: Box<dyn KeyValueSession>,
}

impl GameRepository {
    pub fn new(session: Box<dyn KeyValueSession>) -> Self {
        Self { session }
    }

    pub async fn save_game(&mut self, game: &GameRecord) -> Result<(), GameRepositoryError> {
        let value = game
            .to_json()
            .map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;
        let key = game.storage_key();

        self.session.set(&key, &value).await?;

        info!("Stored game {} under {}", game.game_id, key);
        Ok(())
    }

    pub async fn close(self) -> Result<(), GameRepositoryError> {
        self.session.quit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::seed_game;
    use crate::repositories::errors::kv_store_errors::KeyValueStoreError;
    use crate::repositories::kv_store::tests::InMemoryStore;
    use crate::repositories::kv_store::KeyValueStore;

    #[tokio::test]
    async fn test_save_game_writes_json_under_game_key() {
        let store = InMemoryStore::new();
        let mut repository = GameRepository::new(store.connect().await.unwrap());

        repository.save_game(&seed_game()).await.unwrap();
        repository.close().await.unwrap();

        let stored = store.get("game:game_1").unwrap();
        assert_eq!(GameRecord::from_json(&stored).unwrap(), seed_game());
        assert_eq!(store.open_sessions(), 0);
    }

    #[tokio::test]
    async fn test_save_game_leaves_other_keys_alone() {
        let store = InMemoryStore::new()
            .with_entry("game:game_2", "{}")
            .with_entry("user:user_1", "{}");
        let mut repository = GameRepository::new(store.connect().await.unwrap());

        repository.save_game(&seed_game()).await.unwrap();

        assert_eq!(store.get("game:game_2").as_deref(), Some("{}"));
        assert_eq!(store.get("user:user_1").as_deref(), Some("{}"));
        assert_eq!(store.keys().len(), 3);
    }

    #[tokio::test]
    async fn test_save_game_surfaces_store_error() {
        let store = InMemoryStore::new().failing_set();
        let mut repository = GameRepository::new(store.connect().await.unwrap());

        let result = repository.save_game(&seed_game()).await;

        assert!(matches!(
            result,
            Err(GameRepositoryError::Store(KeyValueStoreError::Command(_)))
        ));
        assert!(store.keys().is_empty());
    }

    #[tokio::test]
    async fn test_dropping_repository_releases_session() {
        let store = InMemoryStore::new();
        let repository = GameRepository::new(store.connect().await.unwrap());
        assert_eq!(store.open_sessions(), 1);

        drop(repository);

        assert_eq!(store.open_sessions(), 0);
    }
}
