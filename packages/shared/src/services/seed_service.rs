use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    models::game::GameRecord,
    repositories::{game_repository::GameRepository, kv_store::KeyValueStore},
    services::errors::seed_service_errors::SeedServiceError,
};

#[derive(Clone)]
pub struct SeedService {
    store: Arc<dyn KeyValueStore>,
}

impl SeedService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        SeedService { store }
    }

    /// Connects, writes `game` under its storage key and disconnects.
    ///
    /// The session is released whether or not the write succeeds. When both
    /// the write and the disconnect fail, the write error is returned.
    pub async fn seed(&self, game: &GameRecord) -> Result<(), SeedServiceError> {
        if !game.is_consistent() {
            warn!(
                "Seeding game {} with {} of {} players but {} listed",
                game.game_id,
                game.current_players,
                game.max_players,
                game.players.len()
            );
        }

        let session = self.store.connect().await?;
        info!("Connected to key-value store");

        let mut repository = GameRepository::new(session);
        let written = repository.save_game(game).await;
        let closed = repository.close().await;

        if let Err(e) = written {
            if let Err(close_err) = closed {
                warn!("Failed to close store connection: {}", close_err);
            }
            return Err(e.into());
        }
        closed?;

        info!("Disconnected from key-value store");
        Ok(())
    }
}
