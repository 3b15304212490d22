pub mod models;
pub mod repositories;
pub mod services;

pub use models::game::{seed_game, GameRecord, GameStatus, PlayerRef};
pub use repositories::game_repository::GameRepository;
pub use repositories::kv_store::{KeyValueSession, KeyValueStore, RedisStore};
pub use services::seed_service::SeedService;
