use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::errors::kv_store_errors::KeyValueStoreError;

/// Every seeding failure lands here; the cause is part of the message.
#[derive(Debug)]
pub enum SeedServiceError {
    OperationFailure(GameRepositoryError),
}

impl std::fmt::Display for SeedServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedServiceError::OperationFailure(err) => {
                write!(f, "Seeding failed: {}", err)
            }
        }
    }
}

impl std::error::Error for SeedServiceError {}

impl From<GameRepositoryError> for SeedServiceError {
    fn from(err: GameRepositoryError) -> Self {
        SeedServiceError::OperationFailure(err)
    }
}

impl From<KeyValueStoreError> for SeedServiceError {
    fn from(err: KeyValueStoreError) -> Self {
        SeedServiceError::OperationFailure(GameRepositoryError::Store(err))
    }
}
