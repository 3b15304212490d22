use crate::repositories::errors::kv_store_errors::KeyValueStoreError;

#[derive(Debug)]
pub enum GameRepositoryError {
    Serialization(String),
    Store(KeyValueStoreError),
}

impl std::fmt::Display for GameRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameRepositoryError::Serialization(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            GameRepositoryError::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl std::error::Error for GameRepositoryError {}

impl From<KeyValueStoreError> for GameRepositoryError {
    fn from(err: KeyValueStoreError) -> Self {
        GameRepositoryError::Store(err)
    }
}
