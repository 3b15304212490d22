#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValueStoreError {
    Connection(String),
    Command(String),
}

impl std::fmt::Display for KeyValueStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyValueStoreError::Connection(msg) => write!(f, "Connection error: {}", msg),
            KeyValueStoreError::Command(msg) => write!(f, "Command error: {}", msg),
        }
    }
}

impl std::error::Error for KeyValueStoreError {}

impl From<redis::RedisError> for KeyValueStoreError {
    fn from(err: redis::RedisError) -> Self {
        if err.kind() == redis::ErrorKind::IoError
            || err.is_connection_refusal()
            || err.is_timeout()
            || err.is_connection_dropped()
        {
            KeyValueStoreError::Connection(err.to_string())
        } else {
            KeyValueStoreError::Command(err.to_string())
        }
    }
}
