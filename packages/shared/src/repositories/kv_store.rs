use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use crate::repositories::errors::kv_store_errors::KeyValueStoreError;

#[cfg(test)]
use mockall::automock;

/// Opens sessions against a key-value store.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn KeyValueSession>, KeyValueStoreError>;
}

/// A single open connection. Dropping a session releases it; `quit` closes it
/// politely first.
#[async_trait]
pub trait KeyValueSession: Send {
    /// Unconditional upsert.
    async fn set(&mut self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    async fn quit(self: Box<Self>) -> Result<(), KeyValueStoreError>;
}

pub struct RedisStore {
    url: String,
    connect_timeout: Duration,
}

impl RedisStore {
    pub fn new(url: impl Into<String>, connect_timeout: Duration) -> Self {
        Self {
            url: url.into(),
            connect_timeout,
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn connect(&self) -> Result<Box<dyn KeyValueSession>, KeyValueStoreError> {
        let client = redis::Client::open(self.url.as_str())
            .map_err(|e| KeyValueStoreError::Connection(format!("Invalid Redis URL: {}", e)))?;

        let connection = tokio::time::timeout(self.connect_timeout, client.get_async_connection())
            .await
            .map_err(|_| {
                KeyValueStoreError::Connection(format!(
                    "Timed out after {:?} connecting to Redis",
                    self.connect_timeout
                ))
            })?
            .map_err(|e| KeyValueStoreError::Connection(e.to_string()))?;

        debug!("Redis connection established");
        Ok(Box::new(RedisSession { connection }))
    }
}

pub struct RedisSession {
    connection: redis::aio::Connection,
}

#[async_trait]
impl KeyValueSession for RedisSession {
    async fn set(&mut self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        self.connection.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    async fn quit(self: Box<Self>) -> Result<(), KeyValueStoreError> {
        let RedisSession { mut connection } = *self;
        redis::cmd("QUIT")
            .query_async::<_, ()>(&mut connection)
            .await?;
        debug!("Redis connection closed");
        Ok(())
    }
}
