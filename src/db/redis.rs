use redis::AsyncCommands;
use redis::Client;
use std::fmt::Display;

use crate::error::{AppError, AppResult};
use crate::models::CachedRecommendationSet;

use super::RecommendationCache;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    QuizResult(String),
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::QuizResult(user) => write!(f, "quiz_result:{}", user),
        }
    }
}

/// Creates a Redis client for the recommendation cache
///
/// Uses connection pooling via the connection-manager feature.
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Redis-backed recommendation cache
///
/// Records are written with a plain SET, so a store replaces any prior record
/// for the user in one atomic operation, and carry no TTL: a record lives
/// until the next quiz completion invalidates it.
#[derive(Clone)]
pub struct RedisCache {
    client: Client,
}

impl RedisCache {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl RecommendationCache for RedisCache {
    async fn lookup(&self, user: &str) -> AppResult<Option<CachedRecommendationSet>> {
        let key = CacheKey::QuizResult(user.to_string());
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let cached: Option<String> = conn.get(key.to_string()).await?;

        match cached {
            Some(json) => {
                let record = serde_json::from_str(&json).map_err(|e| {
                    AppError::Internal(format!("Cache deserialization error: {}", e))
                })?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn store(&self, record: CachedRecommendationSet) -> AppResult<()> {
        let key = CacheKey::QuizResult(record.user.clone());
        let json = serde_json::to_string(&record)
            .map_err(|e| AppError::Internal(format!("Cache serialization error: {}", e)))?;

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set(key.to_string(), json).await?;

        tracing::debug!(user = %record.user, "Cached quiz result");

        Ok(())
    }

    async fn invalidate(&self, user: &str) -> AppResult<()> {
        let key = CacheKey::QuizResult(user.to_string());
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.del(key.to_string()).await?;

        tracing::debug!(user = %user, "Invalidated cached quiz result");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_display() {
        let key = CacheKey::QuizResult("alice".to_string());
        assert_eq!(format!("{}", key), "quiz_result:alice");
    }

    #[test]
    fn test_cache_key_display_preserves_user_case() {
        let key = CacheKey::QuizResult("Alice".to_string());
        assert_eq!(format!("{}", key), "quiz_result:Alice");
    }
}
