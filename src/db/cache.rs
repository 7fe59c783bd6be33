use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::models::CachedRecommendationSet;

/// Per-user memoization store for quiz results
///
/// Implementations hold at most one live record per user. There is no
/// time-based expiry: a record is absent only before the first computation or
/// after an explicit invalidation (triggered by a fresh final-step submission).
#[async_trait::async_trait]
pub trait RecommendationCache: Send + Sync {
    /// Returns the live record for a user, if any
    async fn lookup(&self, user: &str) -> AppResult<Option<CachedRecommendationSet>>;

    /// Stores a record, replacing any existing one for that user in a single
    /// atomic operation
    async fn store(&self, record: CachedRecommendationSet) -> AppResult<()>;

    /// Removes the record for a user; a no-op when none exists
    async fn invalidate(&self, user: &str) -> AppResult<()>;
}

/// In-process cache used by the test suite and embedded deployments
#[derive(Default)]
pub struct MemoryCache {
    records: RwLock<HashMap<String, CachedRecommendationSet>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RecommendationCache for MemoryCache {
    async fn lookup(&self, user: &str) -> AppResult<Option<CachedRecommendationSet>> {
        Ok(self.records.read().await.get(user).cloned())
    }

    async fn store(&self, record: CachedRecommendationSet) -> AppResult<()> {
        self.records
            .write()
            .await
            .insert(record.user.clone(), record);
        Ok(())
    }

    async fn invalidate(&self, user: &str) -> AppResult<()> {
        self.records.write().await.remove(user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecipeSummary, RecommendationSet};

    fn record_for(user: &str, recipe_id: &str) -> CachedRecommendationSet {
        let mut data = RecommendationSet::new();
        data.insert(
            "lunch".to_string(),
            vec![RecipeSummary {
                id: recipe_id.to_string(),
                name: "Test Recipe".to_string(),
                cuisine: None,
                prep_time_minutes: None,
                calories: None,
                description: None,
            }],
        );
        CachedRecommendationSet::new(user, data)
    }

    #[tokio::test]
    async fn test_lookup_before_store_is_absent() {
        let cache = MemoryCache::new();
        assert_eq!(cache.lookup("alice").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_then_lookup() {
        let cache = MemoryCache::new();
        let record = record_for("alice", "r-1");
        cache.store(record.clone()).await.unwrap();
        assert_eq!(cache.lookup("alice").await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn test_store_replaces_existing_record() {
        let cache = MemoryCache::new();
        cache.store(record_for("alice", "r-1")).await.unwrap();
        cache.store(record_for("alice", "r-2")).await.unwrap();

        let live = cache.lookup("alice").await.unwrap().unwrap();
        assert_eq!(live.data["lunch"][0].id, "r-2");
    }

    #[tokio::test]
    async fn test_records_are_keyed_per_user() {
        let cache = MemoryCache::new();
        cache.store(record_for("alice", "r-1")).await.unwrap();
        assert_eq!(cache.lookup("bob").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalidate_removes_record() {
        let cache = MemoryCache::new();
        cache.store(record_for("alice", "r-1")).await.unwrap();
        cache.invalidate("alice").await.unwrap();
        assert_eq!(cache.lookup("alice").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalidate_missing_record_is_ok() {
        let cache = MemoryCache::new();
        cache.invalidate("nobody").await.unwrap();
    }
}
