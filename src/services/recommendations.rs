use crate::{
    db::RecommendationCache,
    error::AppResult,
    models::{CachedRecommendationSet, PreferenceProfile, RecommendationSet},
    services::providers::RecommendationEngine,
};

/// Outcome of a results computation
#[derive(Debug, PartialEq)]
pub struct QuizOutcome {
    pub recommendations: RecommendationSet,
    /// Set when the engine could not be reached; nothing was cached
    pub engine_unavailable: bool,
}

/// Produces the recommendation set for a user's quiz result
///
/// Checks the cache first; on a miss the engine is consulted once and the
/// result stored before returning. Revisiting results never recomputes — a
/// cached record is served until the wizard's final step is resubmitted, even
/// if earlier answers changed in the meantime.
pub async fn quiz_results(
    cache: &dyn RecommendationCache,
    engine: &dyn RecommendationEngine,
    user: &str,
    profile: &PreferenceProfile,
) -> AppResult<QuizOutcome> {
    if let Some(record) = cache.lookup(user).await? {
        tracing::debug!(user = %user, "Quiz result cache hit");
        return Ok(QuizOutcome {
            recommendations: record.data,
            engine_unavailable: false,
        });
    }

    tracing::debug!(user = %user, "Quiz result cache miss");

    if !engine.is_available().await {
        tracing::warn!(
            user = %user,
            engine = engine.name(),
            "Recommendation engine unavailable; serving empty result"
        );
        return Ok(QuizOutcome {
            recommendations: RecommendationSet::new(),
            engine_unavailable: true,
        });
    }

    let recommendations = engine.recommend(profile).await?;

    cache
        .store(CachedRecommendationSet::new(user, recommendations.clone()))
        .await?;

    tracing::info!(
        user = %user,
        categories = recommendations.len(),
        "Recommendations computed and cached"
    );

    Ok(QuizOutcome {
        recommendations,
        engine_unavailable: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryCache;
    use crate::models::RecipeSummary;
    use crate::services::providers::MockRecommendationEngine;

    fn sample_set() -> RecommendationSet {
        let mut set = RecommendationSet::new();
        set.insert(
            "dinner".to_string(),
            vec![RecipeSummary {
                id: "r-7".to_string(),
                name: "Green Curry".to_string(),
                cuisine: Some("thai".to_string()),
                prep_time_minutes: Some(45),
                calories: Some(700),
                description: None,
            }],
        );
        set
    }

    #[tokio::test]
    async fn test_cache_miss_invokes_engine_once_and_stores() {
        let cache = MemoryCache::new();
        let mut engine = MockRecommendationEngine::new();
        engine.expect_is_available().times(1).returning(|| true);
        engine
            .expect_recommend()
            .times(1)
            .returning(|_| Ok(sample_set()));
        engine.expect_name().return_const("mock");

        let outcome = quiz_results(&cache, &engine, "alice", &PreferenceProfile::new())
            .await
            .unwrap();

        assert_eq!(outcome.recommendations, sample_set());
        assert!(!outcome.engine_unavailable);

        let stored = cache.lookup("alice").await.unwrap().unwrap();
        assert_eq!(stored.data, sample_set());
    }

    #[tokio::test]
    async fn test_cache_hit_skips_engine() {
        let cache = MemoryCache::new();
        cache
            .store(CachedRecommendationSet::new("alice", sample_set()))
            .await
            .unwrap();

        let mut engine = MockRecommendationEngine::new();
        engine.expect_is_available().never();
        engine.expect_recommend().never();

        let outcome = quiz_results(&cache, &engine, "alice", &PreferenceProfile::new())
            .await
            .unwrap();

        assert_eq!(outcome.recommendations, sample_set());
    }

    #[tokio::test]
    async fn test_unavailable_engine_degrades_and_caches_nothing() {
        let cache = MemoryCache::new();
        let mut engine = MockRecommendationEngine::new();
        engine.expect_is_available().times(1).returning(|| false);
        engine.expect_recommend().never();
        engine.expect_name().return_const("mock");

        let outcome = quiz_results(&cache, &engine, "alice", &PreferenceProfile::new())
            .await
            .unwrap();

        assert!(outcome.recommendations.is_empty());
        assert!(outcome.engine_unavailable);
        assert_eq!(cache.lookup("alice").await.unwrap(), None);
    }
}
