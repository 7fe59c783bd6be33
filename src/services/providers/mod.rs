/// Recommendation engine abstraction
///
/// The engine that turns a preference profile into a recipe set is an external
/// collaborator consumed through this trait, so data sources can be swapped
/// without touching the quiz or results flow.
use crate::{
    error::AppResult,
    models::{PreferenceProfile, RecommendationSet},
};

pub mod recipe_api;

pub use recipe_api::RecipeApiEngine;

/// Trait for recommendation engines
///
/// `recommend` is expensive and not necessarily idempotent; callers memoize
/// results per user and must check `is_available` first rather than treating
/// a failed call as a signal.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationEngine: Send + Sync {
    /// Whether the engine can currently serve recommendation queries
    async fn is_available(&self) -> bool;

    /// Computes a recommendation set for the given profile
    ///
    /// Returns meal categories mapped to ordered recipe lists.
    async fn recommend(&self, profile: &PreferenceProfile) -> AppResult<RecommendationSet>;

    /// Engine name for logging and debugging
    fn name(&self) -> &'static str;
}
