use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Record kind under which quiz results are cached
pub const QUIZ_RESULT_KIND: &str = "quiz_result";

/// Summary of a recipe as returned by the recommendation engine
///
/// Opaque to this service beyond the id used for image assignment; the
/// descriptive fields are passed through to the client unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub prep_time_minutes: Option<u32>,
    #[serde(default)]
    pub calories: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Meal category mapped to an ordered list of recipes
///
/// BTreeMap keeps category iteration deterministic, so the flattened recipe
/// order used for image assignment is stable for a given set.
pub type RecommendationSet = BTreeMap<String, Vec<RecipeSummary>>;

/// A user's memoized quiz result
///
/// At most one live record exists per user; storing a new record replaces the
/// prior one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CachedRecommendationSet {
    pub user: String,
    pub kind: String,
    pub data: RecommendationSet,
    pub cached_at: DateTime<Utc>,
}

impl CachedRecommendationSet {
    pub fn new(user: impl Into<String>, data: RecommendationSet) -> Self {
        Self {
            user: user.into(),
            kind: QUIZ_RESULT_KIND.to_string(),
            data,
            cached_at: Utc::now(),
        }
    }
}
