use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::HashMap;

use crate::{
    error::AppResult,
    middleware::UserId,
    models::{PreferenceProfile, RecommendationSet},
    services::recommendations,
};

use super::AppState;

/// Warning surfaced when the recommendation engine cannot be reached
const ENGINE_UNAVAILABLE_WARNING: &str = "Cannot reach recommendation engine";

/// The rendered quiz result
#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub recommendations: RecommendationSet,
    /// Recipe id mapped to a display image; reassigned on every render
    pub images: HashMap<String, String>,
    /// Echo of all seven stored answers
    pub answers: PreferenceProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Handler for the quiz results endpoint
pub async fn results(
    State(state): State<AppState>,
    UserId(user): UserId,
) -> AppResult<Json<ResultsResponse>> {
    let profile = state
        .sessions
        .read()
        .await
        .get(&user)
        .map(|wizard| wizard.profile.clone())
        .unwrap_or_default();

    let outcome = recommendations::quiz_results(
        state.cache.as_ref(),
        state.engine.as_ref(),
        &user,
        &profile,
    )
    .await?;

    let recipe_ids: Vec<String> = outcome
        .recommendations
        .values()
        .flatten()
        .map(|recipe| recipe.id.clone())
        .collect();
    let images = state.images.assign(&recipe_ids);

    let warning = outcome
        .engine_unavailable
        .then(|| ENGINE_UNAVAILABLE_WARNING.to_string());

    Ok(Json(ResultsResponse {
        recommendations: outcome.recommendations,
        images,
        answers: profile,
        warning,
    }))
}
