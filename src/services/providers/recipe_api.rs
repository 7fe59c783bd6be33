/// Recipe recommender service client
///
/// Talks to the external recommender over HTTP: a health probe for
/// availability and a single recommendation query taking the full profile.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{PreferenceProfile, RecommendationSet},
    services::providers::RecommendationEngine,
};

#[derive(Clone)]
pub struct RecipeApiEngine {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
}

impl RecipeApiEngine {
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            api_key,
        }
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header("X-Api-Key", key),
            None => builder,
        }
    }
}

#[async_trait::async_trait]
impl RecommendationEngine for RecipeApiEngine {
    async fn is_available(&self) -> bool {
        let url = format!("{}/health", self.api_url);
        match self.request(self.http_client.get(&url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(error = %e, engine = self.name(), "Engine health check failed");
                false
            }
        }
    }

    async fn recommend(&self, profile: &PreferenceProfile) -> AppResult<RecommendationSet> {
        let url = format!("{}/recommendations", self.api_url);
        let response = self
            .request(self.http_client.post(&url))
            .json(profile)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Engine returned status {}: {}",
                status, body
            )));
        }

        let recommendations: RecommendationSet = response.json().await?;

        tracing::info!(
            categories = recommendations.len(),
            engine = self.name(),
            "Recommendations fetched"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "recipe_api"
    }
}
