use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use plateful_api::{
    config::Config,
    db::{create_redis_client, RedisCache},
    routes::{create_router, AppState},
    services::{images::ImageAssigner, providers::RecipeApiEngine},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let redis_client = create_redis_client(&config.redis_url)?;
    let cache = Arc::new(RedisCache::new(redis_client));
    let engine = Arc::new(RecipeApiEngine::new(
        config.engine_url.clone(),
        config.engine_api_key.clone(),
    ));
    let images = Arc::new(ImageAssigner::from_dir(
        &config.images_dir,
        config.fallback_image.clone(),
    ));

    let state = AppState::new(cache, engine, images);
    let app = create_router(state).layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
