use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;

use diet_assistant_backend::config::AppConfig;
use diet_assistant_backend::routes;
use diet_assistant_backend::services::gemini::GeminiClient;
use diet_assistant_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;

    let gemini = GeminiClient::new(
        config.api_key.clone(),
        config.model.clone(),
        config.timeout_ms,
    )
    .context("failed to build Gemini client")?;

    let state = Arc::new(AppState::new(Arc::new(gemini)));

    // Wide-open CORS is part of the contract for the chat UI.
    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(
        model = %config.model,
        "diet assistant running at http://localhost:{}",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
