use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use workout_tracker::shell::config::Config;
use workout_tracker::shell::http::router;
use workout_tracker::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config).await?;
    let app = router(state, config.allowed_origin.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Workout tracker API: http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
