//! FinTrack AI API — Binary Entrypoint
//! Boots the Axum HTTP server: config from env, tracing, shared state, routes.

use fintrack_ai::{app, telemetry, AppConfig};
use shuttle_axum::ShuttleAxum;

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();
    telemetry::init_tracing(config.json_logs);

    tracing::info!(
        data_path = %config.data_path.display(),
        metrics = config.metrics_enabled,
        "starting fintrack-ai-api"
    );

    let router = app(&config)?;
    Ok(router.into())
}
