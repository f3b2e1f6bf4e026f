// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod analyze;
pub mod api;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod transactions;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{analyze, analyze_text, AnalysisInput, AnalysisResult, Label, TacticCatalog};
pub use crate::api::{router, AppState};
pub use crate::config::AppConfig;
pub use crate::error::ApiError;

use axum::Router;

/// Full application router for `cfg`: API routes plus `/metrics` when enabled.
pub fn app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let state = AppState::from_config(cfg)?;

    // recorder first, so series recorded while building the router are kept
    let metrics = if cfg.metrics_enabled {
        Some(telemetry::install_metrics()?)
    } else {
        None
    };

    let router = api::router(state);
    Ok(match metrics {
        Some(handle) => router.merge(telemetry::metrics_router(handle)),
        None => router,
    })
}
