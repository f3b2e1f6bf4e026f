use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::analyze::{self, AnalysisInput, AnalysisResult, TacticCatalog};
use crate::config::AppConfig;
use crate::config::app::DEFAULT_MAX_MESSAGE_CHARS;
use crate::error::ApiError;
use crate::telemetry;
use crate::transactions::{self, FileStore, Transaction, TransactionStore};

pub const SERVICE_NAME: &str = "fintrack-ai-api";

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<TacticCatalog>,
    store: Arc<dyn TransactionStore>,
    max_message_chars: usize,
    dev_log: bool,
}

impl AppState {
    /// Built-in catalog and default limits over the given store.
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self {
            catalog: Arc::new(TacticCatalog::builtin().clone()),
            store,
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
            dev_log: false,
        }
    }

    /// Loads the catalog override (if configured) and opens the file store.
    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        let catalog = match &cfg.tactics_path {
            Some(path) => {
                let c = TacticCatalog::load_from(path)?;
                tracing::info!(path = %path.display(), tactics = c.len(), "loaded tactic catalog");
                c
            }
            None => TacticCatalog::builtin().clone(),
        };

        Ok(Self {
            catalog: Arc::new(catalog),
            store: Arc::new(FileStore::new(&cfg.data_path)),
            max_message_chars: cfg.max_message_chars,
            dev_log: cfg.dev_log,
        })
    }

    pub fn with_catalog(mut self, catalog: TacticCatalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    pub fn with_max_message_chars(mut self, n: usize) -> Self {
        self.max_message_chars = n;
        self
    }
}

pub fn router(state: AppState) -> Router {
    telemetry::set_catalog_size(state.catalog.len());

    Router::new()
        .route("/health", get(health))
        .route("/transactions", get(get_transactions))
        .route("/seed", post(reseed))
        .route("/analyze-message", post(analyze_message))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthOut {
    status: &'static str,
    service: &'static str,
}

async fn health() -> Json<HealthOut> {
    Json(HealthOut {
        status: "ok",
        service: SERVICE_NAME,
    })
}

#[derive(Serialize)]
struct TransactionsOut {
    count: usize,
    items: Vec<Transaction>,
}

async fn get_transactions(State(state): State<AppState>) -> Result<Json<TransactionsOut>, ApiError> {
    let items = state.store.load().await?;
    telemetry::record_served(items.len());
    Ok(Json(TransactionsOut {
        count: items.len(),
        items,
    }))
}

#[derive(Serialize)]
struct SeedOut {
    status: &'static str,
    count: usize,
}

async fn reseed(State(state): State<AppState>) -> Result<Json<SeedOut>, ApiError> {
    let txs = transactions::generate_default();
    state.store.save(&txs).await?;
    telemetry::record_seed();
    tracing::info!(count = txs.len(), "transactions reseeded");
    Ok(Json(SeedOut {
        status: "seeded",
        count: txs.len(),
    }))
}

async fn analyze_message(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisInput>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(input) = payload?;

    let chars = input.message.chars().count();
    if chars > state.max_message_chars {
        return Err(ApiError::Validation {
            message: format!(
                "message has {chars} characters; the limit is {}",
                state.max_message_chars
            ),
        });
    }

    let result = analyze::analyze(&state.catalog, &input);

    telemetry::record_analysis(result.label);
    if state.dev_log {
        telemetry::log_analysis(&input, &result);
    }
    Ok(Json(result))
}
