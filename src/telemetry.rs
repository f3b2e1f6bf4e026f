// src/telemetry.rs
//! Tracing setup, anonymized analysis logs and the Prometheus exporter.

use anyhow::Context;
use axum::{routing::get, Router};
use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::analyze::{AnalysisInput, AnalysisResult, Label};

/// Install the global subscriber. Filter from `RUST_LOG`, else
/// `fintrack_ai=info,warn`. A subscriber installed earlier (e.g. by the
/// deployment runtime) is left in place.
pub fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fintrack_ai=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().compact()).try_init()
    };
    if installed.is_err() {
        tracing::debug!("global tracing subscriber already set");
    }
}

/// Short, stable id for a message: first 6 bytes of SHA-256, hex.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Per-request analysis log. Never logs raw text, only the hashed id.
pub fn log_analysis(input: &AnalysisInput, result: &AnalysisResult) {
    let id = anon_hash(&input.message);
    tracing::info!(
        target: "fintrack_ai::analyze",
        %id,
        chars = input.message.chars().count(),
        locale = %input.locale,
        channel = ?input.channel,
        label = result.label.as_str(),
        score = result.risk_score,
        tactics = ?result.tactics_detected,
        "message analyzed"
    );
}

static PROMETHEUS: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder once per process and return its handle.
/// Later calls reuse the same recorder.
pub fn install_metrics() -> anyhow::Result<PrometheusHandle> {
    PROMETHEUS
        .get_or_try_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .context("prometheus: install recorder")?;
            describe_series();
            Ok::<_, anyhow::Error>(handle)
        })
        .cloned()
}

fn describe_series() {
    describe_counter!(
        "message_analysis_total",
        "Messages analyzed, by resulting label."
    );
    describe_counter!("transactions_seed_total", "Fixture regenerations.");
    describe_counter!(
        "transactions_served_total",
        "Transactions returned by /transactions."
    );
    describe_gauge!("tactic_catalog_size", "Tactics in the active catalog.");
}

/// Router exposing `/metrics` in the Prometheus exposition format.
pub fn metrics_router(handle: PrometheusHandle) -> Router {
    Router::new().route(
        "/metrics",
        get(move || {
            let h = handle.clone();
            async move { h.render() }
        }),
    )
}

// Recording is a no-op until a recorder is installed.

pub fn record_analysis(label: Label) {
    counter!("message_analysis_total", "label" => label.as_str()).increment(1);
}

pub fn record_seed() {
    counter!("transactions_seed_total").increment(1);
}

pub fn record_served(count: usize) {
    counter!("transactions_served_total").increment(count as u64);
}

pub fn set_catalog_size(n: usize) {
    gauge!("tactic_catalog_size").set(n as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anon_hash_is_short_and_stable() {
        let a = anon_hash("Tu cuenta será suspendida");
        assert_eq!(a.len(), 12);
        assert_eq!(a, anon_hash("Tu cuenta será suspendida"));
        assert_ne!(a, anon_hash("Tu cuenta sera suspendida"));
        // sha256("") = e3b0c44298fc...
        assert_eq!(anon_hash(""), "e3b0c44298fc");
    }
}
