// src/analyze/mod.rs
//! Message risk analysis: text → detected tactics → score → label →
//! rationale + recommendation.
//!
//! Everything here is a pure function of the input text and an immutable
//! [`TacticCatalog`]; no state survives a call, so the pipeline can be invoked
//! from any number of request handlers concurrently.

pub mod advice;
pub mod catalog;
pub mod detect;
pub mod scoring;

use serde::{Deserialize, Serialize};

pub use crate::analyze::catalog::{Boost, Tactic, TacticCatalog};
pub use crate::analyze::detect::detect;
pub use crate::analyze::scoring::{label, score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Manipulative,
    Legitimate,
    Uncertain,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Manipulative => "manipulative",
            Label::Legitimate => "legitimate",
            Label::Uncertain => "uncertain",
        }
    }
}

/// Delivery channel of the analyzed message. Accepted for forward
/// compatibility; it does not change detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Sms,
    Email,
    Whatsapp,
}

fn default_locale() -> String {
    "es".to_string()
}

/// Request body of `POST /analyze-message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub message: String,
    /// Inert for now, like `channel`.
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub channel: Channel,
}

impl AnalysisInput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locale: default_locale(),
            channel: Channel::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// In [0.0, 1.0], rounded to two decimals.
    pub risk_score: f64,
    pub label: Label,
    /// Catalog order, no duplicates.
    pub tactics_detected: Vec<String>,
    pub rationale: String,
    pub recommendation: String,
}

/// Run the full pipeline for one request.
pub fn analyze(catalog: &TacticCatalog, input: &AnalysisInput) -> AnalysisResult {
    analyze_text(catalog, &input.message)
}

/// Total over all strings: empty or non-ASCII input is scored, never rejected.
pub fn analyze_text(catalog: &TacticCatalog, message: &str) -> AnalysisResult {
    let lowered = message.to_lowercase();
    let tactics = detect::detect_lowered(catalog, &lowered);
    let risk = scoring::score_lowered(catalog, &lowered, tactics.len());
    let label = scoring::label(risk, tactics.len());

    AnalysisResult {
        risk_score: scoring::round2(risk),
        label,
        tactics_detected: tactics,
        rationale: advice::RATIONALE.to_string(),
        recommendation: advice::recommend(label).to_string(),
    }
}
