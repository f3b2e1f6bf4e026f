//! Tactic catalog: named manipulation tactics with their trigger phrases, plus
//! the strong-signal boost keyword groups.
//!
//! The built-in catalog lives in `config/tactics.toml` and is embedded into the
//! binary; it is parsed once on first use. An alternative catalog can be loaded
//! from a TOML or JSON file with the same shape:
//!
//! ```toml
//! [[tactics]]
//! name = "urgency"
//! triggers = ["urgente", "hoy"]
//!
//! [[boosts]]
//! name = "account_lock"
//! keywords = ["suspende", "bloqueo"]
//! ```
//!
//! Declaration order of `tactics` is significant: it is the evaluation order
//! and the order in which detected tactics are reported.

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Tactic that also fires on any explicit `http://` / `https://` link.
pub const SUSPICIOUS_URL: &str = "suspicious_url";

static BUILTIN: Lazy<TacticCatalog> = Lazy::new(|| {
    TacticCatalog::from_toml_str(include_str!("../../config/tactics.toml"))
        .expect("valid built-in tactic catalog")
});

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tactic {
    pub name: String,
    pub triggers: Vec<String>,
}

/// Keyword group that adds a fixed amount to the risk score when any of its
/// keywords occurs, whether or not a tactic was detected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Boost {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TacticCatalog {
    tactics: Vec<Tactic>,
    boosts: Vec<Boost>,
}

impl TacticCatalog {
    /// Shared reference catalog (Spanish triggers).
    pub fn builtin() -> &'static TacticCatalog {
        &BUILTIN
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let raw: TacticCatalog = toml::from_str(s).context("parsing tactic catalog TOML")?;
        raw.validated()
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: TacticCatalog =
            serde_json::from_str(s).context("parsing tactic catalog JSON")?;
        raw.validated()
    }

    /// Load from a file; `.json` is parsed as JSON, anything else as TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading tactic catalog from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let parsed = if ext == "json" {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        parsed.with_context(|| format!("invalid tactic catalog {}", path.display()))
    }

    pub fn tactics(&self) -> &[Tactic] {
        &self.tactics
    }

    pub fn boosts(&self) -> &[Boost] {
        &self.boosts
    }

    /// Tactic names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.tactics.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tactics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tactics.is_empty()
    }

    /// Enforce the catalog invariants and lowercase every phrase so matching
    /// can run against the lowercased message directly.
    fn validated(mut self) -> Result<Self> {
        if self.tactics.is_empty() {
            bail!("tactic catalog declares no tactics");
        }

        let mut seen = HashSet::new();
        for t in &mut self.tactics {
            t.name = t.name.trim().to_string();
            if t.name.is_empty() {
                bail!("tactic with empty name");
            }
            if !seen.insert(t.name.clone()) {
                bail!("duplicate tactic `{}`", t.name);
            }
            lowercase_phrases(&mut t.triggers, &t.name)?;
        }

        for b in &mut self.boosts {
            lowercase_phrases(&mut b.keywords, &b.name)?;
        }

        Ok(self)
    }
}

fn lowercase_phrases(phrases: &mut [String], owner: &str) -> Result<()> {
    for p in phrases.iter_mut() {
        // an empty needle would match every message
        if p.trim().is_empty() {
            bail!("`{owner}` has an empty phrase");
        }
        *p = p.to_lowercase();
    }
    Ok(())
}
