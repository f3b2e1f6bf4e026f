// src/transactions/store.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::{generate_default, Transaction};

pub const DEFAULT_DATA_PATH: &str = "data/transactions.json";

#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync {
    /// Current fixture; seeds a fresh ledger when none exists yet.
    async fn load(&self) -> Result<Vec<Transaction>>;
    /// Replace the fixture.
    async fn save(&self, txs: &[Transaction]) -> Result<()>;
}

/// JSON fixture on disk (pretty-printed, one array of transactions).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // serializes read-modify-write between /transactions and /seed
    io: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_file(&self, txs: &[Transaction]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("creating data dir {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(txs)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("writing fixture {}", self.path.display()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl TransactionStore for FileStore {
    async fn load(&self) -> Result<Vec<Transaction>> {
        let _guard = self.io.lock().await;

        let exists = tokio::fs::try_exists(&self.path)
            .await
            .with_context(|| format!("checking fixture {}", self.path.display()))?;
        if !exists {
            let fresh = generate_default();
            self.write_file(&fresh).await?;
            tracing::info!(path = %self.path.display(), count = fresh.len(), "seeded missing fixture");
            return Ok(fresh);
        }

        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("reading fixture {}", self.path.display()))?;
        let txs = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing fixture {}", self.path.display()))?;
        Ok(txs)
    }

    async fn save(&self, txs: &[Transaction]) -> Result<()> {
        let _guard = self.io.lock().await;
        self.write_file(txs).await
    }
}

// --- In-process store (tests, ephemeral deployments) ---
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<Option<Vec<Transaction>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Transaction>) -> Self {
        Self {
            items: Mutex::new(Some(items)),
        }
    }
}

#[async_trait::async_trait]
impl TransactionStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Transaction>> {
        let mut items = self.items.lock().await;
        Ok(items.get_or_insert_with(generate_default).clone())
    }

    async fn save(&self, txs: &[Transaction]) -> Result<()> {
        *self.items.lock().await = Some(txs.to_vec());
        Ok(())
    }
}
