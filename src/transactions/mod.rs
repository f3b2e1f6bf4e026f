// src/transactions/mod.rs
//! Synthetic personal-finance transactions for the dashboard demo.
//!
//! Independent from the message analyzer: nothing here is shared with
//! `crate::analyze`.

pub mod store;

use chrono::{Duration, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use store::{FileStore, MemoryStore, TransactionStore};

pub const DEFAULT_WINDOW_DAYS: i64 = 60;
const VARIABLE_EXPENSES: usize = 60;
const SUBSCRIPTIONS: [&str; 3] = ["Netflix", "Spotify", "iCloud"];
const PAYROLL: &str = "Company Payroll";
const ANOMALY_MERCHANT: &str = "XG INVEST LTD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Credit,
    Debit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Transport,
    Subscriptions,
    #[serde(rename = "Eating Out")]
    EatingOut,
    Utilities,
    Salary,
    Travel,
    Shopping,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Groceries,
        Category::Transport,
        Category::Subscriptions,
        Category::EatingOut,
        Category::Utilities,
        Category::Salary,
        Category::Travel,
        Category::Shopping,
    ];

    pub fn merchants(&self) -> &'static [&'static str] {
        match self {
            Category::Groceries => &["FreshMart", "GreenGrocer", "Daily Foods"],
            Category::Transport => &["City Taxi", "MetroPass", "RideNow"],
            Category::Subscriptions => &SUBSCRIPTIONS,
            Category::EatingOut => &["Pizza Plaza", "Sushi House", "Burger Box"],
            Category::Utilities => &["WaterCo", "PowerGrid", "NetFiber"],
            Category::Salary => &[PAYROLL],
            Category::Travel => &["AirFly", "StayInn", "CityTours"],
            Category::Shopping => &["MegaStore", "TechHub", ANOMALY_MERCHANT],
        }
    }

    /// Travel and shopping debits are drawn from a larger range.
    fn amount_range(&self) -> (f64, f64) {
        match self {
            Category::Travel | Category::Shopping => (20.0, 250.0),
            _ => (3.0, 80.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub merchant: String,
    pub category: Category,
    /// Negative for debits.
    pub amount: f64,
    #[serde(rename = "type")]
    pub tx_type: TxType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Build a fresh synthetic ledger ending at `today`, newest first.
///
/// Shape: two monthly salary credits, one debit per subscription, 60 random
/// variable debits over the non-salary categories and one large anomaly debit
/// from an unfamiliar merchant.
pub fn generate_transactions<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    n_days: i64,
) -> Vec<Transaction> {
    let n_days = n_days.max(0);
    let mut txs = Vec::with_capacity(2 + SUBSCRIPTIONS.len() + VARIABLE_EXPENSES + 1);

    for m in 0..2 {
        let back = 30 * m + rng.random_range(0..=3);
        txs.push(Transaction {
            id: format!("tx-salary-{m}"),
            date: today - Duration::days(back),
            merchant: PAYROLL.to_string(),
            category: Category::Salary,
            amount: (1800 + rng.random_range(-100..=200)) as f64,
            tx_type: TxType::Credit,
            note: None,
        });
    }

    for name in SUBSCRIPTIONS {
        txs.push(Transaction {
            id: format!("tx-sub-{name}"),
            date: today - Duration::days(rng.random_range(0..=n_days)),
            merchant: name.to_string(),
            category: Category::Subscriptions,
            amount: -((8 + rng.random_range(0..=10)) as f64),
            tx_type: TxType::Debit,
            note: None,
        });
    }

    let variable: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|c| *c != Category::Salary)
        .collect();
    for i in 0..VARIABLE_EXPENSES {
        // both tables are non-empty constants
        let cat = *variable.choose(rng).unwrap_or(&Category::Groceries);
        let merchant = cat.merchants().choose(rng).copied().unwrap_or(PAYROLL);
        let (lo, hi) = cat.amount_range();
        txs.push(Transaction {
            id: format!("tx-{i}"),
            date: today - Duration::days(rng.random_range(0..=n_days)),
            merchant: merchant.to_string(),
            category: cat,
            amount: -round_cents(rng.random_range(lo..=hi)),
            tx_type: TxType::Debit,
            note: None,
        });
    }

    txs.push(Transaction {
        id: "tx-anomaly-1".to_string(),
        date: today - Duration::days(rng.random_range(0..=20)),
        merchant: ANOMALY_MERCHANT.to_string(),
        category: Category::Shopping,
        amount: -420.55,
        tx_type: TxType::Debit,
        note: Some("Nuevo/alto".to_string()),
    });

    // stable: same-day entries keep insertion order
    txs.sort_by(|a, b| b.date.cmp(&a.date));
    txs
}

/// Ledger for the current local date with a thread-local RNG.
pub fn generate_default() -> Vec<Transaction> {
    let today = chrono::Local::now().date_naive();
    generate_transactions(&mut rand::rng(), today, DEFAULT_WINDOW_DAYS)
}

fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    #[test]
    fn ledger_has_expected_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let txs = generate_transactions(&mut rng, today(), DEFAULT_WINDOW_DAYS);
        assert_eq!(txs.len(), 66);

        let salaries: Vec<_> = txs.iter().filter(|t| t.category == Category::Salary).collect();
        assert_eq!(salaries.len(), 2);
        assert!(salaries
            .iter()
            .all(|t| t.tx_type == TxType::Credit && (1700.0..=2000.0).contains(&t.amount)));

        let anomaly = txs.iter().find(|t| t.id == "tx-anomaly-1").unwrap();
        assert_eq!(anomaly.amount, -420.55);
        assert_eq!(anomaly.note.as_deref(), Some("Nuevo/alto"));
        assert!(today() - anomaly.date <= Duration::days(20));
    }

    #[test]
    fn debits_are_negative_and_within_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let txs = generate_transactions(&mut rng, today(), DEFAULT_WINDOW_DAYS);
        let oldest = today() - Duration::days(DEFAULT_WINDOW_DAYS);
        for t in txs.iter().filter(|t| t.tx_type == TxType::Debit) {
            assert!(t.amount < 0.0, "{t:?}");
            assert!(t.date >= oldest && t.date <= today(), "{t:?}");
            assert!(t.category.merchants().contains(&t.merchant.as_str()));
            // at most two decimals
            assert_eq!(round_cents(t.amount), t.amount);
        }
    }

    #[test]
    fn sorted_newest_first_and_deterministic_per_seed() {
        let a = generate_transactions(&mut StdRng::seed_from_u64(1), today(), 60);
        let b = generate_transactions(&mut StdRng::seed_from_u64(1), today(), 60);
        assert_eq!(a, b);
        assert!(a.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let mut rng = StdRng::seed_from_u64(3);
        let txs = generate_transactions(&mut rng, today(), 60);
        let v = serde_json::to_value(&txs).unwrap();
        let anomaly = v
            .as_array()
            .unwrap()
            .iter()
            .find(|t| t["id"] == "tx-anomaly-1")
            .unwrap();
        assert_eq!(anomaly["type"], "debit");
        assert_eq!(anomaly["category"], "Shopping");
        assert!(anomaly["date"].as_str().unwrap().len() == 10);

        let plain = v.as_array().unwrap().iter().find(|t| t["id"] == "tx-0").unwrap();
        assert!(plain.get("note").is_none());
    }
}
