//! Append-only daily price history: product id -> dated samples.
//!
//! The history file is read at startup, extended with at most one sample per
//! product per report day, and rewritten in full at the end of a run. Samples
//! are never pruned or replaced.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config;
use crate::error::Result;
use crate::models::HistoricalSample;

/// Wall-clock time at the report offset (UTC+9:30) for `now`.
pub fn report_time(now: DateTime<Utc>) -> NaiveDateTime {
    now.naive_utc() + Duration::seconds(i64::from(config::REPORT_OFFSET_SECS))
}

/// Calendar date (`YYYY-MM-DD`) history samples taken at `now` are filed under.
pub fn report_date(now: DateTime<Utc>) -> String {
    report_time(now).format("%Y-%m-%d").to_string()
}

/// History document, kept as parsed JSON so a rewrite leaves existing
/// product order, number formatting and any extra sample fields untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceHistory {
    products: Map<String, Value>,
}

impl PriceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the history at `path`, or an empty one if the file does not exist.
    ///
    /// A file that exists but is not an object of sample lists is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e.into()),
        };

        let products: Map<String, Value> = serde_json::from_str(&contents)?;
        for samples in products.values() {
            Vec::<HistoricalSample>::deserialize(samples)?;
        }
        Ok(Self { products })
    }

    /// Add a sample for `pid` unless one is already dated `date`.
    ///
    /// Returns `true` if the sample was appended.
    pub fn record(&mut self, pid: &str, price: f64, date: &str) -> bool {
        let entry = self
            .products
            .entry(pid)
            .or_insert_with(|| Value::Array(Vec::new()));
        // load() only admits arrays
        let Some(samples) = entry.as_array_mut() else {
            return false;
        };
        if samples
            .iter()
            .any(|s| s.get("date").and_then(Value::as_str) == Some(date))
        {
            return false;
        }
        samples.push(json!({ "price": price, "date": date }));
        true
    }

    pub fn samples(&self, pid: &str) -> Vec<HistoricalSample> {
        self.products
            .get(pid)
            .and_then(|v| Vec::<HistoricalSample>::deserialize(v).ok())
            .unwrap_or_default()
    }

    /// Product ids in file order, new products last.
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Rewrite `path` with the full indented JSON document.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
