//! Shared fixtures for the tracker integration tests.
//!
//! Provides a canned [`PriceSource`] and a scratch directory holding the card
//! list and both output documents.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use tcg_price_tracker::models::PricePoint;
use tcg_price_tracker::{PriceSource, PriceTracker, Result, TrackerError};

/// What the fake API answers for one product id.
#[allow(dead_code)]
pub enum Reply {
    Points(Vec<PricePoint>),
    Unavailable,
    Garbage,
}

/// In-memory price source. Unknown product ids answer with an API error.
#[derive(Default)]
pub struct FakeSource {
    replies: HashMap<String, Reply>,
    calls: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, pid: &str, reply: Reply) -> Self {
        self.replies.insert(pid.to_string(), reply);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl PriceSource for FakeSource {
    fn price_points(&self, pid: &str) -> Result<Vec<PricePoint>> {
        self.calls.borrow_mut().push(pid.to_string());
        match self.replies.get(pid) {
            Some(Reply::Points(points)) => Ok(points.clone()),
            Some(Reply::Garbage) => Err(serde_json::from_str::<Vec<PricePoint>>("<html>")
                .unwrap_err()
                .into()),
            Some(Reply::Unavailable) | None => {
                Err(TrackerError::Api(format!("product {pid} returned 503")))
            }
        }
    }
}

impl PriceSource for &FakeSource {
    fn price_points(&self, pid: &str) -> Result<Vec<PricePoint>> {
        (**self).price_points(pid)
    }
}

#[allow(dead_code)]
pub fn point(printing: &str, price: f64) -> PricePoint {
    PricePoint {
        printing_type: Some(printing.to_string()),
        market_price: Some(price),
    }
}

/// Normal and Foil entries, the Foil one priced at `price`.
#[allow(dead_code)]
pub fn foil(price: f64) -> Reply {
    Reply::Points(vec![point("Normal", price / 4.0), point("Foil", price)])
}

/// Scratch directory with `cards.txt`, `data.json` and `historical.json`.
///
/// Keep the value alive for the duration of the test.
pub struct Workspace {
    pub dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new(cards: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cards.txt"), cards).unwrap();
        Self { dir }
    }

    pub fn cards(&self) -> PathBuf {
        self.dir.path().join("cards.txt")
    }

    pub fn data(&self) -> PathBuf {
        self.dir.path().join("data.json")
    }

    pub fn historical(&self) -> PathBuf {
        self.dir.path().join("historical.json")
    }

    pub fn write_historical(&self, value: serde_json::Value) {
        fs::write(
            self.historical(),
            serde_json::to_string_pretty(&value).unwrap(),
        )
        .unwrap();
    }

    pub fn tracker<S: PriceSource>(&self, source: S) -> PriceTracker<S> {
        PriceTracker::builder()
            .cards_file(self.cards())
            .data_file(self.data())
            .historical_file(self.historical())
            .build_with_source(source)
    }

    pub fn read_data(&self) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(self.data()).unwrap()).unwrap()
    }

    pub fn read_historical(&self) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(self.historical()).unwrap()).unwrap()
    }
}

/// 2025-06-01 17:30 UTC, i.e. 2025-06-02 03:00 in Adelaide.
#[allow(dead_code)]
pub fn evening_run() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 17, 30, 0).unwrap()
}
