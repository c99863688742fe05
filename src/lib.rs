//! Daily TCGplayer price tracker.
//!
//! Reads a card list of `product_id, owner, name` lines, fetches each
//! product's price points from the TCGplayer marketplace API, and writes two
//! JSON documents: a current-state snapshot grouped by owner, and an
//! append-only history with at most one price per product per day.
//!
//! # Quick start
//!
//! ```no_run
//! use tcg_price_tracker::PriceTracker;
//!
//! let tracker = PriceTracker::builder()
//!     .cards_file("cards.txt")
//!     .build()
//!     .unwrap();
//! let summary = tracker.run().unwrap();
//! println!("{} cards priced", summary.priced);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod history;
pub mod input;
pub mod models;
pub mod snapshot;

pub use client::{PriceClient, PriceSource};
pub use error::{Result, TrackerError};
pub use history::PriceHistory;
pub use snapshot::CurrentState;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use crate::models::CardEntry;

// ---------------------------------------------------------------------------
// PriceTrackerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PriceTracker`].
///
/// Every setting defaults to the values in [`config`]: `cards.txt`,
/// `data.json` and `historical.json` in the working directory, the public
/// TCGplayer endpoint, and a 10 second request timeout.
pub struct PriceTrackerBuilder {
    cards_file: PathBuf,
    data_file: PathBuf,
    historical_file: PathBuf,
    base_url: String,
    timeout: Duration,
}

impl Default for PriceTrackerBuilder {
    fn default() -> Self {
        Self {
            cards_file: PathBuf::from(config::DEFAULT_CARDS_FILE),
            data_file: PathBuf::from(config::DEFAULT_DATA_FILE),
            historical_file: PathBuf::from(config::DEFAULT_HISTORICAL_FILE),
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl PriceTrackerBuilder {
    /// Card list to read.
    pub fn cards_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cards_file = path.as_ref().to_path_buf();
        self
    }

    /// Current-state document, overwritten on every run.
    pub fn data_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_file = path.as_ref().to_path_buf();
        self
    }

    /// History document, read at startup and rewritten at the end.
    pub fn historical_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.historical_file = path.as_ref().to_path_buf();
        self
    }

    /// Scheme and host of the price-points API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Per-request timeout. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a tracker backed by the live HTTP API.
    pub fn build(self) -> Result<PriceTracker<PriceClient>> {
        if self.base_url.trim().is_empty() {
            return Err(TrackerError::InvalidArgument("base URL is empty".into()));
        }
        if self.timeout.is_zero() {
            return Err(TrackerError::InvalidArgument(
                "request timeout must be non-zero".into(),
            ));
        }
        let source = PriceClient::new(self.base_url.clone(), self.timeout)?;
        Ok(self.build_with_source(source))
    }

    /// Build a tracker that takes its prices from `source`.
    ///
    /// `base_url` and `timeout` are ignored.
    pub fn build_with_source<S: PriceSource>(self, source: S) -> PriceTracker<S> {
        PriceTracker {
            source,
            cards_file: self.cards_file,
            data_file: self.data_file,
            historical_file: self.historical_file,
        }
    }
}

// ---------------------------------------------------------------------------
// RunSummary
// ---------------------------------------------------------------------------

/// Per-run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the card list.
    pub lines: usize,
    /// Lines whose price points were fetched.
    pub fetched: usize,
    /// Fetched lines that yielded a price.
    pub priced: usize,
    pub malformed: usize,
    /// Lines skipped on an API or network error.
    pub failed: usize,
    /// New history samples.
    pub samples_added: usize,
}

// ---------------------------------------------------------------------------
// PriceTracker
// ---------------------------------------------------------------------------

/// One batch run over the card list.
///
/// Created via [`PriceTracker::builder()`].
pub struct PriceTracker<S = PriceClient> {
    source: S,
    cards_file: PathBuf,
    data_file: PathBuf,
    historical_file: PathBuf,
}

impl PriceTracker<PriceClient> {
    pub fn builder() -> PriceTrackerBuilder {
        PriceTrackerBuilder::default()
    }
}

impl<S: PriceSource> PriceTracker<S> {
    /// Run against the current instant.
    pub fn run(&self) -> Result<RunSummary> {
        self.run_at(Utc::now())
    }

    /// Process every card-list line and write both documents.
    ///
    /// `now` decides the history date. Malformed lines and API failures are
    /// logged and skipped. Any other error while processing lines aborts the
    /// run before either document is written.
    pub fn run_at(&self, now: DateTime<Utc>) -> Result<RunSummary> {
        debug!("{}", self);
        let today = history::report_date(now);
        info!("Current UTC time: {}", now);
        info!("Adelaide time: {}", history::report_time(now));
        info!("Using date: {}", today);

        let mut history = PriceHistory::load(&self.historical_file)?;
        let lines = input::read_lines(&self.cards_file)?;

        let mut state = CurrentState::new();
        let mut summary = RunSummary {
            lines: lines.len(),
            ..RunSummary::default()
        };

        for (idx, line) in lines.iter().enumerate() {
            let line_num = idx + 1;
            match self.process_line(line_num, line, &today, &mut state, &mut history, &mut summary)
            {
                Ok(()) => {}
                Err(TrackerError::MalformedLine { content, .. }) => {
                    warn!("Line {}: skipping malformed line: {}", line_num, content);
                    summary.malformed += 1;
                }
                Err(e) if e.is_recoverable() => {
                    error!("Line {}: API error - {}", line_num, e);
                    summary.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        state.save(&self.data_file)?;
        history.save(&self.historical_file)?;

        info!(
            lines = summary.lines,
            owners = state.owners().count(),
            products = history.products().count(),
            priced = summary.priced,
            malformed = summary.malformed,
            failed = summary.failed,
            samples_added = summary.samples_added,
            "Updated {} and {}",
            self.data_file.display(),
            self.historical_file.display()
        );

        Ok(summary)
    }

    fn process_line(
        &self,
        line_num: usize,
        line: &str,
        today: &str,
        state: &mut CurrentState,
        history: &mut PriceHistory,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let record = input::parse_line(line_num, line)?;
        let points = self.source.price_points(&record.product_id)?;
        summary.fetched += 1;

        let price = extract::extract_price(&points, &record.product_id);
        let entry = CardEntry::new(&record, price);
        info!("Line {}: {} - {:?}", line_num, record.owner, entry);
        state.push(&record.owner, entry);

        if let Some(price) = price {
            summary.priced += 1;
            if history.record(&record.product_id, price, today) {
                summary.samples_added += 1;
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl<S> fmt::Display for PriceTracker<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PriceTracker(cards={}, data={}, historical={})",
            self.cards_file.display(),
            self.data_file.display(),
            self.historical_file.display()
        )
    }
}
