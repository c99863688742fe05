//! Price-points client for the TCGplayer marketplace API.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config;
use crate::error::{Result, TrackerError};
use crate::models::PricePoint;

/// Anything that can return the price points of a product.
///
/// [`PriceClient`] talks to the live API; tests plug in canned responses.
pub trait PriceSource {
    fn price_points(&self, pid: &str) -> Result<Vec<PricePoint>>;
}

/// Blocking HTTP client for `GET /v2/product/{pid}/pricepoints`.
pub struct PriceClient {
    base_url: String,
    client: Client,
}

impl PriceClient {
    /// Create a client against `base_url` with a per-request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

impl PriceSource for PriceClient {
    /// Fetch the price points of `pid`.
    ///
    /// Transport failures and non-success statuses surface as recoverable
    /// errors. A body that does not decode as a list of price points is a
    /// fatal [`TrackerError::Json`].
    fn price_points(&self, pid: &str) -> Result<Vec<PricePoint>> {
        let url = config::pricepoints_url(&self.base_url, pid);
        debug!("GET {}", url);

        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TrackerError::Api(format!("{} returned {}", url, status)));
        }

        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
