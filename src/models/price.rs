use serde::Deserialize;

// ---------------------------------------------------------------------------
// PricePoint: One printing variant returned by the price-points endpoint
// ---------------------------------------------------------------------------

/// Only the two fields the tracker reads are modelled; everything else in the
/// response object is ignored. Missing keys deserialize as `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    #[serde(default)]
    pub printing_type: Option<String>,
    #[serde(default)]
    pub market_price: Option<f64>,
}

// ---------------------------------------------------------------------------
// HistoricalSample: One dated price in a product's history
// ---------------------------------------------------------------------------

/// Extra keys in a stored sample are ignored here and kept on disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoricalSample {
    pub price: f64,
    pub date: String,
}
