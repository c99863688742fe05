use serde::Serialize;

// ---------------------------------------------------------------------------
// CardRecord: One tracked card from the input list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub product_id: String,
    pub owner: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// CardEntry: Per-owner row of the current-state document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardEntry {
    pub pid: String,
    pub name: String,
    pub foil_price: Option<f64>,
}

impl CardEntry {
    pub fn new(record: &CardRecord, foil_price: Option<f64>) -> Self {
        Self {
            pid: record.product_id.clone(),
            name: record.name.clone(),
            foil_price,
        }
    }
}
