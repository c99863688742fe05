use std::time::Duration;

pub const API_BASE: &str = "https://mpapi.tcgplayer.com";

pub const DEFAULT_CARDS_FILE: &str = "cards.txt";
pub const DEFAULT_DATA_FILE: &str = "data.json";
pub const DEFAULT_HISTORICAL_FILE: &str = "historical.json";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Printing type tracked for every product unless overridden below.
pub const FOIL_PRINTING: &str = "Foil";
pub const NORMAL_PRINTING: &str = "Normal";

/// Product priced on its non-foil printing.
pub const NORMAL_PRINTING_PID: &str = "616824";

/// Offset from UTC (Adelaide, UTC+9:30) used to date history samples.
pub const REPORT_OFFSET_SECS: i32 = 9 * 3600 + 30 * 60;

/// Price-points endpoint for a single product.
pub fn pricepoints_url(base: &str, pid: &str) -> String {
    format!("{}/v2/product/{}/pricepoints", base.trim_end_matches('/'), pid)
}
