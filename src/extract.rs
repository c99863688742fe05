use crate::config;
use crate::models::PricePoint;

/// Printing type whose market price is tracked for `pid`.
pub fn printing_type_for(pid: &str) -> &'static str {
    if pid == config::NORMAL_PRINTING_PID {
        config::NORMAL_PRINTING
    } else {
        config::FOIL_PRINTING
    }
}

/// Market price of the first entry with the tracked printing type.
///
/// Returns `None` when no entry matches, or when the matching entry carries
/// no market price. Later entries of the same type are never consulted.
pub fn extract_price(points: &[PricePoint], pid: &str) -> Option<f64> {
    let wanted = printing_type_for(pid);
    points
        .iter()
        .find(|p| p.printing_type.as_deref() == Some(wanted))
        .and_then(|p| p.market_price)
}
