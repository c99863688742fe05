//! Live check against the public TCGplayer price-points endpoint.
//!
//! Run with:
//! ```sh
//! cargo test --test smoke_test -- --ignored --nocapture
//! ```

use tcg_price_tracker::{config, extract, PriceClient, PriceSource};

#[test]
#[ignore]
fn live_pricepoints_decode() {
    let client = PriceClient::new(config::API_BASE, config::DEFAULT_TIMEOUT).unwrap();

    for pid in ["610510", config::NORMAL_PRINTING_PID] {
        let points = client.price_points(pid).unwrap();
        eprintln!("{pid}: {} price points", points.len());
        assert!(!points.is_empty());
        eprintln!(
            "{pid}: {} price = {:?}",
            extract::printing_type_for(pid),
            extract::extract_price(&points, pid)
        );
    }
}
