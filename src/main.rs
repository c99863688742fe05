use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use tcg_price_tracker::{config, PriceTracker};

#[derive(Parser)]
#[command(name = "tcg-price-tracker")]
#[command(about = "Fetch TCGplayer prices for a card list and update the JSON snapshots", long_about = None)]
struct Cli {
    /// Card list, one `product_id, owner, name` per line
    #[arg(long, default_value = config::DEFAULT_CARDS_FILE)]
    cards: PathBuf,

    /// Current-state output, overwritten every run
    #[arg(long, default_value = config::DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Price history, read and rewritten every run
    #[arg(long, default_value = config::DEFAULT_HISTORICAL_FILE)]
    historical: PathBuf,

    /// Price-points API base URL
    #[arg(long, default_value = config::API_BASE)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let tracker = match PriceTracker::builder()
        .cards_file(&cli.cards)
        .data_file(&cli.data)
        .historical_file(&cli.historical)
        .base_url(cli.base_url)
        .timeout(Duration::from_secs(cli.timeout))
        .build()
    {
        Ok(tracker) => tracker,
        Err(e) => {
            tracing::error!("Failed to initialize: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = tracker.run() {
        tracing::error!("Run aborted: {}", e);
        process::exit(1);
    }
}
