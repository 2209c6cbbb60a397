//! foiadraft - FOIA request drafting assistant.
//!
//! Searches MuckRock for successful public records requests on a topic and
//! drafts a new request from those precedents, with optional filing.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use foiadraft::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "foiadraft=info"
    } else {
        "foiadraft=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run().await
}
