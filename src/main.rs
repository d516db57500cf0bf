//! Libris - Library Management Core
//!
//! Headless bootstrap: loads the library data, reports collection counts and
//! writes everything back. The desktop shell links against the library crate
//! and drives the same [`AppState`] lifecycle.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris::{config::AppConfig, AppState};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libris={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Libris v{}", env!("CARGO_PKG_VERSION"));

    // Load every collection; a failure leaves no known-good state to run from
    let state = AppState::init(config).context("Failed to load library data")?;

    tracing::info!(
        active_loans = state.repository.loans.count_active(),
        overdue_loans = state.repository.loans.count_overdue(),
        "Library ready"
    );

    // Write everything back on shutdown
    state.save().context("Failed to save library data")?;

    Ok(())
}
