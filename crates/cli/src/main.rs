//! mileage command-line entry point.
//!
//! This is the binary that loads configuration, opens (or provisions) the
//! database, and hands control to the interactive prompt loop.
//! Logging goes to stderr so listings on stdout stay pipeable.

use anyhow::Result;
use mileage_core::MileageDb;
use mileage_core::config::AppConfig;
use tracing_subscriber::EnvFilter;

mod repl;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    tracing::info!(db_path = %config.db_path.display(), "starting mileage tracker");

    let db = if config.auto_provision {
        MileageDb::provision(&config.db_path).await?
    } else {
        MileageDb::open(&config.db_path).await?
    };

    repl::run(&db).await
}
