use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use stockpile::app::StockApp;
use stockpile::config::Config;
use stockpile::media::DesktopMedia;
use stockpile::notify::NoticeSink;
use stockpile::store::{Inventory, RemoteStore};

/// Terminal client for a small product inventory.
#[derive(Debug, Parser)]
#[command(name = "stockpile", version, about)]
struct Cli {
    /// Base URL of the collection server (overrides the config file).
    #[arg(long)]
    server: Option<String>,

    /// Path to an alternate config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockpile::logging::init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let base_url = cli.server.unwrap_or(config.server.base_url);
    let remote = RemoteStore::new(&base_url);
    tracing::info!(url = %remote.collection_url(), "using collection endpoint");

    let inventory = Inventory::new(remote);
    let mut app = StockApp::new(inventory, Arc::new(DesktopMedia), NoticeSink::new());

    app.load_all().await;
    stockpile::shell::run(&mut app)
        .await
        .context("shell I/O failed")?;
    Ok(())
}
