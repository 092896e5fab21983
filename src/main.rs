//! Command-line entry point for the Trading 212 → Finanzblick sync.

use std::process::ExitCode;

use log::{error, info};

use t212_finanzblick_sync::config::Config;
use t212_finanzblick_sync::export::FinanzblickCsvExporter;
use t212_finanzblick_sync::secrets;
use t212_finanzblick_sync::trading212::Trading212Client;
use t212_finanzblick_sync::transactions::TransactionSyncService;
use t212_finanzblick_sync::Result;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(rows) => {
            info!("sync finished: {} transactions exported", rows);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("sync failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<usize> {
    let config = Config::from_env();

    // Fatal before the first network call; everything after degrades to
    // partial data instead of aborting.
    let credentials = secrets::load_credentials()?;

    let client = Trading212Client::new(&config.base_url, &credentials)?;
    let transactions = TransactionSyncService::collect_all(&client).await;

    let exporter = FinanzblickCsvExporter::with_path(&config.output_path);
    let rows = exporter.export(&transactions)?;
    info!("output file: {}", exporter.output_path().display());
    Ok(rows)
}
