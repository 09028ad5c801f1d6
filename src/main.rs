mod aggregation;
mod config;
mod console;
mod models;
mod storage;
mod types;

use std::io::{stderr, stdin, stdout, BufWriter};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::aggregation::dataset_overview;
use crate::config::{AppConfig, USAGE};
use crate::console::{write_banner, write_overview, write_welcome, Menu};
use crate::storage::SalesLoader;

const STORE_NAME: &str = "UrbanMart";

#[tokio::main]
async fn main() -> Result<()> {
    let config = match AppConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
            eprintln!("Backpressure: loader channel capacity (default: 256)");
            exit(1);
        }
    };

    setup_logging(config.log_level);

    let mut output = BufWriter::new(stdout().lock());
    write_banner(&mut output)?;
    write_welcome(&mut output, STORE_NAME)?;

    let timer = Instant::now();
    let mut loader = SalesLoader::new();

    if let Some(backpressure) = config.backpressure {
        loader = loader.with_backpressure(backpressure);
    }

    let table = loader.load(&config.path).await?;
    let duration = timer.elapsed();

    info!("Loaded sales data in: {duration:?}");

    if table.is_empty() {
        warn!("No valid transaction lines in [{}]", config.path.display());
    }

    let overview = dataset_overview(table.lines());
    write_overview(&mut output, &table, &overview)?;

    Menu::new(&table, stdin().lock(), output).run()?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the menu, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
