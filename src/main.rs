mod engine;
mod generator;
mod models;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::{
    load_transactions_async, write_transactions, DashboardService, MetricsConfig, DEFAULT_TOP_CUSTOMERS_COUNT,
    DEFAULT_TOP_SPENDERS_COUNT
};
use crate::generator::{TransactionGenerator, DEFAULT_LOOKBACK_DAYS};
use crate::models::MetricsSnapshot;
use crate::storage::{Storage, TransactionStore, DEFAULT_CACHE_CAPACITY};

/// Computes payment dashboard metrics and writes them to stdout as JSON.
#[derive(Debug, Parser)]
#[command(name = "payment-metrics-engine", version)]
struct Cli {
    /// Reference date (YYYY-MM-DD); defaults to today in local time
    #[arg(long)]
    date: Option<NaiveDate>,

    /// CSV file of transactions; a synthetic history is generated when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Days of synthetic history to generate
    #[arg(long, default_value_t = i64::from(DEFAULT_LOOKBACK_DAYS), allow_negative_numbers = true)]
    lookback_days: i64,

    /// Size of the top customers lists
    #[arg(long, default_value_t = DEFAULT_TOP_CUSTOMERS_COUNT as i64, allow_negative_numbers = true)]
    top_customers: i64,

    /// Size of the top spenders lists
    #[arg(long, default_value_t = DEFAULT_TOP_SPENDERS_COUNT as i64, allow_negative_numbers = true)]
    top_spenders: i64,

    /// Maximum number of generated snapshots kept in memory
    #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
    cache_capacity: u64,

    /// Seconds a generated snapshot stays cached; kept until evicted when omitted
    #[arg(long)]
    cache_ttl_secs: Option<u64>,

    /// Write this customer's payment history as CSV instead of the snapshot
    #[arg(long)]
    customer: Option<String>,

    /// One of: error, warn, info, debug, trace
    #[arg(long, default_value = "error")]
    log_level: String
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let reference = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let config = MetricsConfig::try_new(cli.top_customers, cli.top_spenders)?;
    let generator = TransactionGenerator::try_new(cli.lookback_days)?;

    let mut service = DashboardService::new(generator, config).with_cache_capacity(cli.cache_capacity);
    if let Some(seconds) = cli.cache_ttl_secs {
        service = service.with_cache_timeout(Duration::from_secs(seconds));
    }

    let timer = Instant::now();

    let supplied = match cli.input {
        Some(path) => Some(load_transactions_async(path).await?),
        None => {
            info!("Generating [{}] days of history up to [{reference}]", generator.lookback_days());
            None
        }
    };

    if let Some(customer_id) = cli.customer {
        let transactions = supplied.unwrap_or_else(|| service.transactions(reference));
        let store = TransactionStore::from_transactions(transactions);
        let history = store.load(&customer_id).unwrap_or_else(|| {
            warn!("Customer [{customer_id}] not found among [{}] customers", store.iter().count());
            Vec::new()
        });

        info!("Found [{}] transactions for customer [{customer_id}]", history.len());

        write_transactions(BufWriter::new(stdout().lock()), &history)?;

        return Ok(());
    }

    let snapshot = match supplied {
        Some(transactions) => Arc::new(service.snapshot_of(&transactions, reference)?),
        None => service.generated_snapshot(reference).await?
    };

    let duration = timer.elapsed();

    info!("Computed metrics for [{reference}] in: {duration:?}");

    write_snapshot_to_stdout(&snapshot)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the JSON or CSV payload, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_snapshot_to_stdout(snapshot: &MetricsSnapshot) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, snapshot)?;
    writeln!(output)?;

    output.flush()?;

    Ok(())
}
