//! Market-making simulator entry point.

use std::time::Duration;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rhino_mm::bot::{Bot, FetchStatus};
use rhino_mm::config::Config;
use rhino_mm::market::{MarketClient, TradingPair};
use rhino_mm::metrics;

/// Toy market-making simulator.
#[derive(Parser, Debug)]
#[command(name = "rhino-mm")]
#[command(about = "Market-making simulator against a public order-book feed")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the simulation loop (default).
    Run,

    /// Check configuration validity.
    CheckConfig,

    /// Fetch one order-book snapshot and print it.
    FetchBook,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("rhino_mm=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::FetchBook) => cmd_fetch_book().await,
        Some(Command::Run) | None => cmd_run().await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("MARKET-MAKING SIMULATOR - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Pair: {}", config.pair);
    println!("  Feed: {}", config.market_data_url);
    println!("  Book depth: {} ({})", config.book_depth, config.book_precision);
    println!(
        "  Starting balances: {} base / {} quote",
        config.base_balance, config.quote_balance
    );
    println!("  Quotes per side: {}", config.orders_per_side);
    println!(
        "  Quote band: +/-{}%",
        config.quote_range * Decimal::ONE_HUNDRED
    );
    println!("  Poll interval: {}s", config.poll_interval_secs);
    println!("  Report interval: {}s", config.report_interval_secs);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Fetch one order-book snapshot and print its top levels.
async fn cmd_fetch_book() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    let pair: TradingPair = config.pair.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    println!("======================================================================");
    println!("ORDER BOOK SNAPSHOT - {}", pair);
    println!("======================================================================");

    let client = MarketClient::new(&config);
    let book = client.fetch_book(&pair).await?;

    println!("Bids: {}  Asks: {}", book.bids.len(), book.asks.len());
    if let Some(bid) = book.best_bid() {
        println!("Best bid: {} x {}", bid.price, bid.size);
    }
    if let Some(ask) = book.best_ask() {
        println!("Best ask: {} x {}", ask.price, ask.size);
    }
    if let Some(spread) = book.spread() {
        println!("Spread: {}", spread);
    }

    println!("----------------------------------------------------------------------");
    for level in book.bids.iter().take(5) {
        println!("  BID {:>14.4} x {:.4}", level.price, level.size);
    }
    for level in book.asks.iter().take(5) {
        println!("  ASK {:>14.4} x {:.4}", level.price, level.size);
    }
    println!("======================================================================");

    Ok(())
}

/// Run the simulation loop.
async fn cmd_run() -> anyhow::Result<()> {
    info!("Loading configuration...");
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    let pair: TradingPair = config.pair.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let poll_interval = Duration::from_secs(config.poll_interval_secs);

    info!("========================================");
    info!("MARKET-MAKING SIMULATOR STARTED");
    info!("========================================");
    info!("Pair: {}", pair);
    info!("Feed: {}", config.market_data_url);
    info!("Quotes per side: {}", config.orders_per_side);
    info!(
        "Quote band: +/-{}%",
        config.quote_range * Decimal::ONE_HUNDRED
    );
    info!(
        "Starting balances: {} {} / {} {}",
        pair.base, config.base_balance, pair.quote, config.quote_balance
    );
    info!("Mode: SIMULATION (orders are never routed)");
    info!("========================================");

    let client = MarketClient::new(&config);
    let mut bot = Bot::new(&config, pair);

    loop {
        match bot.poll_market(&client).await {
            Ok(FetchStatus::Backoff) => {
                info!(
                    "No snapshot available yet; retrying in {}s",
                    config.poll_interval_secs
                );
                tokio::time::sleep(poll_interval).await;
                continue;
            }
            Ok(FetchStatus::Fresh | FetchStatus::Stale) => {}
            Err(e) => {
                error!("Unrecoverable market-data failure: {}", e);
                return Err(e.into());
            }
        }

        bot.refresh_quotes();
        bot.simulate_fills();
        bot.maybe_report_balances();

        tokio::time::sleep(poll_interval).await;
    }
}
