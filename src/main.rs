//! scrapekit - scrape pricing tables and beer catalog pages.

use anyhow::Result;
use clap::{Parser, Subcommand};
use scrapekit::beerwulf::URL_BEERLIST_AUTRICHE;
use scrapekit::commands::{BeerCommand, PricesCommand};
use scrapekit::config::{Config, OutputFormat};
use scrapekit::pricing::URL_PAGE2;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "scrapekit",
    version,
    about = "Scrape pricing tables and beer catalog pages",
    long_about = "Fetches pricing tables and beer product pages and prints the extracted records."
)]
struct Cli {
    /// Proxy URL (e.g., socks5://host:port) [env: SCRAPEKIT_PROXY]
    #[arg(long, global = true)]
    proxy: Option<String>,

    /// Request timeout in seconds [env: SCRAPEKIT_TIMEOUT]
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Delay before each request in milliseconds [env: SCRAPEKIT_DELAY]
    #[arg(long, global = true)]
    delay: Option<u64>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the plans of a pricing page
    #[command(alias = "p")]
    Prices {
        /// Pricing page URL
        #[arg(default_value = URL_PAGE2)]
        url: String,
    },

    /// Extract one beer product page
    #[command(alias = "b")]
    Beer {
        /// Product page URL
        url: String,
    },

    /// Extract every beer of a search listing
    #[command(alias = "l")]
    Beers {
        /// Listing endpoint URL
        #[arg(default_value = URL_BEERLIST_AUTRICHE)]
        url: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // File, then environment, then flags
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(delay) = cli.delay {
        config.delay_ms = delay;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let output = match cli.command {
        Commands::Prices { url } => PricesCommand::new(config).execute(&url).await?,
        Commands::Beer { url } => BeerCommand::new(config).execute(&url).await?,
        Commands::Beers { url } => BeerCommand::new(config).execute_list(&url).await?,
    };

    println!("{}", output);

    Ok(())
}
