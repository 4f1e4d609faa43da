//! Pricing table command implementation.

use crate::config::Config;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::format::Formatter;
use crate::pricing;
use anyhow::{Context, Result};

/// Scrapes a pricing page.
pub struct PricesCommand {
    config: Config,
}

impl PricesCommand {
    /// Creates a new prices command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the pricing page and returns formatted output.
    pub async fn execute(&self, url: &str) -> Result<String> {
        let fetcher = HttpFetcher::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_fetcher(&fetcher, url).await
    }

    /// Fetches the pricing page with a provided fetcher (for testing).
    pub async fn execute_with_fetcher(
        &self,
        fetcher: &impl PageFetcher,
        url: &str,
    ) -> Result<String> {
        let table = pricing::get_prices_from_url(fetcher, url).await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_prices(&table))
    }
}
