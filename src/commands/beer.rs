//! Beer lookup command implementation.

use crate::beerwulf;
use crate::config::Config;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::format::Formatter;
use anyhow::{Context, Result};

/// Scrapes one beer page or a whole listing.
pub struct BeerCommand {
    config: Config,
}

impl BeerCommand {
    /// Creates a new beer command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn fetcher(&self) -> Result<HttpFetcher> {
        HttpFetcher::new(&self.config).context("Failed to create HTTP client")
    }

    /// Fetches one product page and returns formatted output.
    pub async fn execute(&self, url: &str) -> Result<String> {
        self.execute_with_fetcher(&self.fetcher()?, url).await
    }

    /// Fetches one product page with a provided fetcher (for testing).
    pub async fn execute_with_fetcher(
        &self,
        fetcher: &impl PageFetcher,
        url: &str,
    ) -> Result<String> {
        let beer = beerwulf::extract_beer_infos(fetcher, url).await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_beer(&beer))
    }

    /// Fetches a listing and every product in it.
    pub async fn execute_list(&self, url: &str) -> Result<String> {
        self.execute_list_with_fetcher(&self.fetcher()?, url).await
    }

    /// Fetches a listing with a provided fetcher (for testing).
    pub async fn execute_list_with_fetcher(
        &self,
        fetcher: &impl PageFetcher,
        url: &str,
    ) -> Result<String> {
        let beers = beerwulf::extract_beer_list_infos(fetcher, url).await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_beers(&beers))
    }
}
