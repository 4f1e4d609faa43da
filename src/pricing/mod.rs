//! Pricing pages: one table, one entry per hosting plan.

pub mod models;
pub mod parser;
pub mod selectors;

pub use models::{Plan, PriceTable};
pub use parser::parse_price_table;

use crate::fetch::PageFetcher;
use anyhow::{Context, Result};
use tracing::info;

/// First sample pricing page (three plans).
pub const URL_PAGE2: &str = "https://kim.fspot.org/cours/page2.html";

/// Second sample pricing page (four plans).
pub const URL_PAGE3: &str = "https://kim.fspot.org/cours/page3.html";

/// Fetches a pricing page and extracts its plans.
pub async fn get_prices_from_url(fetcher: &impl PageFetcher, url: &str) -> Result<PriceTable> {
    info!("Fetching pricing page: {}", url);
    let html = fetcher.fetch(url).await?;
    let table =
        parse_price_table(&html).with_context(|| format!("Failed to read pricing table at {url}"))?;
    info!("Found {} plans", table.len());
    Ok(table)
}
