//! Beer catalog: product pages and the JSON search listing.

pub mod fields;
pub mod listing;
pub mod models;
pub mod parser;
pub mod selectors;

pub use listing::{Listing, ListingItem};
pub use models::Beer;
pub use parser::parse_beer_page;

use crate::fetch::PageFetcher;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Search listing of Austrian bottled beers.
pub const URL_BEERLIST_AUTRICHE: &str =
    "https://www.beerwulf.com/fr-FR/api/search/searchProducts?country=Autriche&container=Bouteille";

/// Fetches one product page and extracts its record.
pub async fn extract_beer_infos(fetcher: &impl PageFetcher, url: &str) -> Result<Beer> {
    info!("Fetching beer page: {}", url);
    let html = fetcher.fetch(url).await?;
    parse_beer_page(&html).with_context(|| format!("Failed to read beer page at {url}"))
}

/// Fetches a listing, then every product it names, one after another.
///
/// Records come back in listing order. The first failing product aborts the
/// whole call.
pub async fn extract_beer_list_infos(fetcher: &impl PageFetcher, url: &str) -> Result<Vec<Beer>> {
    info!("Fetching beer listing: {}", url);
    let body = fetcher.fetch(url).await?;
    let listing = Listing::from_json(&body)?;

    if listing.is_empty() {
        info!("Listing names no products");
        return Ok(Vec::new());
    }

    let urls = listing.product_urls(url)?;
    debug!("Listing names {} products", listing.len());

    let mut beers = Vec::with_capacity(listing.len());
    for (item, product_url) in listing.items.iter().zip(&urls) {
        debug!("Product {}: {}", item.title.as_deref().unwrap_or("(untitled)"), product_url);
        beers.push(extract_beer_infos(fetcher, product_url.as_str()).await?);
    }

    info!("Extracted {} beers", beers.len());
    Ok(beers)
}
