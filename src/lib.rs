//! scrapekit - scrape pricing tables and beer catalog pages into records.
//!
//! Every operation is a straight chain: fetch one page, parse it, pick the
//! fields, coerce them. Listings repeat that chain once per product, in
//! order.

pub mod beerwulf;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod pricing;

pub use beerwulf::{extract_beer_infos, extract_beer_list_infos, Beer};
pub use config::Config;
pub use error::ExtractError;
pub use fetch::{HttpFetcher, Page, PageFetcher};
pub use pricing::{get_prices_from_url, Plan, PriceTable};
