//! HTML parser for beer product pages.

use super::fields;
use super::models::Beer;
use crate::error::ExtractError;
use crate::fetch::Page;
use tracing::debug;

/// Parses a product page into a [`Beer`], failing on the first field that
/// cannot be read.
pub fn parse_beer_page(html: &str) -> Result<Beer, ExtractError> {
    let page = Page::parse(html);
    let document = page.document();

    let beer = Beer {
        name: fields::NAME.extract(document)?,
        price: fields::PRICE.extract(document)?,
        volume: fields::VOLUME.extract(document)?,
        rating: fields::RATING.extract(document)?,
        color_intensity: fields::COLOR_INTENSITY.extract(document)?,
    };

    debug!("Parsed beer: {} ({:.2} EUR, {}cl)", beer.name, beer.price, beer.volume);
    Ok(beer)
}
