//! JSON search listing: the products to resolve, in order.

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

/// Body of the product search endpoint.
///
/// Only the fields needed to reach each product page are read; everything
/// else in the response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub items: Vec<ListingItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    /// Product page, usually a site-absolute path like `/fr-fr/p/bieres/...`
    pub content_reference: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl Listing {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).context("Failed to parse product listing")
    }

    /// Resolves every item's page against the listing URL, keeping order.
    pub fn product_urls(&self, listing_url: &str) -> Result<Vec<Url>> {
        let base = Url::parse(listing_url)
            .with_context(|| format!("Invalid listing URL: {listing_url}"))?;

        self.items
            .iter()
            .map(|item| {
                base.join(&item.content_reference).with_context(|| {
                    format!("Invalid product reference: {}", item.content_reference)
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_URL: &str =
        "https://www.beerwulf.com/fr-FR/api/search/searchProducts?country=Autriche&container=Bouteille";

    #[test]
    fn test_from_json_ignores_unknown_fields() {
        let body = r#"{
            "totalCount": 2,
            "items": [
                {"title": "Stiegl Goldbraü", "contentReference": "/fr-fr/p/bieres/stiegl-goldbrau.33", "price": 2.49},
                {"contentReference": "/fr-fr/p/bieres/bevog-tak-pale-ale.33"}
            ]
        }"#;

        let listing = Listing::from_json(body).unwrap();
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.items[0].title.as_deref(), Some("Stiegl Goldbraü"));
        assert!(listing.items[1].title.is_none());
    }

    #[test]
    fn test_from_json_requires_items() {
        let err = Listing::from_json(r#"{"results": []}"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse product listing"));
        assert!(Listing::from_json("<html></html>").is_err());
    }

    #[test]
    fn test_product_urls_resolve_against_origin() {
        let listing = Listing::from_json(
            r#"{"items": [
                {"contentReference": "/fr-fr/p/bieres/stiegl-goldbrau.33"},
                {"contentReference": "https://shop.example.com/p/other.33"}
            ]}"#,
        )
        .unwrap();

        let urls = listing.product_urls(LISTING_URL).unwrap();
        assert_eq!(urls[0].as_str(), "https://www.beerwulf.com/fr-fr/p/bieres/stiegl-goldbrau.33");
        assert_eq!(urls[1].as_str(), "https://shop.example.com/p/other.33");
    }

    #[test]
    fn test_product_urls_keep_order() {
        let listing = Listing::from_json(
            r#"{"items": [
                {"contentReference": "/p/c"},
                {"contentReference": "/p/a"},
                {"contentReference": "/p/b"}
            ]}"#,
        )
        .unwrap();

        let paths: Vec<_> = listing
            .product_urls(LISTING_URL)
            .unwrap()
            .into_iter()
            .map(|u| u.path().to_string())
            .collect();
        assert_eq!(paths, vec!["/p/c", "/p/a", "/p/b"]);
    }

    #[test]
    fn test_product_urls_invalid_base() {
        let listing = Listing::from_json(r#"{"items": []}"#).unwrap();
        assert!(listing.is_empty());
        assert!(listing.product_urls("not a url").is_err());
    }
}
