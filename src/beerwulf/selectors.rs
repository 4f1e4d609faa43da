//! CSS selectors for beer product pages.
//!
//! Each selector keeps its source text so extraction errors can say what
//! was looked for.

use scraper::Selector;
use std::sync::OnceLock;

/// A CSS selector compiled on first use.
pub struct Css {
    pub source: &'static str,
    compiled: OnceLock<Selector>,
}

impl Css {
    pub const fn new(source: &'static str) -> Self {
        Self { source, compiled: OnceLock::new() }
    }

    pub fn get(&self) -> &Selector {
        self.compiled.get_or_init(|| Selector::parse(self.source).unwrap())
    }
}

/// Product name heading.
pub static NAME: Css = Css::new("h1");

/// Displayed price, e.g. "€ 2,29".
pub static PRICE: Css = Css::new("span.price");

/// Definition terms of the product characteristics list.
pub static TERM: Css = Css::new("dt");

/// Star rating, percentage in `data-percent`.
pub static STARS: Css = Css::new("div.stars");

/// EBC color scale container.
pub static EBC_SCALE: Css = Css::new("div.ebc");

/// One swatch of the color scale.
pub static EBC_STEP: Css = Css::new("div");
