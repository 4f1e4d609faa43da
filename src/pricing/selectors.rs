//! CSS selectors for pricing pages.

use scraper::Selector;
use std::sync::LazyLock;

/// The pricing table.
pub static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());

/// Any table row, header rows included.
pub static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());

/// Header and data cells.
pub static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th, td").unwrap());
