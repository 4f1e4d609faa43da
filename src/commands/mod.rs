//! CLI command implementations.

pub mod beer;
pub mod prices;

pub use beer::BeerCommand;
pub use prices::PricesCommand;
