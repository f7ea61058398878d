pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod pricing;

pub use catalog::{load_catalog, CatalogStore, ProductCard};
pub use error::{MenuError, Result};
pub use models::{Pizza, PizzaSize, PricingMode};
