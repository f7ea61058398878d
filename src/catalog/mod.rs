pub mod cards;
mod persistence;
pub mod query;
mod store;

pub use cards::{map_combo, map_drink, map_pizza, map_roma_pizza, ProductCard};
pub use persistence::{load_catalog, save_catalog, CatalogDocument};
pub use query::{find_product, list_products, ListOptions, SortOrder};
pub use store::CatalogStore;
