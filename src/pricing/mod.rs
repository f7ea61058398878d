pub mod bundle;
pub mod calculator;
pub mod constants;

pub use bundle::{bundle_final_price, bundle_items_total, line_unit_price, BundleLine, LineItem};
pub use calculator::{
    available_sizes, describe_all_sizes, describe_size, is_size_available, price_for_size,
    weight_for_size, SizeDescriptor,
};
pub use constants::*;
