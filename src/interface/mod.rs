pub mod export;
pub mod prompts;
pub mod render;

pub use export::{price_list_rows, write_price_list, PriceListRow};
pub use prompts::{confirm_overwrite, prompt_yes_no};
pub use render::{display_categories, display_product_card, display_product_list, display_summary};
