use crate::error::Result;
use crate::models::{DrinkVariant, Pizza, PizzaSize, RomaPizza};
use crate::pricing::calculator::price_for_size;

/// The item a bundle line points at, already resolved from the catalog.
#[derive(Debug, Clone, Copy)]
pub enum LineItem<'a> {
    Pizza { pizza: &'a Pizza, size: PizzaSize },
    RomaPizza(&'a RomaPizza),
    Drink(&'a DrinkVariant),
}

/// One (item, quantity) pair of a combo.
///
/// `item` is `None` when the referenced item no longer exists; such lines
/// count as zero.
#[derive(Debug, Clone, Copy)]
pub struct BundleLine<'a> {
    pub item: Option<LineItem<'a>>,
    pub quantity: u32,
}

impl<'a> BundleLine<'a> {
    pub fn new(item: Option<LineItem<'a>>, quantity: u32) -> Self {
        Self { item, quantity }
    }
}

pub fn line_unit_price(item: &LineItem<'_>) -> Result<u32> {
    match item {
        LineItem::Pizza { pizza, size } => price_for_size(pizza, *size),
        LineItem::RomaPizza(roma) => Ok(roma.price),
        LineItem::Drink(variant) => Ok(variant.price),
    }
}

/// Sum of unit price times quantity over every resolved line.
pub fn bundle_items_total(lines: &[BundleLine<'_>]) -> Result<u32> {
    let mut total: u32 = 0;
    for line in lines {
        let Some(item) = &line.item else {
            continue;
        };
        let unit = line_unit_price(item)?;
        total = total.saturating_add(unit.saturating_mul(line.quantity));
    }
    Ok(total)
}

/// The fixed price when one is set, otherwise the items total.
pub fn bundle_final_price(fixed_price: Option<u32>, lines: &[BundleLine<'_>]) -> Result<u32> {
    match fixed_price {
        Some(price) => Ok(price),
        None => bundle_items_total(lines),
    }
}
