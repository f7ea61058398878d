use std::path::Path;

use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::pricing::{describe_all_sizes, volume_for_size};

/// One line of the exported price list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceListRow {
    pub kind: &'static str,
    pub slug: String,
    pub name: String,
    /// Size code, empty for unsized items.
    pub size: String,
    pub price: u32,
    /// Grams for food, millilitres for drinks, empty for combos.
    pub amount: Option<u32>,
}

/// Flatten the catalog into price list rows: every available pizza size,
/// roma pizzas, every drink variant and every combo.
///
/// Inactive pizzas are left out.
pub fn price_list_rows(store: &CatalogStore) -> Result<Vec<PriceListRow>> {
    let mut rows = Vec::new();

    for pizza in store.pizzas().into_iter().filter(|p| p.is_active) {
        for size in describe_all_sizes(pizza) {
            rows.push(PriceListRow {
                kind: "pizza",
                slug: pizza.slug.clone(),
                name: pizza.name.clone(),
                size: size.size.to_string(),
                price: size.price,
                amount: Some(size.weight),
            });
        }
    }

    for roma in store.roma_pizzas() {
        rows.push(PriceListRow {
            kind: "roma",
            slug: roma.slug.clone(),
            name: roma.name.clone(),
            size: String::new(),
            price: roma.price,
            amount: Some(roma.weight),
        });
    }

    for drink in store.drinks() {
        for variant in &drink.variants {
            rows.push(PriceListRow {
                kind: "drink",
                slug: drink.slug.clone(),
                name: drink.name.clone(),
                size: variant.size.to_string(),
                price: variant.price,
                amount: Some(volume_for_size(variant.size)),
            });
        }
    }

    for combo in store.combos() {
        rows.push(PriceListRow {
            kind: "combo",
            slug: combo.slug.clone(),
            name: combo.name.clone(),
            size: String::new(),
            price: store.combo_price(combo)?,
            amount: None,
        });
    }

    Ok(rows)
}

/// Write the price list to a CSV file.
pub fn write_price_list(rows: &[PriceListRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["kind", "slug", "name", "size", "price", "amount"])?;

    for row in rows {
        wtr.write_record([
            row.kind.to_string(),
            row.slug.clone(),
            row.name.clone(),
            row.size.clone(),
            row.price.to_string(),
            row.amount.map(|a| a.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
