use clap::ValueEnum;
use strsim::jaro_winkler;
use tracing::debug;

use crate::catalog::cards::{map_combo, map_drink, map_pizza, map_roma_pizza, ProductCard};
use crate::catalog::CatalogStore;
use crate::error::{MenuError, Result};

/// Minimum similarity for a slug to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
}

/// Filters for a category listing.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Case-insensitive substring to look for.
    pub search: Option<String>,
    pub sort: Option<SortOrder>,
}

impl ListOptions {
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn matches_name_or_toppings(name: &str, toppings: &[String], needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(n) => contains(name, n) || toppings.iter().any(|t| contains(t, n)),
    }
}

/// Apply the requested price order; the name order from the store stays for ties.
fn sort_group(cards: &mut [ProductCard], sort: Option<SortOrder>) {
    match sort {
        Some(SortOrder::PriceAsc) => cards.sort_by_key(|c| c.price()),
        Some(SortOrder::PriceDesc) => cards.sort_by_key(|c| std::cmp::Reverse(c.price())),
        None => {}
    }
}

/// Products of one category: active pizzas, roma pizzas, every drink
/// variant, then combos. Sorting applies within each group.
pub fn list_products(
    store: &CatalogStore,
    category: &str,
    options: &ListOptions,
) -> Result<Vec<ProductCard>> {
    if store.get_category(category).is_none() {
        return Err(MenuError::CategoryNotFound(category.to_string()));
    }
    let needle = options.needle();
    let needle = needle.as_deref();

    let mut pizzas: Vec<ProductCard> = store
        .pizzas()
        .into_iter()
        .filter(|p| p.category == category && p.is_active)
        .filter(|p| matches_name_or_toppings(&p.name, &p.toppings, needle))
        .map(map_pizza)
        .collect();
    sort_group(&mut pizzas, options.sort);

    let mut romas: Vec<ProductCard> = store
        .roma_pizzas()
        .into_iter()
        .filter(|r| r.category == category)
        .filter(|r| matches_name_or_toppings(&r.name, &r.toppings, needle))
        .map(map_roma_pizza)
        .collect();
    sort_group(&mut romas, options.sort);

    let mut drinks: Vec<ProductCard> = store
        .drinks()
        .into_iter()
        .filter(|d| d.category == category)
        .filter(|d| match needle {
            None => true,
            Some(n) => contains(&d.name, n) || contains(&d.description, n),
        })
        .flat_map(|d| d.variants.iter().map(move |v| map_drink(d, v)))
        .collect();
    sort_group(&mut drinks, options.sort);

    let mut combos = Vec::new();
    for combo in store.combos() {
        if combo.category != category {
            continue;
        }
        if let Some(n) = needle {
            if !contains(&combo.name, n) {
                continue;
            }
        }
        combos.push(map_combo(store, combo)?);
    }
    sort_group(&mut combos, options.sort);

    let mut products = pizzas;
    products.append(&mut romas);
    products.append(&mut drinks);
    products.append(&mut combos);

    debug!(category, count = products.len(), "listed products");
    Ok(products)
}

/// Look a product up by slug.
///
/// Active pizzas win over roma pizzas, then drinks (their smallest variant),
/// then combos. Drinks without variants are treated as missing.
pub fn find_product(store: &CatalogStore, slug: &str) -> Result<ProductCard> {
    if let Some(pizza) = store.get_pizza(slug).filter(|p| p.is_active) {
        return Ok(map_pizza(pizza));
    }
    if let Some(roma) = store.get_roma_pizza(slug) {
        return Ok(map_roma_pizza(roma));
    }
    if let Some(drink) = store.get_drink(slug) {
        if let Some(variant) = drink.first_variant() {
            return Ok(map_drink(drink, variant));
        }
    }
    if let Some(combo) = store.get_combo(slug) {
        return map_combo(store, combo);
    }

    Err(MenuError::ProductNotFound {
        slug: slug.to_string(),
        suggestion: suggest_slug(store, slug),
    })
}

/// Closest known slug, if any is similar enough.
pub fn suggest_slug(store: &CatalogStore, slug: &str) -> Option<String> {
    let wanted = slug.to_lowercase();
    store
        .visible_slugs()
        .into_iter()
        .map(|candidate| (candidate, jaro_winkler(candidate, &wanted)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.0.cmp(a.0))
        })
        .map(|(candidate, _)| candidate.to_string())
}
