use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{MenuError, Result};
use crate::models::{Category, Combo, Drink, Pizza, RomaPizza, Topping};
use crate::pricing::{bundle_final_price, is_size_available, BundleLine, LineItem};

/// In-memory menu catalog. Every item kind is keyed by slug.
#[derive(Debug, Default)]
pub struct CatalogStore {
    categories: HashMap<String, Category>,
    /// Toppings keyed by name.
    toppings: HashMap<String, Topping>,
    pizzas: HashMap<String, Pizza>,
    roma_pizzas: HashMap<String, RomaPizza>,
    drinks: HashMap<String, Drink>,
    combos: HashMap<String, Combo>,
}

/// Insert by key, keeping the last occurrence.
fn insert_last_wins<T>(map: &mut HashMap<String, T>, kind: &str, key: String, value: T) {
    if map.insert(key.clone(), value).is_some() {
        warn!(kind, key = %key, "duplicate entry, keeping the last one");
    }
}

fn sorted_by_name<'a, T, F>(items: impl Iterator<Item = &'a T>, name: F) -> Vec<&'a T>
where
    T: 'a,
    F: Fn(&T) -> &str,
{
    let mut items: Vec<&T> = items.collect();
    items.sort_by(|a, b| name(*a).cmp(name(*b)));
    items
}

/// Cleared references are routine; dangling ones point at a data problem.
fn log_unresolved(combo: &str, kind: &str, reference: Option<&str>) {
    match reference {
        None => debug!(combo, kind, "skipping empty combo line"),
        Some(slug) => warn!(combo, kind, slug, "skipping combo line with unknown item"),
    }
}

impl CatalogStore {
    /// Build a catalog from validated items.
    ///
    /// Items must reference a known category, and combo pizza lines must ask
    /// for a size their pizza is offered in. Topping references that do not
    /// resolve are dropped with a warning.
    pub fn new(
        categories: Vec<Category>,
        toppings: Vec<Topping>,
        pizzas: Vec<Pizza>,
        roma_pizzas: Vec<RomaPizza>,
        drinks: Vec<Drink>,
        combos: Vec<Combo>,
    ) -> Result<Self> {
        let mut store = Self::default();

        for category in categories {
            insert_last_wins(&mut store.categories, "category", category.slug.clone(), category);
        }
        for topping in toppings {
            insert_last_wins(&mut store.toppings, "topping", topping.name.clone(), topping);
        }

        for mut pizza in pizzas {
            store.check_category(&pizza.slug, &pizza.category)?;
            pizza.toppings = store.known_toppings(&pizza.slug, pizza.toppings);
            insert_last_wins(&mut store.pizzas, "pizza", pizza.slug.clone(), pizza);
        }
        for mut roma in roma_pizzas {
            store.check_category(&roma.slug, &roma.category)?;
            roma.toppings = store.known_toppings(&roma.slug, roma.toppings);
            insert_last_wins(&mut store.roma_pizzas, "roma pizza", roma.slug.clone(), roma);
        }
        for mut drink in drinks {
            store.check_category(&drink.slug, &drink.category)?;
            drink.normalize_variants();
            insert_last_wins(&mut store.drinks, "drink", drink.slug.clone(), drink);
        }
        for combo in combos {
            store.check_category(&combo.slug, &combo.category)?;
            store.check_combo_sizes(&combo)?;
            insert_last_wins(&mut store.combos, "combo", combo.slug.clone(), combo);
        }

        debug!(items = store.len(), "catalog built");
        Ok(store)
    }

    fn check_category(&self, slug: &str, category: &str) -> Result<()> {
        if self.categories.contains_key(category) {
            Ok(())
        } else {
            Err(MenuError::InvalidInput(format!(
                "'{}' refers to unknown category '{}'",
                slug, category
            )))
        }
    }

    fn check_combo_sizes(&self, combo: &Combo) -> Result<()> {
        for line in &combo.pizzas {
            let Some(pizza) = line.pizza.as_deref().and_then(|slug| self.get_pizza(slug)) else {
                continue;
            };
            if !is_size_available(pizza, line.size) {
                return Err(MenuError::InvalidInput(format!(
                    "combo '{}' asks for size {} of '{}', which is not offered",
                    combo.slug, line.size, pizza.slug
                )));
            }
        }
        Ok(())
    }

    fn known_toppings(&self, slug: &str, names: Vec<String>) -> Vec<String> {
        names
            .into_iter()
            .filter(|name| {
                let known = self.toppings.contains_key(name);
                if !known {
                    warn!(item = slug, topping = %name, "dropping unknown topping");
                }
                known
            })
            .collect()
    }

    pub fn get_category(&self, slug: &str) -> Option<&Category> {
        self.categories.get(slug)
    }

    pub fn get_pizza(&self, slug: &str) -> Option<&Pizza> {
        self.pizzas.get(slug)
    }

    pub fn get_roma_pizza(&self, slug: &str) -> Option<&RomaPizza> {
        self.roma_pizzas.get(slug)
    }

    pub fn get_drink(&self, slug: &str) -> Option<&Drink> {
        self.drinks.get(slug)
    }

    pub fn get_combo(&self, slug: &str) -> Option<&Combo> {
        self.combos.get(slug)
    }

    /// Categories ordered by name.
    pub fn categories(&self) -> Vec<&Category> {
        sorted_by_name(self.categories.values(), |c| c.name.as_str())
    }

    /// Toppings in display order, then by name.
    pub fn toppings(&self) -> Vec<&Topping> {
        let mut toppings: Vec<&Topping> = self.toppings.values().collect();
        toppings.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        toppings
    }

    pub fn pizzas(&self) -> Vec<&Pizza> {
        sorted_by_name(self.pizzas.values(), |p| p.name.as_str())
    }

    pub fn roma_pizzas(&self) -> Vec<&RomaPizza> {
        sorted_by_name(self.roma_pizzas.values(), |r| r.name.as_str())
    }

    pub fn drinks(&self) -> Vec<&Drink> {
        sorted_by_name(self.drinks.values(), |d| d.name.as_str())
    }

    pub fn combos(&self) -> Vec<&Combo> {
        sorted_by_name(self.combos.values(), |c| c.name.as_str())
    }

    /// Resolve a combo's lines against the catalog.
    ///
    /// Lines whose item is missing (cleared reference, unknown slug or a drink
    /// without the requested size) resolve to `None`.
    pub fn bundle_lines(&self, combo: &Combo) -> Vec<BundleLine<'_>> {
        let mut lines = Vec::with_capacity(combo.line_count());

        for line in &combo.pizzas {
            let item = line
                .pizza
                .as_deref()
                .and_then(|slug| self.get_pizza(slug))
                .map(|pizza| LineItem::Pizza { pizza, size: line.size });
            if item.is_none() {
                log_unresolved(&combo.slug, "pizza", line.pizza.as_deref());
            }
            lines.push(BundleLine::new(item, line.quantity));
        }

        for line in &combo.roma_pizzas {
            let item = line
                .roma_pizza
                .as_deref()
                .and_then(|slug| self.get_roma_pizza(slug))
                .map(LineItem::RomaPizza);
            if item.is_none() {
                log_unresolved(&combo.slug, "roma pizza", line.roma_pizza.as_deref());
            }
            lines.push(BundleLine::new(item, line.quantity));
        }

        for line in &combo.drinks {
            let item = line
                .drink
                .as_deref()
                .and_then(|slug| self.get_drink(slug))
                .and_then(|drink| drink.variant(line.size))
                .map(LineItem::Drink);
            if item.is_none() {
                log_unresolved(&combo.slug, "drink", line.drink.as_deref());
            }
            lines.push(BundleLine::new(item, line.quantity));
        }

        lines
    }

    /// Price a customer pays for the combo.
    pub fn combo_price(&self, combo: &Combo) -> Result<u32> {
        bundle_final_price(combo.price, &self.bundle_lines(combo))
    }

    /// Slugs of every product a customer can look up.
    pub fn visible_slugs(&self) -> Vec<&str> {
        self.pizzas
            .values()
            .filter(|p| p.is_active)
            .map(|p| p.slug.as_str())
            .chain(self.roma_pizzas.keys().map(String::as_str))
            .chain(
                self.drinks
                    .values()
                    .filter(|d| !d.variants.is_empty())
                    .map(|d| d.slug.as_str()),
            )
            .chain(self.combos.keys().map(String::as_str))
            .collect()
    }

    /// Number of products (pizzas, roma pizzas, drinks, combos).
    pub fn len(&self) -> usize {
        self.pizzas.len() + self.roma_pizzas.len() + self.drinks.len() + self.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }
}
