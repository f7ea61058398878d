use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::models::{Category, Combo, Drink, Pizza, PizzaRecord, RomaPizza, Topping};

/// The catalog file: one list per item kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub toppings: Vec<Topping>,
    #[serde(default)]
    pub pizzas: Vec<PizzaRecord>,
    #[serde(default)]
    pub roma_pizzas: Vec<RomaPizza>,
    #[serde(default)]
    pub drinks: Vec<Drink>,
    #[serde(default)]
    pub combos: Vec<Combo>,
}

impl CatalogDocument {
    /// Validate every record and build the store.
    ///
    /// Fails on the first pizza whose manual pricing is incomplete.
    pub fn into_store(self) -> Result<CatalogStore> {
        let pizzas = self
            .pizzas
            .into_iter()
            .map(Pizza::from_record)
            .collect::<Result<Vec<_>>>()?;

        CatalogStore::new(
            self.categories,
            self.toppings,
            pizzas,
            self.roma_pizzas,
            self.drinks,
            self.combos,
        )
    }

    /// Snapshot a store, each list ordered by name.
    pub fn from_store(store: &CatalogStore) -> Self {
        Self {
            categories: store.categories().into_iter().cloned().collect(),
            toppings: store.toppings().into_iter().cloned().collect(),
            pizzas: store.pizzas().into_iter().map(PizzaRecord::from).collect(),
            roma_pizzas: store.roma_pizzas().into_iter().cloned().collect(),
            drinks: store.drinks().into_iter().cloned().collect(),
            combos: store.combos().into_iter().cloned().collect(),
        }
    }
}

/// Load and validate a catalog from a JSON file.
///
/// Duplicate slugs within a kind keep the last occurrence.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogStore> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let document: CatalogDocument = serde_json::from_str(&content)?;
    debug!(path = %path.display(), pizzas = document.pizzas.len(), "loaded catalog document");
    document.into_store()
}

/// Save a catalog as pretty-printed JSON.
pub fn save_catalog<P: AsRef<Path>>(path: P, store: &CatalogStore) -> Result<()> {
    let json = serde_json::to_string_pretty(&CatalogDocument::from_store(store))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MenuError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "categories": [{"name": "Pizza", "slug": "pizza"}],
        "pizzas": [
            {"slug": "margherita", "name": "Margherita", "category": "pizza", "base_price_s": 400, "price_multiplier_m": 1.3},
            {"slug": "margherita", "name": "Margherita", "category": "pizza", "base_price_s": 420}
        ]
    }"#;

    fn write_temp(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_save_roundtrip() {
        let file = write_temp(SAMPLE);
        let store = load_catalog(file.path()).unwrap();
        assert_eq!(store.len(), 1);

        let out_file = NamedTempFile::new().unwrap();
        save_catalog(out_file.path(), &store).unwrap();

        let reloaded = load_catalog(out_file.path()).unwrap();
        assert_eq!(reloaded.get_pizza("margherita"), store.get_pizza("margherita"));
    }

    #[test]
    fn test_deduplication_last_wins() {
        let file = write_temp(SAMPLE);
        let store = load_catalog(file.path()).unwrap();
        assert_eq!(store.get_pizza("margherita").unwrap().base_price, 420);
    }

    #[test]
    fn test_incomplete_manual_pizza_rejected() {
        let json = r#"{
            "categories": [{"name": "Pizza", "slug": "pizza"}],
            "pizzas": [{"slug": "diavola", "name": "Diavola", "category": "pizza",
                        "base_price_s": 500, "auto_calculate": false, "price_m": 600}]
        }"#;
        let file = write_temp(json);
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, MenuError::Configuration { ref fields, .. } if fields.len() == 5));
    }

    #[test]
    fn test_empty_document() {
        let file = write_temp("{}");
        let store = load_catalog(file.path()).unwrap();
        assert!(store.is_empty());
    }
}
