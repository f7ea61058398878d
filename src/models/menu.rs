use serde::{Deserialize, Serialize};

use crate::models::DrinkSize;

/// A menu category (e.g. "Pizza", "Drinks").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToppingCategory {
    #[serde(rename = "SC")]
    Sauce,
    #[serde(rename = "MT")]
    Meat,
    #[serde(rename = "VG")]
    Vegetables,
    #[serde(rename = "CH")]
    Cheese,
    #[serde(rename = "SP")]
    Spices,
    #[serde(rename = "SF")]
    Seafood,
}

impl ToppingCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            ToppingCategory::Sauce => "Sauce",
            ToppingCategory::Meat => "Meat",
            ToppingCategory::Vegetables => "Vegetables/Fruit",
            ToppingCategory::Cheese => "Cheese",
            ToppingCategory::Spices => "Spices/Herbs",
            ToppingCategory::Seafood => "Seafood",
        }
    }
}

/// An optional extra that can go on a pizza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topping {
    pub name: String,

    /// Extra price in roubles.
    #[serde(default = "default_topping_price")]
    pub price: u32,

    #[serde(default = "default_true")]
    pub is_active: bool,

    pub top_category: ToppingCategory,

    #[serde(default)]
    pub order: u32,
}

/// Fixed-price pizza with no size options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomaPizza {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub price: u32,

    #[serde(default = "default_weight")]
    pub weight: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, rename = "new")]
    pub is_new: bool,

    #[serde(default)]
    pub toppings: Vec<String>,
}

/// One purchasable size of a drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkVariant {
    pub size: DrinkSize,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub slug: String,
    pub name: String,
    pub category: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, rename = "new")]
    pub is_new: bool,

    #[serde(default)]
    pub variants: Vec<DrinkVariant>,
}

impl Drink {
    pub fn variant(&self, size: DrinkSize) -> Option<&DrinkVariant> {
        self.variants.iter().find(|v| v.size == size)
    }

    /// Smallest available variant, used as the drink's headline offer.
    pub fn first_variant(&self) -> Option<&DrinkVariant> {
        self.variants.iter().min_by_key(|v| v.size)
    }

    /// Sort variants S→M→L and keep the last entry for a repeated size.
    pub fn normalize_variants(&mut self) {
        let mut by_size: Vec<DrinkVariant> = Vec::with_capacity(self.variants.len());
        for variant in self.variants.drain(..) {
            by_size.retain(|v| v.size != variant.size);
            by_size.push(variant);
        }
        by_size.sort_by_key(|v| v.size);
        self.variants = by_size;
    }
}

fn default_true() -> bool {
    true
}

fn default_weight() -> u32 {
    400
}

fn default_topping_price() -> u32 {
    50
}
