use serde::{Deserialize, Serialize};

use crate::models::{DrinkSize, PizzaSize};

/// A named bundle of menu items with an optional fixed price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combo {
    pub slug: String,
    pub name: String,
    pub category: String,

    /// Overrides the sum of the lines when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,

    #[serde(default)]
    pub pizzas: Vec<ComboPizzaLine>,

    #[serde(default)]
    pub roma_pizzas: Vec<ComboRomaLine>,

    #[serde(default)]
    pub drinks: Vec<ComboDrinkLine>,
}

impl Combo {
    pub fn line_count(&self) -> usize {
        self.pizzas.len() + self.roma_pizzas.len() + self.drinks.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboPizzaLine {
    /// Slug of the pizza; `None` when the reference was cleared.
    pub pizza: Option<String>,

    #[serde(default = "default_pizza_size")]
    pub size: PizzaSize,

    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboRomaLine {
    pub roma_pizza: Option<String>,

    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboDrinkLine {
    pub drink: Option<String>,

    #[serde(default)]
    pub size: DrinkSize,

    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_pizza_size() -> PizzaSize {
    PizzaSize::S
}

fn default_quantity() -> u32 {
    1
}
