//! Display-ready product summaries, one shape per item kind.

use serde::Serialize;

use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::models::{Combo, Drink, DrinkSize, DrinkVariant, Pizza, PizzaSize, RomaPizza};
use crate::pricing::{describe_all_sizes, diameter_for_size, volume_for_size, SizeDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProductCard {
    Pizza(PizzaCard),
    Roma(RomaCard),
    Drink(DrinkCard),
    Combo(ComboCard),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PizzaCard {
    pub slug: String,
    pub name: String,
    pub image: Option<String>,
    pub price: u32,
    pub weight: u32,
    pub diameter: u32,
    pub current_size: PizzaSize,
    pub sizes: Vec<SizeDescriptor>,
    pub toppings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomaCard {
    pub slug: String,
    pub name: String,
    pub price: u32,
    pub weight: u32,
    pub image: Option<String>,
    pub toppings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrinkCard {
    pub slug: String,
    pub name: String,
    pub price: u32,
    /// Volume in millilitres.
    pub volume: u32,
    pub size: DrinkSize,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComboCard {
    pub slug: String,
    pub name: String,
    pub price: u32,
}

impl ProductCard {
    pub fn slug(&self) -> &str {
        match self {
            ProductCard::Pizza(c) => &c.slug,
            ProductCard::Roma(c) => &c.slug,
            ProductCard::Drink(c) => &c.slug,
            ProductCard::Combo(c) => &c.slug,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ProductCard::Pizza(c) => &c.name,
            ProductCard::Roma(c) => &c.name,
            ProductCard::Drink(c) => &c.name,
            ProductCard::Combo(c) => &c.name,
        }
    }

    /// Headline price (smallest size for pizzas and drinks).
    pub fn price(&self) -> u32 {
        match self {
            ProductCard::Pizza(c) => c.price,
            ProductCard::Roma(c) => c.price,
            ProductCard::Drink(c) => c.price,
            ProductCard::Combo(c) => c.price,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ProductCard::Pizza(_) => "pizza",
            ProductCard::Roma(_) => "roma",
            ProductCard::Drink(_) => "drink",
            ProductCard::Combo(_) => "combo",
        }
    }
}

/// Pizza card; headline values come from the first (smallest) size.
pub fn map_pizza(pizza: &Pizza) -> ProductCard {
    let sizes = describe_all_sizes(pizza);
    let (current_size, price, weight, diameter) = match sizes.first() {
        Some(d) => (d.size, d.price, d.weight, d.diameter),
        None => (
            PizzaSize::S,
            pizza.base_price,
            pizza.base_weight,
            diameter_for_size(PizzaSize::S),
        ),
    };

    ProductCard::Pizza(PizzaCard {
        slug: pizza.slug.clone(),
        name: pizza.name.clone(),
        image: pizza.image.clone(),
        price,
        weight,
        diameter,
        current_size,
        sizes,
        toppings: pizza.toppings.clone(),
    })
}

pub fn map_roma_pizza(roma: &RomaPizza) -> ProductCard {
    ProductCard::Roma(RomaCard {
        slug: roma.slug.clone(),
        name: roma.name.clone(),
        price: roma.price,
        weight: roma.weight,
        image: roma.image.clone(),
        toppings: roma.toppings.clone(),
    })
}

/// Card for one drink variant; the slug is the drink's.
pub fn map_drink(drink: &Drink, variant: &DrinkVariant) -> ProductCard {
    ProductCard::Drink(DrinkCard {
        slug: drink.slug.clone(),
        name: drink.name.clone(),
        price: variant.price,
        volume: volume_for_size(variant.size),
        size: variant.size,
        image: drink.image.clone(),
    })
}

pub fn map_combo(store: &CatalogStore, combo: &Combo) -> Result<ProductCard> {
    Ok(ProductCard::Combo(ComboCard {
        slug: combo.slug.clone(),
        name: combo.name.clone(),
        price: store.combo_price(combo)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PizzaRecord;

    #[test]
    fn test_pizza_card_serializes_with_type_tag() {
        let record: PizzaRecord = serde_json::from_value(serde_json::json!({
            "slug": "margherita",
            "name": "Margherita",
            "category": "pizza",
            "base_price_s": 400,
            "base_weight_s": 450,
            "price_multiplier_m": 1.3,
            "price_multiplier_l": 0,
            "price_multiplier_xl": 0,
        }))
        .unwrap();
        let card = map_pizza(&Pizza::from_record(record).unwrap());

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["type"], "pizza");
        assert_eq!(json["price"], 400);
        assert_eq!(json["diameter"], 25);
        assert_eq!(json["current_size"], "S");
        assert_eq!(json["sizes"].as_array().unwrap().len(), 2);
        assert_eq!(json["sizes"][1]["price"], 520);
        assert_eq!(json["sizes"][1]["display_name"], "Medium (30 cm)");
    }

    #[test]
    fn test_drink_card_uses_variant() {
        let drink = Drink {
            slug: "juice".to_string(),
            name: "Orange Juice".to_string(),
            category: "drinks".to_string(),
            description: "Fresh".to_string(),
            image: None,
            is_new: true,
            variants: vec![],
        };
        let variant = DrinkVariant { size: DrinkSize::L, price: 210 };
        let card = map_drink(&drink, &variant);

        assert_eq!(card.kind(), "drink");
        assert_eq!(card.price(), 210);
        match card {
            ProductCard::Drink(c) => assert_eq!(c.volume, 1000),
            other => panic!("unexpected card: {:?}", other),
        }
    }
}
