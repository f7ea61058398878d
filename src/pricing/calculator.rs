use serde::Serialize;
use tracing::debug;

use crate::error::{MenuError, Result};
use crate::models::{Pizza, PizzaSize, PricingMode};
use crate::pricing::constants::{diameter_for_size, pizza_size_name};

/// Price, weight and diameter of one pizza size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeDescriptor {
    pub size: PizzaSize,
    pub display_name: &'static str,
    pub price: u32,
    pub weight: u32,
    pub diameter: u32,
}

/// Sizes a pizza can be ordered in, smallest first.
///
/// S is always offered. M, L and XL are offered only while their price
/// multiplier is above zero, in manual mode as well: a zero coefficient hides
/// the size even when a manual price has been entered for it.
pub fn available_sizes(pizza: &Pizza) -> Vec<PizzaSize> {
    PizzaSize::ALL
        .into_iter()
        .filter(|&size| is_size_available(pizza, size))
        .collect()
}

pub fn is_size_available(pizza: &Pizza, size: PizzaSize) -> bool {
    match pizza.multipliers.get(size) {
        None => true,
        Some(m) => m.price.is_positive(),
    }
}

fn ensure_available(pizza: &Pizza, size: PizzaSize) -> Result<()> {
    if is_size_available(pizza, size) {
        Ok(())
    } else {
        Err(MenuError::UnsupportedSize {
            slug: pizza.slug.clone(),
            size,
        })
    }
}

/// Price of `size` in roubles.
///
/// Auto mode truncates `base_price * multiplier` toward zero.
pub fn price_for_size(pizza: &Pizza, size: PizzaSize) -> Result<u32> {
    ensure_available(pizza, size)?;
    Ok(raw_price(pizza, size))
}

/// Weight of `size` in grams, same rules as [`price_for_size`].
pub fn weight_for_size(pizza: &Pizza, size: PizzaSize) -> Result<u32> {
    ensure_available(pizza, size)?;
    Ok(raw_weight(pizza, size))
}

fn raw_price(pizza: &Pizza, size: PizzaSize) -> u32 {
    let Some(multipliers) = pizza.multipliers.get(size) else {
        return pizza.base_price;
    };
    match &pizza.pricing {
        PricingMode::Auto => multipliers.price.apply(pizza.base_price),
        PricingMode::Manual(values) => values.get(size).map_or(pizza.base_price, |v| v.price),
    }
}

fn raw_weight(pizza: &Pizza, size: PizzaSize) -> u32 {
    let Some(multipliers) = pizza.multipliers.get(size) else {
        return pizza.base_weight;
    };
    match &pizza.pricing {
        PricingMode::Auto => multipliers.weight.apply(pizza.base_weight),
        PricingMode::Manual(values) => values.get(size).map_or(pizza.base_weight, |v| v.weight),
    }
}

pub fn describe_size(pizza: &Pizza, size: PizzaSize) -> Result<SizeDescriptor> {
    ensure_available(pizza, size)?;
    Ok(descriptor(pizza, size))
}

fn descriptor(pizza: &Pizza, size: PizzaSize) -> SizeDescriptor {
    SizeDescriptor {
        size,
        display_name: pizza_size_name(size),
        price: raw_price(pizza, size),
        weight: raw_weight(pizza, size),
        diameter: diameter_for_size(size),
    }
}

/// Size table for every available size, ordered S→XL.
pub fn describe_all_sizes(pizza: &Pizza) -> Vec<SizeDescriptor> {
    let sizes: Vec<SizeDescriptor> = available_sizes(pizza)
        .into_iter()
        .map(|size| descriptor(pizza, size))
        .collect();
    debug!(slug = %pizza.slug, sizes = sizes.len(), "described pizza sizes");
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Multiplier, SizeMultipliers, SizeScale, SizeValues};

    fn mult(value: f64) -> Multiplier {
        Multiplier::try_from(value).unwrap()
    }

    fn auto_pizza() -> Pizza {
        Pizza {
            slug: "margherita".to_string(),
            name: "Margherita".to_string(),
            category: "pizza".to_string(),
            image: None,
            is_new: false,
            is_active: true,
            toppings: vec![],
            base_price: 400,
            base_weight: 450,
            multipliers: SizeScale {
                m: SizeMultipliers { price: mult(1.3), weight: mult(1.4) },
                l: SizeMultipliers { price: mult(1.6), weight: mult(1.9) },
                xl: SizeMultipliers { price: mult(1.95), weight: mult(2.5) },
            },
            pricing: PricingMode::Auto,
        }
    }

    fn manual_pizza() -> Pizza {
        Pizza {
            pricing: PricingMode::Manual(SizeScale {
                m: SizeValues { price: 550, weight: 600 },
                l: SizeValues { price: 690, weight: 800 },
                xl: SizeValues { price: 810, weight: 1000 },
            }),
            ..auto_pizza()
        }
    }

    #[test]
    fn test_base_size_returns_base_values() {
        for pizza in [auto_pizza(), manual_pizza()] {
            assert_eq!(price_for_size(&pizza, PizzaSize::S).unwrap(), 400);
            assert_eq!(weight_for_size(&pizza, PizzaSize::S).unwrap(), 450);
        }
    }

    #[test]
    fn test_auto_price_truncates() {
        let pizza = auto_pizza();
        assert_eq!(price_for_size(&pizza, PizzaSize::M).unwrap(), 520);
        assert_eq!(price_for_size(&pizza, PizzaSize::L).unwrap(), 640);
        assert_eq!(price_for_size(&pizza, PizzaSize::XL).unwrap(), 780);
        // 450 * 1.4 = 630, 450 * 2.5 = 1125
        assert_eq!(weight_for_size(&pizza, PizzaSize::M).unwrap(), 630);
        assert_eq!(weight_for_size(&pizza, PizzaSize::XL).unwrap(), 1125);
    }

    #[test]
    fn test_auto_price_fractional_result() {
        let mut pizza = auto_pizza();
        pizza.base_price = 399;
        // 399 * 1.3 = 518.7
        assert_eq!(price_for_size(&pizza, PizzaSize::M).unwrap(), 518);
    }

    #[test]
    fn test_manual_values() {
        let pizza = manual_pizza();
        assert_eq!(price_for_size(&pizza, PizzaSize::M).unwrap(), 550);
        assert_eq!(price_for_size(&pizza, PizzaSize::XL).unwrap(), 810);
        assert_eq!(weight_for_size(&pizza, PizzaSize::L).unwrap(), 800);
    }

    #[test]
    fn test_diameters() {
        let diameters: Vec<u32> = PizzaSize::ALL.into_iter().map(diameter_for_size).collect();
        assert_eq!(diameters, vec![25, 30, 35, 40]);
    }

    #[test]
    fn test_zero_multiplier_hides_size() {
        let mut pizza = auto_pizza();
        pizza.multipliers.l.price = Multiplier::ZERO;
        assert_eq!(
            available_sizes(&pizza),
            vec![PizzaSize::S, PizzaSize::M, PizzaSize::XL]
        );
        assert!(matches!(
            price_for_size(&pizza, PizzaSize::L),
            Err(MenuError::UnsupportedSize { size: PizzaSize::L, .. })
        ));
    }

    #[test]
    fn test_zero_multiplier_hides_manual_size() {
        let mut pizza = manual_pizza();
        pizza.multipliers.xl.price = Multiplier::ZERO;
        pizza.multipliers.m.price = Multiplier::ZERO;

        assert_eq!(available_sizes(&pizza), vec![PizzaSize::S, PizzaSize::L]);
        assert!(describe_size(&pizza, PizzaSize::XL).is_err());
        assert!(weight_for_size(&pizza, PizzaSize::M).is_err());
    }

    #[test]
    fn test_describe_size() {
        let pizza = auto_pizza();
        let desc = describe_size(&pizza, PizzaSize::M).unwrap();
        assert_eq!(
            desc,
            SizeDescriptor {
                size: PizzaSize::M,
                display_name: "Medium (30 cm)",
                price: 520,
                weight: 630,
                diameter: 30,
            }
        );
    }

    #[test]
    fn test_describe_all_sizes_ordered() {
        let mut pizza = manual_pizza();
        pizza.multipliers.m.price = Multiplier::ZERO;

        let table = describe_all_sizes(&pizza);
        let sizes: Vec<PizzaSize> = table.iter().map(|d| d.size).collect();
        assert_eq!(sizes, vec![PizzaSize::S, PizzaSize::L, PizzaSize::XL]);
        assert_eq!(table[0].price, 400);
        assert_eq!(table[2].price, 810);
        assert_eq!(table[2].diameter, 40);
    }
}
