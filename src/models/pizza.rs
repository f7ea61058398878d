use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};
use crate::models::{Multiplier, PizzaSize};

/// One value per non-base size (M, L, XL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeScale<T> {
    pub m: T,
    pub l: T,
    pub xl: T,
}

impl<T> SizeScale<T> {
    /// Value for a non-base size; `None` for S.
    pub fn get(&self, size: PizzaSize) -> Option<&T> {
        match size {
            PizzaSize::S => None,
            PizzaSize::M => Some(&self.m),
            PizzaSize::L => Some(&self.l),
            PizzaSize::XL => Some(&self.xl),
        }
    }
}

/// Price and weight coefficients for one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeMultipliers {
    pub price: Multiplier,
    pub weight: Multiplier,
}

/// Explicit price and weight for one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeValues {
    pub price: u32,
    pub weight: u32,
}

/// How non-base sizes are priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingMode {
    /// Derived from the base values and the size multipliers.
    Auto,
    /// Entered by hand for every non-base size.
    Manual(SizeScale<SizeValues>),
}

/// A validated pizza.
///
/// Built from a [`PizzaRecord`] by [`Pizza::from_record`]; a manual-mode
/// pizza always carries a complete price/weight table.
#[derive(Debug, Clone, PartialEq)]
pub struct Pizza {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub image: Option<String>,
    pub is_new: bool,
    pub is_active: bool,
    pub toppings: Vec<String>,
    /// Price of size S in roubles.
    pub base_price: u32,
    /// Weight of size S in grams.
    pub base_weight: u32,
    pub multipliers: SizeScale<SizeMultipliers>,
    pub pricing: PricingMode,
}

/// On-disk form of a pizza, one flat field per editable value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaRecord {
    pub slug: String,
    pub name: String,
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub new: bool,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub toppings: Vec<String>,

    pub base_price_s: u32,

    #[serde(default = "default_weight")]
    pub base_weight_s: u32,

    #[serde(default = "default_true")]
    pub auto_calculate: bool,

    #[serde(default)]
    pub price_multiplier_m: Multiplier,
    #[serde(default)]
    pub weight_multiplier_m: Multiplier,
    #[serde(default)]
    pub price_multiplier_l: Multiplier,
    #[serde(default)]
    pub weight_multiplier_l: Multiplier,
    #[serde(default)]
    pub price_multiplier_xl: Multiplier,
    #[serde(default)]
    pub weight_multiplier_xl: Multiplier,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_m: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_l: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_xl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_m: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_l: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_xl: Option<u32>,
}

fn default_true() -> bool {
    true
}

fn default_weight() -> u32 {
    400
}

impl Pizza {
    /// Validate a record into a pizza.
    ///
    /// Manual mode requires all six per-size values; every missing one is
    /// reported in a single [`MenuError::Configuration`]. Manual values on an
    /// auto-mode record are ignored.
    pub fn from_record(record: PizzaRecord) -> Result<Self> {
        let pricing = if record.auto_calculate {
            PricingMode::Auto
        } else {
            let fields = [
                ("price_m", record.price_m),
                ("price_l", record.price_l),
                ("price_xl", record.price_xl),
                ("weight_m", record.weight_m),
                ("weight_l", record.weight_l),
                ("weight_xl", record.weight_xl),
            ];
            let missing: Vec<&'static str> = fields
                .iter()
                .filter(|(_, value)| value.is_none())
                .map(|(name, _)| *name)
                .collect();

            match fields.map(|(_, value)| value) {
                [Some(pm), Some(pl), Some(pxl), Some(wm), Some(wl), Some(wxl)] => {
                    PricingMode::Manual(SizeScale {
                        m: SizeValues { price: pm, weight: wm },
                        l: SizeValues { price: pl, weight: wl },
                        xl: SizeValues { price: pxl, weight: wxl },
                    })
                }
                _ => {
                    return Err(MenuError::Configuration {
                        slug: record.slug,
                        fields: missing,
                    });
                }
            }
        };

        Ok(Self {
            slug: record.slug,
            name: record.name,
            category: record.category,
            image: record.image,
            is_new: record.new,
            is_active: record.is_active,
            toppings: record.toppings,
            base_price: record.base_price_s,
            base_weight: record.base_weight_s,
            multipliers: SizeScale {
                m: SizeMultipliers {
                    price: record.price_multiplier_m,
                    weight: record.weight_multiplier_m,
                },
                l: SizeMultipliers {
                    price: record.price_multiplier_l,
                    weight: record.weight_multiplier_l,
                },
                xl: SizeMultipliers {
                    price: record.price_multiplier_xl,
                    weight: record.weight_multiplier_xl,
                },
            },
            pricing,
        })
    }

    #[inline]
    pub fn is_manual(&self) -> bool {
        matches!(self.pricing, PricingMode::Manual(_))
    }
}

impl From<&Pizza> for PizzaRecord {
    fn from(pizza: &Pizza) -> Self {
        let manual = match &pizza.pricing {
            PricingMode::Auto => None,
            PricingMode::Manual(values) => Some(values),
        };
        Self {
            slug: pizza.slug.clone(),
            name: pizza.name.clone(),
            category: pizza.category.clone(),
            image: pizza.image.clone(),
            new: pizza.is_new,
            is_active: pizza.is_active,
            toppings: pizza.toppings.clone(),
            base_price_s: pizza.base_price,
            base_weight_s: pizza.base_weight,
            auto_calculate: manual.is_none(),
            price_multiplier_m: pizza.multipliers.m.price,
            weight_multiplier_m: pizza.multipliers.m.weight,
            price_multiplier_l: pizza.multipliers.l.price,
            weight_multiplier_l: pizza.multipliers.l.weight,
            price_multiplier_xl: pizza.multipliers.xl.price,
            weight_multiplier_xl: pizza.multipliers.xl.weight,
            price_m: manual.map(|v| v.m.price),
            price_l: manual.map(|v| v.l.price),
            price_xl: manual.map(|v| v.xl.price),
            weight_m: manual.map(|v| v.m.weight),
            weight_l: manual.map(|v| v.l.weight),
            weight_xl: manual.map(|v| v.xl.weight),
        }
    }
}
