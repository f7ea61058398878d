use crate::models::{DrinkSize, PizzaSize};

/// Pizza diameter in centimetres per size.
pub const DIAMETER_S_CM: u32 = 25;
pub const DIAMETER_M_CM: u32 = 30;
pub const DIAMETER_L_CM: u32 = 35;
pub const DIAMETER_XL_CM: u32 = 40;

/// Drink volume in millilitres per size.
pub const VOLUME_S_ML: u32 = 300;
pub const VOLUME_M_ML: u32 = 500;
pub const VOLUME_L_ML: u32 = 1000;

/// Diameter lookup; no per-pizza override exists.
pub fn diameter_for_size(size: PizzaSize) -> u32 {
    match size {
        PizzaSize::S => DIAMETER_S_CM,
        PizzaSize::M => DIAMETER_M_CM,
        PizzaSize::L => DIAMETER_L_CM,
        PizzaSize::XL => DIAMETER_XL_CM,
    }
}

pub fn volume_for_size(size: DrinkSize) -> u32 {
    match size {
        DrinkSize::S => VOLUME_S_ML,
        DrinkSize::M => VOLUME_M_ML,
        DrinkSize::L => VOLUME_L_ML,
    }
}

/// Human-readable label shown next to a pizza size.
pub fn pizza_size_name(size: PizzaSize) -> &'static str {
    match size {
        PizzaSize::S => "Small (25 cm)",
        PizzaSize::M => "Medium (30 cm)",
        PizzaSize::L => "Large (35 cm)",
        PizzaSize::XL => "Extra large (40 cm)",
    }
}

pub fn drink_size_name(size: DrinkSize) -> &'static str {
    match size {
        DrinkSize::S => "Small (0.3 l)",
        DrinkSize::M => "Medium (0.5 l)",
        DrinkSize::L => "Large (1 l)",
    }
}
