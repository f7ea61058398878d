mod combo;
mod menu;
mod multiplier;
mod pizza;
mod size;

pub use combo::{Combo, ComboDrinkLine, ComboPizzaLine, ComboRomaLine};
pub use menu::{Category, Drink, DrinkVariant, RomaPizza, Topping, ToppingCategory};
pub use multiplier::Multiplier;
pub use pizza::{Pizza, PizzaRecord, PricingMode, SizeMultipliers, SizeScale, SizeValues};
pub use size::{DrinkSize, PizzaSize};
