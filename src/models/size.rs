use std::fmt;

use serde::{Deserialize, Serialize};

/// Pizza sizes, smallest first. S is the base size whose values live on the pizza itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PizzaSize {
    S,
    M,
    L,
    XL,
}

impl PizzaSize {
    pub const ALL: [PizzaSize; 4] = [PizzaSize::S, PizzaSize::M, PizzaSize::L, PizzaSize::XL];

    /// Short code used in data files ("S", "M", "L", "XL").
    pub fn code(self) -> &'static str {
        match self {
            PizzaSize::S => "S",
            PizzaSize::M => "M",
            PizzaSize::L => "L",
            PizzaSize::XL => "XL",
        }
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

/// Drink sizes. Each maps to a fixed volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum DrinkSize {
    #[default]
    S,
    M,
    L,
}

impl DrinkSize {
    pub fn code(self) -> &'static str {
        match self {
            DrinkSize::S => "S",
            DrinkSize::M => "M",
            DrinkSize::L => "L",
        }
    }
}

impl fmt::Display for DrinkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pizza_size_order() {
        let mut sizes = vec![PizzaSize::XL, PizzaSize::S, PizzaSize::L, PizzaSize::M];
        sizes.sort();
        assert_eq!(sizes, PizzaSize::ALL.to_vec());
    }

    #[test]
    fn test_size_codes_match_serde() {
        for size in PizzaSize::ALL {
            let json = serde_json::to_string(&size).unwrap();
            assert_eq!(json, format!("\"{}\"", size.code()));
        }
        let parsed: DrinkSize = serde_json::from_str("\"L\"").unwrap();
        assert_eq!(parsed, DrinkSize::L);
    }
}
