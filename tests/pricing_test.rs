use pizzeria_menu_rs::error::MenuError;
use pizzeria_menu_rs::models::{
    DrinkSize, DrinkVariant, Pizza, PizzaRecord, PizzaSize, RomaPizza,
};
use pizzeria_menu_rs::pricing::{
    available_sizes, bundle_final_price, bundle_items_total, describe_all_sizes,
    price_for_size, weight_for_size, BundleLine, LineItem,
};

fn make_record(base_price: u32, m: f64, l: f64, xl: f64) -> PizzaRecord {
    serde_json::from_value(serde_json::json!({
        "slug": "test-pizza",
        "name": "Test Pizza",
        "category": "pizza",
        "base_price_s": base_price,
        "base_weight_s": 500,
        "price_multiplier_m": m,
        "weight_multiplier_m": m,
        "price_multiplier_l": l,
        "weight_multiplier_l": l,
        "price_multiplier_xl": xl,
        "weight_multiplier_xl": xl,
    }))
    .unwrap()
}

fn make_manual_record(base_price: u32, m: f64, l: f64, xl: f64) -> PizzaRecord {
    PizzaRecord {
        auto_calculate: false,
        price_m: Some(610),
        price_l: Some(740),
        price_xl: Some(880),
        weight_m: Some(600),
        weight_l: Some(760),
        weight_xl: Some(950),
        ..make_record(base_price, m, l, xl)
    }
}

#[test]
fn test_auto_base_size_is_base_price() {
    for base in [0, 1, 250, 400, 999, 12_345] {
        let pizza = Pizza::from_record(make_record(base, 1.3, 1.6, 2.0)).unwrap();
        assert_eq!(price_for_size(&pizza, PizzaSize::S).unwrap(), base);
        assert_eq!(weight_for_size(&pizza, PizzaSize::S).unwrap(), 500);
    }
}

#[test]
fn test_auto_sizes_truncate_base_times_multiplier() {
    // (base, multiplier, floor(base * multiplier)) worked out by hand.
    let cases = [
        (399, 1.3, 518), // 518.7
        (1234, 1.15, 1419), // 1419.1
        (99, 1.99, 197), // 197.01
        (1, 1.99, 1),
        (1, 0.01, 0),
        (400, 2.5, 1000),
        (400, 1.15, 460),
        (333, 1.5, 499), // 499.5
        (100, 0.29, 29), // 28.999... in f64
    ];

    for (base, mult, expected) in cases {
        let pizza = Pizza::from_record(make_record(base, mult, mult, mult)).unwrap();
        for size in [PizzaSize::M, PizzaSize::L, PizzaSize::XL] {
            assert_eq!(
                price_for_size(&pizza, size).unwrap(),
                expected,
                "base {} x {} at {}",
                base,
                mult,
                size
            );
        }
    }
}

#[test]
fn test_medium_price_example() {
    let pizza = Pizza::from_record(make_record(400, 1.3, 1.6, 1.9)).unwrap();
    assert_eq!(price_for_size(&pizza, PizzaSize::M).unwrap(), 520);
}

#[test]
fn test_manual_mode_zero_multiplier_hides_size() {
    let pizza = Pizza::from_record(make_manual_record(450, 1.3, 0.0, 1.9)).unwrap();

    assert_eq!(
        available_sizes(&pizza),
        vec![PizzaSize::S, PizzaSize::M, PizzaSize::XL]
    );
    assert!(matches!(
        price_for_size(&pizza, PizzaSize::L),
        Err(MenuError::UnsupportedSize { size: PizzaSize::L, .. })
    ));

    let prices: Vec<u32> = describe_all_sizes(&pizza).iter().map(|d| d.price).collect();
    assert_eq!(prices, vec![450, 610, 880]);
}

#[test]
fn test_manual_mode_requires_every_field() {
    let fields = ["price_m", "price_l", "price_xl", "weight_m", "weight_l", "weight_xl"];

    for field in fields {
        let mut record = make_manual_record(450, 1.3, 1.6, 1.9);
        match field {
            "price_m" => record.price_m = None,
            "price_l" => record.price_l = None,
            "price_xl" => record.price_xl = None,
            "weight_m" => record.weight_m = None,
            "weight_l" => record.weight_l = None,
            _ => record.weight_xl = None,
        }

        match Pizza::from_record(record) {
            Err(MenuError::Configuration { fields, .. }) => assert_eq!(fields, vec![field]),
            other => panic!("expected configuration error for {}, got {:?}", field, other),
        }
    }
}

#[test]
fn test_bundle_fixed_price_overrides_lines() {
    let roma = RomaPizza {
        slug: "roma".to_string(),
        name: "Roma".to_string(),
        category: "pizza".to_string(),
        price: 250,
        weight: 400,
        image: None,
        is_new: false,
        toppings: vec![],
    };
    let lines = [BundleLine::new(Some(LineItem::RomaPizza(&roma)), 2)];

    assert_eq!(bundle_items_total(&lines).unwrap(), 500);
    assert_eq!(bundle_final_price(Some(380), &lines).unwrap(), 380);
}

#[test]
fn test_bundle_items_total_example() {
    // floor(300 * 1.5) = 450 for size M
    let pizza = Pizza::from_record(make_record(300, 1.5, 1.8, 2.1)).unwrap();
    let drink = DrinkVariant { size: DrinkSize::S, price: 120 };

    let lines = [
        BundleLine::new(Some(LineItem::Pizza { pizza: &pizza, size: PizzaSize::M }), 2),
        BundleLine::new(Some(LineItem::Drink(&drink)), 1),
    ];
    assert_eq!(bundle_items_total(&lines).unwrap(), 1020);
    assert_eq!(bundle_final_price(None, &lines).unwrap(), 1020);
}

#[test]
fn test_bundle_null_pizza_line_is_zero() {
    let drink = DrinkVariant { size: DrinkSize::M, price: 150 };
    let lines = [
        BundleLine::new(None, 4),
        BundleLine::new(Some(LineItem::Drink(&drink)), 1),
    ];
    assert_eq!(bundle_items_total(&lines).unwrap(), 150);
}
