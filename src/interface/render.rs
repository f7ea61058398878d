use crate::catalog::{CatalogStore, ProductCard};
use crate::models::Category;
use crate::pricing::drink_size_name;

/// Display categories with the number of products in each.
pub fn display_categories(categories: &[(&Category, usize)]) {
    if categories.is_empty() {
        println!("No categories defined.");
        return;
    }

    println!();
    println!("=== Categories ===");
    println!();

    let max_name_len = categories.iter().map(|(c, _)| c.name.len()).max().unwrap_or(10);

    for (category, count) in categories {
        println!(
            "  {:<width$}  {:<20} {:>3} products",
            category.name,
            format!("[{}]", category.slug),
            count,
            width = max_name_len
        );
    }

    println!();
}

/// Display a category listing as a table.
pub fn display_product_list(title: &str, products: &[ProductCard]) {
    if products.is_empty() {
        println!("{}: (no products)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, products.len());
    println!();

    let max_name_len = products.iter().map(|p| p.name().len()).max().unwrap_or(10);

    for (i, product) in products.iter().enumerate() {
        let detail = match product {
            ProductCard::Pizza(c) => format!("from {} cm, {} g, {} sizes", c.diameter, c.weight, c.sizes.len()),
            ProductCard::Roma(c) => format!("{} g", c.weight),
            ProductCard::Drink(c) => drink_size_name(c.size).to_string(),
            ProductCard::Combo(_) => "combo".to_string(),
        };

        println!(
            "{:>3}. {:<width$} - {:>6} RUB | {:<6} {}",
            i + 1,
            product.name(),
            product.price(),
            product.kind(),
            detail,
            width = max_name_len
        );
    }

    println!();
}

/// Display a single product, including the size table for pizzas.
pub fn display_product_card(card: &ProductCard) {
    println!();
    println!("=== {} ===", card.name());
    println!("Slug: {}", card.slug());

    match card {
        ProductCard::Pizza(c) => {
            if !c.toppings.is_empty() {
                println!("Toppings: {}", c.toppings.join(", "));
            }
            println!();
            println!("{:<4} {:<22} {:>8} {:>8} {:>6}", "Size", "", "Price", "Weight", "Diam.");
            for size in &c.sizes {
                let marker = if size.size == c.current_size { "*" } else { " " };
                println!(
                    "{:<4} {:<22} {:>8} {:>6} g {:>3} cm {}",
                    size.size.code(), size.display_name, size.price, size.weight, size.diameter, marker
                );
            }
        }
        ProductCard::Roma(c) => {
            if !c.toppings.is_empty() {
                println!("Toppings: {}", c.toppings.join(", "));
            }
            println!("Price: {} RUB, weight: {} g", c.price, c.weight);
        }
        ProductCard::Drink(c) => {
            println!("Price: {} RUB, {} ({} ml)", c.price, drink_size_name(c.size), c.volume);
        }
        ProductCard::Combo(c) => {
            println!("Combo price: {} RUB", c.price);
        }
    }

    println!();
}

/// Display counts for a freshly validated catalog.
pub fn display_summary(store: &CatalogStore) {
    let manual = store.pizzas().iter().filter(|p| p.is_manual()).count();
    let inactive = store.pizzas().iter().filter(|p| !p.is_active).count();

    println!("--- Catalog ---");
    println!("Categories: {}", store.category_count());
    println!("Toppings: {}", store.topping_count());
    println!(
        "Pizzas: {} ({} manual pricing, {} inactive)",
        store.pizzas().len(),
        manual,
        inactive
    );
    println!("Roma pizzas: {}", store.roma_pizzas().len());
    println!("Drinks: {}", store.drinks().len());
    println!("Combos: {}", store.combos().len());

    let toppings = store.toppings();
    if !toppings.is_empty() {
        println!();
        println!("--- Toppings ---");
        for topping in toppings {
            let status = if topping.is_active { "" } else { " (inactive)" };
            println!(
                "  {} +{} RUB [{}]{}",
                topping.name,
                topping.price,
                topping.top_category.display_name(),
                status
            );
        }
    }
}
