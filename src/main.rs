use clap::Parser;
use std::path::Path;
use tracing::Level;

use pizzeria_menu_rs::catalog::{
    find_product, list_products, load_catalog, save_catalog, ListOptions,
};
use pizzeria_menu_rs::cli::{Cli, Command};
use pizzeria_menu_rs::error::Result;
use pizzeria_menu_rs::interface::{
    confirm_overwrite, display_categories, display_product_card, display_product_list,
    display_summary, price_list_rows, prompt_yes_no, write_price_list,
};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Categories => cmd_categories(&cli.file),
        Command::List {
            category,
            search,
            sort,
            json,
        } => cmd_list(&cli.file, &category, ListOptions { search, sort }, json),
        Command::Show { slug, json } => cmd_show(&cli.file, &slug, json),
        Command::Validate { normalize, yes } => cmd_validate(&cli.file, normalize, yes),
        Command::Export { out, yes } => cmd_export(&cli.file, &out, yes),
    }
}

/// List categories with product counts.
fn cmd_categories(file_path: &Path) -> Result<()> {
    let store = load_catalog(file_path)?;

    let mut rows = Vec::new();
    for category in store.categories() {
        let count = list_products(&store, &category.slug, &ListOptions::default())?.len();
        rows.push((category, count));
    }

    display_categories(&rows);
    Ok(())
}

/// List products of one category.
fn cmd_list(file_path: &Path, category: &str, options: ListOptions, json: bool) -> Result<()> {
    let store = load_catalog(file_path)?;
    let products = list_products(&store, category, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    let title = store
        .get_category(category)
        .map(|c| c.name.as_str())
        .unwrap_or(category);
    display_product_list(title, &products);
    Ok(())
}

/// Show a single product.
fn cmd_show(file_path: &Path, slug: &str, json: bool) -> Result<()> {
    let store = load_catalog(file_path)?;
    let card = find_product(&store, slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        display_product_card(&card);
    }
    Ok(())
}

/// Validate the catalog, print a summary, and optionally write it back normalized.
fn cmd_validate(file_path: &Path, normalize: bool, yes: bool) -> Result<()> {
    let store = load_catalog(file_path)?;

    display_summary(&store);
    println!("Catalog is valid.");

    if normalize {
        let prompt = format!("Rewrite {} with the normalized catalog?", file_path.display());
        if yes || prompt_yes_no(&prompt, true)? {
            save_catalog(file_path, &store)?;
            println!("Catalog saved.");
        } else {
            println!("Catalog left unchanged.");
        }
    }
    Ok(())
}

/// Export a CSV price list.
fn cmd_export(file_path: &Path, out: &Path, yes: bool) -> Result<()> {
    let store = load_catalog(file_path)?;
    let rows = price_list_rows(&store)?;

    if !confirm_overwrite(out, yes)? {
        println!("Export cancelled.");
        return Ok(());
    }

    write_price_list(&rows, out)?;
    println!("Wrote {} rows to {}", rows.len(), out.display());
    Ok(())
}
