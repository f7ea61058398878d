use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::SortOrder;

/// Pizzeria menu: browse the catalog, inspect size pricing and export price lists.
#[derive(Parser, Debug)]
#[command(name = "pizzeria_menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog JSON file.
    #[arg(short, long, default_value = "menu.json")]
    pub file: PathBuf,

    /// Log debug details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// List categories with their product counts.
    #[default]
    Categories,

    /// List the products of a category.
    List {
        /// Category slug.
        category: String,

        /// Case-insensitive search in names, toppings and descriptions.
        #[arg(short, long)]
        search: Option<String>,

        /// Order products by price within each group.
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show one product with its size table.
    Show {
        /// Product slug.
        slug: String,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Validate the catalog file and print a summary.
    Validate {
        /// Rewrite the file in normalized form after validating.
        #[arg(long)]
        normalize: bool,

        /// Rewrite without asking.
        #[arg(short, long)]
        yes: bool,
    },

    /// Export a CSV price list.
    Export {
        /// Output CSV file.
        #[arg(short, long, default_value = "price_list.csv")]
        out: PathBuf,

        /// Overwrite without asking.
        #[arg(short, long)]
        yes: bool,
    },
}
