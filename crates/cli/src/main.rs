//! Shorefront CLI - storefront views over the cart and catalog.
//!
//! # Usage
//!
//! ```bash
//! # Write the demo catalog file
//! shorefront seed
//!
//! # Browse the drinks, cheapest first
//! shorefront browse --category Drinks --sort price
//!
//! # Search across names and descriptions
//! shorefront browse --search juice
//!
//! # Cart operations
//! shorefront cart add 5
//! shorefront cart set 5 3
//! shorefront cart show
//! shorefront cart clear
//! ```
//!
//! # Commands
//!
//! - `browse` - Run a catalog query and render one page
//! - `cart` - Mutate and display the persisted cart
//! - `seed` - Write the demo catalog file

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "shorefront")]
#[command(author, version, about = "Shorefront storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Browse {
        /// Category filter ("All" matches everything)
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Free-text search over names and descriptions
        #[arg(short, long, default_value = "")]
        search: String,

        /// Minimum price, inclusive
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Maximum price, inclusive
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Sort key (name, price, category)
        #[arg(long, default_value = "name")]
        sort: String,

        /// Sort direction (asc, desc)
        #[arg(long, default_value = "asc")]
        direction: String,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Write the demo catalog file
    Seed {
        /// Overwrite an existing catalog file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product to the cart
    Add {
        /// Product id from the catalog
        product_id: String,
    },
    /// Set the quantity of a cart line (0 removes it)
    Set {
        /// Product id from the catalog
        product_id: String,
        /// New quantity
        quantity: i64,
    },
    /// Remove a line from the cart
    Remove {
        /// Product id from the catalog
        product_id: String,
    },
    /// Show cart contents and total
    Show,
    /// Empty the cart
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Browse {
            category,
            search,
            min_price,
            max_price,
            sort,
            direction,
            page,
        } => commands::browse::run(&commands::browse::BrowseArgs {
            category,
            search,
            min_price,
            max_price,
            sort,
            direction,
            page,
        })?,
        Commands::Cart { action } => match action {
            CartAction::Add { product_id } => commands::cart::add(&product_id)?,
            CartAction::Set {
                product_id,
                quantity,
            } => commands::cart::set_quantity(&product_id, quantity)?,
            CartAction::Remove { product_id } => commands::cart::remove(&product_id)?,
            CartAction::Show => commands::cart::show()?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Seed { force } => commands::seed::run(force)?,
    }
    Ok(())
}
