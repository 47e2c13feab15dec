use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shopkeep")]
#[command(about = "Inventory and order tracking for a small storefront", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to ./.shopkeep if present, else the
    /// platform data dir)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Session date, YYYY-MM-DD (defaults to today)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all products
    #[command(alias = "ls")]
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search products by name (case-insensitive substring)
    Search {
        query: String,

        #[arg(long)]
        json: bool,
    },

    /// Place an order
    Order {
        /// Product id (e.g. PROD-1a2b3c4d)
        #[arg(long)]
        product: String,

        /// Quantity to order; 0 backs out without ordering
        #[arg(long)]
        quantity: u64,

        /// Customer name
        #[arg(long)]
        name: String,

        /// Customer address
        #[arg(long)]
        address: String,
    },

    /// Register a new product (admin)
    Add {
        name: String,
        price: u64,
        stock: u64,

        /// Admin code
        #[arg(long)]
        code: String,
    },

    /// Rename a product (admin)
    Rename {
        id: String,
        new_name: String,

        /// Admin code
        #[arg(long)]
        code: String,
    },

    /// Change a product's price (admin)
    Reprice {
        id: String,
        price: u64,

        /// Admin code
        #[arg(long)]
        code: String,
    },

    /// Set a product's stock level (admin)
    Restock {
        id: String,
        stock: u64,

        /// Admin code
        #[arg(long)]
        code: String,
    },

    /// Remove a product from the catalog (admin)
    Discontinue {
        id: String,

        /// Admin code
        #[arg(long)]
        code: String,
    },

    /// List all orders (admin)
    Orders {
        /// Admin code
        #[arg(long)]
        code: String,

        #[arg(long)]
        json: bool,
    },

    /// Cancel an order; stock is not restored (admin)
    Cancel {
        order_id: String,

        /// Admin code
        #[arg(long)]
        code: String,
    },

    /// Show per-product sales and total revenue (admin)
    Sales {
        /// Admin code
        #[arg(long)]
        code: String,

        #[arg(long)]
        json: bool,
    },
}
