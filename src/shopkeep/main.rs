use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shopkeep::api::{CmdMessage, MessageLevel, OrderRequest, ProductChange, ShopApi};
use shopkeep::catalog::Catalog;
use shopkeep::config::ShopConfig;
use shopkeep::error::Result;
use shopkeep::ledger::{OrderLedger, ProductSales};
use shopkeep::model::{Order, OrderId, Product, ProductId};
use shopkeep::store::fs::FileStore;
use shopkeep::store::{DataStore, ShopState};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ShopApi<FileStore>,
    config: ShopConfig,
    session_date: NaiveDate,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::List { json } => handle_list(&ctx, json),
        Commands::Search { query, json } => handle_search(&ctx, &query, json),
        Commands::Order {
            product,
            quantity,
            name,
            address,
        } => handle_order(&mut ctx, product, quantity, name, address),
        Commands::Add {
            name,
            price,
            stock,
            code,
        } => {
            ctx.config.verify_code(&code)?;
            let result = ctx.api.register_product(&name, price, stock)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Rename { id, new_name, code } => {
            ctx.config.verify_code(&code)?;
            let result = ctx
                .api
                .update_product(&ProductId::from(id), ProductChange::Rename(new_name))?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Reprice { id, price, code } => {
            ctx.config.verify_code(&code)?;
            let result = ctx
                .api
                .update_product(&ProductId::from(id), ProductChange::Reprice(price))?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Restock { id, stock, code } => {
            ctx.config.verify_code(&code)?;
            let result = ctx
                .api
                .update_product(&ProductId::from(id), ProductChange::Restock(stock))?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Discontinue { id, code } => {
            ctx.config.verify_code(&code)?;
            let result = ctx.api.discontinue_product(&ProductId::from(id))?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Orders { code, json } => {
            ctx.config.verify_code(&code)?;
            handle_orders(&ctx, json)
        }
        Commands::Cancel { order_id, code } => {
            ctx.config.verify_code(&code)?;
            let result = ctx.api.cancel_order(&OrderId::from(order_id))?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Sales { code, json } => {
            ctx.config.verify_code(&code)?;
            handle_sales(&ctx, json)
        }
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.dir.clone());
    let config = match ShopConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format!("Warning: config not loaded: {}", e).yellow());
            ShopConfig::default()
        }
    };
    let store = FileStore::new(data_dir);

    // A malformed snapshot is reported but never fatal: the session starts
    // with that collection empty.
    let catalog = match store.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{}", format!("Warning: catalog not loaded: {}", e).yellow());
            Catalog::new()
        }
    };
    let ledger = match store.load_ledger() {
        Ok(ledger) => ledger,
        Err(e) => {
            eprintln!("{}", format!("Warning: orders not loaded: {}", e).yellow());
            OrderLedger::new()
        }
    };

    let session_date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let api = ShopApi::new(store, ShopState::new(catalog, ledger), config.date_policy);

    Ok(AppContext {
        api,
        config,
        session_date,
    })
}

fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    let local = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".shopkeep");
    if local.exists() {
        return local;
    }
    match ProjectDirs::from("com", "shopkeep", "shopkeep") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => local,
    }
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_products()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.products)?);
        return Ok(());
    }
    print_products(&result.products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str, json: bool) -> Result<()> {
    let result = ctx.api.search_products(query)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.products)?);
        return Ok(());
    }
    print_products(&result.products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_order(
    ctx: &mut AppContext,
    product: String,
    quantity: u64,
    name: String,
    address: String,
) -> Result<()> {
    // Quantity zero is the operator backing out, not an error.
    if quantity == 0 {
        println!("Order cancelled.");
        return Ok(());
    }
    let result = ctx.api.place_order(OrderRequest {
        product_id: ProductId::from(product),
        quantity,
        customer_name: name,
        customer_address: address,
        order_date: ctx.session_date,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_orders(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_orders()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.orders)?);
        return Ok(());
    }
    print_orders(&result.orders);
    Ok(())
}

fn handle_sales(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.sales_report()?;
    if json {
        let report = serde_json::json!({
            "by_product": result.sales,
            "total_revenue": result.total_revenue,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print_sales(&result.sales, result.total_revenue.unwrap_or(0));
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const ID_WIDTH: usize = 15;
const NAME_WIDTH: usize = 22;
const NUM_WIDTH: usize = 10;

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }
    println!(
        "{}{}{}{}",
        pad_cell("ID", ID_WIDTH).bold(),
        pad_cell("NAME", NAME_WIDTH).bold(),
        pad_cell("PRICE", NUM_WIDTH).bold(),
        pad_cell("STOCK", NUM_WIDTH).bold()
    );
    println!("{}", "-".repeat(ID_WIDTH + NAME_WIDTH + 2 * NUM_WIDTH));
    for product in products {
        let stock = pad_cell(&product.stock.to_string(), NUM_WIDTH);
        let stock = if product.stock == 0 {
            stock.red().to_string()
        } else {
            stock
        };
        println!(
            "{}{}{}{}",
            pad_cell(product.id.as_str(), ID_WIDTH),
            pad_cell(&product.name, NAME_WIDTH),
            pad_cell(&product.price.to_string(), NUM_WIDTH),
            stock
        );
    }
}

fn print_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("No orders found.");
        return;
    }
    println!(
        "{}{}{}{}{}{}",
        pad_cell("ORDER", ID_WIDTH).bold(),
        pad_cell("PRODUCT", NAME_WIDTH).bold(),
        pad_cell("PRICE", NUM_WIDTH).bold(),
        pad_cell("QTY", 6).bold(),
        pad_cell("CUSTOMER", 14).bold(),
        pad_cell("DATE", 12).bold()
    );
    for order in orders {
        println!(
            "{}{}{}{}{}{}",
            pad_cell(order.id.as_str(), ID_WIDTH),
            pad_cell(&order.product_name, NAME_WIDTH),
            pad_cell(&order.unit_price.to_string(), NUM_WIDTH),
            pad_cell(&order.quantity.to_string(), 6),
            pad_cell(&order.customer_name, 14),
            order.order_date
        );
    }
}

fn print_sales(sales: &[ProductSales], total_revenue: u64) {
    if sales.is_empty() {
        println!("No sales recorded.");
        return;
    }
    println!(
        "{}{}{}",
        pad_cell("PRODUCT", NAME_WIDTH).bold(),
        pad_cell("QTY", 6).bold(),
        pad_cell("REVENUE", NUM_WIDTH).bold()
    );
    for entry in sales {
        println!(
            "{}{}{}원",
            pad_cell(&entry.product_name, NAME_WIDTH),
            pad_cell(&entry.quantity.to_string(), 6),
            entry.revenue
        );
    }
    println!();
    println!("{} {}원", "Total revenue:".bold(), total_revenue);
}

// Hangul product names are double-width; pad by display width, not chars.
fn pad_cell(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
