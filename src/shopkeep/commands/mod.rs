//! Business logic for each operation. Command functions take the session
//! state plus a [`crate::store::DataStore`], mutate in memory, persist the
//! affected snapshot, and return a [`CmdResult`] for the UI to render.
//! No command ever writes to stdout or stderr.

use crate::ledger::ProductSales;
use crate::model::{Order, Product};

pub mod cancel;
pub mod discontinue;
pub mod list;
pub mod orders;
pub mod place;
pub mod register;
pub mod sales;
pub mod search;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub sales: Vec<ProductSales>,
    pub total_revenue: Option<u64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    pub fn with_sales(mut self, sales: Vec<ProductSales>, total_revenue: u64) -> Self {
        self.sales = sales;
        self.total_revenue = Some(total_revenue);
        self
    }
}
