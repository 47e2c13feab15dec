use crate::model::{OrderId, ProductId};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Product name must contain at least one Latin or Hangul letter: {0:?}")]
    InvalidName(String),

    #[error("{field} may not contain commas or line breaks")]
    ReservedCharacter { field: &'static str },

    #[error("Order quantity must be a positive integer")]
    InvalidQuantity,

    #[error("Requested quantity {requested} exceeds stock ({available} available)")]
    InsufficientStock { requested: u64, available: u64 },

    #[error("Order date {date} is earlier than the last accepted order ({last})")]
    BackdatedOrder { date: NaiveDate, last: NaiveDate },

    #[error("Malformed record in {file}, line {line}")]
    Snapshot { file: String, line: usize },

    #[error("Invalid admin code")]
    AdminCode,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShopError>;
