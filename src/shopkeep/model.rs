use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Whether order dates must be monotonically non-decreasing across the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DatePolicy {
    /// Reject orders dated earlier than the most recently accepted order.
    #[default]
    Monotonic,
    /// Accept any date.
    Unchecked,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn generate() -> Self {
        Self(format!("PROD-{}", short_hex()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    pub fn generate() -> Self {
        Self(format!("ORD-{}", short_hex()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// Ids in the snapshot files are short; 8 hex digits of a v4 UUID is plenty
// for a single storefront and keeps the flat files readable.
fn short_hex() -> String {
    let mut buf = Uuid::encode_buffer();
    let simple = Uuid::new_v4().as_simple().encode_lower(&mut buf);
    simple[..8].to_string()
}

/// Product names must carry at least one real letter, Latin or Hangul.
/// All-digit and all-symbol names are rejected.
pub fn name_has_letter(name: &str) -> bool {
    name.chars()
        .any(|c| c.is_ascii_alphabetic() || ('가'..='힣').contains(&c))
}

/// The snapshot files are comma-delimited with one record per line, so no
/// stored field may carry the delimiter or a line break. Checked at the
/// input boundary; a value that slipped through would save fine and then
/// poison the next load.
pub fn has_reserved_char(value: &str) -> bool {
    value.contains(',') || value.contains('\n') || value.contains('\r')
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub stock: u64,
}

impl Product {
    pub fn new(name: String, price: u64, stock: u64) -> Self {
        Self {
            id: ProductId::generate(),
            name,
            price,
            stock,
        }
    }

    /// Snapshot line: `id,name,price,stock`.
    pub fn to_record(&self) -> String {
        format!("{},{},{},{}", self.id, self.name, self.price, self.stock)
    }

    pub fn from_record(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim_end().split(',').collect();
        let [id, name, price, stock] = fields.as_slice() else {
            return None;
        };
        Some(Self {
            id: ProductId::from(id.to_string()),
            name: name.to_string(),
            price: price.parse().ok()?,
            stock: stock.parse().ok()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    /// Catalog price captured at placement time; later repricing does not
    /// touch existing orders.
    pub unit_price: u64,
    pub quantity: u64,
    pub customer_name: String,
    pub customer_address: String,
    pub order_date: NaiveDate,
}

impl Order {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_id: ProductId,
        product_name: String,
        unit_price: u64,
        quantity: u64,
        customer_name: String,
        customer_address: String,
        order_date: NaiveDate,
    ) -> Self {
        Self {
            id: OrderId::generate(),
            product_id,
            product_name,
            unit_price,
            quantity,
            customer_name,
            customer_address,
            order_date,
        }
    }

    /// Saturating: a hand-edited snapshot can carry a price near
    /// `u64::MAX`, and revenue figures must not panic on it.
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(self.quantity)
    }

    /// Snapshot line:
    /// `order_id,product_id,product_name,price,quantity,customer_name,customer_address,order_date`.
    pub fn to_record(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{}",
            self.id,
            self.product_id,
            self.product_name,
            self.unit_price,
            self.quantity,
            self.customer_name,
            self.customer_address,
            self.order_date,
        )
    }

    pub fn from_record(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim_end().split(',').collect();
        let [id, product_id, product_name, price, quantity, customer_name, customer_address, order_date] =
            fields.as_slice()
        else {
            return None;
        };
        Some(Self {
            id: OrderId::from(id.to_string()),
            product_id: ProductId::from(product_id.to_string()),
            product_name: product_name.to_string(),
            unit_price: price.parse().ok()?,
            quantity: quantity.parse().ok()?,
            customer_name: customer_name.to_string(),
            customer_address: customer_address.to_string(),
            order_date: order_date.parse().ok()?,
        })
    }

    /// Audit line for the append-only sales log:
    /// `product_name,quantity,total원,order_date`.
    pub fn sale_record(&self) -> String {
        format!(
            "{},{},{}원,{}",
            self.product_name,
            self.quantity,
            self.line_total(),
            self.order_date,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_prefixed_and_distinct() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert!(a.as_str().starts_with("PROD-"));
        assert_ne!(a, b);
        assert!(OrderId::generate().as_str().starts_with("ORD-"));
    }

    #[test]
    fn name_validation_requires_a_letter() {
        assert!(name_has_letter("Desk Lamp"));
        assert!(name_has_letter("책상"));
        assert!(name_has_letter("lamp-2"));
        assert!(!name_has_letter("123"));
        assert!(!name_has_letter("!!!"));
        assert!(!name_has_letter(""));
    }

    #[test]
    fn reserved_characters_are_detected() {
        assert!(has_reserved_char("Desk, Lamp"));
        assert!(has_reserved_char("line\nbreak"));
        assert!(has_reserved_char("line\rbreak"));
        assert!(!has_reserved_char("Desk Lamp"));
        assert!(!has_reserved_char("12 Mapo-gu Seoul"));
    }

    #[test]
    fn line_total_saturates_instead_of_overflowing() {
        let order = Order::new(
            ProductId::generate(),
            "Desk Lamp".into(),
            u64::MAX,
            2,
            "Kim".into(),
            "Seoul".into(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        );
        assert_eq!(order.line_total(), u64::MAX);
    }

    #[test]
    fn product_record_round_trips() {
        let product = Product::new("Desk Lamp".into(), 10000, 5);
        let parsed = Product::from_record(&product.to_record()).unwrap();
        assert_eq!(parsed, product);
    }

    #[test]
    fn order_record_round_trips() {
        let order = Order::new(
            ProductId::generate(),
            "Desk Lamp".into(),
            10000,
            3,
            "Kim".into(),
            "12 Mapo-gu Seoul".into(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        );
        let parsed = Order::from_record(&order.to_record()).unwrap();
        assert_eq!(parsed, order);
    }

    #[test]
    fn malformed_records_are_rejected() {
        assert!(Product::from_record("only,three,fields").is_none());
        assert!(Product::from_record("id,name,not-a-number,3").is_none());
        assert!(Order::from_record("too,few,fields").is_none());
    }

    #[test]
    fn sale_record_carries_the_line_total() {
        let order = Order::new(
            ProductId::generate(),
            "Desk Lamp".into(),
            10000,
            3,
            "Kim".into(),
            "Seoul".into(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        );
        assert_eq!(order.sale_record(), "Desk Lamp,3,30000원,2024-01-10");
    }
}
