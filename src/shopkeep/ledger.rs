//! The order ledger: every placed, not-yet-cancelled order, in placement
//! order. Revenue figures are always computed from the current contents,
//! so cancellations are reflected immediately.

use crate::model::{Order, OrderId};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

/// Per-product aggregate for the sales report, in first-order-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSales {
    pub product_name: String,
    pub quantity: u64,
    pub revenue: u64,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn append(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Remove at most one order by id. Cancelling an order does NOT put
    /// its quantity back into stock.
    pub fn remove(&mut self, id: &OrderId) -> bool {
        match self.orders.iter().position(|o| &o.id == id) {
            Some(pos) => {
                self.orders.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &OrderId) -> bool {
        self.orders.iter().any(|o| &o.id == id)
    }

    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    /// Date of the most recently appended order, used by the monotonic
    /// date policy.
    pub fn last_order_date(&self) -> Option<NaiveDate> {
        self.orders.last().map(|o| o.order_date)
    }

    pub fn total_revenue(&self) -> u64 {
        self.orders
            .iter()
            .fold(0u64, |total, o| total.saturating_add(o.line_total()))
    }

    /// Group current orders by product name. Products are keyed by id in
    /// the catalog, but the audit trail speaks in names, so the report
    /// does too.
    pub fn revenue_by_product(&self) -> Vec<ProductSales> {
        let mut report: Vec<ProductSales> = Vec::new();
        for order in &self.orders {
            match report
                .iter_mut()
                .find(|s| s.product_name == order.product_name)
            {
                Some(entry) => {
                    entry.quantity = entry.quantity.saturating_add(order.quantity);
                    entry.revenue = entry.revenue.saturating_add(order.line_total());
                }
                None => report.push(ProductSales {
                    product_name: order.product_name.clone(),
                    quantity: order.quantity,
                    revenue: order.line_total(),
                }),
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn order(name: &str, price: u64, quantity: u64, date: &str) -> Order {
        Order::new(
            ProductId::generate(),
            name.into(),
            price,
            quantity,
            "Kim".into(),
            "Seoul".into(),
            date.parse().unwrap(),
        )
    }

    #[test]
    fn total_revenue_tracks_appends_and_removals() {
        let mut ledger = OrderLedger::new();
        let first = order("Desk Lamp", 10000, 3, "2024-01-10");
        let first_id = first.id.clone();
        ledger.append(first);
        ledger.append(order("Mouse Pad", 3000, 2, "2024-01-11"));
        assert_eq!(ledger.total_revenue(), 36000);

        assert!(ledger.remove(&first_id));
        assert_eq!(ledger.total_revenue(), 6000);
    }

    #[test]
    fn total_revenue_saturates_instead_of_overflowing() {
        let mut ledger = OrderLedger::new();
        ledger.append(order("Desk Lamp", u64::MAX, 1, "2024-01-10"));
        ledger.append(order("Mouse Pad", 3000, 2, "2024-01-11"));
        assert_eq!(ledger.total_revenue(), u64::MAX);
    }

    #[test]
    fn contains_tracks_current_orders() {
        let mut ledger = OrderLedger::new();
        let first = order("Desk Lamp", 10000, 1, "2024-01-10");
        let id = first.id.clone();
        ledger.append(first);
        assert!(ledger.contains(&id));
        assert!(!ledger.contains(&OrderId::generate()));
        ledger.remove(&id);
        assert!(!ledger.contains(&id));
    }

    #[test]
    fn remove_of_unknown_id_leaves_ledger_unchanged() {
        let mut ledger = OrderLedger::new();
        ledger.append(order("Desk Lamp", 10000, 1, "2024-01-10"));
        assert!(!ledger.remove(&OrderId::generate()));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn revenue_by_product_groups_by_name() {
        let mut ledger = OrderLedger::new();
        ledger.append(order("Desk Lamp", 10000, 3, "2024-01-10"));
        ledger.append(order("Mouse Pad", 3000, 2, "2024-01-11"));
        ledger.append(order("Desk Lamp", 12000, 1, "2024-01-12"));

        let report = ledger.revenue_by_product();
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].product_name, "Desk Lamp");
        assert_eq!(report[0].quantity, 4);
        assert_eq!(report[0].revenue, 42000);
        assert_eq!(report[1].product_name, "Mouse Pad");
        assert_eq!(report[1].revenue, 6000);
    }

    #[test]
    fn last_order_date_is_the_most_recent_append() {
        let mut ledger = OrderLedger::new();
        assert_eq!(ledger.last_order_date(), None);
        ledger.append(order("Desk Lamp", 10000, 1, "2024-01-10"));
        assert_eq!(ledger.last_order_date(), Some("2024-01-10".parse().unwrap()));
    }
}
