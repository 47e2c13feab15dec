//! Order placement: the one workflow that touches both collections.
//!
//! Every precondition is checked before any mutation, so a rejected order
//! leaves catalog and ledger exactly as they were. Once the order is
//! accepted, stock is deducted, the order appended, both snapshots saved
//! and the audit line written. Each snapshot write is atomic on its own;
//! a crash between the two can leave the persisted ledger one order behind
//! the persisted catalog, which the next session surfaces as a stock level
//! lower than the ledger explains. Accepted as a single-operator tool's
//! trade-off.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::model::{has_reserved_char, DatePolicy, Order, OrderId, ProductId};
use crate::store::{DataStore, ShopState};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct PlacementRequest {
    pub product_id: ProductId,
    pub quantity: u64,
    pub customer_name: String,
    pub customer_address: String,
    pub order_date: NaiveDate,
}

pub fn run<S: DataStore>(
    state: &mut ShopState,
    store: &mut S,
    policy: DatePolicy,
    request: PlacementRequest,
) -> Result<CmdResult> {
    if request.quantity == 0 {
        return Err(ShopError::InvalidQuantity);
    }
    // Customer fields end up verbatim in the ledger snapshot, so they must
    // not carry the record delimiter.
    if has_reserved_char(&request.customer_name) {
        return Err(ShopError::ReservedCharacter {
            field: "Customer name",
        });
    }
    if has_reserved_char(&request.customer_address) {
        return Err(ShopError::ReservedCharacter {
            field: "Customer address",
        });
    }

    let product = state
        .catalog
        .get(&request.product_id)
        .ok_or_else(|| ShopError::ProductNotFound(request.product_id.clone()))?;
    if request.quantity > product.stock {
        return Err(ShopError::InsufficientStock {
            requested: request.quantity,
            available: product.stock,
        });
    }

    if policy == DatePolicy::Monotonic {
        if let Some(last) = state.ledger.last_order_date() {
            if request.order_date < last {
                return Err(ShopError::BackdatedOrder {
                    date: request.order_date,
                    last,
                });
            }
        }
    }

    // All preconditions hold; capture the price before mutating.
    let mut order = Order::new(
        product.id.clone(),
        product.name.clone(),
        product.price,
        request.quantity,
        request.customer_name,
        request.customer_address,
        request.order_date,
    );
    // Same collision guard as catalog registration.
    while state.ledger.contains(&order.id) {
        order.id = OrderId::generate();
    }

    state.catalog.deduct(&request.product_id, request.quantity)?;
    state.ledger.append(order.clone());
    store.save_catalog(&state.catalog)?;
    store.save_ledger(&state.ledger)?;
    store.append_sale(&order)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Order {} placed: {} x{} for {}원",
        order.id,
        order.product_name,
        order.quantity,
        order.line_total()
    )));
    result.orders.push(order);
    Ok(result)
}
