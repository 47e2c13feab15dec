use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::model::OrderId;
use crate::store::{DataStore, ShopState};

/// Cancel (delete) an order. The deducted stock is NOT restored: a
/// cancelled order record disappears from the ledger, nothing more.
pub fn run<S: DataStore>(state: &mut ShopState, store: &mut S, id: &OrderId) -> Result<CmdResult> {
    if !state.ledger.remove(id) {
        return Err(ShopError::OrderNotFound(id.clone()));
    }
    store.save_ledger(&state.ledger)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Order {} cancelled", id)));
    Ok(result)
}
