use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductId;
use crate::store::{DataStore, ShopState};

/// One field of a product changes at a time, mirroring the admin's
/// edit flow.
#[derive(Debug, Clone)]
pub enum ProductUpdate {
    Rename(String),
    Reprice(u64),
    Restock(u64),
}

pub fn run<S: DataStore>(
    state: &mut ShopState,
    store: &mut S,
    id: &ProductId,
    update: ProductUpdate,
) -> Result<CmdResult> {
    let message = match &update {
        ProductUpdate::Rename(new_name) => {
            state.catalog.rename(id, new_name)?;
            format!("Product {} renamed to '{}'", id, new_name)
        }
        ProductUpdate::Reprice(new_price) => {
            state.catalog.reprice(id, *new_price)?;
            format!("Product {} repriced to {}원", id, new_price)
        }
        ProductUpdate::Restock(new_stock) => {
            state.catalog.restock(id, *new_stock)?;
            format!("Product {} stock set to {}", id, new_stock)
        }
    };
    store.save_catalog(&state.catalog)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(message));
    if let Some(product) = state.catalog.get(id) {
        result.products.push(product.clone());
    }
    Ok(result)
}
