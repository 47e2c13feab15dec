use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductId;
use crate::store::{DataStore, ShopState};

pub fn run<S: DataStore>(
    state: &mut ShopState,
    store: &mut S,
    id: &ProductId,
) -> Result<CmdResult> {
    let removed = state.catalog.discontinue(id)?;
    store.save_catalog(&state.catalog)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product '{}' ({}) discontinued",
        removed.name, removed.id
    )));
    result.products.push(removed);
    Ok(result)
}
