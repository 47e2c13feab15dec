use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, ShopState};

pub fn run<S: DataStore>(
    state: &mut ShopState,
    store: &mut S,
    name: &str,
    price: u64,
    stock: u64,
) -> Result<CmdResult> {
    let product = state.catalog.register(name, price, stock)?.clone();
    store.save_catalog(&state.catalog)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product '{}' registered as {}",
        product.name, product.id
    )));
    result.products.push(product);
    Ok(result)
}
