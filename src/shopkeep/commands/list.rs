use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ShopState;

pub fn run(state: &ShopState) -> Result<CmdResult> {
    Ok(CmdResult::default().with_products(state.catalog.list().to_vec()))
}
