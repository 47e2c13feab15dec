use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ShopState;

pub fn run(state: &ShopState, query: &str) -> Result<CmdResult> {
    if query.trim().is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Search query is empty."));
        return Ok(result);
    }
    let matches = state.catalog.search(query).into_iter().cloned().collect();
    Ok(CmdResult::default().with_products(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::ShopFixture;

    #[test]
    fn matches_case_insensitively() {
        let fix = ShopFixture::new()
            .with_product("Desk Lamp", 10000, 5)
            .with_product("Floor Lamp", 30000, 2)
            .with_product("Mouse Pad", 3000, 10);
        let result = run(&fix.state, "LAMP").unwrap();
        assert_eq!(result.products.len(), 2);
    }

    #[test]
    fn empty_query_returns_nothing_even_with_products() {
        let fix = ShopFixture::new().with_product("Desk Lamp", 10000, 5);
        let result = run(&fix.state, "  ").unwrap();
        assert!(result.products.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
