use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ShopState;

pub fn run(state: &ShopState) -> Result<CmdResult> {
    let by_product = state.ledger.revenue_by_product();
    let total = state.ledger.total_revenue();
    Ok(CmdResult::default().with_sales(by_product, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cancel;
    use crate::commands::place::{self, PlacementRequest};
    use crate::model::DatePolicy;
    use crate::store::memory::fixtures::ShopFixture;

    #[test]
    fn report_reflects_current_ledger_contents() {
        let mut fix = ShopFixture::new()
            .with_product("Desk Lamp", 10000, 5)
            .with_product("Mouse Pad", 3000, 10);

        let lamp_id = fix.state.catalog.list()[0].id.clone();
        let pad_id = fix.state.catalog.list()[1].id.clone();
        for (product_id, quantity) in [(lamp_id, 3), (pad_id, 2)] {
            let request = PlacementRequest {
                product_id,
                quantity,
                customer_name: "Kim".into(),
                customer_address: "Seoul".into(),
                order_date: "2024-01-10".parse().unwrap(),
            };
            place::run(
                &mut fix.state,
                &mut fix.store,
                DatePolicy::Monotonic,
                request,
            )
            .unwrap();
        }

        let report = run(&fix.state).unwrap();
        assert_eq!(report.total_revenue, Some(36000));
        assert_eq!(report.sales.len(), 2);

        // Cancelling drops the order out of the figures.
        let pad_order = fix.state.ledger.list()[1].id.clone();
        cancel::run(&mut fix.state, &mut fix.store, &pad_order).unwrap();
        let report = run(&fix.state).unwrap();
        assert_eq!(report.total_revenue, Some(30000));
        assert_eq!(report.sales.len(), 1);
    }
}
