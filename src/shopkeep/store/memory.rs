use super::DataStore;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::ledger::OrderLedger;
use crate::model::Order;

/// In-memory storage for testing and development.
/// Does NOT persist data; keeps the appended sale lines so tests can
/// assert on the audit trail.
#[derive(Default)]
pub struct InMemoryStore {
    catalog: Catalog,
    ledger: OrderLedger,
    sales: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sales(&self) -> &[String] {
        &self.sales
    }
}

impl DataStore for InMemoryStore {
    fn load_catalog(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }

    fn load_ledger(&self) -> Result<OrderLedger> {
        Ok(self.ledger.clone())
    }

    fn save_catalog(&mut self, catalog: &Catalog) -> Result<()> {
        self.catalog = catalog.clone();
        Ok(())
    }

    fn save_ledger(&mut self, ledger: &OrderLedger) -> Result<()> {
        self.ledger = ledger.clone();
        Ok(())
    }

    fn append_sale(&mut self, order: &Order) -> Result<()> {
        self.sales.push(order.sale_record());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ProductId;
    use crate::store::ShopState;

    pub struct ShopFixture {
        pub state: ShopState,
        pub store: InMemoryStore,
    }

    impl Default for ShopFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ShopFixture {
        pub fn new() -> Self {
            Self {
                state: ShopState::default(),
                store: InMemoryStore::new(),
            }
        }

        pub fn with_product(mut self, name: &str, price: u64, stock: u64) -> Self {
            self.state.catalog.register(name, price, stock).unwrap();
            self
        }

        /// Id of the most recently registered product.
        pub fn last_product_id(&self) -> ProductId {
            self.state
                .catalog
                .list()
                .last()
                .expect("fixture has no products")
                .id
                .clone()
        }
    }
}
