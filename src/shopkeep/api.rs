//! # API Facade
//!
//! `ShopApi<S: DataStore>` is the single entry point for all operations.
//! It owns the in-memory session state and the store, dispatches to the
//! command functions, and returns structured `Result<CmdResult>` values.
//! No business logic lives here and nothing here touches a terminal.
//!
//! Generic over [`DataStore`] so production runs on `FileStore` and tests
//! on `InMemoryStore`.

use crate::commands::{self, place::PlacementRequest, update::ProductUpdate};
use crate::error::Result;
use crate::model::{DatePolicy, OrderId, ProductId};
use crate::store::{DataStore, ShopState};

pub struct ShopApi<S: DataStore> {
    state: ShopState,
    store: S,
    date_policy: DatePolicy,
}

impl<S: DataStore> ShopApi<S> {
    pub fn new(store: S, state: ShopState, date_policy: DatePolicy) -> Self {
        Self {
            state,
            store,
            date_policy,
        }
    }

    pub fn register_product(
        &mut self,
        name: &str,
        price: u64,
        stock: u64,
    ) -> Result<commands::CmdResult> {
        commands::register::run(&mut self.state, &mut self.store, name, price, stock)
    }

    pub fn update_product(
        &mut self,
        id: &ProductId,
        update: ProductUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.state, &mut self.store, id, update)
    }

    pub fn discontinue_product(&mut self, id: &ProductId) -> Result<commands::CmdResult> {
        commands::discontinue::run(&mut self.state, &mut self.store, id)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.state)
    }

    pub fn search_products(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.state, query)
    }

    pub fn place_order(&mut self, request: PlacementRequest) -> Result<commands::CmdResult> {
        commands::place::run(&mut self.state, &mut self.store, self.date_policy, request)
    }

    pub fn cancel_order(&mut self, id: &OrderId) -> Result<commands::CmdResult> {
        commands::cancel::run(&mut self.state, &mut self.store, id)
    }

    pub fn list_orders(&self) -> Result<commands::CmdResult> {
        commands::orders::run(&self.state)
    }

    pub fn sales_report(&self) -> Result<commands::CmdResult> {
        commands::sales::run(&self.state)
    }
}

pub use crate::commands::place::PlacementRequest as OrderRequest;
pub use commands::update::ProductUpdate as ProductChange;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
