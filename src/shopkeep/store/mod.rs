//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts how catalog and ledger snapshots are
//! persisted, so the command layer never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production flat-file storage
//!   - `products.txt` / `orders.txt`: one comma-delimited record per line,
//!     full-file rewrite on every save (snapshot persistence)
//!   - `sales.txt`: append-only audit log, never rewritten, never read back
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence, keeps appended sale lines for assertions
//!
//! ## Write-through discipline
//!
//! Collections live in memory for the whole session; every mutating command
//! saves the affected snapshot before returning. Snapshot writes go through
//! a temp file and rename, so a single file is never left torn; order
//! placement writes two snapshots back to back and a crash between them can
//! leave the ledger one order behind the catalog (see `commands::place`).

use crate::catalog::Catalog;
use crate::error::Result;
use crate::ledger::OrderLedger;
use crate::model::Order;

pub mod fs;
pub mod memory;

/// The in-memory session state: one catalog, one ledger, one operator.
#[derive(Debug, Clone, Default)]
pub struct ShopState {
    pub catalog: Catalog,
    pub ledger: OrderLedger,
}

impl ShopState {
    pub fn new(catalog: Catalog, ledger: OrderLedger) -> Self {
        Self { catalog, ledger }
    }
}

/// Abstract interface for snapshot persistence.
pub trait DataStore {
    /// Load the catalog snapshot. A missing snapshot is an empty catalog;
    /// a malformed line is an error and the caller decides how loudly to
    /// report it.
    fn load_catalog(&self) -> Result<Catalog>;

    /// Load the order ledger snapshot, with the same missing/malformed
    /// contract as [`DataStore::load_catalog`].
    fn load_ledger(&self) -> Result<OrderLedger>;

    /// Rewrite the full catalog snapshot.
    fn save_catalog(&mut self, catalog: &Catalog) -> Result<()>;

    /// Rewrite the full ledger snapshot.
    fn save_ledger(&mut self, ledger: &OrderLedger) -> Result<()>;

    /// Append one line to the sales audit log.
    fn append_sale(&mut self, order: &Order) -> Result<()>;
}
