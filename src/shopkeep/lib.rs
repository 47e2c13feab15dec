//! # Shopkeep Architecture
//!
//! Shopkeep is a **UI-agnostic storefront library**: a product catalog plus
//! an order ledger, persisted as flat text files, with a CLI client on top.
//! The library never assumes a terminal; the binary never holds business
//! logic.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, formats tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the session state        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: validate, mutate, persist           │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants the core enforces
//!
//! - Stock never goes negative: order placement checks quantity against
//!   stock before mutating anything, and the deduction itself refuses to
//!   underflow.
//! - Orders snapshot the unit price at placement time; repricing never
//!   rewrites history.
//! - Product names carry at least one Latin or Hangul letter.
//! - With the default `Monotonic` date policy, an order may not be dated
//!   earlier than the most recently accepted order.
//! - Cancelling an order removes the record but does not restock.
//!
//! ## Persistence model
//!
//! Collections are loaded once at session start and every mutating command
//! rewrites the affected snapshot file in full before returning
//! (write-through). The sales audit log is the one append-only file and is
//! never read back. See [`store`] for the formats.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`catalog`] / [`ledger`]: The two in-memory collections
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Product`, `Order`, ids, `DatePolicy`)
//! - [`config`]: Configuration management (admin code, date policy)
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod ledger;
pub mod model;
pub mod store;
