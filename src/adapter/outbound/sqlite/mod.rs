//! SQLite persistence adapter.
//!
//! Stores recorded bets using Diesel ORM with embedded migrations.

pub mod database;
pub mod store;

pub use store::SqliteBetStore;
