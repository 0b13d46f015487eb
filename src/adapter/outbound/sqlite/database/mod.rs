//! Diesel plumbing for the `bets` table.

pub mod connection;
pub mod model;
pub mod schema;
