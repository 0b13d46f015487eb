//! Outbound adapters (driven side): the odds provider client and bet storage.

pub mod odds_api;
pub mod sqlite;
