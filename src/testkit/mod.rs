//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] — Builders for events, quotations and offers.
//! - [`provider`] — [`ScriptedProvider`](provider::ScriptedProvider), an
//!   in-memory [`OddsProvider`](crate::port::OddsProvider).
//! - [`store`] — [`MemoryBetStore`](store::MemoryBetStore), an in-memory
//!   [`BetStore`](crate::port::BetStore) that can be told to fail.

pub mod domain;
pub mod provider;
pub mod store;
