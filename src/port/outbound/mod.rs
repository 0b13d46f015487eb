//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the two infrastructure dependencies: the odds
//! provider and bet storage.

pub mod provider;
pub mod store;
