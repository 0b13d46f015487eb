//! Adapters connecting the application to the outside world.
//!
//! - [`inbound`] - CLI and HTTP entry points
//! - [`outbound`] - Odds provider client and SQLite storage

pub mod inbound;
pub mod outbound;
