//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!     ┌──────────────┤  Application (scanner,  ├──────────────┐
//!     │              │  recorder)              │              │
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌──────────────┐                                    ┌─────────────┐
//! │ OddsProvider │                                    │  BetStore   │
//! │  (Odds API)  │                                    │  (SQLite)   │
//! └──────────────┘                                    └─────────────┘
//! ```

pub mod outbound;

pub use outbound::provider::OddsProvider;
pub use outbound::store::BetStore;
