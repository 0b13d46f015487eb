//! Linescout - sportsbook line scanner.
//!
//! Pulls odds for upcoming events from The Odds API, groups every
//! bookmaker's quotation of the same betting line, and ranks each line's
//! best price by how far it sits above the market consensus (the outlier
//! score). Operators pick offers from the ranked list in a terminal UI or
//! over HTTP, and the picks are recorded in SQLite.
//!
//! # Architecture
//!
//! Hexagonal layout:
//!
//! - [`domain`] - Pure scoring core: price normalization, line grouping,
//!   consensus scoring and selection
//! - [`port`] - `OddsProvider` and `BetStore` traits
//! - [`application`] - Scan and bet-recording use cases
//! - [`adapter`] - The Odds API client, SQLite store, CLI and HTTP endpoint
//! - [`infrastructure`] - Configuration and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use linescout::domain::{score_event, select, Bookmaker, Criteria, Event, Market, Outcome};
//!
//! let event = Event::new("evt", "basketball_nba", "Celtics", "Rockets")
//!     .with_bookmaker(Bookmaker::new("fanduel")
//!         .with_market(Market::new("h2h").with_outcome(Outcome::new("Celtics", 150))))
//!     .with_bookmaker(Bookmaker::new("draftkings")
//!         .with_market(Market::new("h2h").with_outcome(Outcome::new("Celtics", 110))));
//!
//! let criteria = Criteria { min_competitors: 1, ..Criteria::default() };
//! let offers = select(score_event(&event), &criteria);
//! assert!(offers.is_empty()); // +150 is not below the default max price of 111
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
