//! Provider-agnostic domain logic.
//!
//! The scoring core is pure and synchronous:
//!
//! ```text
//! Event ──group_lines──▶ LineGroup* ──score_group──▶ Offer* ──select──▶ ranked Offer*
//! ```
//!
//! Nothing in this module performs I/O or returns errors. Invariant
//! violations (an empty line group, a quotation pushed into the wrong group)
//! are programming errors and panic.

pub mod bet;
pub mod event;
pub mod id;
pub mod line;
pub mod offer;
pub mod price;
pub mod quotation;
pub mod selection;

pub use bet::BetRecord;
pub use event::{Bookmaker, Event, Market, Outcome};
pub use id::{BetId, BookmakerKey, EventId, SportKey};
pub use line::{group_lines, LineGroup};
pub use offer::{score_event, score_group, CompetitorPrice, Offer};
pub use price::{to_decimal, AmericanPrice};
pub use quotation::{LineKey, Quotation};
pub use selection::{select, Criteria};
