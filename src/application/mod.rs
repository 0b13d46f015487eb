//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod recorder;
pub mod scanner;

pub use recorder::{BetRecorder, RecordOutcome};
pub use scanner::{OfferScanner, ScanReport, SportScan};
