//! Odds provider port.
//!
//! The scan use case only needs two calls: list a sport's upcoming events,
//! then fetch the full bookmaker/market/outcome tree for one event.

use async_trait::async_trait;

use crate::domain::{Event, EventId, SportKey};
use crate::error::Result;

/// Source of sportsbook odds.
#[async_trait]
pub trait OddsProvider: Send + Sync {
    /// Upcoming events for a sport. Bookmaker data may be partial or empty.
    async fn list_events(&self, sport: &SportKey) -> Result<Vec<Event>>;

    /// Full odds for one event, restricted to the given market keys.
    async fn event_odds(
        &self,
        sport: &SportKey,
        event_id: &EventId,
        markets: &[String],
    ) -> Result<Event>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}
