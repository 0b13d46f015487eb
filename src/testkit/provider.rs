//! In-memory odds provider.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Event, EventId, SportKey};
use crate::error::{Error, Result};
use crate::port::outbound::provider::OddsProvider;

/// A provider serving pre-loaded event listings and per-event odds.
///
/// Unknown sports list no events. Odds for an event that was never scripted
/// fail with a 404 [`Error::Provider`], which is how tests inject failures.
#[derive(Default)]
pub struct ScriptedProvider {
    events: HashMap<SportKey, Vec<Event>>,
    odds: HashMap<EventId, Event>,
    odds_calls: Arc<AtomicU32>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(mut self, sport: &str, events: Vec<Event>) -> Self {
        self.events.insert(SportKey::from(sport), events);
        self
    }

    pub fn with_odds(mut self, event: Event) -> Self {
        self.odds.insert(event.id.clone(), event);
        self
    }

    /// Shared counter of `event_odds` calls.
    pub fn odds_calls(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.odds_calls)
    }
}

#[async_trait]
impl OddsProvider for ScriptedProvider {
    async fn list_events(&self, sport: &SportKey) -> Result<Vec<Event>> {
        Ok(self.events.get(sport).cloned().unwrap_or_default())
    }

    async fn event_odds(
        &self,
        _sport: &SportKey,
        event_id: &EventId,
        _markets: &[String],
    ) -> Result<Event> {
        self.odds_calls.fetch_add(1, Ordering::SeqCst);
        self.odds.get(event_id).cloned().ok_or_else(|| Error::Provider {
            status: 404,
            body: format!("unknown event {event_id}"),
        })
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
