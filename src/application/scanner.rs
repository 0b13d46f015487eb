//! Offer scan use case.
//!
//! ```text
//! for each sport (config order):
//!     OddsProvider::list_events
//!         └─▶ OddsProvider::event_odds  (bounded concurrency, event order kept)
//!                 └─▶ score_event       (group lines, pick representatives)
//! merge all offers ──▶ select(criteria) ──▶ ScanReport
//! ```
//!
//! Any provider failure aborts the whole scan. Partial results are never
//! returned, so a ranked list is always drawn from every configured sport.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::domain::{score_event, select, Criteria, Event, Offer, SportKey};
use crate::error::Result;
use crate::port::outbound::provider::OddsProvider;

/// One sport to scan and the markets to request for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportScan {
    pub sport: SportKey,
    pub markets: Vec<String>,
}

impl SportScan {
    pub fn new(sport: impl Into<SportKey>, markets: Vec<String>) -> Self {
        Self {
            sport: sport.into(),
            markets,
        }
    }
}

/// Result of a completed scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Selected offers, best outlier score first.
    pub offers: Vec<Offer>,
    /// Events whose odds were fetched and scored.
    pub events_scanned: usize,
    /// Line groups scored across all events, before selection.
    pub lines_scored: usize,
}

/// Fetches odds for the configured sports and ranks the resulting offers.
pub struct OfferScanner {
    provider: Arc<dyn OddsProvider>,
    sports: Vec<SportScan>,
    max_concurrent_requests: usize,
}

impl OfferScanner {
    #[must_use]
    pub fn new(
        provider: Arc<dyn OddsProvider>,
        sports: Vec<SportScan>,
        max_concurrent_requests: usize,
    ) -> Self {
        Self {
            provider,
            sports,
            max_concurrent_requests: max_concurrent_requests.max(1),
        }
    }

    #[must_use]
    pub fn sports(&self) -> &[SportScan] {
        &self.sports
    }

    /// Scan every sport and apply `criteria` to the merged offers.
    ///
    /// # Errors
    ///
    /// Returns the first provider error encountered.
    pub async fn scan(&self, criteria: &Criteria) -> Result<ScanReport> {
        let mut offers = Vec::new();
        let mut events_scanned = 0;

        for sport in &self.sports {
            let events = self.fetch_sport(sport).await?;
            events_scanned += events.len();
            for event in &events {
                offers.extend(score_event(event));
            }
        }

        let lines_scored = offers.len();
        let offers = select(offers, criteria);

        info!(
            provider = self.provider.provider_name(),
            events = events_scanned,
            lines = lines_scored,
            selected = offers.len(),
            "Scan complete"
        );

        Ok(ScanReport {
            offers,
            events_scanned,
            lines_scored,
        })
    }

    async fn fetch_sport(&self, sport: &SportScan) -> Result<Vec<Event>> {
        let listed = self.provider.list_events(&sport.sport).await?;
        debug!(sport = %sport.sport, count = listed.len(), "Listed events");

        // Owned ids and clones keep the stream free of borrows, so the scan
        // future stays `Send` for spawned tasks and axum handlers.
        let events: Vec<Event> = stream::iter(listed.into_iter().map(|event| event.id))
            .map(|id| {
                let provider = Arc::clone(&self.provider);
                let sport = sport.clone();
                async move {
                    provider
                        .event_odds(&sport.sport, &id, &sport.markets)
                        .await
                }
            })
            .buffered(self.max_concurrent_requests)
            .try_collect()
            .await?;

        debug!(
            sport = %sport.sport,
            quotations = events.iter().map(Event::quotation_count).sum::<usize>(),
            "Fetched event odds"
        );

        Ok(events)
    }
}
