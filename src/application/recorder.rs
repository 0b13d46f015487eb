//! Bet recording use case.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{BetId, BetRecord, Offer};
use crate::error::{Error, Result};
use crate::port::outbound::store::BetStore;

/// Outcome of recording one offer from a batch.
#[derive(Debug)]
pub struct RecordOutcome {
    pub offer: Offer,
    pub result: Result<BetId>,
}

impl RecordOutcome {
    #[must_use]
    pub fn is_recorded(&self) -> bool {
        self.result.is_ok()
    }

    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }
}

/// Records operator-selected offers through a [`BetStore`].
pub struct BetRecorder {
    store: Arc<dyn BetStore>,
}

impl BetRecorder {
    #[must_use]
    pub fn new(store: Arc<dyn BetStore>) -> Self {
        Self { store }
    }

    /// Record a single offer.
    ///
    /// # Errors
    ///
    /// Returns the store's error unchanged.
    pub async fn record(&self, offer: &Offer) -> Result<BetId> {
        let id = self.store.record(offer).await?;
        info!(
            bet = %id,
            event = %offer.event_id,
            market = %offer.market_key,
            price = %offer.price,
            "Recorded bet"
        );
        Ok(id)
    }

    /// Record each offer independently. A failure on one offer does not stop
    /// the others and leaves that offer unrecorded.
    pub async fn record_all(&self, offers: Vec<Offer>) -> Vec<RecordOutcome> {
        let mut outcomes = Vec::with_capacity(offers.len());
        for offer in offers {
            let result = self.record(&offer).await;
            if let Err(ref err) = result {
                warn!(event = %offer.event_id, error = %err, "Failed to record bet");
            }
            outcomes.push(RecordOutcome { offer, result });
        }
        outcomes
    }

    /// Stored bets, newest first.
    pub async fn list(&self) -> Result<Vec<BetRecord>> {
        self.store.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::offer_with_score;
    use crate::testkit::store::MemoryBetStore;

    #[tokio::test]
    async fn records_every_selected_offer() {
        let store = Arc::new(MemoryBetStore::new());
        let recorder = BetRecorder::new(store.clone());

        let outcomes = recorder
            .record_all(vec![
                offer_with_score("e1", "fanduel", 105, 1.2),
                offer_with_score("e2", "fanduel", 110, 1.1),
            ])
            .await;

        assert!(outcomes.iter().all(RecordOutcome::is_recorded));
        assert_eq!(store.len(), 2);

        let listed = recorder.list().await.unwrap();
        assert_eq!(listed[0].event_id.as_str(), "e2");
        assert!(!listed[0].finalized);
        assert!(!listed[0].won);
    }

    #[tokio::test]
    async fn store_failure_is_reported_per_offer() {
        let recorder = BetRecorder::new(Arc::new(MemoryBetStore::failing()));

        let outcomes = recorder
            .record_all(vec![offer_with_score("e1", "fanduel", 105, 1.2)])
            .await;

        assert_eq!(outcomes.len(), 1);
        assert!(!outcomes[0].is_recorded());
        assert!(matches!(outcomes[0].error(), Some(Error::Database(_))));
    }
}
