//! Persistence port for recorded bets.

use async_trait::async_trait;

use crate::domain::{BetId, BetRecord, Offer};
use crate::error::Result;

/// Storage for offers the operator chose to act on.
#[async_trait]
pub trait BetStore: Send + Sync {
    /// Record one offer as an unsettled bet and return its new id.
    async fn record(&self, offer: &Offer) -> Result<BetId>;

    /// All stored bets, most recently recorded first.
    async fn list(&self) -> Result<Vec<BetRecord>>;
}
