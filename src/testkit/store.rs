//! In-memory bet store.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{BetId, BetRecord, Offer};
use crate::error::{Error, Result};
use crate::port::outbound::store::BetStore;

/// Keeps recorded bets in a vector. Can be switched into a failing mode.
#[derive(Default)]
pub struct MemoryBetStore {
    bets: Mutex<Vec<BetRecord>>,
    fail: bool,
}

impl MemoryBetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with a database error.
    pub fn failing() -> Self {
        Self {
            bets: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn len(&self) -> usize {
        self.bets.lock().map(|bets| bets.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BetStore for MemoryBetStore {
    async fn record(&self, offer: &Offer) -> Result<BetId> {
        if self.fail {
            return Err(Error::Database("store unavailable".into()));
        }
        let record = BetRecord::from_offer(offer, Utc::now());
        let id = record.id.clone();
        self.bets
            .lock()
            .map_err(|e| Error::Database(e.to_string()))?
            .push(record);
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<BetRecord>> {
        if self.fail {
            return Err(Error::Database("store unavailable".into()));
        }
        let bets = self.bets.lock().map_err(|e| Error::Database(e.to_string()))?;
        Ok(bets.iter().rev().cloned().collect())
    }
}
