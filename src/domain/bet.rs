//! Offers an operator has chosen to record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::{BetId, BookmakerKey, EventId, SportKey};
use super::offer::Offer;
use super::price::AmericanPrice;

/// A recorded selection. Settlement fields start unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BetRecord {
    pub id: BetId,
    pub event_id: EventId,
    pub sport_key: SportKey,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: Option<DateTime<Utc>>,
    pub bookmaker: BookmakerKey,
    pub market_key: String,
    pub outcome_name: String,
    pub outcome_description: String,
    pub outcome_point: f64,
    pub price: AmericanPrice,
    pub outlier_score: f64,
    pub recorded_at: DateTime<Utc>,
    pub finalized: bool,
    pub won: bool,
}

impl BetRecord {
    /// Snapshot an offer as a new, unsettled bet.
    #[must_use]
    pub fn from_offer(offer: &Offer, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: BetId::new(),
            event_id: offer.event_id.clone(),
            sport_key: offer.sport_key.clone(),
            home_team: offer.home_team.clone(),
            away_team: offer.away_team.clone(),
            commence_time: offer.commence_time,
            bookmaker: offer.bookmaker.clone(),
            market_key: offer.market_key.clone(),
            outcome_name: offer.outcome_name.clone(),
            outcome_description: offer.outcome_description.clone(),
            outcome_point: offer.outcome_point,
            price: offer.price,
            outlier_score: offer.outlier_score,
            recorded_at,
            finalized: false,
            won: false,
        }
    }
}
