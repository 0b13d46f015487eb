//! Single-bookmaker quotations and the key that identifies a bettable line.

use std::fmt;

use chrono::{DateTime, Utc};

use super::event::{Bookmaker, Event, Market, Outcome};
use super::id::{BookmakerKey, EventId, SportKey};
use super::price::AmericanPrice;

/// Identifies "the same bet" across bookmakers within one event.
///
/// The point is stored in canonical text form (six fixed decimals, negative
/// zero folded into zero) so that `2.5` and `2.50` never split a group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineKey {
    market: String,
    outcome_name: String,
    outcome_description: String,
    point: String,
}

impl LineKey {
    pub fn new(
        market: impl Into<String>,
        outcome_name: impl Into<String>,
        outcome_description: impl Into<String>,
        point: f64,
    ) -> Self {
        Self {
            market: market.into(),
            outcome_name: outcome_name.into(),
            outcome_description: outcome_description.into(),
            point: canonical_point(point),
        }
    }

    #[must_use]
    pub fn market(&self) -> &str {
        &self.market
    }

    #[must_use]
    pub fn outcome_name(&self) -> &str {
        &self.outcome_name
    }

    #[must_use]
    pub fn outcome_description(&self) -> &str {
        &self.outcome_description
    }

    #[must_use]
    pub fn point(&self) -> &str {
        &self.point
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.market, self.outcome_name, self.outcome_description, self.point
        )
    }
}

/// Canonical text form of a line point.
#[must_use]
pub fn canonical_point(point: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{:.6}", point + 0.0)
}

/// One bookmaker's priced outcome for one market on one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Quotation {
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
    pub decimal_price: f64,
}

impl Quotation {
    /// Flatten one outcome of the event payload into a quotation.
    ///
    /// A missing point is treated as `0.0`.
    #[must_use]
    pub fn new(event: &Event, bookmaker: &Bookmaker, market: &Market, outcome: &Outcome) -> Self {
        Self {
            event_id: event.id.clone(),
            sport_key: event.sport_key.clone(),
            home_team: event.home_team.clone(),
            away_team: event.away_team.clone(),
            commence_time: event.commence_time,
            bookmaker: bookmaker.key.clone(),
            market_key: market.key.clone(),
            outcome_name: outcome.name.clone(),
            outcome_description: outcome.description.clone(),
            outcome_point: outcome.point.unwrap_or(0.0),
            price: outcome.price,
            decimal_price: outcome.price.to_decimal(),
        }
    }

    #[must_use]
    pub fn line_key(&self) -> LineKey {
        LineKey::new(
            self.market_key.as_str(),
            self.outcome_name.as_str(),
            self.outcome_description.as_str(),
            self.outcome_point,
        )
    }
}
