//! Provider-agnostic event payload.
//!
//! One [`Event`] carries the full bookmaker → market → outcome nesting for a
//! single fixture. Adapters translate provider responses into this shape
//! before anything is grouped or scored.

use chrono::{DateTime, Utc};

use super::id::{BookmakerKey, EventId, SportKey};
use super::price::AmericanPrice;
use super::quotation::Quotation;

/// A sporting event with every bookmaker's markets attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub sport_key: SportKey,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: Option<DateTime<Utc>>,
    pub bookmakers: Vec<Bookmaker>,
}

/// One bookmaker's markets for an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmaker {
    pub key: BookmakerKey,
    pub markets: Vec<Market>,
}

/// A market (`h2h`, `spreads`, `player_points`, ...) and its outcomes.
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    pub key: String,
    pub outcomes: Vec<Outcome>,
}

/// A priced outcome within a market.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub name: String,
    /// Player name for prop markets, empty otherwise.
    pub description: String,
    pub price: AmericanPrice,
    /// Spread or total line; `None` for markets without one.
    pub point: Option<f64>,
}

impl Event {
    /// Create an event with no bookmakers attached yet.
    pub fn new(
        id: impl Into<EventId>,
        sport_key: impl Into<SportKey>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sport_key: sport_key.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            commence_time: None,
            bookmakers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_commence_time(mut self, commence_time: DateTime<Utc>) -> Self {
        self.commence_time = Some(commence_time);
        self
    }

    #[must_use]
    pub fn with_bookmaker(mut self, bookmaker: Bookmaker) -> Self {
        self.bookmakers.push(bookmaker);
        self
    }

    /// Every quotation in the event, in bookmaker → market → outcome order.
    pub fn quotations(&self) -> impl Iterator<Item = Quotation> + '_ {
        self.bookmakers.iter().flat_map(move |bookmaker| {
            bookmaker.markets.iter().flat_map(move |market| {
                market
                    .outcomes
                    .iter()
                    .map(move |outcome| Quotation::new(self, bookmaker, market, outcome))
            })
        })
    }

    /// Total number of priced outcomes across all bookmakers.
    #[must_use]
    pub fn quotation_count(&self) -> usize {
        self.bookmakers
            .iter()
            .flat_map(|b| b.markets.iter())
            .map(|m| m.outcomes.len())
            .sum()
    }
}

impl Bookmaker {
    pub fn new(key: impl Into<BookmakerKey>) -> Self {
        Self {
            key: key.into(),
            markets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_market(mut self, market: Market) -> Self {
        self.markets.push(market);
        self
    }
}

impl Market {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            outcomes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcomes.push(outcome);
        self
    }
}

impl Outcome {
    pub fn new(name: impl Into<String>, price: impl Into<AmericanPrice>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price: price.into(),
            point: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_point(mut self, point: f64) -> Self {
        self.point = Some(point);
        self
    }
}
