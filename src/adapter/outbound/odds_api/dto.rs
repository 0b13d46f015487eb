//! The Odds API v4 response shapes.
//!
//! Every nested collection and optional attribute tolerates absence; the
//! provider omits `description` and `point` on markets that don't use them.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{AmericanPrice, Bookmaker, Event, Market, Outcome};

#[derive(Debug, Clone, Deserialize)]
pub struct EventDto {
    pub id: String,
    pub sport_key: String,
    #[serde(default)]
    pub commence_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<BookmakerDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookmakerDto {
    pub key: String,
    #[serde(default)]
    pub markets: Vec<MarketDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketDto {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<OutcomeDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutcomeDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub point: Option<f64>,
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        Self {
            id: dto.id.into(),
            sport_key: dto.sport_key.into(),
            home_team: dto.home_team,
            away_team: dto.away_team,
            commence_time: dto.commence_time,
            bookmakers: dto.bookmakers.into_iter().map(Bookmaker::from).collect(),
        }
    }
}

impl From<BookmakerDto> for Bookmaker {
    fn from(dto: BookmakerDto) -> Self {
        Self {
            key: dto.key.into(),
            markets: dto.markets.into_iter().map(Market::from).collect(),
        }
    }
}

impl From<MarketDto> for Market {
    fn from(dto: MarketDto) -> Self {
        Self {
            key: dto.key,
            outcomes: dto.outcomes.into_iter().map(Outcome::from).collect(),
        }
    }
}

impl From<OutcomeDto> for Outcome {
    fn from(dto: OutcomeDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description.unwrap_or_default(),
            price: AmericanPrice::from_f64(dto.price),
            point: dto.point,
        }
    }
}
