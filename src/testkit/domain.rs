//! Builders for domain primitives used across tests.

use crate::domain::{
    score_event, AmericanPrice, Bookmaker, CompetitorPrice, Event, Market, Offer, Outcome,
};

pub const SPORT: &str = "basketball_nba";

/// An event with teams but no bookmakers, as returned by an event listing.
pub fn summary(id: &str) -> Event {
    Event::new(id, SPORT, format!("{id} Home"), format!("{id} Away"))
}

/// An event where each `(bookmaker, price)` pair quotes the same `h2h` line
/// on the home team.
pub fn event_with_prices(id: &str, prices: &[(&str, i64)]) -> Event {
    let home = format!("{id} Home");
    prices.iter().fold(summary(id), |event, (bookmaker, price)| {
        event.with_bookmaker(
            Bookmaker::new(*bookmaker)
                .with_market(Market::new("h2h").with_outcome(Outcome::new(home.as_str(), *price))),
        )
    })
}

/// A scored offer for a single `h2h` line.
///
/// # Panics
///
/// Panics if `prices` is empty.
pub fn offer(event_id: &str, prices: &[(&str, i64)]) -> Offer {
    score_event(&event_with_prices(event_id, prices))
        .into_iter()
        .next()
        .expect("event with prices yields one offer")
}

/// A hand-built offer with an explicit score, for selection and storage tests.
pub fn offer_with_score(event_id: &str, bookmaker: &str, price: i64, score: f64) -> Offer {
    let price = AmericanPrice::new(price);
    Offer {
        event_id: event_id.into(),
        sport_key: SPORT.into(),
        home_team: "Boston Celtics".into(),
        away_team: "Houston Rockets".into(),
        commence_time: None,
        bookmaker: bookmaker.into(),
        market_key: "player_points".into(),
        outcome_name: "Over".into(),
        outcome_description: "Jayson Tatum".into(),
        outcome_point: 27.5,
        price,
        decimal_price: price.to_decimal(),
        average_decimal_price: price.to_decimal() / score,
        outlier_score: score,
        competitor_prices: vec![CompetitorPrice {
            bookmaker: bookmaker.into(),
            price,
        }],
    }
}
