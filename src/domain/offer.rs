//! Consensus scoring of line groups.
//!
//! Each [`LineGroup`] collapses into one [`Offer`]: the best-priced quotation
//! in the group, annotated with the group's mean decimal price, the ratio of
//! the best price to that mean (the outlier score) and every competing
//! bookmaker's raw price.
//!
//! The mean includes the representative's own price, so a single-bookmaker
//! line always scores exactly `1.0`, dead-zone prices included. A group of
//! dead-zone prices can still average to zero while its best price is
//! positive; its score is then `+inf`, travels as JSON `null` and ranks last.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::event::Event;
use super::id::{BookmakerKey, EventId, SportKey};
use super::line::{group_lines, LineGroup};
use super::price::AmericanPrice;
use super::quotation::Quotation;

/// One bookmaker's raw price on the same line as an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorPrice {
    pub bookmaker: BookmakerKey,
    pub price: AmericanPrice,
}

/// The best available price for one line within one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub event_id: EventId,
    pub sport_key: SportKey,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub commence_time: Option<DateTime<Utc>>,
    pub bookmaker: BookmakerKey,
    pub market_key: String,
    pub outcome_name: String,
    #[serde(default)]
    pub outcome_description: String,
    #[serde(default)]
    pub outcome_point: f64,
    pub price: AmericanPrice,
    pub decimal_price: f64,
    pub average_decimal_price: f64,
    #[serde(deserialize_with = "score_or_infinite")]
    pub outlier_score: f64,
    #[serde(default)]
    pub competitor_prices: Vec<CompetitorPrice>,
}

/// serde_json writes non-finite floats as `null`. Scoring only ever yields
/// `+inf`, so that is what `null` reads back as.
fn score_or_infinite<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

impl Offer {
    /// Number of bookmakers quoting this line, the offer's own included.
    #[must_use]
    pub fn competitor_count(&self) -> usize {
        self.competitor_prices.len()
    }

    /// `"Home vs. Away"` label used by the terminal views.
    #[must_use]
    pub fn matchup(&self) -> String {
        format!("{} vs. {}", self.home_team, self.away_team)
    }

    fn from_representative(
        representative: Quotation,
        average_decimal_price: f64,
        competitor_prices: Vec<CompetitorPrice>,
    ) -> Self {
        // Also covers a lone zero price, where the ratio would be 0 / 0.
        let outlier_score = if representative.decimal_price == average_decimal_price {
            1.0
        } else {
            representative.decimal_price / average_decimal_price
        };
        Self {
            event_id: representative.event_id,
            sport_key: representative.sport_key,
            home_team: representative.home_team,
            away_team: representative.away_team,
            commence_time: representative.commence_time,
            bookmaker: representative.bookmaker,
            market_key: representative.market_key,
            outcome_name: representative.outcome_name,
            outcome_description: representative.outcome_description,
            outcome_point: representative.outcome_point,
            price: representative.price,
            decimal_price: representative.decimal_price,
            average_decimal_price,
            outlier_score,
            competitor_prices,
        }
    }
}

/// Collapse a line group into its representative offer.
///
/// The representative is the quotation with the highest decimal price. The
/// running maximum is seeded with the first quotation, and only a strictly
/// greater price replaces it, so ties go to the earliest quotation.
#[must_use]
pub fn score_group(group: LineGroup) -> Offer {
    let mut quotations = group.into_quotations();
    // LineGroup cannot be constructed empty.
    assert!(!quotations.is_empty(), "cannot score an empty line group");

    let count = quotations.len() as f64;
    let sum: f64 = quotations.iter().map(|q| q.decimal_price).sum();
    let average = sum / count;

    let mut best = 0;
    for (idx, quotation) in quotations.iter().enumerate().skip(1) {
        if quotation.decimal_price > quotations[best].decimal_price {
            best = idx;
        }
    }

    let competitor_prices = quotations
        .iter()
        .map(|q| CompetitorPrice {
            bookmaker: q.bookmaker.clone(),
            price: q.price,
        })
        .collect();

    let representative = quotations.swap_remove(best);
    Offer::from_representative(representative, average, competitor_prices)
}

/// Group and score every line of one event.
///
/// Offers come back in line discovery order.
#[must_use]
pub fn score_event(event: &Event) -> Vec<Offer> {
    group_lines(event).into_iter().map(score_group).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::{Bookmaker, Market, Outcome};
    use crate::domain::selection::{select, Criteria};

    fn h2h_event(prices: &[(&str, i64)]) -> Event {
        prices
            .iter()
            .fold(Event::new("evt", "basketball_nba", "TeamA", "TeamB"), |event, (book, price)| {
                event.with_bookmaker(
                    Bookmaker::new(*book)
                        .with_market(Market::new("h2h").with_outcome(Outcome::new("TeamA", *price))),
                )
            })
    }

    fn single_group(prices: &[(&str, i64)]) -> LineGroup {
        let mut groups = group_lines(&h2h_event(prices));
        assert_eq!(groups.len(), 1);
        groups.remove(0)
    }

    #[test]
    fn three_bookmaker_scenario() {
        let offer = score_group(single_group(&[("a", 120), ("b", 150), ("c", 110)]));

        assert_eq!(offer.bookmaker.as_str(), "b");
        assert_eq!(offer.price.value(), 150);
        assert!((offer.decimal_price - 1.5).abs() < 1e-12);
        assert!((offer.average_decimal_price - 3.8 / 3.0).abs() < 1e-12);
        assert!((offer.outlier_score - 1.5 / (3.8 / 3.0)).abs() < 1e-12);
        assert!((offer.outlier_score - 1.1842).abs() < 1e-4);

        let competitors: Vec<(&str, i64)> = offer
            .competitor_prices
            .iter()
            .map(|c| (c.bookmaker.as_str(), c.price.value()))
            .collect();
        assert_eq!(competitors, vec![("a", 120), ("b", 150), ("c", 110)]);
    }

    #[test]
    fn single_bookmaker_scores_exactly_one() {
        let offer = score_group(single_group(&[("solo", -135)]));
        assert_eq!(offer.outlier_score, 1.0);
        assert_eq!(offer.competitor_count(), 1);
    }

    #[test]
    fn lone_zero_price_scores_exactly_one() {
        let offer = score_group(single_group(&[("solo", 0)]));
        assert_eq!(offer.decimal_price, 0.0);
        assert_eq!(offer.outlier_score, 1.0);
    }

    #[test]
    fn identical_dead_zone_prices_score_one() {
        let offer = score_group(single_group(&[("a", 40), ("b", 40)]));
        assert_eq!(offer.outlier_score, 1.0);
    }

    #[test]
    fn zero_mean_group_ranks_after_real_offers() {
        let dead_zone = score_group(single_group(&[("b", -50), ("fanduel", 50)]));
        assert_eq!(dead_zone.price.value(), 50);
        assert_eq!(dead_zone.outlier_score, f64::INFINITY);

        let real = score_group(single_group(&[("fanduel", 150), ("b", 120), ("c", 110)]));
        let criteria = Criteria {
            bookmaker: BookmakerKey::from("fanduel"),
            max_price: 200,
            min_competitors: 1,
            limit: 10,
        };

        let ranked = select(vec![dead_zone, real], &criteria);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].price.value(), 150);
        assert_eq!(ranked[1].price.value(), 50);
    }

    #[test]
    fn non_finite_score_survives_json() {
        let offer = score_group(single_group(&[("a", -50), ("b", 50)]));
        let json = serde_json::to_string(&offer).unwrap();
        assert!(json.contains("\"outlier_score\":null"));

        let back: Offer = serde_json::from_str(&json).unwrap();
        assert_eq!(back.outlier_score, f64::INFINITY);
        assert_eq!(back.price, offer.price);
    }

    #[test]
    fn ties_go_to_first_quotation() {
        let offer = score_group(single_group(&[("first", 140), ("second", 140), ("third", 110)]));
        assert_eq!(offer.bookmaker.as_str(), "first");
    }

    #[test]
    fn dead_zone_prices_do_not_lose_to_a_zero_seed() {
        // Every decimal is negative; a zero-seeded maximum would pick nothing.
        let offer = score_group(single_group(&[("a", -50), ("b", -20), ("c", -80)]));
        assert_eq!(offer.bookmaker.as_str(), "b");
        assert_eq!(offer.price.value(), -20);
    }

    #[test]
    fn representative_has_maximum_decimal_price() {
        let offer = score_group(single_group(&[
            ("a", -110),
            ("b", -105),
            ("c", -120),
            ("d", 100),
        ]));
        let max = offer
            .competitor_prices
            .iter()
            .map(|c| c.price.to_decimal())
            .fold(f64::MIN, f64::max);
        assert_eq!(offer.decimal_price, max);
        assert_eq!(offer.bookmaker.as_str(), "d");
    }

    #[test]
    fn unique_positive_maximum_scores_above_one() {
        let offer = score_group(single_group(&[("a", -110), ("b", 105), ("c", -115)]));
        assert!(offer.outlier_score > 1.0);
    }

    #[test]
    fn competitor_list_matches_group_size() {
        let prices = [("a", -110), ("b", -105), ("c", -120), ("d", 100), ("e", -130)];
        let offer = score_group(single_group(&prices));

        assert_eq!(offer.competitor_count(), prices.len());
        for (book, price) in prices {
            let hits = offer
                .competitor_prices
                .iter()
                .filter(|c| c.bookmaker.as_str() == book && c.price.value() == price)
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn score_event_emits_one_offer_per_line() {
        let event = Event::new("evt", "basketball_nba", "H", "A")
            .with_bookmaker(
                Bookmaker::new("a").with_market(
                    Market::new("h2h")
                        .with_outcome(Outcome::new("H", -150))
                        .with_outcome(Outcome::new("A", 130)),
                ),
            )
            .with_bookmaker(
                Bookmaker::new("b").with_market(
                    Market::new("h2h")
                        .with_outcome(Outcome::new("H", -140))
                        .with_outcome(Outcome::new("A", 120)),
                ),
            );

        let offers = score_event(&event);

        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].outcome_name, "H");
        assert_eq!(offers[0].bookmaker.as_str(), "b");
        assert_eq!(offers[1].outcome_name, "A");
        assert_eq!(offers[1].bookmaker.as_str(), "a");
    }

    #[test]
    fn offer_json_uses_snake_case_fields() {
        let offer = score_group(single_group(&[("a", 120), ("b", 150)]));
        let json = serde_json::to_value(&offer).unwrap();

        assert_eq!(json["event_id"], "evt");
        assert_eq!(json["bookmaker"], "b");
        assert_eq!(json["price"], 150);
        assert_eq!(json["competitor_prices"][0]["bookmaker"], "a");
        assert_eq!(json["competitor_prices"][0]["price"], 120);
        assert!(json["outlier_score"].is_number());
    }
}
