//! Cross-event ranking and filtering of scored offers.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::id::BookmakerKey;
use super::offer::Offer;

/// Well-known bookmaker keys.
pub const FANDUEL: &str = "fanduel";
pub const DRAFTKINGS: &str = "draftkings";

/// Operator-supplied filter applied to the ranked offer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    /// Only offers priced by this bookmaker survive.
    #[serde(default = "default_bookmaker")]
    pub bookmaker: BookmakerKey,

    /// Raw American price must be strictly below this value.
    #[serde(default = "default_max_price")]
    pub max_price: i64,

    /// Competitor count must be strictly greater than this value.
    #[serde(default = "default_min_competitors")]
    pub min_competitors: usize,

    /// Maximum number of offers returned.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_bookmaker() -> BookmakerKey {
    BookmakerKey::from(FANDUEL)
}

const fn default_max_price() -> i64 {
    111
}

const fn default_min_competitors() -> usize {
    4
}

const fn default_limit() -> usize {
    10
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            bookmaker: default_bookmaker(),
            max_price: default_max_price(),
            min_competitors: default_min_competitors(),
            limit: default_limit(),
        }
    }
}

impl Criteria {
    /// Whether a single offer passes the bookmaker, price and competitor filters.
    #[must_use]
    pub fn matches(&self, offer: &Offer) -> bool {
        offer.bookmaker == self.bookmaker
            && offer.price.value() < self.max_price
            && offer.competitor_count() > self.min_competitors
    }
}

/// Ranking order: finite outlier scores first, score descending, then event
/// id, line fields and bookmaker ascending so equal scores always land in the
/// same order.
///
/// A dead-zone group whose mean decimal price is zero scores non-finite; such
/// offers rank after every real one.
#[must_use]
pub fn rank_order(a: &Offer, b: &Offer) -> Ordering {
    b.outlier_score
        .is_finite()
        .cmp(&a.outlier_score.is_finite())
        .then_with(|| b.outlier_score.total_cmp(&a.outlier_score))
        .then_with(|| a.event_id.cmp(&b.event_id))
        .then_with(|| a.market_key.cmp(&b.market_key))
        .then_with(|| a.outcome_name.cmp(&b.outcome_name))
        .then_with(|| a.outcome_description.cmp(&b.outcome_description))
        .then_with(|| a.outcome_point.total_cmp(&b.outcome_point))
        .then_with(|| a.bookmaker.cmp(&b.bookmaker))
}

/// Merge, rank, filter and cap offers from any number of events.
///
/// Returns at most `criteria.limit` offers, highest outlier score first.
/// Fewer survivors than the limit simply yields a shorter list.
#[must_use]
pub fn select<I>(offers: I, criteria: &Criteria) -> Vec<Offer>
where
    I: IntoIterator<Item = Offer>,
{
    let mut ranked: Vec<Offer> = offers.into_iter().collect();
    ranked.sort_by(rank_order);

    ranked
        .into_iter()
        .filter(|offer| criteria.matches(offer))
        .take(criteria.limit)
        .collect()
}
