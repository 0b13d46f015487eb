//! American odds and their decimal multiplier form.
//!
//! Bookmakers quote American odds: `+150` pays 150 on a 100 stake, `-200`
//! needs a 200 stake to win 100. Converting to a decimal multiplier makes
//! prices from different bookmakers directly comparable with plain
//! arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw American price as quoted by a bookmaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AmericanPrice(i64);

impl AmericanPrice {
    #[must_use]
    pub const fn new(price: i64) -> Self {
        Self(price)
    }

    /// Round a provider-supplied numeric price to the nearest integer.
    #[must_use]
    pub fn from_f64(price: f64) -> Self {
        Self(price.round() as i64)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Decimal multiplier for this price. See [`to_decimal`].
    #[must_use]
    pub fn to_decimal(self) -> f64 {
        to_decimal(self.0)
    }
}

impl fmt::Display for AmericanPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<i64> for AmericanPrice {
    fn from(price: i64) -> Self {
        Self(price)
    }
}

/// Convert an American price into a comparable decimal multiplier.
///
/// - `price >= 100`: `price / 100`
/// - `price <= -100`: `100 / -price`
/// - anything in between is not a legal American price; it falls back to
///   `price / 100` so the value stays ordered but is never rejected.
#[must_use]
pub fn to_decimal(price: i64) -> f64 {
    if price >= 100 {
        price as f64 / 100.0
    } else if price <= -100 {
        100.0 / (-price) as f64
    } else {
        price as f64 / 100.0
    }
}
