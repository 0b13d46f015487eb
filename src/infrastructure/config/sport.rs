//! Sports to scan and the markets requested for each.

use serde::{Deserialize, Serialize};

use crate::application::SportScan;
use crate::domain::SportKey;

pub const NBA: &str = "basketball_nba";
pub const NCAAB: &str = "basketball_ncaab";
pub const NFL: &str = "americanfootball_nfl";
pub const NHL: &str = "icehockey_nhl";

const BASKETBALL_MARKETS: &[&str] = &[
    "h2h",
    "totals",
    "team_totals",
    "spreads",
    "player_points",
    "player_rebounds",
    "player_assists",
    "player_points_rebounds_assists",
    "player_points_rebounds",
    "player_points_assists",
    "player_rebounds_assists",
];

const NFL_MARKETS: &[&str] = &[
    "h2h",
    "totals",
    "team_totals",
    "spreads",
    "player_pass_tds",
    "player_pass_yds",
    "player_pass_completions",
    "player_pass_attempts",
    "player_pass_interceptions",
    "player_pass_longest_completion",
    "player_rush_yds",
    "player_rush_attempts",
    "player_rush_longest",
    "player_receptions",
    "player_reception_yds",
    "player_reception_longest",
    "player_kicking_points",
    "player_field_goals",
    "player_tackles_assists",
    "player_anytime_td",
];

const NHL_MARKETS: &[&str] = &[
    "h2h",
    "totals",
    "team_totals",
    "spreads",
    "player_points",
    "player_power_play_points",
    "player_assists",
    "player_shots_on_goal",
    "player_total_saves",
];

/// Built-in market set for a known sport key.
#[must_use]
pub fn preset_markets(sport: &str) -> Option<&'static [&'static str]> {
    match sport {
        NBA | NCAAB => Some(BASKETBALL_MARKETS),
        NFL => Some(NFL_MARKETS),
        NHL => Some(NHL_MARKETS),
        _ => None,
    }
}

/// One `[[sports]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SportConfig {
    pub key: SportKey,

    /// Market keys to request. Empty means "use the preset for this sport".
    #[serde(default)]
    pub markets: Vec<String>,
}

impl SportConfig {
    /// A sport with its preset market set (empty if the sport has none).
    pub fn preset(key: impl Into<SportKey>) -> Self {
        let key = key.into();
        let markets = preset_markets(key.as_str())
            .map(|m| m.iter().map(|s| (*s).to_string()).collect())
            .unwrap_or_default();
        Self { key, markets }
    }

    /// Fill an empty market list from the preset, if one exists.
    pub fn resolve_markets(&mut self) {
        if self.markets.is_empty() {
            if let Some(preset) = preset_markets(self.key.as_str()) {
                self.markets = preset.iter().map(|s| (*s).to_string()).collect();
            }
        }
    }
}

impl From<&SportConfig> for SportScan {
    fn from(sport: &SportConfig) -> Self {
        SportScan::new(sport.key.clone(), sport.markets.clone())
    }
}

pub(crate) fn default_sports() -> Vec<SportConfig> {
    vec![SportConfig::preset(NBA)]
}
