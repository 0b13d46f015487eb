//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::bets;

/// Database row for a recorded bet.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = bets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BetRow {
    pub id: String,
    pub event_id: String,
    pub sport: String,
    pub home_team: String,
    pub away_team: String,
    pub event_time: Option<String>,
    pub bookmaker: String,
    pub market: String,
    pub outcome_name: String,
    pub outcome_desc: String,
    pub outcome_point: f64,
    pub price: i64,
    pub outlier_score: f64,
    pub recorded_at: String,
    pub finalized: bool,
    pub won: bool,
}
