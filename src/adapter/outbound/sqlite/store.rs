//! SQLite bet store implementation.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::BetRow;
use crate::adapter::outbound::sqlite::database::schema::bets;
use crate::domain::{AmericanPrice, BetId, BetRecord, Offer};
use crate::error::{Error, Result};
use crate::port::outbound::store::BetStore;

/// SQLite-backed bet store.
pub struct SqliteBetStore {
    pool: DbPool,
}

impl SqliteBetStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a fully-formed record.
    ///
    /// # Errors
    /// Returns an error if a connection cannot be obtained or the insert fails.
    pub fn insert(&self, record: &BetRecord) -> Result<()> {
        let row = Self::to_row(record);
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        diesel::insert_into(bets::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }

    fn to_row(record: &BetRecord) -> BetRow {
        BetRow {
            id: record.id.to_string(),
            event_id: record.event_id.to_string(),
            sport: record.sport_key.to_string(),
            home_team: record.home_team.clone(),
            away_team: record.away_team.clone(),
            event_time: record.commence_time.map(format_time),
            bookmaker: record.bookmaker.to_string(),
            market: record.market_key.clone(),
            outcome_name: record.outcome_name.clone(),
            outcome_desc: record.outcome_description.clone(),
            outcome_point: record.outcome_point,
            price: record.price.value(),
            outlier_score: record.outlier_score,
            recorded_at: format_time(record.recorded_at),
            finalized: record.finalized,
            won: record.won,
        }
    }

    fn from_row(row: BetRow) -> Result<BetRecord> {
        Ok(BetRecord {
            id: BetId::from(row.id),
            event_id: row.event_id.into(),
            sport_key: row.sport.into(),
            home_team: row.home_team,
            away_team: row.away_team,
            commence_time: row.event_time.as_deref().map(parse_time).transpose()?,
            bookmaker: row.bookmaker.into(),
            market_key: row.market,
            outcome_name: row.outcome_name,
            outcome_description: row.outcome_desc,
            outcome_point: row.outcome_point,
            price: AmericanPrice::new(row.price),
            outlier_score: row.outlier_score,
            recorded_at: parse_time(&row.recorded_at)?,
            finalized: row.finalized,
            won: row.won,
        })
    }
}

/// Fixed-width RFC 3339 so that text ordering matches time ordering.
fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_time(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| Error::Parse(e.to_string()))?
        .with_timezone(&Utc))
}

#[async_trait]
impl BetStore for SqliteBetStore {
    async fn record(&self, offer: &Offer) -> Result<BetId> {
        let record = BetRecord::from_offer(offer, Utc::now());
        self.insert(&record)?;
        Ok(record.id)
    }

    async fn list(&self) -> Result<Vec<BetRecord>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<BetRow> = bets::table
            .select(BetRow::as_select())
            .order((bets::recorded_at.desc(), bets::id.asc()))
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }
}
