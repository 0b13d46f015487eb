//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::odds_api::OddsApiClient;
use crate::adapter::outbound::sqlite::database::connection::open;
use crate::adapter::outbound::sqlite::SqliteBetStore;
use crate::application::{BetRecorder, OfferScanner, SportScan};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::provider::OddsProvider;
use crate::port::outbound::store::BetStore;

/// Build the odds provider client.
///
/// # Errors
/// Returns an error if no API key was configured.
pub fn build_provider(config: &Config) -> Result<Arc<dyn OddsProvider>> {
    let client = OddsApiClient::from_config(&config.provider)?;
    Ok(Arc::new(client))
}

/// Build a scanner over the configured sports using `provider`.
#[must_use]
pub fn build_scanner(config: &Config, provider: Arc<dyn OddsProvider>) -> OfferScanner {
    let sports = config.sports.iter().map(SportScan::from).collect();
    OfferScanner::new(provider, sports, config.provider.max_concurrent_requests)
}

/// Open (and migrate) the bet database.
///
/// # Errors
/// Returns an error if the database cannot be opened or migrated.
pub fn build_store(config: &Config) -> Result<Arc<dyn BetStore>> {
    let pool = open(&config.database)?;
    info!(path = %config.database, "Opened bet database");
    Ok(Arc::new(SqliteBetStore::new(pool)))
}

/// Build a recorder backed by the configured database.
///
/// # Errors
/// Returns an error if the database cannot be opened or migrated.
pub fn build_recorder(config: &Config) -> Result<BetRecorder> {
    Ok(BetRecorder::new(build_store(config)?))
}
