//! Pooled SQLite connections for the bet log.
//!
//! Every connection handed out by the pool already has `busy_timeout` set, so
//! a CLI `bets` listing and a running `serve` can share one file.

use std::path::Path;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::debug;

use crate::error::{Error, Result};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const POOL_SIZE: u32 = 4;
const IN_MEMORY: &str = ":memory:";

#[derive(Debug)]
struct BusyTimeout(u32);

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for BusyTimeout {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!("PRAGMA busy_timeout = {};", self.0))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

fn build_pool(database_url: &str) -> Result<DbPool> {
    // An in-memory database exists per connection, so it must not be shared.
    let size = if database_url == IN_MEMORY { 1 } else { POOL_SIZE };
    Pool::builder()
        .max_size(size)
        .connection_customizer(Box::new(BusyTimeout(5000)))
        .build(ConnectionManager::new(database_url))
        .map_err(|e| Error::Connection(e.to_string()))
}

fn migrate(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Database(e.to_string()))?;
    if !applied.is_empty() {
        debug!(count = applied.len(), "Applied bet log migrations");
    }
    Ok(())
}

/// Open (creating if needed) the database at `path` and bring its schema up
/// to date. `:memory:` is accepted for throwaway stores.
///
/// # Errors
/// Returns an error if the parent directory cannot be created, the pool
/// cannot connect, or a migration fails.
pub fn open(path: &str) -> Result<DbPool> {
    if path != IN_MEMORY {
        if let Some(dir) = Path::new(path).parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
    }
    let pool = build_pool(path)?;
    migrate(&pool)?;
    Ok(pool)
}
