// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-specific backend utilities.
//!
//! Connection setup for the store: foreign key enforcement, journal mode
//! and the embedded migrations that create the entity, dependent and
//! history tables.

use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Embedded schema migrations.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Milliseconds a writer waits on a locked file database before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Row shape of `PRAGMA foreign_keys`.
#[derive(QueryableByName)]
struct PragmaRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Verifies that foreign key enforcement is enabled.
///
/// Dependent rows reference dimension entities and aggregates by id; without
/// enforcement a dangling reference could be written.
///
/// # Errors
///
/// Returns an error if foreign key enforcement is not enabled.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    // NOTE: Diesel has no PRAGMA DSL
    let foreign_keys_enabled: i32 = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<PragmaRow>(conn)?
        .foreign_keys;

    if foreign_keys_enabled == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    debug!("SQLite foreign key enforcement is enabled");
    Ok(())
}

/// Runs pending migrations on the provided connection.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    info!(applied = applied.len(), "Applied SQLite migrations");
    Ok(())
}

/// Opens a database at the given URL, enables foreign keys and migrates it.
///
/// # Arguments
///
/// * `database_url` - A file path or a `file:` URL for shared in-memory databases
///
/// # Errors
///
/// Returns an error if connection or migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Initializing SQLite database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

    run_migrations(&mut conn)?;
    Ok(conn)
}

/// Switches a file database to WAL and sets the busy timeout.
///
/// # Errors
///
/// Returns an error if a PRAGMA statement fails.
pub fn configure_file_database(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    diesel::sql_query(format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}
