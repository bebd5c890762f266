// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for shiftboard.
//!
//! This crate stores the dimension entities (shift types and worklines),
//! the snapshot-bearing aggregates (monthly schedules and vacancy
//! timelines), the dependent rows that reference them, and one append-only
//! history table per audited entity kind. It is built on Diesel over
//! `SQLite`.
//!
//! ## Transactions
//!
//! Every public mutation on [`Persistence`] runs inside one immediate
//! transaction: the entity write, every snapshot rewrite it causes and
//! every history row are committed together or not at all.
//!
//! ## Testing
//!
//! Tests use [`Persistence::new_in_memory`], which hands out an isolated
//! shared-cache in-memory database per call.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use shiftboard::{DimensionUpdateResult, SyncResult, TransitionResult};
use shiftboard_audit::{AuditContext, AuditRecord};
use shiftboard_domain::{
    DependentKind, DimensionKind, EntityKind, MonthlySchedule, ReferenceUsage, ShiftType,
    VacancyTimeline, Workline,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use uuid::Uuid;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generates the insert and list functions of the history tables.
///
/// Every history table shares one column layout, and Diesel needs a concrete
/// table type per query. For each table name this expands to:
///
/// - `append_<table>(&mut SqliteConnection, &HistoryRow)`
/// - `list_<table>(&mut SqliteConnection, entity_id: &str)`, ordered by
///   history id, which is time-ordered
///
/// The macro only stamps out bodies; dispatch by entity kind happens in
/// `history`.
macro_rules! history_table_fns {
    ($($table:ident),+ $(,)?) => {
        $(
            pastey::paste! {
                #[doc = concat!("Inserts one row into `", stringify!($table), "`.")]
                fn [<append_ $table>](
                    conn: &mut SqliteConnection,
                    row: &HistoryRow,
                ) -> Result<(), PersistenceError> {
                    use $crate::diesel_schema::$table;

                    diesel::insert_into($table::table)
                        .values((
                            $table::history_id.eq(&row.history_id),
                            $table::entity_id.eq(&row.entity_id),
                            $table::method_name.eq(&row.method_name),
                            $table::is_new_record.eq(row.is_new_record),
                            $table::platform.eq(&row.platform),
                            $table::actor_json.eq(row.actor_json.as_deref()),
                            $table::diff_json.eq(&row.diff_json),
                            $table::history_at.eq(&row.history_at),
                        ))
                        .execute(conn)?;
                    Ok(())
                }

                #[doc = concat!("Loads the rows of `", stringify!($table), "` for one entity.")]
                fn [<list_ $table>](
                    conn: &mut SqliteConnection,
                    entity_id: &str,
                ) -> Result<Vec<HistoryRow>, PersistenceError> {
                    use $crate::diesel_schema::$table;

                    Ok($table::table
                        .filter($table::entity_id.eq(entity_id))
                        .order($table::history_id.asc())
                        .select((
                            $table::history_id,
                            $table::entity_id,
                            $table::method_name,
                            $table::is_new_record,
                            $table::platform,
                            $table::actor_json,
                            $table::diff_json,
                            $table::history_at,
                        ))
                        .load::<HistoryRow>(conn)?)
                }
            }
        )+
    };
}

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod history;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use mutations::transitions;

/// Persistence adapter for shiftboard entities and their history.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database, so adapters never
    /// see each other's rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:shiftboard_mem_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::configure_file_database(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Runs `f` inside one immediate transaction, rolling back on any error.
    fn transact<T>(
        &mut self,
        f: impl FnOnce(&mut SqliteConnection) -> Result<T, PersistenceError>,
    ) -> Result<T, PersistenceError> {
        self.conn.immediate_transaction::<T, PersistenceError, _>(f)
    }

    // ========================================================================
    // Shift Types
    // ========================================================================

    /// Creates a shift type.
    ///
    /// # Errors
    ///
    /// Returns an error if the mnemonic is taken within the organization or a
    /// write fails.
    pub fn create_shift_type(
        &mut self,
        shift_type: ShiftType,
        ctx: &AuditContext,
    ) -> Result<TransitionResult<ShiftType>, PersistenceError> {
        self.transact(|conn| transitions::create_dimension(conn, shift_type, ctx))
    }

    /// Updates a shift type and rewrites every snapshot that embeds it.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift type does not exist or is deleted, the
    /// update changes its identity, the mnemonic is taken, or a write fails.
    pub fn update_shift_type(
        &mut self,
        desirable: ShiftType,
        ctx: &AuditContext,
    ) -> Result<DimensionUpdateResult<ShiftType>, PersistenceError> {
        self.transact(|conn| transitions::update_dimension(conn, desirable, ctx))
    }

    /// Soft-deletes a shift type no live dependent row references.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift type does not exist, is already deleted,
    /// is still referenced, or a write fails.
    pub fn soft_delete_shift_type(
        &mut self,
        id: Uuid,
        ctx: &AuditContext,
    ) -> Result<TransitionResult<ShiftType>, PersistenceError> {
        self.transact(|conn| transitions::soft_delete_dimension::<ShiftType>(conn, id, ctx))
    }

    /// Restores a soft-deleted shift type.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift type does not exist, is not deleted, its
    /// mnemonic is now taken, or a write fails.
    pub fn restore_shift_type(
        &mut self,
        id: Uuid,
        ctx: &AuditContext,
    ) -> Result<TransitionResult<ShiftType>, PersistenceError> {
        self.transact(|conn| transitions::restore_dimension_entity::<ShiftType>(conn, id, ctx))
    }

    /// Re-applies the stored shift type to every snapshot that embeds it.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift type does not exist or is deleted, or a
    /// write fails.
    pub fn resync_shift_type(
        &mut self,
        id: Uuid,
        ctx: &AuditContext,
    ) -> Result<SyncResult, PersistenceError> {
        self.transact(|conn| transitions::resync_dimension::<ShiftType>(conn, id, ctx))
    }

    /// Loads a shift type, including a soft-deleted one.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_shift_type(&mut self, id: Uuid) -> Result<Option<ShiftType>, PersistenceError> {
        queries::dimensions::get_shift_type(&mut self.conn, id)
    }

    /// Lists every shift type of an organization, including soft-deleted ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_shift_types(
        &mut self,
        organization_id: Uuid,
    ) -> Result<Vec<ShiftType>, PersistenceError> {
        queries::dimensions::list_shift_types(&mut self.conn, organization_id)
    }

    // ========================================================================
    // Worklines
    // ========================================================================

    /// Creates a workline.
    ///
    /// # Errors
    ///
    /// Returns an error if the mnemonic is taken within the organization or a
    /// write fails.
    pub fn create_workline(
        &mut self,
        workline: Workline,
        ctx: &AuditContext,
    ) -> Result<TransitionResult<Workline>, PersistenceError> {
        self.transact(|conn| transitions::create_dimension(conn, workline, ctx))
    }

    /// Updates a workline and rewrites every snapshot that embeds it.
    ///
    /// # Errors
    ///
    /// Returns an error if the workline does not exist or is deleted, the
    /// update changes its identity, the mnemonic is taken, or a write fails.
    pub fn update_workline(
        &mut self,
        desirable: Workline,
        ctx: &AuditContext,
    ) -> Result<DimensionUpdateResult<Workline>, PersistenceError> {
        self.transact(|conn| transitions::update_dimension(conn, desirable, ctx))
    }

    /// Soft-deletes a workline no live dependent row references.
    ///
    /// # Errors
    ///
    /// Returns an error if the workline does not exist, is already deleted, is
    /// still referenced, or a write fails.
    pub fn soft_delete_workline(
        &mut self,
        id: Uuid,
        ctx: &AuditContext,
    ) -> Result<TransitionResult<Workline>, PersistenceError> {
        self.transact(|conn| transitions::soft_delete_dimension::<Workline>(conn, id, ctx))
    }

    /// Restores a soft-deleted workline.
    ///
    /// # Errors
    ///
    /// Returns an error if the workline does not exist, is not deleted, its
    /// mnemonic is now taken, or a write fails.
    pub fn restore_workline(
        &mut self,
        id: Uuid,
        ctx: &AuditContext,
    ) -> Result<TransitionResult<Workline>, PersistenceError> {
        self.transact(|conn| transitions::restore_dimension_entity::<Workline>(conn, id, ctx))
    }

    /// Re-applies the stored workline to every snapshot that embeds it.
    ///
    /// # Errors
    ///
    /// Returns an error if the workline does not exist or is deleted, or a
    /// write fails.
    pub fn resync_workline(
        &mut self,
        id: Uuid,
        ctx: &AuditContext,
    ) -> Result<SyncResult, PersistenceError> {
        self.transact(|conn| transitions::resync_dimension::<Workline>(conn, id, ctx))
    }

    /// Loads a workline, including a soft-deleted one.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_workline(&mut self, id: Uuid) -> Result<Option<Workline>, PersistenceError> {
        queries::dimensions::get_workline(&mut self.conn, id)
    }

    /// Lists every workline of an organization, including soft-deleted ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_worklines(
        &mut self,
        organization_id: Uuid,
    ) -> Result<Vec<Workline>, PersistenceError> {
        queries::dimensions::list_worklines(&mut self.conn, organization_id)
    }

    // ========================================================================
    // Snapshot-bearing aggregates
    // ========================================================================

    /// Creates a monthly schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule cannot be audited or written.
    pub fn create_monthly_schedule(
        &mut self,
        schedule: MonthlySchedule,
        ctx: &AuditContext,
    ) -> Result<TransitionResult<MonthlySchedule>, PersistenceError> {
        self.transact(|conn| transitions::create_aggregate(conn, schedule, ctx))
    }

    /// Soft-deletes a monthly schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule does not exist, is already deleted, or
    /// a write fails.
    pub fn soft_delete_monthly_schedule(
        &mut self,
        id: Uuid,
        ctx: &AuditContext,
    ) -> Result<TransitionResult<MonthlySchedule>, PersistenceError> {
        self.transact(|conn| transitions::set_aggregate_lifecycle(conn, id, true, ctx))
    }

    /// Restores a soft-deleted monthly schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule does not exist, is not deleted, or a
    /// write fails.
    pub fn restore_monthly_schedule(
        &mut self,
        id: Uuid,
        ctx: &AuditContext,
    ) -> Result<TransitionResult<MonthlySchedule>, PersistenceError> {
        self.transact(|conn| transitions::set_aggregate_lifecycle(conn, id, false, ctx))
    }

    /// Loads a monthly schedule with its calendar snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the snapshot cannot be decoded.
    pub fn get_monthly_schedule(
        &mut self,
        id: Uuid,
    ) -> Result<Option<MonthlySchedule>, PersistenceError> {
        queries::aggregates::get_monthly_schedule(&mut self.conn, id)
    }

    /// Creates a vacancy timeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the vacancy cannot be audited or written.
    pub fn create_vacancy(
        &mut self,
        vacancy: VacancyTimeline,
        ctx: &AuditContext,
    ) -> Result<TransitionResult<VacancyTimeline>, PersistenceError> {
        self.transact(|conn| transitions::create_aggregate(conn, vacancy, ctx))
    }

    /// Soft-deletes a vacancy timeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the vacancy does not exist, is already deleted, or
    /// a write fails.
    pub fn soft_delete_vacancy(
        &mut self,
        id: Uuid,
        ctx: &AuditContext,
    ) -> Result<TransitionResult<VacancyTimeline>, PersistenceError> {
        self.transact(|conn| transitions::set_aggregate_lifecycle(conn, id, true, ctx))
    }

    /// Restores a soft-deleted vacancy timeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the vacancy does not exist, is not deleted, or a
    /// write fails.
    pub fn restore_vacancy(
        &mut self,
        id: Uuid,
        ctx: &AuditContext,
    ) -> Result<TransitionResult<VacancyTimeline>, PersistenceError> {
        self.transact(|conn| transitions::set_aggregate_lifecycle(conn, id, false, ctx))
    }

    /// Loads a vacancy timeline with its snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the snapshot cannot be decoded.
    pub fn get_vacancy(&mut self, id: Uuid) -> Result<Option<VacancyTimeline>, PersistenceError> {
        queries::aggregates::get_vacancy(&mut self.conn, id)
    }

    // ========================================================================
    // Dependent rows
    // ========================================================================

    /// Adds a working shift plan to a monthly schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced row does not exist, the shift type or
    /// workline is soft-deleted, or the write fails.
    pub fn add_working_shift_plan(
        &mut self,
        schedule_id: Uuid,
        shift_type_id: Uuid,
        workline_id: Uuid,
    ) -> Result<Uuid, PersistenceError> {
        self.transact(|conn| {
            mutations::dependents::insert_working_shift_plan(
                conn,
                schedule_id,
                shift_type_id,
                workline_id,
            )
        })
    }

    /// Adds a working shift fact to a monthly schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced row does not exist, the shift type or
    /// workline is soft-deleted, or the write fails.
    pub fn add_working_shift_fact(
        &mut self,
        schedule_id: Uuid,
        shift_type_id: Uuid,
        workline_id: Uuid,
    ) -> Result<Uuid, PersistenceError> {
        self.transact(|conn| {
            mutations::dependents::insert_working_shift_fact(
                conn,
                schedule_id,
                shift_type_id,
                workline_id,
            )
        })
    }

    /// Adds a schedule template cell.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced row does not exist, the shift type or
    /// workline is soft-deleted, or the write fails.
    pub fn add_schedule_template_cell(
        &mut self,
        shift_type_id: Uuid,
        workline_id: Uuid,
    ) -> Result<Uuid, PersistenceError> {
        self.transact(|conn| {
            mutations::dependents::insert_schedule_template_cell(conn, shift_type_id, workline_id)
        })
    }

    /// Adds a working shift to a vacancy.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced row does not exist, the shift type or
    /// workline is soft-deleted, or the write fails.
    pub fn add_vacancy_working_shift(
        &mut self,
        vacancy_id: Uuid,
        shift_type_id: Uuid,
        workline_id: Uuid,
    ) -> Result<Uuid, PersistenceError> {
        self.transact(|conn| {
            mutations::dependents::insert_vacancy_working_shift(
                conn,
                vacancy_id,
                shift_type_id,
                workline_id,
            )
        })
    }

    /// Soft-deletes a live dependent row.
    ///
    /// # Errors
    ///
    /// Returns an error if no live row of that kind has this id.
    pub fn soft_delete_dependent(
        &mut self,
        dependent: DependentKind,
        id: Uuid,
        deleted_at: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        mutations::dependents::soft_delete_dependent(&mut self.conn, dependent, id, deleted_at)
    }

    /// Counts the live dependent rows that still reference a shift type or
    /// workline, per declared reference.
    ///
    /// # Errors
    ///
    /// Returns an error if a count fails.
    pub fn reference_usages(
        &mut self,
        kind: DimensionKind,
        id: Uuid,
    ) -> Result<Vec<ReferenceUsage>, PersistenceError> {
        queries::references::reference_usages(&mut self.conn, kind, id)
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Loads the audit records of one entity, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub fn history_for(
        &mut self,
        entity: EntityKind,
        entity_id: Uuid,
    ) -> Result<Vec<AuditRecord>, PersistenceError> {
        history::records_for(&mut self.conn, entity, entity_id)
    }
}
