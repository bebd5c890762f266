// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Append-only history tables.
//!
//! Every audited entity kind has its own table with an identical layout.
//! Rows are only ever inserted; nothing in this crate updates or deletes
//! them.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard_audit::AuditRecord;
use shiftboard_domain::EntityKind;
use tracing::debug;
use uuid::Uuid;

use crate::data_models::HistoryRow;
use crate::error::PersistenceError;

history_table_fns!(
    shift_type_history,
    workline_history,
    monthly_schedule_history,
    vacancy_history,
);

/// Appends an audit record to the history table of its entity kind.
///
/// # Errors
///
/// Returns an error if the record cannot be serialized or written.
pub fn append_record(
    conn: &mut SqliteConnection,
    record: &AuditRecord,
) -> Result<(), PersistenceError> {
    debug!(
        history_id = %record.history_id,
        entity = %record.entity,
        entity_id = %record.entity_id,
        method = %record.method_name,
        "Appending audit record"
    );

    let row: HistoryRow = HistoryRow::from_record(record)?;
    match record.entity {
        EntityKind::ShiftType => append_shift_type_history(conn, &row),
        EntityKind::Workline => append_workline_history(conn, &row),
        EntityKind::MonthlySchedule => append_monthly_schedule_history(conn, &row),
        EntityKind::VacancyTimeline => append_vacancy_history(conn, &row),
    }
}

/// Appends several audit records, in order.
///
/// # Errors
///
/// Returns an error on the first record that cannot be written.
pub fn append_records<'a>(
    conn: &mut SqliteConnection,
    records: impl IntoIterator<Item = &'a AuditRecord>,
) -> Result<(), PersistenceError> {
    for record in records {
        append_record(conn, record)?;
    }
    Ok(())
}

/// Loads the audit records of one entity in creation order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn records_for(
    conn: &mut SqliteConnection,
    entity: EntityKind,
    entity_id: Uuid,
) -> Result<Vec<AuditRecord>, PersistenceError> {
    let id: String = entity_id.to_string();
    let rows: Vec<HistoryRow> = match entity {
        EntityKind::ShiftType => list_shift_type_history(conn, &id)?,
        EntityKind::Workline => list_workline_history(conn, &id)?,
        EntityKind::MonthlySchedule => list_monthly_schedule_history(conn, &id)?,
        EntityKind::VacancyTimeline => list_vacancy_history(conn, &id)?,
    };

    rows.into_iter()
        .map(|row| row.into_record(entity))
        .collect()
}
