// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift type and workline mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard_domain::{ShiftType, Workline};
use tracing::{debug, info};

use crate::data_models::{ShiftTypeRow, WorklineRow};
use crate::diesel_schema::{shift_types, worklines};
use crate::error::PersistenceError;

/// Inserts a new shift type row.
///
/// # Errors
///
/// Returns an error if the row cannot be written.
pub fn insert_shift_type(
    conn: &mut SqliteConnection,
    shift_type: &ShiftType,
) -> Result<(), PersistenceError> {
    info!(shift_type_id = %shift_type.id, name = %shift_type.display.name, "Creating shift type");

    diesel::insert_into(shift_types::table)
        .values(ShiftTypeRow::from_domain(shift_type)?)
        .execute(conn)?;
    Ok(())
}

/// Overwrites every column of an existing shift type row.
///
/// # Errors
///
/// Returns an error if the row cannot be written.
pub fn save_shift_type(
    conn: &mut SqliteConnection,
    shift_type: &ShiftType,
) -> Result<(), PersistenceError> {
    debug!(shift_type_id = %shift_type.id, "Saving shift type");

    let row: ShiftTypeRow = ShiftTypeRow::from_domain(shift_type)?;
    diesel::update(shift_types::table)
        .filter(shift_types::shift_type_id.eq(&row.shift_type_id))
        .set(&row)
        .execute(conn)?;
    Ok(())
}

/// Inserts a new workline row.
///
/// # Errors
///
/// Returns an error if the row cannot be written.
pub fn insert_workline(
    conn: &mut SqliteConnection,
    workline: &Workline,
) -> Result<(), PersistenceError> {
    info!(workline_id = %workline.id, name = %workline.display.name, "Creating workline");

    diesel::insert_into(worklines::table)
        .values(WorklineRow::from_domain(workline)?)
        .execute(conn)?;
    Ok(())
}

/// Overwrites every column of an existing workline row.
///
/// # Errors
///
/// Returns an error if the row cannot be written.
pub fn save_workline(
    conn: &mut SqliteConnection,
    workline: &Workline,
) -> Result<(), PersistenceError> {
    debug!(workline_id = %workline.id, "Saving workline");

    let row: WorklineRow = WorklineRow::from_domain(workline)?;
    diesel::update(worklines::table)
        .filter(worklines::workline_id.eq(&row.workline_id))
        .set(&row)
        .execute(conn)?;
    Ok(())
}
