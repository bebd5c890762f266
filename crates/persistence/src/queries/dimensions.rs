// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift type and workline queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard_domain::{ShiftType, Workline};
use tracing::debug;
use uuid::Uuid;

use crate::data_models::{ShiftTypeRow, WorklineRow};
use crate::diesel_schema::{shift_types, worklines};
use crate::error::PersistenceError;

/// Retrieves a shift type by id, including soft-deleted ones.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is malformed.
/// Returns `Ok(None)` if no shift type has this id.
pub fn get_shift_type(
    conn: &mut SqliteConnection,
    shift_type_id: Uuid,
) -> Result<Option<ShiftType>, PersistenceError> {
    debug!(%shift_type_id, "Looking up shift type");

    shift_types::table
        .filter(shift_types::shift_type_id.eq(shift_type_id.to_string()))
        .select(ShiftTypeRow::as_select())
        .first(conn)
        .optional()?
        .map(ShiftTypeRow::into_domain)
        .transpose()
}

/// Lists every shift type of an organization, including soft-deleted ones.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_shift_types(
    conn: &mut SqliteConnection,
    organization_id: Uuid,
) -> Result<Vec<ShiftType>, PersistenceError> {
    shift_types::table
        .filter(shift_types::organization_id.eq(organization_id.to_string()))
        .order(shift_types::order_index.asc())
        .select(ShiftTypeRow::as_select())
        .load(conn)?
        .into_iter()
        .map(ShiftTypeRow::into_domain)
        .collect()
}

/// Retrieves a workline by id, including soft-deleted ones.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is malformed.
/// Returns `Ok(None)` if no workline has this id.
pub fn get_workline(
    conn: &mut SqliteConnection,
    workline_id: Uuid,
) -> Result<Option<Workline>, PersistenceError> {
    debug!(%workline_id, "Looking up workline");

    worklines::table
        .filter(worklines::workline_id.eq(workline_id.to_string()))
        .select(WorklineRow::as_select())
        .first(conn)
        .optional()?
        .map(WorklineRow::into_domain)
        .transpose()
}

/// Lists every workline of an organization, including soft-deleted ones.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_worklines(
    conn: &mut SqliteConnection,
    organization_id: Uuid,
) -> Result<Vec<Workline>, PersistenceError> {
    worklines::table
        .filter(worklines::organization_id.eq(organization_id.to_string()))
        .order(worklines::order_index.asc())
        .select(WorklineRow::as_select())
        .load(conn)?
        .into_iter()
        .map(WorklineRow::into_domain)
        .collect()
}
