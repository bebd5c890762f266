// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference-holding rows.
//!
//! Dependents are not audited. Their only role here is to make dimension
//! entities "referenced" and to locate the aggregates embedding a copy.
//! A soft-deleted shift type or workline never receives a new dependent.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard::CoreError;
use shiftboard_domain::{DependentKind, ShiftType, Workline, validate_not_deleted};
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::data_models::format_instant;
use crate::diesel_schema::{
    schedule_template_cells, vacancy_working_shifts, working_shift_facts, working_shift_plans,
};
use crate::error::PersistenceError;
use crate::store::StoredDimension;

/// Rejects an assignment to a missing or soft-deleted dimension entity.
fn ensure_assignable<D: StoredDimension>(
    conn: &mut SqliteConnection,
    id: Uuid,
) -> Result<(), PersistenceError> {
    let entity: D = D::load(conn, id)?;
    validate_not_deleted(D::ENTITY, id, &entity).map_err(CoreError::from)?;
    Ok(())
}

fn ensure_pair_assignable(
    conn: &mut SqliteConnection,
    shift_type_id: Uuid,
    workline_id: Uuid,
) -> Result<(), PersistenceError> {
    ensure_assignable::<ShiftType>(conn, shift_type_id)?;
    ensure_assignable::<Workline>(conn, workline_id)
}

/// Inserts a working shift plan row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `schedule_id` - The owning monthly schedule
/// * `shift_type_id` - The referenced shift type
/// * `workline_id` - The referenced workline
///
/// # Errors
///
/// Returns an error if the row cannot be written, including when a
/// referenced row does not exist. Returns `DomainError::EntityDeleted`
/// if the shift type or workline is soft-deleted.
pub fn insert_working_shift_plan(
    conn: &mut SqliteConnection,
    schedule_id: Uuid,
    shift_type_id: Uuid,
    workline_id: Uuid,
) -> Result<Uuid, PersistenceError> {
    ensure_pair_assignable(conn, shift_type_id, workline_id)?;

    let plan_id: Uuid = Uuid::now_v7();
    info!(%plan_id, %schedule_id, %shift_type_id, %workline_id, "Creating working shift plan");

    diesel::insert_into(working_shift_plans::table)
        .values((
            working_shift_plans::working_shift_plan_id.eq(plan_id.to_string()),
            working_shift_plans::monthly_schedule_id.eq(schedule_id.to_string()),
            working_shift_plans::shift_type_id.eq(shift_type_id.to_string()),
            working_shift_plans::workline_id.eq(workline_id.to_string()),
        ))
        .execute(conn)?;
    Ok(plan_id)
}

/// Inserts a working shift fact row.
///
/// # Errors
///
/// Returns an error if the row cannot be written or a referenced
/// dimension entity is missing or soft-deleted.
pub fn insert_working_shift_fact(
    conn: &mut SqliteConnection,
    schedule_id: Uuid,
    shift_type_id: Uuid,
    workline_id: Uuid,
) -> Result<Uuid, PersistenceError> {
    ensure_pair_assignable(conn, shift_type_id, workline_id)?;

    let fact_id: Uuid = Uuid::now_v7();
    info!(%fact_id, %schedule_id, %shift_type_id, %workline_id, "Creating working shift fact");

    diesel::insert_into(working_shift_facts::table)
        .values((
            working_shift_facts::working_shift_fact_id.eq(fact_id.to_string()),
            working_shift_facts::monthly_schedule_id.eq(schedule_id.to_string()),
            working_shift_facts::shift_type_id.eq(shift_type_id.to_string()),
            working_shift_facts::workline_id.eq(workline_id.to_string()),
        ))
        .execute(conn)?;
    Ok(fact_id)
}

/// Inserts a schedule template cell row.
///
/// # Errors
///
/// Returns an error if the row cannot be written or a referenced
/// dimension entity is missing or soft-deleted.
pub fn insert_schedule_template_cell(
    conn: &mut SqliteConnection,
    shift_type_id: Uuid,
    workline_id: Uuid,
) -> Result<Uuid, PersistenceError> {
    ensure_pair_assignable(conn, shift_type_id, workline_id)?;

    let cell_id: Uuid = Uuid::now_v7();
    info!(%cell_id, %shift_type_id, %workline_id, "Creating schedule template cell");

    diesel::insert_into(schedule_template_cells::table)
        .values((
            schedule_template_cells::schedule_template_cell_id.eq(cell_id.to_string()),
            schedule_template_cells::shift_type_id.eq(shift_type_id.to_string()),
            schedule_template_cells::workline_id.eq(workline_id.to_string()),
        ))
        .execute(conn)?;
    Ok(cell_id)
}

/// Inserts a vacancy working shift row.
///
/// # Errors
///
/// Returns an error if the row cannot be written or a referenced
/// dimension entity is missing or soft-deleted.
pub fn insert_vacancy_working_shift(
    conn: &mut SqliteConnection,
    vacancy_id: Uuid,
    shift_type_id: Uuid,
    workline_id: Uuid,
) -> Result<Uuid, PersistenceError> {
    ensure_pair_assignable(conn, shift_type_id, workline_id)?;

    let shift_id: Uuid = Uuid::now_v7();
    info!(%shift_id, %vacancy_id, %shift_type_id, %workline_id, "Creating vacancy working shift");

    diesel::insert_into(vacancy_working_shifts::table)
        .values((
            vacancy_working_shifts::vacancy_working_shift_id.eq(shift_id.to_string()),
            vacancy_working_shifts::vacancy_id.eq(vacancy_id.to_string()),
            vacancy_working_shifts::shift_type_id.eq(shift_type_id.to_string()),
            vacancy_working_shifts::workline_id.eq(workline_id.to_string()),
        ))
        .execute(conn)?;
    Ok(shift_id)
}

/// Sets the deletion marker of a live dependent row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `dependent` - The dependent kind
/// * `id` - The dependent row id
/// * `deleted_at` - The deletion instant
///
/// # Errors
///
/// Returns an error if no live row of that kind has this id.
pub fn soft_delete_dependent(
    conn: &mut SqliteConnection,
    dependent: DependentKind,
    id: Uuid,
    deleted_at: OffsetDateTime,
) -> Result<(), PersistenceError> {
    let row_id: String = id.to_string();
    let marker: String = format_instant(deleted_at)?;

    let updated: usize = match dependent {
        DependentKind::WorkingShiftPlan => diesel::update(working_shift_plans::table)
            .filter(working_shift_plans::working_shift_plan_id.eq(&row_id))
            .filter(working_shift_plans::deleted_at.is_null())
            .set(working_shift_plans::deleted_at.eq(&marker))
            .execute(conn)?,
        DependentKind::WorkingShiftFact => diesel::update(working_shift_facts::table)
            .filter(working_shift_facts::working_shift_fact_id.eq(&row_id))
            .filter(working_shift_facts::deleted_at.is_null())
            .set(working_shift_facts::deleted_at.eq(&marker))
            .execute(conn)?,
        DependentKind::ScheduleTemplateCell => diesel::update(schedule_template_cells::table)
            .filter(schedule_template_cells::schedule_template_cell_id.eq(&row_id))
            .filter(schedule_template_cells::deleted_at.is_null())
            .set(schedule_template_cells::deleted_at.eq(&marker))
            .execute(conn)?,
        DependentKind::VacancyWorkingShift => diesel::update(vacancy_working_shifts::table)
            .filter(vacancy_working_shifts::vacancy_working_shift_id.eq(&row_id))
            .filter(vacancy_working_shifts::deleted_at.is_null())
            .set(vacancy_working_shifts::deleted_at.eq(&marker))
            .execute(conn)?,
    };

    if updated == 0 {
        return Err(PersistenceError::DependentNotFound { dependent, id });
    }

    info!(%id, dependent = %dependent, "Soft-deleted dependent row");
    Ok(())
}
