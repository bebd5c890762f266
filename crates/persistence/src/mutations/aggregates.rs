// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly schedule and vacancy mutations.
//!
//! After creation, a snapshot is only ever written through its own column;
//! synchronization never touches any other column of the aggregate.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard_domain::{MonthlySchedule, VacancyTimeline};
use tracing::{debug, info};

use crate::data_models::{MonthlyScheduleRow, VacancyRow, format_optional_instant};
use crate::diesel_schema::{monthly_schedules, vacancies};
use crate::error::PersistenceError;

/// Inserts a new monthly schedule row.
///
/// # Errors
///
/// Returns an error if the row cannot be written.
pub fn insert_monthly_schedule(
    conn: &mut SqliteConnection,
    schedule: &MonthlySchedule,
) -> Result<(), PersistenceError> {
    info!(
        schedule_id = %schedule.id,
        employee_id = %schedule.employee_id,
        year = schedule.year,
        month = schedule.month,
        "Creating monthly schedule"
    );

    diesel::insert_into(monthly_schedules::table)
        .values(MonthlyScheduleRow::from_domain(schedule)?)
        .execute(conn)?;
    Ok(())
}

/// Writes a monthly schedule's calendar snapshot.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be serialized or written.
pub fn save_calendar(
    conn: &mut SqliteConnection,
    schedule: &MonthlySchedule,
) -> Result<(), PersistenceError> {
    debug!(schedule_id = %schedule.id, "Writing calendar snapshot");

    diesel::update(monthly_schedules::table)
        .filter(monthly_schedules::monthly_schedule_id.eq(schedule.id.to_string()))
        .set(monthly_schedules::calendar_json.eq(serde_json::to_string(&schedule.calendar)?))
        .execute(conn)?;
    Ok(())
}

/// Writes a monthly schedule's deletion marker.
///
/// # Errors
///
/// Returns an error if the marker cannot be written.
pub fn save_schedule_deleted_at(
    conn: &mut SqliteConnection,
    schedule: &MonthlySchedule,
) -> Result<(), PersistenceError> {
    diesel::update(monthly_schedules::table)
        .filter(monthly_schedules::monthly_schedule_id.eq(schedule.id.to_string()))
        .set(monthly_schedules::deleted_at.eq(format_optional_instant(schedule.deleted_at)?))
        .execute(conn)?;
    Ok(())
}

/// Inserts a new vacancy row.
///
/// # Errors
///
/// Returns an error if the row cannot be written.
pub fn insert_vacancy(
    conn: &mut SqliteConnection,
    vacancy: &VacancyTimeline,
) -> Result<(), PersistenceError> {
    info!(vacancy_id = %vacancy.id, title = %vacancy.title, "Creating vacancy");

    diesel::insert_into(vacancies::table)
        .values(VacancyRow::from_domain(vacancy)?)
        .execute(conn)?;
    Ok(())
}

/// Writes a vacancy's timeline snapshot.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be serialized or written.
pub fn save_timeline(
    conn: &mut SqliteConnection,
    vacancy: &VacancyTimeline,
) -> Result<(), PersistenceError> {
    debug!(vacancy_id = %vacancy.id, "Writing timeline snapshot");

    diesel::update(vacancies::table)
        .filter(vacancies::vacancy_id.eq(vacancy.id.to_string()))
        .set(vacancies::timeline_json.eq(serde_json::to_string(&vacancy.timeline)?))
        .execute(conn)?;
    Ok(())
}

/// Writes a vacancy's deletion marker.
///
/// # Errors
///
/// Returns an error if the marker cannot be written.
pub fn save_vacancy_deleted_at(
    conn: &mut SqliteConnection,
    vacancy: &VacancyTimeline,
) -> Result<(), PersistenceError> {
    diesel::update(vacancies::table)
        .filter(vacancies::vacancy_id.eq(vacancy.id.to_string()))
        .set(vacancies::deleted_at.eq(format_optional_instant(vacancy.deleted_at)?))
        .execute(conn)?;
    Ok(())
}
