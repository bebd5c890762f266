// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly schedule and vacancy queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard_domain::{MonthlySchedule, VacancyTimeline};
use tracing::debug;
use uuid::Uuid;

use crate::data_models::{MonthlyScheduleRow, VacancyRow};
use crate::diesel_schema::{monthly_schedules, vacancies};
use crate::error::PersistenceError;

/// Retrieves a monthly schedule by id.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored calendar
/// cannot be decoded.
pub fn get_monthly_schedule(
    conn: &mut SqliteConnection,
    schedule_id: Uuid,
) -> Result<Option<MonthlySchedule>, PersistenceError> {
    debug!(%schedule_id, "Looking up monthly schedule");

    monthly_schedules::table
        .filter(monthly_schedules::monthly_schedule_id.eq(schedule_id.to_string()))
        .select(MonthlyScheduleRow::as_select())
        .first(conn)
        .optional()?
        .map(MonthlyScheduleRow::into_domain)
        .transpose()
}

/// Loads the monthly schedules with the given ids, ordered by id.
///
/// Unknown ids are skipped.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored calendar
/// cannot be decoded.
pub fn get_monthly_schedules(
    conn: &mut SqliteConnection,
    schedule_ids: &[String],
) -> Result<Vec<MonthlySchedule>, PersistenceError> {
    if schedule_ids.is_empty() {
        return Ok(Vec::new());
    }

    monthly_schedules::table
        .filter(monthly_schedules::monthly_schedule_id.eq_any(schedule_ids))
        .order(monthly_schedules::monthly_schedule_id.asc())
        .select(MonthlyScheduleRow::as_select())
        .load(conn)?
        .into_iter()
        .map(MonthlyScheduleRow::into_domain)
        .collect()
}

/// Retrieves a vacancy by id.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored timeline
/// cannot be decoded.
pub fn get_vacancy(
    conn: &mut SqliteConnection,
    vacancy_id: Uuid,
) -> Result<Option<VacancyTimeline>, PersistenceError> {
    debug!(%vacancy_id, "Looking up vacancy");

    vacancies::table
        .filter(vacancies::vacancy_id.eq(vacancy_id.to_string()))
        .select(VacancyRow::as_select())
        .first(conn)
        .optional()?
        .map(VacancyRow::into_domain)
        .transpose()
}

/// Loads the vacancies with the given ids, ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored timeline
/// cannot be decoded.
pub fn get_vacancies(
    conn: &mut SqliteConnection,
    vacancy_ids: &[String],
) -> Result<Vec<VacancyTimeline>, PersistenceError> {
    if vacancy_ids.is_empty() {
        return Ok(Vec::new());
    }

    vacancies::table
        .filter(vacancies::vacancy_id.eq_any(vacancy_ids))
        .order(vacancies::vacancy_id.asc())
        .select(VacancyRow::as_select())
        .load(conn)?
        .into_iter()
        .map(VacancyRow::into_domain)
        .collect()
}
