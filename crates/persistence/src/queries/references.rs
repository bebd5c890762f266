// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dependent reference queries.
//!
//! Two questions are answered here: how many live dependent rows still
//! reference a dimension entity (the soft-delete pre-check), and which
//! aggregates may embed a copy of it (the synchronizer's input). The second
//! ignores the dependent rows' deletion marker, since a snapshot keeps its
//! copy after the dependent row is gone.

use std::collections::BTreeSet;

use diesel::SqliteConnection;
use diesel::prelude::*;
use shiftboard::AffectedAggregates;
use shiftboard_domain::{DependentKind, DependentReference, DimensionKind, ReferenceUsage};
use tracing::debug;
use uuid::Uuid;

use crate::diesel_schema::{
    schedule_template_cells, vacancy_working_shifts, working_shift_facts, working_shift_plans,
};
use crate::error::PersistenceError;
use crate::queries::aggregates::{get_monthly_schedules, get_vacancies};

/// Counts active rows of `$table` whose `$column` equals `$id`.
macro_rules! live_count {
    ($conn:expr, $table:ident, $column:ident, $id:expr) => {
        $table::table
            .filter($table::$column.eq($id))
            .filter($table::deleted_at.is_null())
            .count()
            .get_result::<i64>($conn)?
    };
}

/// Distinct `$select` values of `$table` whose `$column` equals `$id`.
macro_rules! referencing_ids {
    ($conn:expr, $table:ident, $column:ident, $select:ident, $id:expr) => {
        $table::table
            .filter($table::$column.eq($id))
            .select($table::$select)
            .distinct()
            .load::<String>($conn)?
    };
}

/// Counts live dependent rows for one declared reference.
///
/// # Errors
///
/// Returns an error if the database query fails or the reference names a
/// field that no dependent table carries.
pub fn count_live_references(
    conn: &mut SqliteConnection,
    reference: DependentReference,
    dimension_id: Uuid,
) -> Result<i64, PersistenceError> {
    let id: String = dimension_id.to_string();
    let count: i64 = match (reference.dependent, reference.field) {
        (DependentKind::WorkingShiftPlan, "shiftTypeId") => {
            live_count!(conn, working_shift_plans, shift_type_id, &id)
        }
        (DependentKind::WorkingShiftPlan, "worklineId") => {
            live_count!(conn, working_shift_plans, workline_id, &id)
        }
        (DependentKind::WorkingShiftFact, "shiftTypeId") => {
            live_count!(conn, working_shift_facts, shift_type_id, &id)
        }
        (DependentKind::WorkingShiftFact, "worklineId") => {
            live_count!(conn, working_shift_facts, workline_id, &id)
        }
        (DependentKind::ScheduleTemplateCell, "shiftTypeId") => {
            live_count!(conn, schedule_template_cells, shift_type_id, &id)
        }
        (DependentKind::ScheduleTemplateCell, "worklineId") => {
            live_count!(conn, schedule_template_cells, workline_id, &id)
        }
        (DependentKind::VacancyWorkingShift, "shiftTypeId") => {
            live_count!(conn, vacancy_working_shifts, shift_type_id, &id)
        }
        (DependentKind::VacancyWorkingShift, "worklineId") => {
            live_count!(conn, vacancy_working_shifts, workline_id, &id)
        }
        (dependent, field) => {
            return Err(PersistenceError::QueryFailed(format!(
                "No column mapped for {dependent}.{field}"
            )));
        }
    };

    debug!(
        %dimension_id,
        dependent = %reference.dependent,
        field = reference.field,
        count,
        "Counted live references"
    );
    Ok(count)
}

/// Counts live dependent rows for every reference declared for `kind`.
///
/// # Errors
///
/// Returns an error if any count fails.
pub fn reference_usages(
    conn: &mut SqliteConnection,
    kind: DimensionKind,
    dimension_id: Uuid,
) -> Result<Vec<ReferenceUsage>, PersistenceError> {
    kind.dependent_references()
        .iter()
        .map(|reference| {
            count_live_references(conn, *reference, dimension_id)
                .map(|live_count| ReferenceUsage::new(*reference, live_count))
        })
        .collect()
}

/// Ids of monthly schedules whose plan or fact rows reference the entity.
fn affected_schedule_ids(
    conn: &mut SqliteConnection,
    kind: DimensionKind,
    id: &str,
) -> Result<Vec<String>, PersistenceError> {
    let (plans, facts): (Vec<String>, Vec<String>) = match kind {
        DimensionKind::ShiftType => (
            referencing_ids!(conn, working_shift_plans, shift_type_id, monthly_schedule_id, id),
            referencing_ids!(conn, working_shift_facts, shift_type_id, monthly_schedule_id, id),
        ),
        DimensionKind::Workline => (
            referencing_ids!(conn, working_shift_plans, workline_id, monthly_schedule_id, id),
            referencing_ids!(conn, working_shift_facts, workline_id, monthly_schedule_id, id),
        ),
    };

    let unique: BTreeSet<String> = plans.into_iter().chain(facts).collect();
    Ok(unique.into_iter().collect())
}

/// Ids of vacancies whose working shifts reference the entity.
fn affected_vacancy_ids(
    conn: &mut SqliteConnection,
    kind: DimensionKind,
    id: &str,
) -> Result<Vec<String>, PersistenceError> {
    Ok(match kind {
        DimensionKind::ShiftType => {
            referencing_ids!(conn, vacancy_working_shifts, shift_type_id, vacancy_id, id)
        }
        DimensionKind::Workline => {
            referencing_ids!(conn, vacancy_working_shifts, workline_id, vacancy_id, id)
        }
    })
}

/// Loads every aggregate that may embed a copy of the entity.
///
/// The lookup always runs; an entity referenced by nothing yields an empty
/// set rather than an error.
///
/// # Errors
///
/// Returns an error if any query fails or a stored snapshot cannot be decoded.
pub fn load_affected_aggregates(
    conn: &mut SqliteConnection,
    kind: DimensionKind,
    dimension_id: Uuid,
) -> Result<AffectedAggregates, PersistenceError> {
    let id: String = dimension_id.to_string();
    let schedule_ids: Vec<String> = affected_schedule_ids(conn, kind, &id)?;
    let vacancy_ids: Vec<String> = affected_vacancy_ids(conn, kind, &id)?;

    debug!(
        %dimension_id,
        kind = %kind,
        schedules = schedule_ids.len(),
        vacancies = vacancy_ids.len(),
        "Resolved affected aggregates"
    );

    Ok(AffectedAggregates::new(
        get_monthly_schedules(conn, &schedule_ids)?,
        get_vacancies(conn, &vacancy_ids)?,
    ))
}
