// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-entity storage bindings used by the transactional orchestration.

use diesel::SqliteConnection;
use shiftboard_audit::Auditable;
use shiftboard_domain::{
    Dimension, MonthlySchedule, ShiftType, SnapshotBearing, SoftDeletable, VacancyTimeline,
    Workline,
};
use uuid::Uuid;

use crate::error::PersistenceError;
use crate::mutations::{aggregates, dimensions};
use crate::queries;

fn not_found<E: Auditable>(entity_id: Uuid) -> PersistenceError {
    PersistenceError::EntityNotFound {
        entity: E::ENTITY,
        entity_id,
    }
}

/// A dimension entity with its own table.
pub(crate) trait StoredDimension: Dimension + Auditable + SoftDeletable + Sized {
    fn load(conn: &mut SqliteConnection, id: Uuid) -> Result<Self, PersistenceError>;

    /// Every entity of the same kind in the organization.
    fn siblings(
        conn: &mut SqliteConnection,
        organization_id: Uuid,
    ) -> Result<Vec<Self>, PersistenceError>;

    fn insert(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError>;

    fn save(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError>;
}

impl StoredDimension for ShiftType {
    fn load(conn: &mut SqliteConnection, id: Uuid) -> Result<Self, PersistenceError> {
        queries::dimensions::get_shift_type(conn, id)?.ok_or_else(|| not_found::<Self>(id))
    }

    fn siblings(
        conn: &mut SqliteConnection,
        organization_id: Uuid,
    ) -> Result<Vec<Self>, PersistenceError> {
        queries::dimensions::list_shift_types(conn, organization_id)
    }

    fn insert(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
        dimensions::insert_shift_type(conn, self)
    }

    fn save(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
        dimensions::save_shift_type(conn, self)
    }
}

impl StoredDimension for Workline {
    fn load(conn: &mut SqliteConnection, id: Uuid) -> Result<Self, PersistenceError> {
        queries::dimensions::get_workline(conn, id)?.ok_or_else(|| not_found::<Self>(id))
    }

    fn siblings(
        conn: &mut SqliteConnection,
        organization_id: Uuid,
    ) -> Result<Vec<Self>, PersistenceError> {
        queries::dimensions::list_worklines(conn, organization_id)
    }

    fn insert(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
        dimensions::insert_workline(conn, self)
    }

    fn save(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
        dimensions::save_workline(conn, self)
    }
}

/// A snapshot-bearing aggregate with its own table.
pub(crate) trait StoredAggregate: SnapshotBearing + Auditable + SoftDeletable + Sized {
    fn load(conn: &mut SqliteConnection, id: Uuid) -> Result<Self, PersistenceError>;

    fn insert(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError>;

    /// Writes the snapshot column only.
    fn save_snapshot(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError>;

    /// Writes the deletion marker only.
    fn save_deleted_at(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError>;
}

impl StoredAggregate for MonthlySchedule {
    fn load(conn: &mut SqliteConnection, id: Uuid) -> Result<Self, PersistenceError> {
        queries::aggregates::get_monthly_schedule(conn, id)?.ok_or_else(|| not_found::<Self>(id))
    }

    fn insert(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
        aggregates::insert_monthly_schedule(conn, self)
    }

    fn save_snapshot(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
        aggregates::save_calendar(conn, self)
    }

    fn save_deleted_at(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
        aggregates::save_schedule_deleted_at(conn, self)
    }
}

impl StoredAggregate for VacancyTimeline {
    fn load(conn: &mut SqliteConnection, id: Uuid) -> Result<Self, PersistenceError> {
        queries::aggregates::get_vacancy(conn, id)?.ok_or_else(|| not_found::<Self>(id))
    }

    fn insert(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
        aggregates::insert_vacancy(conn, self)
    }

    fn save_snapshot(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
        aggregates::save_timeline(conn, self)
    }

    fn save_deleted_at(&self, conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
        aggregates::save_vacancy_deleted_at(conn, self)
    }
}
