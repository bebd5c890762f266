// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use serde_json::Value;
use shiftboard_domain::{EntityKind, MonthlySchedule, ShiftType, VacancyTimeline, Workline};
use uuid::Uuid;

use crate::error::AuditError;

/// An entity whose mutations are recorded in a history table.
pub trait Auditable: Serialize {
    /// The entity kind, selecting audited columns and history table.
    const ENTITY: EntityKind;

    /// The identifier recorded as the history row's entity id.
    fn entity_id(&self) -> Uuid;

    /// The row as seen by the diff engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity cannot be serialized.
    fn audit_row(&self) -> Result<Value, AuditError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Auditable for ShiftType {
    const ENTITY: EntityKind = EntityKind::ShiftType;

    fn entity_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for Workline {
    const ENTITY: EntityKind = EntityKind::Workline;

    fn entity_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for MonthlySchedule {
    const ENTITY: EntityKind = EntityKind::MonthlySchedule;

    fn entity_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for VacancyTimeline {
    const ENTITY: EntityKind = EntityKind::VacancyTimeline;

    fn entity_id(&self) -> Uuid {
        self.id
    }
}
