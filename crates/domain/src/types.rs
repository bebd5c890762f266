// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::dimension::{Dimension, ShiftTypeCopy, ShiftTypeDisplay, WorklineCopy, WorklineDisplay};
use crate::lifecycle::SoftDeletable;
use crate::registry::DimensionKind;
use crate::snapshot::{CellView, ScheduleCalendar, SnapshotBearing, VacancyCalendar};

/// A shift type: how a shift renders and whether it counts as working time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftType {
    /// The stable identifier.
    pub id: Uuid,
    /// The owning organization.
    pub organization_id: Uuid,
    /// The fields mirrored into snapshots.
    #[serde(flatten)]
    pub display: ShiftTypeDisplay,
    /// Soft-delete marker.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}

impl ShiftType {
    /// Creates a new, active shift type.
    #[must_use]
    pub const fn new(id: Uuid, organization_id: Uuid, display: ShiftTypeDisplay) -> Self {
        Self {
            id,
            organization_id,
            display,
            deleted_at: None,
        }
    }

    /// Builds the copy embedded into snapshot cells.
    #[must_use]
    pub fn to_copy(&self) -> ShiftTypeCopy {
        ShiftTypeCopy::new(self.id, self.display.clone())
    }
}

/// A workline: a line of work a shift is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workline {
    /// The stable identifier.
    pub id: Uuid,
    /// The owning organization.
    pub organization_id: Uuid,
    /// The fields mirrored into snapshots.
    #[serde(flatten)]
    pub display: WorklineDisplay,
    /// Soft-delete marker.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}

impl Workline {
    /// Creates a new, active workline.
    #[must_use]
    pub const fn new(id: Uuid, organization_id: Uuid, display: WorklineDisplay) -> Self {
        Self {
            id,
            organization_id,
            display,
            deleted_at: None,
        }
    }

    /// Builds the copy embedded into snapshot cells.
    #[must_use]
    pub fn to_copy(&self) -> WorklineCopy {
        WorklineCopy::new(self.id, self.display.clone())
    }
}

/// An employee's shift timeline for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySchedule {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub year: i32,
    pub month: u8,
    /// The denormalized calendar snapshot.
    pub calendar: ScheduleCalendar,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}

/// An open vacancy spanning one or more months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancyTimeline {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    /// The denormalized timeline snapshot.
    pub timeline: VacancyCalendar,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
}

impl Dimension for ShiftType {
    type Display = ShiftTypeDisplay;
    type Embedded = ShiftTypeCopy;

    const KIND: DimensionKind = DimensionKind::ShiftType;

    fn id(&self) -> Uuid {
        self.id
    }

    fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    fn mnemonic(&self) -> &str {
        &self.display.mnemonic
    }

    fn display(&self) -> &ShiftTypeDisplay {
        &self.display
    }

    fn copies_in_view(view: &CellView) -> Vec<&ShiftTypeCopy> {
        view.shift_type_copies()
    }

    fn copies_in_view_mut(view: &mut CellView) -> Vec<&mut ShiftTypeCopy> {
        view.shift_type_copies_mut()
    }
}

impl Dimension for Workline {
    type Display = WorklineDisplay;
    type Embedded = WorklineCopy;

    const KIND: DimensionKind = DimensionKind::Workline;

    fn id(&self) -> Uuid {
        self.id
    }

    fn organization_id(&self) -> Uuid {
        self.organization_id
    }

    fn mnemonic(&self) -> &str {
        &self.display.mnemonic
    }

    fn display(&self) -> &WorklineDisplay {
        &self.display
    }

    fn copies_in_view(view: &CellView) -> Vec<&WorklineCopy> {
        view.workline_copies()
    }

    fn copies_in_view_mut(view: &mut CellView) -> Vec<&mut WorklineCopy> {
        view.workline_copies_mut()
    }
}

impl SnapshotBearing for MonthlySchedule {
    type Document = ScheduleCalendar;

    fn id(&self) -> Uuid {
        self.id
    }

    fn snapshot(&self) -> &ScheduleCalendar {
        &self.calendar
    }

    fn snapshot_mut(&mut self) -> &mut ScheduleCalendar {
        &mut self.calendar
    }
}

impl SnapshotBearing for VacancyTimeline {
    type Document = VacancyCalendar;

    fn id(&self) -> Uuid {
        self.id
    }

    fn snapshot(&self) -> &VacancyCalendar {
        &self.timeline
    }

    fn snapshot_mut(&mut self) -> &mut VacancyCalendar {
        &mut self.timeline
    }
}

macro_rules! impl_soft_deletable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SoftDeletable for $ty {
                fn deleted_at(&self) -> Option<OffsetDateTime> {
                    self.deleted_at
                }

                fn set_deleted_at(&mut self, deleted_at: Option<OffsetDateTime>) {
                    self.deleted_at = deleted_at;
                }
            }
        )*
    };
}

impl_soft_deletable!(ShiftType, Workline, MonthlySchedule, VacancyTimeline);
