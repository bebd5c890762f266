// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static per-entity configuration.
//!
//! Every entity kind declares, exactly once, which columns are audited and
//! (for dimension kinds) which display fields are mirrored into snapshot
//! documents and which dependents may reference it. The synchronizer, the
//! diff engine and the lifecycle checks all read from here.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How an audited column's values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Plain scalar compared by value equality.
    Value,
    /// JSON document compared by deep equality.
    Json,
    /// Timestamp normalized to a UTC instant before comparison.
    Instant,
}

/// A column tracked for change-history purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuditedColumn {
    /// The serialized (camelCase) column name.
    pub name: &'static str,
    /// How values of this column are compared.
    pub kind: ColumnKind,
}

impl AuditedColumn {
    /// Declares a scalar column.
    #[must_use]
    pub const fn value(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Value,
        }
    }

    /// Declares a JSON document column.
    #[must_use]
    pub const fn json(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Json,
        }
    }

    /// Declares a timestamp column.
    #[must_use]
    pub const fn instant(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Instant,
        }
    }
}

const SHIFT_TYPE_DISPLAY_FIELDS: &[&str] = &[
    "name",
    "mnemonic",
    "isWorkingShift",
    "calendarLabelColorCode",
    "calendarBackgroundColorCode",
    "vacancyLabelColorCode",
    "vacancyBackgroundColorCode",
    "dateBlocked",
    "orderIndex",
];

const WORKLINE_DISPLAY_FIELDS: &[&str] = &[
    "name",
    "mnemonic",
    "isOverlapAcceptable",
    "dateBlocked",
    "orderIndex",
];

const SHIFT_TYPE_COLUMNS: &[AuditedColumn] = &[
    AuditedColumn::value("name"),
    AuditedColumn::value("mnemonic"),
    AuditedColumn::value("isWorkingShift"),
    AuditedColumn::value("calendarLabelColorCode"),
    AuditedColumn::value("calendarBackgroundColorCode"),
    AuditedColumn::value("vacancyLabelColorCode"),
    AuditedColumn::value("vacancyBackgroundColorCode"),
    AuditedColumn::instant("dateBlocked"),
    AuditedColumn::value("orderIndex"),
    AuditedColumn::instant("deletedAt"),
];

const WORKLINE_COLUMNS: &[AuditedColumn] = &[
    AuditedColumn::value("name"),
    AuditedColumn::value("mnemonic"),
    AuditedColumn::value("isOverlapAcceptable"),
    AuditedColumn::instant("dateBlocked"),
    AuditedColumn::value("orderIndex"),
    AuditedColumn::instant("deletedAt"),
];

const MONTHLY_SCHEDULE_COLUMNS: &[AuditedColumn] = &[
    AuditedColumn::json("calendar"),
    AuditedColumn::instant("deletedAt"),
];

const VACANCY_TIMELINE_COLUMNS: &[AuditedColumn] = &[
    AuditedColumn::value("title"),
    AuditedColumn::json("timeline"),
    AuditedColumn::instant("deletedAt"),
];

const SHIFT_TYPE_DEPENDENTS: &[DependentReference] = &[
    DependentReference::new(DependentKind::WorkingShiftPlan, "shiftTypeId"),
    DependentReference::new(DependentKind::WorkingShiftFact, "shiftTypeId"),
    DependentReference::new(DependentKind::ScheduleTemplateCell, "shiftTypeId"),
    DependentReference::new(DependentKind::VacancyWorkingShift, "shiftTypeId"),
];

const WORKLINE_DEPENDENTS: &[DependentReference] = &[
    DependentReference::new(DependentKind::WorkingShiftPlan, "worklineId"),
    DependentReference::new(DependentKind::WorkingShiftFact, "worklineId"),
    DependentReference::new(DependentKind::ScheduleTemplateCell, "worklineId"),
    DependentReference::new(DependentKind::VacancyWorkingShift, "worklineId"),
];

/// Every entity kind that owns an audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    ShiftType,
    Workline,
    MonthlySchedule,
    VacancyTimeline,
}

impl EntityKind {
    /// All audited entity kinds.
    pub const ALL: [Self; 4] = [
        Self::ShiftType,
        Self::Workline,
        Self::MonthlySchedule,
        Self::VacancyTimeline,
    ];

    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ShiftType => "ShiftType",
            Self::Workline => "Workline",
            Self::MonthlySchedule => "MonthlySchedule",
            Self::VacancyTimeline => "VacancyTimeline",
        }
    }

    /// The closed list of audited columns for this kind.
    #[must_use]
    pub const fn audited_columns(&self) -> &'static [AuditedColumn] {
        match self {
            Self::ShiftType => SHIFT_TYPE_COLUMNS,
            Self::Workline => WORKLINE_COLUMNS,
            Self::MonthlySchedule => MONTHLY_SCHEDULE_COLUMNS,
            Self::VacancyTimeline => VACANCY_TIMELINE_COLUMNS,
        }
    }

    /// Name of the append-only history table for this kind.
    #[must_use]
    pub const fn history_table(&self) -> &'static str {
        match self {
            Self::ShiftType => "shift_type_history",
            Self::Workline => "workline_history",
            Self::MonthlySchedule => "monthly_schedule_history",
            Self::VacancyTimeline => "vacancy_history",
        }
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ShiftType" | "shift-type" => Ok(Self::ShiftType),
            "Workline" | "workline" => Ok(Self::Workline),
            "MonthlySchedule" | "monthly-schedule" => Ok(Self::MonthlySchedule),
            "VacancyTimeline" | "vacancy" => Ok(Self::VacancyTimeline),
            _ => Err(DomainError::UnknownEntityKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The dimension (reference) entity kinds whose display fields are mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionKind {
    ShiftType,
    Workline,
}

impl DimensionKind {
    /// The audited entity kind backing this dimension.
    #[must_use]
    pub const fn entity(&self) -> EntityKind {
        match self {
            Self::ShiftType => EntityKind::ShiftType,
            Self::Workline => EntityKind::Workline,
        }
    }

    /// The only fields ever copied into snapshot documents.
    #[must_use]
    pub const fn display_fields(&self) -> &'static [&'static str] {
        match self {
            Self::ShiftType => SHIFT_TYPE_DISPLAY_FIELDS,
            Self::Workline => WORKLINE_DISPLAY_FIELDS,
        }
    }

    /// Foreign keys that must be free of live rows before soft deletion.
    #[must_use]
    pub const fn dependent_references(&self) -> &'static [DependentReference] {
        match self {
            Self::ShiftType => SHIFT_TYPE_DEPENDENTS,
            Self::Workline => WORKLINE_DEPENDENTS,
        }
    }
}

impl std::fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.entity().as_str())
    }
}

/// Rows that can hold a foreign key to a dimension entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependentKind {
    WorkingShiftPlan,
    WorkingShiftFact,
    ScheduleTemplateCell,
    VacancyWorkingShift,
}

impl DependentKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WorkingShiftPlan => "WorkingShiftPlan",
            Self::WorkingShiftFact => "WorkingShiftFact",
            Self::ScheduleTemplateCell => "ScheduleTemplateCell",
            Self::VacancyWorkingShift => "VacancyWorkingShift",
        }
    }
}

impl std::fmt::Display for DependentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `(dependent, foreign key)` pair that may reference a dimension entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DependentReference {
    /// The dependent row kind.
    pub dependent: DependentKind,
    /// The foreign-key field on the dependent.
    pub field: &'static str,
}

impl DependentReference {
    /// Creates a new dependent reference declaration.
    #[must_use]
    pub const fn new(dependent: DependentKind, field: &'static str) -> Self {
        Self { dependent, field }
    }
}

/// The number of live dependent rows found for one declared reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceUsage {
    /// The declared reference that was checked.
    pub reference: DependentReference,
    /// How many active dependent rows hold the foreign key.
    pub live_count: i64,
}

impl ReferenceUsage {
    /// Creates a new usage count.
    #[must_use]
    pub const fn new(reference: DependentReference, live_count: i64) -> Self {
        Self {
            reference,
            live_count,
        }
    }
}
