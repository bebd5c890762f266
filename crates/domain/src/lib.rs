// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dimension;
mod error;
mod lifecycle;
mod registry;
mod snapshot;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use dimension::{
    Dimension, EmbeddedCopy, ShiftTypeCopy, ShiftTypeDisplay, WorklineCopy, WorklineDisplay,
};
pub use error::DomainError;
pub use lifecycle::{LifecycleState, SoftDeletable};
pub use registry::{
    AuditedColumn, ColumnKind, DependentKind, DependentReference, DimensionKind, EntityKind,
    ReferenceUsage,
};
pub use snapshot::{
    BoundaryMarker, CellView, ScheduleCalendar, ScheduleCell, SnapshotBearing, SnapshotDocument,
    VacancyCalendar, VacancyCell, VacancyMonth,
};
pub use types::{MonthlySchedule, ShiftType, VacancyTimeline, Workline};
pub use validation::{validate_identity, validate_mnemonic_unique, validate_not_deleted};
