// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Denormalized snapshot documents.
//!
//! A monthly schedule stores a list of date cells, each with a planned and
//! an actual view. A vacancy timeline stores a list of months, each with a
//! list of date cells carrying only a planned view. Every optional member
//! that is absent in the stored JSON stays absent when the document is
//! written back, and unknown keys are preserved in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::dimension::{Dimension, EmbeddedCopy, ShiftTypeCopy, WorklineCopy};

/// A shift start or end marker inside a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_type: Option<ShiftTypeCopy>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The planned or actual view of a date cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worklines: Option<Vec<WorklineCopy>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_types: Option<Vec<ShiftTypeCopy>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<BoundaryMarker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<BoundaryMarker>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CellView {
    /// Shift Type copies: the list plus both boundary markers.
    #[must_use]
    pub fn shift_type_copies(&self) -> Vec<&ShiftTypeCopy> {
        // Exhaustive destructuring: a new embedded site fails to compile here.
        let Self {
            worklines: _,
            shift_types,
            from,
            to,
            extra: _,
        } = self;

        let mut copies: Vec<&ShiftTypeCopy> = shift_types.iter().flatten().collect();
        if let Some(BoundaryMarker {
            shift_type: Some(copy),
            ..
        }) = from
        {
            copies.push(copy);
        }
        if let Some(BoundaryMarker {
            shift_type: Some(copy),
            ..
        }) = to
        {
            copies.push(copy);
        }
        copies
    }

    /// Mutable counterpart of [`Self::shift_type_copies`].
    pub fn shift_type_copies_mut(&mut self) -> Vec<&mut ShiftTypeCopy> {
        let Self {
            worklines: _,
            shift_types,
            from,
            to,
            extra: _,
        } = self;

        let mut copies: Vec<&mut ShiftTypeCopy> = shift_types.iter_mut().flatten().collect();
        if let Some(BoundaryMarker {
            shift_type: Some(copy),
            ..
        }) = from
        {
            copies.push(copy);
        }
        if let Some(BoundaryMarker {
            shift_type: Some(copy),
            ..
        }) = to
        {
            copies.push(copy);
        }
        copies
    }

    /// Workline copies: the list only.
    #[must_use]
    pub fn workline_copies(&self) -> Vec<&WorklineCopy> {
        let Self {
            worklines,
            shift_types: _,
            from: _,
            to: _,
            extra: _,
        } = self;
        worklines.iter().flatten().collect()
    }

    /// Mutable counterpart of [`Self::workline_copies`].
    pub fn workline_copies_mut(&mut self) -> Vec<&mut WorklineCopy> {
        let Self {
            worklines,
            shift_types: _,
            from: _,
            to: _,
            extra: _,
        } = self;
        worklines.iter_mut().flatten().collect()
    }
}

/// One date cell of a monthly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScheduleCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned: Option<CellView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<CellView>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One date cell of a vacancy timeline month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VacancyCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned: Option<CellView>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One month of a vacancy timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VacancyMonth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<VacancyCell>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The snapshot document of a monthly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ScheduleCalendar(pub Vec<ScheduleCell>);

/// The snapshot document of a vacancy timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct VacancyCalendar(pub Vec<VacancyMonth>);

/// Traversal over every view of a snapshot document.
pub trait SnapshotDocument {
    /// Every view present in the document, in document order.
    fn views(&self) -> Vec<&CellView>;

    /// Every view present in the document, mutably.
    fn views_mut(&mut self) -> Vec<&mut CellView>;

    /// Counts embedded copies of dimension `D` carrying `id`.
    fn occurrences<D: Dimension>(&self, id: Uuid) -> usize {
        self.views()
            .into_iter()
            .flat_map(D::copies_in_view)
            .filter(|copy| copy.id() == id)
            .count()
    }

    /// Whether any embedded copy of dimension `D` carries `id`.
    fn references<D: Dimension>(&self, id: Uuid) -> bool {
        self.occurrences::<D>(id) > 0
    }
}

impl SnapshotDocument for ScheduleCalendar {
    fn views(&self) -> Vec<&CellView> {
        self.0
            .iter()
            .flat_map(|cell| cell.planned.iter().chain(cell.actual.iter()))
            .collect()
    }

    fn views_mut(&mut self) -> Vec<&mut CellView> {
        self.0
            .iter_mut()
            .flat_map(|cell| {
                let ScheduleCell {
                    planned, actual, ..
                } = cell;
                planned.iter_mut().chain(actual.iter_mut())
            })
            .collect()
    }
}

impl SnapshotDocument for VacancyCalendar {
    fn views(&self) -> Vec<&CellView> {
        self.0
            .iter()
            .filter_map(|month| month.dates.as_ref())
            .flatten()
            .filter_map(|cell| cell.planned.as_ref())
            .collect()
    }

    fn views_mut(&mut self) -> Vec<&mut CellView> {
        self.0
            .iter_mut()
            .filter_map(|month| month.dates.as_mut())
            .flatten()
            .filter_map(|cell| cell.planned.as_mut())
            .collect()
    }
}

/// An aggregate that owns a snapshot document.
pub trait SnapshotBearing: Clone {
    /// The snapshot document type.
    type Document: SnapshotDocument + Clone + PartialEq;

    /// The aggregate identifier.
    fn id(&self) -> Uuid;

    /// The stored snapshot document.
    fn snapshot(&self) -> &Self::Document;

    /// The stored snapshot document, mutably.
    fn snapshot_mut(&mut self) -> &mut Self::Document;
}
