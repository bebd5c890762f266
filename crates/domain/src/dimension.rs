// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dimension display fields and the copies embedded into snapshot documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::registry::DimensionKind;
use crate::snapshot::CellView;

/// The Shift Type fields mirrored into snapshot documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTypeDisplay {
    pub name: String,
    #[serde(default)]
    pub mnemonic: String,
    pub is_working_shift: bool,
    pub calendar_label_color_code: String,
    pub calendar_background_color_code: String,
    pub vacancy_label_color_code: String,
    pub vacancy_background_color_code: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_blocked: Option<OffsetDateTime>,
    pub order_index: i32,
}

/// The Workline fields mirrored into snapshot documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklineDisplay {
    pub name: String,
    #[serde(default)]
    pub mnemonic: String,
    pub is_overlap_acceptable: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_blocked: Option<OffsetDateTime>,
    pub order_index: i32,
}

/// A Shift Type copy embedded in a snapshot cell.
///
/// Keys outside the display set are kept in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftTypeCopy {
    pub id: Uuid,
    #[serde(flatten)]
    pub display: ShiftTypeDisplay,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShiftTypeCopy {
    /// Creates a copy carrying only the display fields.
    #[must_use]
    pub fn new(id: Uuid, display: ShiftTypeDisplay) -> Self {
        Self {
            id,
            display,
            extra: Map::new(),
        }
    }
}

/// A Workline copy embedded in a snapshot cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorklineCopy {
    pub id: Uuid,
    #[serde(flatten)]
    pub display: WorklineDisplay,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorklineCopy {
    /// Creates a copy carrying only the display fields.
    #[must_use]
    pub fn new(id: Uuid, display: WorklineDisplay) -> Self {
        Self {
            id,
            display,
            extra: Map::new(),
        }
    }
}

/// A dimension entity copy as it appears inside a snapshot document.
pub trait EmbeddedCopy {
    /// The display field set carried by the copy.
    type Display;

    /// The identifier of the mirrored dimension entity.
    fn id(&self) -> Uuid;

    /// The mirrored display fields.
    fn display(&self) -> &Self::Display;

    /// Overwrites exactly the display fields, leaving the id and extra keys alone.
    fn overwrite_display(&mut self, display: &Self::Display);
}

impl EmbeddedCopy for ShiftTypeCopy {
    type Display = ShiftTypeDisplay;

    fn id(&self) -> Uuid {
        self.id
    }

    fn display(&self) -> &ShiftTypeDisplay {
        &self.display
    }

    fn overwrite_display(&mut self, display: &ShiftTypeDisplay) {
        self.display.clone_from(display);
    }
}

impl EmbeddedCopy for WorklineCopy {
    type Display = WorklineDisplay;

    fn id(&self) -> Uuid {
        self.id
    }

    fn display(&self) -> &WorklineDisplay {
        &self.display
    }

    fn overwrite_display(&mut self, display: &WorklineDisplay) {
        self.display.clone_from(display);
    }
}

/// A reference entity whose display fields are mirrored into snapshots.
///
/// Each implementation names the embedded sites of its copies inside a
/// [`CellView`]; the synchronizer never inspects documents any other way.
pub trait Dimension: Clone {
    /// The mirrored field set.
    type Display: Clone + PartialEq;
    /// The embedded copy type.
    type Embedded: EmbeddedCopy<Display = Self::Display>;

    /// The registry kind of this dimension.
    const KIND: DimensionKind;

    /// The stable identifier.
    fn id(&self) -> Uuid;

    /// The organization the entity belongs to.
    fn organization_id(&self) -> Uuid;

    /// The mnemonic, unique among active siblings when non-empty.
    fn mnemonic(&self) -> &str;

    /// The current display field values.
    fn display(&self) -> &Self::Display;

    /// All copies of this kind embedded in a view.
    fn copies_in_view(view: &CellView) -> Vec<&Self::Embedded>;

    /// All copies of this kind embedded in a view, mutably.
    fn copies_in_view_mut(view: &mut CellView) -> Vec<&mut Self::Embedded>;
}
