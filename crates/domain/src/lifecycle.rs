// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Soft-delete state of a mutable aggregate.
///
/// Derived from the deletion marker: `None` is Active, `Some` is Deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LifecycleState {
    /// Deletion marker is null.
    #[default]
    Active,
    /// Deletion marker holds the deletion instant.
    Deleted,
}

impl LifecycleState {
    /// Converts this lifecycle state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Deleted => "Deleted",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - Active → Deleted
    /// - Deleted → Active
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Active, Self::Deleted) | (Self::Deleted, Self::Active)
        )
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Entities carrying a nullable deletion marker.
pub trait SoftDeletable {
    /// The deletion instant, if the entity is soft-deleted.
    fn deleted_at(&self) -> Option<OffsetDateTime>;

    /// Replaces the deletion marker.
    fn set_deleted_at(&mut self, deleted_at: Option<OffsetDateTime>);

    /// The lifecycle state derived from the deletion marker.
    fn lifecycle_state(&self) -> LifecycleState {
        if self.deleted_at().is_some() {
            LifecycleState::Deleted
        } else {
            LifecycleState::Active
        }
    }
}
