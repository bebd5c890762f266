// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::lifecycle::LifecycleState;
use crate::registry::{DependentKind, EntityKind};
use uuid::Uuid;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A soft delete was attempted while live dependents still reference the entity.
    ChangeViolatesReference {
        /// The entity kind being deleted.
        entity: EntityKind,
        /// The entity being deleted.
        entity_id: Uuid,
        /// The dependent kind still holding a reference.
        dependent: DependentKind,
        /// The foreign-key field on the dependent.
        field: &'static str,
    },
    /// The requested lifecycle transition does not exist.
    InvalidLifecycleTransition {
        /// The entity kind.
        entity: EntityKind,
        /// The entity identifier.
        entity_id: Uuid,
        /// The current state.
        from: LifecycleState,
        /// The requested state.
        to: LifecycleState,
    },
    /// Another active sibling already uses this mnemonic.
    DuplicateMnemonic {
        /// The entity kind.
        entity: EntityKind,
        /// The conflicting mnemonic.
        mnemonic: String,
    },
    /// The desirable entity does not carry the identifier of the existing one.
    IdentityMismatch {
        /// The identifier of the stored entity.
        expected: Uuid,
        /// The identifier carried by the update.
        actual: Uuid,
    },
    /// The entity is soft-deleted and cannot be modified.
    EntityDeleted {
        /// The entity kind.
        entity: EntityKind,
        /// The entity identifier.
        entity_id: Uuid,
    },
    /// An entity kind name could not be parsed.
    UnknownEntityKind(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChangeViolatesReference {
                entity,
                entity_id,
                dependent,
                field,
            } => {
                write!(
                    f,
                    "Change violates reference: {entity} {entity_id} is still referenced by {dependent}.{field}"
                )
            }
            Self::InvalidLifecycleTransition {
                entity,
                entity_id,
                from,
                to,
            } => {
                write!(
                    f,
                    "Invalid lifecycle transition for {entity} {entity_id}: {from} -> {to}"
                )
            }
            Self::DuplicateMnemonic { entity, mnemonic } => {
                write!(
                    f,
                    "An active {entity} with mnemonic '{mnemonic}' already exists"
                )
            }
            Self::IdentityMismatch { expected, actual } => {
                write!(f, "Identity mismatch: expected {expected}, got {actual}")
            }
            Self::EntityDeleted { entity, entity_id } => {
                write!(f, "{entity} {entity_id} is deleted")
            }
            Self::UnknownEntityKind(kind) => write!(f, "Unknown entity kind: {kind}"),
        }
    }
}

impl std::error::Error for DomainError {}
