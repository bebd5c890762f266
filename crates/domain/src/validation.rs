// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dimension::Dimension;
use crate::error::DomainError;
use crate::lifecycle::{LifecycleState, SoftDeletable};
use crate::registry::EntityKind;
use uuid::Uuid;

/// Validates that an update targets the entity it claims to replace.
///
/// # Errors
///
/// Returns `DomainError::IdentityMismatch` if the identifiers differ.
pub fn validate_identity(expected: Uuid, actual: Uuid) -> Result<(), DomainError> {
    if expected != actual {
        return Err(DomainError::IdentityMismatch { expected, actual });
    }
    Ok(())
}

/// Validates that an entity is not soft-deleted.
///
/// # Arguments
///
/// * `entity` - The entity kind, used for reporting
/// * `entity_id` - The entity identifier, used for reporting
/// * `record` - The record to check
///
/// # Errors
///
/// Returns `DomainError::EntityDeleted` if the deletion marker is set.
pub fn validate_not_deleted<T: SoftDeletable>(
    entity: EntityKind,
    entity_id: Uuid,
    record: &T,
) -> Result<(), DomainError> {
    if record.lifecycle_state() == LifecycleState::Deleted {
        return Err(DomainError::EntityDeleted { entity, entity_id });
    }
    Ok(())
}

/// Validates that a dimension's mnemonic is unique among its active siblings.
///
/// Empty mnemonics are never considered conflicting. Siblings from other
/// organizations, soft-deleted siblings and the candidate itself are ignored.
///
/// # Arguments
///
/// * `candidate` - The entity about to become active
/// * `siblings` - Other entities of the same kind
///
/// # Errors
///
/// Returns `DomainError::DuplicateMnemonic` if an active sibling already
/// uses the candidate's mnemonic.
pub fn validate_mnemonic_unique<D>(candidate: &D, siblings: &[D]) -> Result<(), DomainError>
where
    D: Dimension + SoftDeletable,
{
    let mnemonic: &str = candidate.mnemonic();
    if mnemonic.is_empty() {
        return Ok(());
    }

    // Rule: within an organization, active mnemonics must be unique
    let conflict: bool = siblings.iter().any(|sibling| {
        sibling.id() != candidate.id()
            && sibling.organization_id() == candidate.organization_id()
            && sibling.lifecycle_state() == LifecycleState::Active
            && sibling.mnemonic() == mnemonic
    });

    if conflict {
        return Err(DomainError::DuplicateMnemonic {
            entity: D::KIND.entity(),
            mnemonic: mnemonic.to_string(),
        });
    }

    Ok(())
}
