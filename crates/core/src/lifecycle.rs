// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Soft delete and restore.
//!
//! `Active -> Deleted` requires that no live dependent row references the
//! entity. `Deleted -> Active` is unconditional here; dimension restores
//! additionally go through [`restore_dimension`], which re-checks mnemonic
//! uniqueness against active siblings.

use crate::error::CoreError;
use crate::state::TransitionResult;
use shiftboard_audit::{AuditContext, AuditDiff, AuditRecord, Auditable};
use shiftboard_domain::{
    Dimension, DomainError, LifecycleState, ReferenceUsage, SoftDeletable,
    validate_mnemonic_unique,
};

fn check_transition<E>(entity: &E, to: LifecycleState) -> Result<(), DomainError>
where
    E: Auditable + SoftDeletable,
{
    let from: LifecycleState = entity.lifecycle_state();
    if !from.can_transition_to(to) {
        return Err(DomainError::InvalidLifecycleTransition {
            entity: E::ENTITY,
            entity_id: entity.entity_id(),
            from,
            to,
        });
    }
    Ok(())
}

fn transition<E>(
    existing: &E,
    next: E,
    ctx: &AuditContext,
) -> Result<TransitionResult<E>, CoreError>
where
    E: Auditable + SoftDeletable,
{
    // deletedAt always differs here
    let audit_record: AuditRecord = AuditRecord::for_change(existing, &next, ctx, false)?
        .unwrap_or_else(|| {
            AuditRecord::new(
                E::ENTITY,
                existing.entity_id(),
                false,
                AuditDiff::default(),
                ctx,
            )
        });

    Ok(TransitionResult {
        entity: next,
        audit_record,
    })
}

/// Soft-deletes an entity.
///
/// The deletion marker is set to the context's business timestamp.
///
/// # Arguments
///
/// * `entity` - The entity to delete
/// * `references` - Live dependent counts for every declared reference
/// * `ctx` - The audit context
///
/// # Errors
///
/// Returns an error if:
/// - The entity is already deleted
/// - Any declared reference still has live dependent rows
pub fn soft_delete<E>(
    entity: &E,
    references: &[ReferenceUsage],
    ctx: &AuditContext,
) -> Result<TransitionResult<E>, CoreError>
where
    E: Auditable + SoftDeletable + Clone,
{
    check_transition(entity, LifecycleState::Deleted)?;

    if let Some(usage) = references.iter().find(|usage| usage.live_count > 0) {
        return Err(CoreError::DomainViolation(
            DomainError::ChangeViolatesReference {
                entity: E::ENTITY,
                entity_id: entity.entity_id(),
                dependent: usage.reference.dependent,
                field: usage.reference.field,
            },
        ));
    }

    let mut deleted: E = entity.clone();
    deleted.set_deleted_at(Some(ctx.history_at));
    transition(entity, deleted, ctx)
}

/// Restores a soft-deleted entity.
///
/// # Errors
///
/// Returns an error if the entity is not deleted.
pub fn restore<E>(entity: &E, ctx: &AuditContext) -> Result<TransitionResult<E>, CoreError>
where
    E: Auditable + SoftDeletable + Clone,
{
    check_transition(entity, LifecycleState::Active)?;

    let mut restored: E = entity.clone();
    restored.set_deleted_at(None);
    transition(entity, restored, ctx)
}

/// Restores a soft-deleted dimension entity.
///
/// # Arguments
///
/// * `entity` - The entity to restore
/// * `siblings` - Other entities of the same kind in the organization
/// * `ctx` - The audit context
///
/// # Errors
///
/// Returns an error if:
/// - The entity is not deleted
/// - An active sibling already uses the entity's mnemonic
pub fn restore_dimension<D>(
    entity: &D,
    siblings: &[D],
    ctx: &AuditContext,
) -> Result<TransitionResult<D>, CoreError>
where
    D: Dimension + Auditable + SoftDeletable,
{
    check_transition(entity, LifecycleState::Active)?;
    validate_mnemonic_unique(entity, siblings)?;
    restore(entity, ctx)
}
