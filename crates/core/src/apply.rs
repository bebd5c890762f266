// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::state::{
    AffectedAggregates, AggregateRewrite, DimensionUpdateResult, SyncResult, TransitionResult,
};
use crate::sync::sync_snapshot;
use shiftboard_audit::{AuditContext, AuditRecord, Auditable};
use shiftboard_domain::{
    Dimension, SnapshotBearing, SoftDeletable, validate_identity, validate_mnemonic_unique,
    validate_not_deleted,
};

/// Applies the creation of a dimension entity.
///
/// # Arguments
///
/// * `desirable` - The entity to create
/// * `siblings` - Existing entities of the same kind in the organization
/// * `ctx` - The audit context
///
/// # Returns
///
/// * `Ok(TransitionResult)` with the entity and its creation record
/// * `Err(CoreError)` if the entity is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The entity is created in a deleted state
/// - An active sibling already uses its mnemonic
pub fn apply_dimension_create<D>(
    desirable: D,
    siblings: &[D],
    ctx: &AuditContext,
) -> Result<TransitionResult<D>, CoreError>
where
    D: Dimension + Auditable + SoftDeletable,
{
    validate_not_deleted(D::ENTITY, desirable.id(), &desirable)?;
    validate_mnemonic_unique(&desirable, siblings)?;

    let audit_record: AuditRecord = AuditRecord::for_creation(&desirable, ctx)?;
    Ok(TransitionResult {
        entity: desirable,
        audit_record,
    })
}

/// Applies the creation of a snapshot-bearing aggregate.
///
/// # Errors
///
/// Returns an error if the aggregate is created in a deleted state or
/// cannot be serialized for audit.
pub fn apply_aggregate_create<A>(
    desirable: A,
    ctx: &AuditContext,
) -> Result<TransitionResult<A>, CoreError>
where
    A: SnapshotBearing + Auditable + SoftDeletable,
{
    validate_not_deleted(A::ENTITY, desirable.entity_id(), &desirable)?;

    let audit_record: AuditRecord = AuditRecord::for_creation(&desirable, ctx)?;
    Ok(TransitionResult {
        entity: desirable,
        audit_record,
    })
}

/// Applies an update to a dimension entity and propagates it.
///
/// The dimension itself is audited only when an audited field changed.
/// Every affected aggregate is synchronized regardless, and each one whose
/// snapshot changed is returned with an audit record carrying the method
/// `sync<Kind>`. An empty set of affected aggregates is valid.
///
/// # Arguments
///
/// * `existing` - The stored entity
/// * `desirable` - The entity as it should become
/// * `siblings` - Other entities of the same kind in the organization
/// * `affected` - Aggregates that may embed a copy of the entity
/// * `ctx` - The audit context
///
/// # Errors
///
/// Returns an error if:
/// - `desirable` does not carry the id of `existing`
/// - `existing` is soft-deleted
/// - The new mnemonic collides with an active sibling
/// - Any audit diff cannot be computed
pub fn apply_dimension_update<D>(
    existing: &D,
    mut desirable: D,
    siblings: &[D],
    affected: &AffectedAggregates,
    ctx: &AuditContext,
) -> Result<DimensionUpdateResult<D>, CoreError>
where
    D: Dimension + Auditable + SoftDeletable,
{
    validate_identity(existing.id(), desirable.id())?;
    validate_not_deleted(D::ENTITY, existing.id(), existing)?;
    validate_mnemonic_unique(&desirable, siblings)?;

    // Lifecycle is only changed through soft delete and restore
    desirable.set_deleted_at(existing.deleted_at());

    let audit_record: Option<AuditRecord> =
        AuditRecord::for_change(existing, &desirable, ctx, true)?;
    let synced: SyncResult = synchronize(
        &desirable,
        affected,
        &ctx.with_method(&format!("sync{}", D::KIND)),
    )?;

    Ok(DimensionUpdateResult {
        dimension: desirable,
        audit_record,
        synced,
    })
}

/// Re-applies a stored dimension entity to its affected aggregates.
///
/// Used to repair mirrors that drifted from the stored values. Rewrites
/// carry the method `resync<Kind>`.
///
/// # Errors
///
/// Returns an error if the entity is soft-deleted or an audit diff cannot
/// be computed.
pub fn apply_resync<D>(
    dimension: &D,
    affected: &AffectedAggregates,
    ctx: &AuditContext,
) -> Result<SyncResult, CoreError>
where
    D: Dimension + Auditable + SoftDeletable,
{
    validate_not_deleted(D::ENTITY, dimension.id(), dimension)?;
    synchronize(
        dimension,
        affected,
        &ctx.with_method(&format!("resync{}", D::KIND)),
    )
}

fn synchronize<D>(
    desirable: &D,
    affected: &AffectedAggregates,
    ctx: &AuditContext,
) -> Result<SyncResult, CoreError>
where
    D: Dimension,
{
    Ok(SyncResult {
        schedules: rewrite_aggregates(desirable, &affected.schedules, ctx)?,
        vacancies: rewrite_aggregates(desirable, &affected.vacancies, ctx)?,
    })
}

fn rewrite_aggregates<D, A>(
    desirable: &D,
    aggregates: &[A],
    ctx: &AuditContext,
) -> Result<Vec<AggregateRewrite<A>>, CoreError>
where
    D: Dimension,
    A: SnapshotBearing + Auditable,
{
    let mut rewrites: Vec<AggregateRewrite<A>> = Vec::new();
    for (original, synced) in aggregates.iter().zip(sync_snapshot(desirable, aggregates)) {
        if original.snapshot() == synced.snapshot() {
            continue;
        }
        if let Some(audit_record) = AuditRecord::for_change(original, &synced, ctx, true)? {
            rewrites.push(AggregateRewrite {
                aggregate: synced,
                audit_record,
            });
        }
    }
    Ok(rewrites)
}
