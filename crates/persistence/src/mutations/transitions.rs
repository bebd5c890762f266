// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! High-level orchestration.
//!
//! Each function here loads what the core rules need, applies them, writes
//! the resulting rows and appends every audit record. Callers run them
//! inside a single transaction, so a rejected rule or a failed write leaves
//! no partial state behind.

use diesel::SqliteConnection;
use shiftboard::{
    AffectedAggregates, AggregateRewrite, DimensionUpdateResult, SyncResult, TransitionResult,
    apply_aggregate_create, apply_dimension_create, apply_dimension_update, apply_resync,
    restore, restore_dimension, soft_delete,
};
use shiftboard_audit::AuditContext;
use shiftboard_domain::{ReferenceUsage, SoftDeletable};
use tracing::info;
use uuid::Uuid;

use crate::error::PersistenceError;
use crate::history::{append_record, append_records};
use crate::queries::references::{load_affected_aggregates, reference_usages};
use crate::store::{StoredAggregate, StoredDimension};

/// Creates a dimension entity.
///
/// # Errors
///
/// Returns an error if a core rule rejects the entity or a write fails.
pub fn create_dimension<D: StoredDimension>(
    conn: &mut SqliteConnection,
    desirable: D,
    ctx: &AuditContext,
) -> Result<TransitionResult<D>, PersistenceError> {
    let siblings: Vec<D> = D::siblings(conn, desirable.organization_id())?;
    let result: TransitionResult<D> = apply_dimension_create(desirable, &siblings, ctx)?;

    result.entity.insert(conn)?;
    append_record(conn, &result.audit_record)?;
    Ok(result)
}

/// Updates a dimension entity and propagates it into every affected snapshot.
///
/// # Errors
///
/// Returns an error if the entity does not exist, a core rule rejects the
/// update, or a write fails.
pub fn update_dimension<D: StoredDimension>(
    conn: &mut SqliteConnection,
    desirable: D,
    ctx: &AuditContext,
) -> Result<DimensionUpdateResult<D>, PersistenceError> {
    let id: Uuid = desirable.id();
    let existing: D = D::load(conn, id)?;
    let siblings: Vec<D> = D::siblings(conn, existing.organization_id())?;
    let affected: AffectedAggregates = load_affected_aggregates(conn, D::KIND, id)?;

    let result: DimensionUpdateResult<D> =
        apply_dimension_update(&existing, desirable, &siblings, &affected, ctx)?;

    if let Some(record) = &result.audit_record {
        result.dimension.save(conn)?;
        append_record(conn, record)?;
    }
    persist_sync(conn, &result.synced)?;

    info!(
        %id,
        kind = %D::KIND,
        changed = result.audit_record.is_some(),
        rewritten = result.synced.len(),
        "Dimension updated"
    );
    Ok(result)
}

/// Re-applies the stored dimension entity to every affected snapshot.
///
/// # Errors
///
/// Returns an error if the entity does not exist or is deleted, or a write fails.
pub fn resync_dimension<D: StoredDimension>(
    conn: &mut SqliteConnection,
    id: Uuid,
    ctx: &AuditContext,
) -> Result<SyncResult, PersistenceError> {
    let dimension: D = D::load(conn, id)?;
    let affected: AffectedAggregates = load_affected_aggregates(conn, D::KIND, id)?;

    let synced: SyncResult = apply_resync(&dimension, &affected, ctx)?;
    persist_sync(conn, &synced)?;

    info!(%id, kind = %D::KIND, rewritten = synced.len(), "Dimension resynchronized");
    Ok(synced)
}

/// Soft-deletes a dimension entity after checking live references.
///
/// # Errors
///
/// Returns an error if the entity does not exist, is already deleted, is
/// still referenced by a live dependent row, or a write fails.
pub fn soft_delete_dimension<D: StoredDimension>(
    conn: &mut SqliteConnection,
    id: Uuid,
    ctx: &AuditContext,
) -> Result<TransitionResult<D>, PersistenceError> {
    let existing: D = D::load(conn, id)?;
    let usages: Vec<ReferenceUsage> = reference_usages(conn, D::KIND, id)?;

    let result: TransitionResult<D> = soft_delete(&existing, &usages, ctx)?;
    result.entity.save(conn)?;
    append_record(conn, &result.audit_record)?;

    info!(%id, kind = %D::KIND, "Dimension soft-deleted");
    Ok(result)
}

/// Restores a soft-deleted dimension entity.
///
/// # Errors
///
/// Returns an error if the entity does not exist, is not deleted, its
/// mnemonic is taken by an active sibling, or a write fails.
pub fn restore_dimension_entity<D: StoredDimension>(
    conn: &mut SqliteConnection,
    id: Uuid,
    ctx: &AuditContext,
) -> Result<TransitionResult<D>, PersistenceError> {
    let existing: D = D::load(conn, id)?;
    let siblings: Vec<D> = D::siblings(conn, existing.organization_id())?;

    let result: TransitionResult<D> = restore_dimension(&existing, &siblings, ctx)?;
    result.entity.save(conn)?;
    append_record(conn, &result.audit_record)?;

    info!(%id, kind = %D::KIND, "Dimension restored");
    Ok(result)
}

/// Creates a snapshot-bearing aggregate.
///
/// # Errors
///
/// Returns an error if a core rule rejects the aggregate or a write fails.
pub fn create_aggregate<A: StoredAggregate>(
    conn: &mut SqliteConnection,
    desirable: A,
    ctx: &AuditContext,
) -> Result<TransitionResult<A>, PersistenceError> {
    let result: TransitionResult<A> = apply_aggregate_create(desirable, ctx)?;
    result.entity.insert(conn)?;
    append_record(conn, &result.audit_record)?;
    Ok(result)
}

/// Soft-deletes or restores a snapshot-bearing aggregate.
///
/// # Errors
///
/// Returns an error if the aggregate does not exist, the transition is
/// invalid, or a write fails.
pub fn set_aggregate_lifecycle<A: StoredAggregate>(
    conn: &mut SqliteConnection,
    id: Uuid,
    delete: bool,
    ctx: &AuditContext,
) -> Result<TransitionResult<A>, PersistenceError> {
    let existing: A = A::load(conn, id)?;
    let result: TransitionResult<A> = if delete {
        soft_delete(&existing, &[], ctx)?
    } else {
        restore(&existing, ctx)?
    };

    result.entity.save_deleted_at(conn)?;
    append_record(conn, &result.audit_record)?;

    info!(
        %id,
        entity = %A::ENTITY,
        state = %result.entity.lifecycle_state(),
        "Aggregate lifecycle changed"
    );
    Ok(result)
}

fn persist_rewrites<A: StoredAggregate>(
    conn: &mut SqliteConnection,
    rewrites: &[AggregateRewrite<A>],
) -> Result<(), PersistenceError> {
    for rewrite in rewrites {
        rewrite.aggregate.save_snapshot(conn)?;
    }
    append_records(conn, rewrites.iter().map(|rewrite| &rewrite.audit_record))
}

fn persist_sync(conn: &mut SqliteConnection, synced: &SyncResult) -> Result<(), PersistenceError> {
    persist_rewrites(conn, &synced.schedules)?;
    persist_rewrites(conn, &synced.vacancies)
}
