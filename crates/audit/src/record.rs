// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use shiftboard_domain::EntityKind;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auditable::Auditable;
use crate::diff::{AuditDiff, DiffOutcome, diff};
use crate::error::AuditError;
use crate::{Actor, AuditContext, Platform};

/// An immutable record of one mutation to an audited entity.
///
/// Records are append-only. The history id is a time-ordered UUID, so
/// sorting by it yields creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub history_id: Uuid,
    pub entity: EntityKind,
    pub entity_id: Uuid,
    pub method_name: String,
    pub is_new_record: bool,
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,
    pub diff: AuditDiff,
    #[serde(with = "time::serde::rfc3339")]
    pub history_at: OffsetDateTime,
}

impl AuditRecord {
    /// Builds a record with a freshly minted history id.
    #[must_use]
    pub fn new(
        entity: EntityKind,
        entity_id: Uuid,
        is_new_record: bool,
        diff: AuditDiff,
        ctx: &AuditContext,
    ) -> Self {
        Self {
            history_id: Uuid::now_v7(),
            entity,
            entity_id,
            method_name: ctx.method.clone(),
            is_new_record,
            platform: ctx.platform,
            actor: ctx.actor.clone(),
            diff,
            history_at: ctx.history_at,
        }
    }

    /// Records the creation of `entity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity cannot be serialized.
    pub fn for_creation<E: Auditable>(entity: &E, ctx: &AuditContext) -> Result<Self, AuditError> {
        let row = entity.audit_row()?;
        let body: AuditDiff = diff(
            E::ENTITY.as_str(),
            None,
            &row,
            E::ENTITY.audited_columns(),
            false,
        )?
        .into_changed()
        .unwrap_or_default();

        Ok(Self::new(E::ENTITY, entity.entity_id(), true, body, ctx))
    }

    /// Records a change from `existing` to `desirable`.
    ///
    /// Returns `Ok(None)` when `require_change` is set and no audited
    /// column differs.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows cannot be serialized or compared.
    pub fn for_change<E: Auditable>(
        existing: &E,
        desirable: &E,
        ctx: &AuditContext,
        require_change: bool,
    ) -> Result<Option<Self>, AuditError> {
        let before = existing.audit_row()?;
        let after = desirable.audit_row()?;

        match diff(
            E::ENTITY.as_str(),
            Some(&before),
            &after,
            E::ENTITY.audited_columns(),
            require_change,
        )? {
            DiffOutcome::Changed(body) => Ok(Some(Self::new(
                E::ENTITY,
                desirable.entity_id(),
                false,
                body,
                ctx,
            ))),
            DiffOutcome::Unchanged => Ok(None),
        }
    }
}
