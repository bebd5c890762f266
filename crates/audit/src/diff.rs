// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level diffing of audited rows.
//!
//! Rows are compared in their serialized JSON form so that the diff body can
//! be persisted verbatim. Only declared columns are ever inspected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shiftboard_domain::{AuditedColumn, ColumnKind};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::AuditError;

/// The recorded change of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldChange {
    /// A column of an existing row changed.
    Updated { old: Value, new: Value },
    /// A column of a newly created row.
    Created { new: Value },
}

impl FieldChange {
    /// The posterior value.
    #[must_use]
    pub const fn new_value(&self) -> &Value {
        match self {
            Self::Updated { new, .. } | Self::Created { new } => new,
        }
    }

    /// The prior value, if the row existed before.
    #[must_use]
    pub const fn old_value(&self) -> Option<&Value> {
        match self {
            Self::Updated { old, .. } => Some(old),
            Self::Created { .. } => None,
        }
    }
}

/// A flat diff body keyed by column name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AuditDiff(BTreeMap<String, FieldChange>);

impl AuditDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Looks up the change recorded for `column`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&FieldChange> {
        self.0.get(column)
    }

    /// Changed column names, in sorted order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn insert(&mut self, column: &str, change: FieldChange) {
        self.0.insert(column.to_string(), change);
    }
}

/// The result of a diff computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// At least one column differs (or the row is new).
    Changed(AuditDiff),
    /// Nothing differs and a change was required.
    Unchanged,
}

impl DiffOutcome {
    /// Returns the diff body when something changed.
    #[must_use]
    pub fn into_changed(self) -> Option<AuditDiff> {
        match self {
            Self::Changed(diff) => Some(diff),
            Self::Unchanged => None,
        }
    }
}

/// Computes the audit diff between two serialized rows.
///
/// With no `existing` row every declared column present on `desirable` is
/// emitted as `{new}`. Otherwise only differing columns are emitted as
/// `{old, new}`; a side that lacks the column counts as `null`.
///
/// # Arguments
///
/// * `entity` - Entity name, used for error reporting
/// * `existing` - The prior row, or `None` for a creation
/// * `desirable` - The posterior row
/// * `columns` - The audited columns of the entity kind
/// * `require_change` - Whether an empty diff should be reported as `Unchanged`
///
/// # Errors
///
/// Returns an error if either row is not a JSON object, if a declared
/// column is missing from both rows on an update, or if a timestamp column
/// holds an unparsable value.
pub fn diff(
    entity: &str,
    existing: Option<&Value>,
    desirable: &Value,
    columns: &[AuditedColumn],
    require_change: bool,
) -> Result<DiffOutcome, AuditError> {
    let desirable: &Map<String, Value> = as_object(entity, desirable)?;
    let mut body: AuditDiff = AuditDiff::default();

    let Some(existing) = existing else {
        for column in columns {
            if let Some(value) = desirable.get(column.name) {
                body.insert(column.name, FieldChange::Created { new: value.clone() });
            }
        }
        return Ok(DiffOutcome::Changed(body));
    };

    let existing: &Map<String, Value> = as_object(entity, existing)?;
    for column in columns {
        let old: Option<&Value> = existing.get(column.name);
        let new: Option<&Value> = desirable.get(column.name);
        if old.is_none() && new.is_none() {
            return Err(AuditError::UnknownColumn {
                entity: entity.to_string(),
                column: column.name.to_string(),
            });
        }

        let old: &Value = old.unwrap_or(&Value::Null);
        let new: &Value = new.unwrap_or(&Value::Null);
        if !column_equal(column, old, new)? {
            body.insert(
                column.name,
                FieldChange::Updated {
                    old: old.clone(),
                    new: new.clone(),
                },
            );
        }
    }

    if require_change && body.is_empty() {
        return Ok(DiffOutcome::Unchanged);
    }
    Ok(DiffOutcome::Changed(body))
}

fn as_object<'a>(entity: &str, row: &'a Value) -> Result<&'a Map<String, Value>, AuditError> {
    row.as_object().ok_or_else(|| AuditError::NotAnObject {
        entity: entity.to_string(),
    })
}

fn column_equal(column: &AuditedColumn, old: &Value, new: &Value) -> Result<bool, AuditError> {
    match column.kind {
        ColumnKind::Value | ColumnKind::Json => Ok(old == new),
        ColumnKind::Instant => {
            Ok(normalize_instant(column, old)? == normalize_instant(column, new)?)
        }
    }
}

/// Normalizes a timestamp value to nanoseconds since the Unix epoch.
fn normalize_instant(column: &AuditedColumn, value: &Value) -> Result<Option<i128>, AuditError> {
    let invalid = || AuditError::InvalidInstant {
        column: column.name.to_string(),
        value: value.to_string(),
    };

    match value {
        Value::Null => Ok(None),
        Value::String(text) => {
            if let Ok(instant) = OffsetDateTime::parse(text, &Rfc3339) {
                return Ok(Some(instant.unix_timestamp_nanos()));
            }
            // Date-only values mean midnight UTC
            let date: Date = Date::parse(text, format_description!("[year]-[month]-[day]"))
                .map_err(|_| invalid())?;
            Ok(Some(date.midnight().assume_utc().unix_timestamp_nanos()))
        }
        _ => Err(invalid()),
    }
}
