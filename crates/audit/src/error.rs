// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised while computing or decoding audit data.
///
/// These indicate malformed input (a programming error), never a business
/// condition; callers propagate them and let the transaction roll back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    /// An audited column is absent from both the prior and posterior rows.
    #[error("Audited column '{column}' is not present on {entity}")]
    UnknownColumn { entity: String, column: String },

    /// A row did not serialize to a JSON object.
    #[error("Audit row for {entity} is not a JSON object")]
    NotAnObject { entity: String },

    /// A timestamp column held a value that is not a recognizable instant.
    #[error("Column '{column}' holds an invalid timestamp: {value}")]
    InvalidInstant { column: String, value: String },

    /// A platform tag could not be parsed.
    #[error("Unknown platform tag: {0}")]
    UnknownPlatform(String),

    /// Row serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
