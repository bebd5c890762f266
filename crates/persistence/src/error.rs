// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftboard::CoreError;
use shiftboard_domain::{DependentKind, EntityKind};
use uuid::Uuid;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested entity was not found.
    EntityNotFound { entity: EntityKind, entity_id: Uuid },
    /// The requested dependent row was not found.
    DependentNotFound { dependent: DependentKind, id: Uuid },
    /// The mutation was rejected by a domain rule.
    Rejected(CoreError),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::EntityNotFound { entity, entity_id } => {
                write!(f, "{entity} not found: {entity_id}")
            }
            Self::DependentNotFound { dependent, id } => {
                write!(f, "{dependent} not found: {id}")
            }
            Self::Rejected(err) => write!(f, "Rejected: {err}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::QueryFailed(err.to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<uuid::Error> for PersistenceError {
    fn from(err: uuid::Error) -> Self {
        Self::SerializationError(format!("Invalid UUID: {err}"))
    }
}

impl From<time::error::Parse> for PersistenceError {
    fn from(err: time::error::Parse) -> Self {
        Self::SerializationError(format!("Invalid timestamp: {err}"))
    }
}

impl From<time::error::Format> for PersistenceError {
    fn from(err: time::error::Format) -> Self {
        Self::SerializationError(format!("Timestamp formatting failed: {err}"))
    }
}

impl From<shiftboard_audit::AuditError> for PersistenceError {
    fn from(err: shiftboard_audit::AuditError) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<CoreError> for PersistenceError {
    fn from(err: CoreError) -> Self {
        Self::Rejected(err)
    }
}
