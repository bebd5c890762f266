// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftboard_audit::AuditError;
use shiftboard_domain::DomainError;

/// Errors that can occur while applying a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The audit diff could not be computed.
    Audit(AuditError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Audit(err) => write!(f, "Audit failure: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<AuditError> for CoreError {
    fn from(err: AuditError) -> Self {
        Self::Audit(err)
    }
}
