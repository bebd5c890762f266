// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auditable;
mod diff;
mod error;
mod record;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

pub use auditable::Auditable;
pub use diff::{AuditDiff, DiffOutcome, FieldChange, diff};
pub use error::AuditError;
pub use record::AuditRecord;

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a state change.
/// This could be a user, a system process, or an automated trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "user", "system", "scheduler").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// The client platform a mutation originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Mobile,
    Api,
    #[default]
    System,
}

impl Platform {
    /// Converts this platform to its stored tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Api => "api",
            Self::System => "system",
        }
    }
}

impl FromStr for Platform {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Self::Web),
            "mobile" => Ok(Self::Mobile),
            "api" => Ok(Self::Api),
            "system" => Ok(Self::System),
            _ => Err(AuditError::UnknownPlatform(s.to_string())),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-supplied metadata attached to every audit record of one mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditContext {
    /// The acting method name (e.g., "`updateShiftType`").
    pub method: String,
    /// The originating platform.
    pub platform: Platform,
    /// Who performed the mutation, when known.
    pub actor: Option<Actor>,
    /// The moment the business change occurred.
    pub history_at: OffsetDateTime,
}

impl AuditContext {
    /// Creates a new context without an actor.
    ///
    /// # Arguments
    ///
    /// * `method` - The acting method name
    /// * `platform` - The originating platform
    /// * `history_at` - The business-event timestamp
    #[must_use]
    pub const fn new(method: String, platform: Platform, history_at: OffsetDateTime) -> Self {
        Self {
            method,
            platform,
            actor: None,
            history_at,
        }
    }

    /// Attaches the acting actor.
    #[must_use]
    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Derives a context for a follow-up mutation in the same transaction.
    ///
    /// Platform, actor and business timestamp are shared; only the method changes.
    #[must_use]
    pub fn with_method(&self, method: &str) -> Self {
        Self {
            method: method.to_string(),
            platform: self.platform,
            actor: self.actor.clone(),
            history_at: self.history_at,
        }
    }
}
