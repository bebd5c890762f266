// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftboard_audit::AuditRecord;
use shiftboard_domain::{MonthlySchedule, VacancyTimeline};

/// The result of a single-entity transition.
///
/// Every successful transition produces exactly one audit record.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult<E> {
    /// The entity after the transition.
    pub entity: E,
    /// The audit record describing the transition.
    pub audit_record: AuditRecord,
}

/// The aggregates whose snapshots may embed a copy of one dimension entity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AffectedAggregates {
    pub schedules: Vec<MonthlySchedule>,
    pub vacancies: Vec<VacancyTimeline>,
}

impl AffectedAggregates {
    #[must_use]
    pub const fn new(schedules: Vec<MonthlySchedule>, vacancies: Vec<VacancyTimeline>) -> Self {
        Self {
            schedules,
            vacancies,
        }
    }

    /// Returns `true` if no aggregate was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty() && self.vacancies.is_empty()
    }
}

/// An aggregate whose snapshot was rewritten, with its audit record.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRewrite<A> {
    pub aggregate: A,
    pub audit_record: AuditRecord,
}

/// Snapshot rewrites produced by one synchronization pass.
///
/// Aggregates whose snapshot did not change are omitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SyncResult {
    pub schedules: Vec<AggregateRewrite<MonthlySchedule>>,
    pub vacancies: Vec<AggregateRewrite<VacancyTimeline>>,
}

impl SyncResult {
    /// Every audit record of the pass, schedules first.
    pub fn audit_records(&self) -> impl Iterator<Item = &AuditRecord> {
        self.schedules
            .iter()
            .map(|rewrite| &rewrite.audit_record)
            .chain(self.vacancies.iter().map(|rewrite| &rewrite.audit_record))
    }

    /// The number of rewritten aggregates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schedules.len() + self.vacancies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The result of updating a dimension entity.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionUpdateResult<D> {
    /// The dimension entity as it should be stored.
    pub dimension: D,
    /// The dimension's own audit record; `None` when no audited field changed.
    pub audit_record: Option<AuditRecord>,
    /// The rewritten aggregates.
    pub synced: SyncResult,
}
