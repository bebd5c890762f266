// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row representations and their conversions to domain values.
//!
//! Identifiers are stored as hyphenated UUID text, instants as RFC 3339
//! text, booleans as integers and snapshot documents as JSON text.

use std::str::FromStr;

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use shiftboard_audit::{Actor, AuditDiff, AuditRecord, Platform};
use shiftboard_domain::{
    EntityKind, MonthlySchedule, ShiftType, ShiftTypeDisplay, VacancyTimeline, Workline,
    WorklineDisplay,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::diesel_schema::{monthly_schedules, shift_types, vacancies, worklines};
use crate::error::PersistenceError;

pub(crate) fn format_instant(instant: OffsetDateTime) -> Result<String, PersistenceError> {
    Ok(instant.format(&Rfc3339)?)
}

pub(crate) fn format_optional_instant(
    instant: Option<OffsetDateTime>,
) -> Result<Option<String>, PersistenceError> {
    instant.map(format_instant).transpose()
}

pub(crate) fn parse_instant(text: &str) -> Result<OffsetDateTime, PersistenceError> {
    Ok(OffsetDateTime::parse(text, &Rfc3339)?)
}

fn parse_optional_instant(text: Option<&str>) -> Result<Option<OffsetDateTime>, PersistenceError> {
    text.map(parse_instant).transpose()
}

pub(crate) fn parse_id(text: &str) -> Result<Uuid, PersistenceError> {
    Ok(Uuid::parse_str(text)?)
}

/// Diesel row for `shift_types`.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = shift_types, primary_key(shift_type_id))]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ShiftTypeRow {
    pub shift_type_id: String,
    pub organization_id: String,
    pub name: String,
    pub mnemonic: String,
    pub is_working_shift: i32,
    pub calendar_label_color_code: String,
    pub calendar_background_color_code: String,
    pub vacancy_label_color_code: String,
    pub vacancy_background_color_code: String,
    pub date_blocked: Option<String>,
    pub order_index: i32,
    pub deleted_at: Option<String>,
}

impl ShiftTypeRow {
    pub(crate) fn from_domain(shift_type: &ShiftType) -> Result<Self, PersistenceError> {
        let display: &ShiftTypeDisplay = &shift_type.display;
        Ok(Self {
            shift_type_id: shift_type.id.to_string(),
            organization_id: shift_type.organization_id.to_string(),
            name: display.name.clone(),
            mnemonic: display.mnemonic.clone(),
            is_working_shift: i32::from(display.is_working_shift),
            calendar_label_color_code: display.calendar_label_color_code.clone(),
            calendar_background_color_code: display.calendar_background_color_code.clone(),
            vacancy_label_color_code: display.vacancy_label_color_code.clone(),
            vacancy_background_color_code: display.vacancy_background_color_code.clone(),
            date_blocked: format_optional_instant(display.date_blocked)?,
            order_index: display.order_index,
            deleted_at: format_optional_instant(shift_type.deleted_at)?,
        })
    }

    pub(crate) fn into_domain(self) -> Result<ShiftType, PersistenceError> {
        Ok(ShiftType {
            id: parse_id(&self.shift_type_id)?,
            organization_id: parse_id(&self.organization_id)?,
            display: ShiftTypeDisplay {
                name: self.name,
                mnemonic: self.mnemonic,
                is_working_shift: self.is_working_shift != 0,
                calendar_label_color_code: self.calendar_label_color_code,
                calendar_background_color_code: self.calendar_background_color_code,
                vacancy_label_color_code: self.vacancy_label_color_code,
                vacancy_background_color_code: self.vacancy_background_color_code,
                date_blocked: parse_optional_instant(self.date_blocked.as_deref())?,
                order_index: self.order_index,
            },
            deleted_at: parse_optional_instant(self.deleted_at.as_deref())?,
        })
    }
}

/// Diesel row for `worklines`.
#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = worklines, primary_key(workline_id))]
#[diesel(treat_none_as_null = true)]
pub(crate) struct WorklineRow {
    pub workline_id: String,
    pub organization_id: String,
    pub name: String,
    pub mnemonic: String,
    pub is_overlap_acceptable: i32,
    pub date_blocked: Option<String>,
    pub order_index: i32,
    pub deleted_at: Option<String>,
}

impl WorklineRow {
    pub(crate) fn from_domain(workline: &Workline) -> Result<Self, PersistenceError> {
        let display: &WorklineDisplay = &workline.display;
        Ok(Self {
            workline_id: workline.id.to_string(),
            organization_id: workline.organization_id.to_string(),
            name: display.name.clone(),
            mnemonic: display.mnemonic.clone(),
            is_overlap_acceptable: i32::from(display.is_overlap_acceptable),
            date_blocked: format_optional_instant(display.date_blocked)?,
            order_index: display.order_index,
            deleted_at: format_optional_instant(workline.deleted_at)?,
        })
    }

    pub(crate) fn into_domain(self) -> Result<Workline, PersistenceError> {
        Ok(Workline {
            id: parse_id(&self.workline_id)?,
            organization_id: parse_id(&self.organization_id)?,
            display: WorklineDisplay {
                name: self.name,
                mnemonic: self.mnemonic,
                is_overlap_acceptable: self.is_overlap_acceptable != 0,
                date_blocked: parse_optional_instant(self.date_blocked.as_deref())?,
                order_index: self.order_index,
            },
            deleted_at: parse_optional_instant(self.deleted_at.as_deref())?,
        })
    }
}

/// Diesel row for `monthly_schedules`.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = monthly_schedules)]
pub(crate) struct MonthlyScheduleRow {
    pub monthly_schedule_id: String,
    pub employee_id: String,
    pub year: i32,
    pub month: i32,
    pub calendar_json: String,
    pub deleted_at: Option<String>,
}

impl MonthlyScheduleRow {
    pub(crate) fn from_domain(schedule: &MonthlySchedule) -> Result<Self, PersistenceError> {
        Ok(Self {
            monthly_schedule_id: schedule.id.to_string(),
            employee_id: schedule.employee_id.to_string(),
            year: schedule.year,
            month: i32::from(schedule.month),
            calendar_json: serde_json::to_string(&schedule.calendar)?,
            deleted_at: format_optional_instant(schedule.deleted_at)?,
        })
    }

    pub(crate) fn into_domain(self) -> Result<MonthlySchedule, PersistenceError> {
        let month: u8 = u8::try_from(self.month).map_err(|_| {
            PersistenceError::SerializationError(format!("Invalid month: {}", self.month))
        })?;
        Ok(MonthlySchedule {
            id: parse_id(&self.monthly_schedule_id)?,
            employee_id: parse_id(&self.employee_id)?,
            year: self.year,
            month,
            calendar: serde_json::from_str(&self.calendar_json)?,
            deleted_at: parse_optional_instant(self.deleted_at.as_deref())?,
        })
    }
}

/// Diesel row for `vacancies`.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = vacancies)]
pub(crate) struct VacancyRow {
    pub vacancy_id: String,
    pub organization_id: String,
    pub title: String,
    pub timeline_json: String,
    pub deleted_at: Option<String>,
}

impl VacancyRow {
    pub(crate) fn from_domain(vacancy: &VacancyTimeline) -> Result<Self, PersistenceError> {
        Ok(Self {
            vacancy_id: vacancy.id.to_string(),
            organization_id: vacancy.organization_id.to_string(),
            title: vacancy.title.clone(),
            timeline_json: serde_json::to_string(&vacancy.timeline)?,
            deleted_at: format_optional_instant(vacancy.deleted_at)?,
        })
    }

    pub(crate) fn into_domain(self) -> Result<VacancyTimeline, PersistenceError> {
        Ok(VacancyTimeline {
            id: parse_id(&self.vacancy_id)?,
            organization_id: parse_id(&self.organization_id)?,
            title: self.title,
            timeline: serde_json::from_str(&self.timeline_json)?,
            deleted_at: parse_optional_instant(self.deleted_at.as_deref())?,
        })
    }
}

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ActorData {
    pub id: String,
    pub actor_type: String,
}

/// A history row as stored, shared by every history table.
#[derive(Debug, Clone, Queryable)]
pub(crate) struct HistoryRow {
    pub history_id: String,
    pub entity_id: String,
    pub method_name: String,
    pub is_new_record: i32,
    pub platform: String,
    pub actor_json: Option<String>,
    pub diff_json: String,
    pub history_at: String,
}

impl HistoryRow {
    pub(crate) fn from_record(record: &AuditRecord) -> Result<Self, PersistenceError> {
        let actor_json: Option<String> = record
            .actor
            .as_ref()
            .map(|actor| {
                serde_json::to_string(&ActorData {
                    id: actor.id.clone(),
                    actor_type: actor.actor_type.clone(),
                })
            })
            .transpose()?;

        Ok(Self {
            history_id: record.history_id.to_string(),
            entity_id: record.entity_id.to_string(),
            method_name: record.method_name.clone(),
            is_new_record: i32::from(record.is_new_record),
            platform: record.platform.as_str().to_string(),
            actor_json,
            diff_json: serde_json::to_string(&record.diff)?,
            history_at: format_instant(record.history_at)?,
        })
    }

    pub(crate) fn into_record(self, entity: EntityKind) -> Result<AuditRecord, PersistenceError> {
        let actor: Option<Actor> = self
            .actor_json
            .as_deref()
            .map(serde_json::from_str::<ActorData>)
            .transpose()?
            .map(|data| Actor::new(data.id, data.actor_type));
        let diff: AuditDiff = serde_json::from_str(&self.diff_json)?;

        Ok(AuditRecord {
            history_id: parse_id(&self.history_id)?,
            entity,
            entity_id: parse_id(&self.entity_id)?,
            method_name: self.method_name,
            is_new_record: self.is_new_record != 0,
            platform: Platform::from_str(&self.platform)?,
            actor,
            diff,
            history_at: parse_instant(&self.history_at)?,
        })
    }
}
