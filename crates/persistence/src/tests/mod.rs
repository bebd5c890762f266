// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use shiftboard_audit::{AuditContext, Platform};
use shiftboard_domain::{
    CellView, MonthlySchedule, ScheduleCalendar, ScheduleCell, ShiftType, ShiftTypeDisplay,
    SnapshotDocument, VacancyCalendar, VacancyCell, VacancyMonth, VacancyTimeline, Workline,
    WorklineDisplay,
};
use time::macros::datetime;
use uuid::Uuid;

use crate::Persistence;

pub fn create_test_context(method: &str) -> AuditContext {
    AuditContext::new(
        String::from(method),
        Platform::Web,
        datetime!(2026-05-04 14:00:00 UTC),
    )
}

pub fn create_test_shift_type(organization_id: Uuid, name: &str, mnemonic: &str) -> ShiftType {
    ShiftType::new(
        Uuid::new_v4(),
        organization_id,
        ShiftTypeDisplay {
            name: String::from(name),
            mnemonic: String::from(mnemonic),
            is_working_shift: true,
            calendar_label_color_code: String::from("#000000"),
            calendar_background_color_code: String::from("#FDD835"),
            vacancy_label_color_code: String::from("#000000"),
            vacancy_background_color_code: String::from("#FFB300"),
            date_blocked: None,
            order_index: 1,
        },
    )
}

pub fn create_test_workline(organization_id: Uuid, name: &str, mnemonic: &str) -> Workline {
    Workline::new(
        Uuid::new_v4(),
        organization_id,
        WorklineDisplay {
            name: String::from(name),
            mnemonic: String::from(mnemonic),
            is_overlap_acceptable: true,
            date_blocked: None,
            order_index: 1,
        },
    )
}

pub fn view_of(shift_type: &ShiftType, workline: &Workline) -> CellView {
    CellView {
        shift_types: Some(vec![shift_type.to_copy()]),
        worklines: Some(vec![workline.to_copy()]),
        ..CellView::default()
    }
}

/// A persisted organization with one shift type and one workline.
pub struct Fixture {
    pub persistence: Persistence,
    pub organization_id: Uuid,
    pub shift_type: ShiftType,
    pub workline: Workline,
}

pub fn setup_fixture() -> Fixture {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let organization_id = Uuid::new_v4();

    let shift_type = persistence
        .create_shift_type(
            create_test_shift_type(organization_id, "Day", "D"),
            &create_test_context("createShiftType"),
        )
        .unwrap()
        .entity;
    let workline = persistence
        .create_workline(
            create_test_workline(organization_id, "Reception", "RC"),
            &create_test_context("createWorkline"),
        )
        .unwrap()
        .entity;

    Fixture {
        persistence,
        organization_id,
        shift_type,
        workline,
    }
}

/// Stores a schedule embedding `view` on one date and links it with a plan row.
pub fn seed_schedule(fixture: &mut Fixture, view: CellView) -> MonthlySchedule {
    let schedule = MonthlySchedule {
        id: Uuid::new_v4(),
        employee_id: Uuid::new_v4(),
        year: 2026,
        month: 5,
        calendar: ScheduleCalendar(vec![ScheduleCell {
            date: Some(String::from("2026-05-04")),
            planned: Some(view),
            ..ScheduleCell::default()
        }]),
        deleted_at: None,
    };

    let stored = fixture
        .persistence
        .create_monthly_schedule(schedule, &create_test_context("createMonthlySchedule"))
        .unwrap()
        .entity;
    fixture
        .persistence
        .add_working_shift_plan(stored.id, fixture.shift_type.id, fixture.workline.id)
        .unwrap();
    stored
}

/// Stores a vacancy embedding `view` on one date and links it with a working shift.
///
/// Returns the vacancy and the working shift id.
pub fn seed_vacancy(fixture: &mut Fixture, view: CellView) -> (VacancyTimeline, Uuid) {
    let vacancy = VacancyTimeline {
        id: Uuid::new_v4(),
        organization_id: fixture.organization_id,
        title: String::from("Weekend cover"),
        timeline: VacancyCalendar(vec![VacancyMonth {
            dates: Some(vec![VacancyCell {
                date: Some(String::from("2026-05-09")),
                planned: Some(view),
                ..VacancyCell::default()
            }]),
            ..VacancyMonth::default()
        }]),
        deleted_at: None,
    };

    let stored = fixture
        .persistence
        .create_vacancy(vacancy, &create_test_context("createVacancy"))
        .unwrap()
        .entity;
    let working_shift_id = fixture
        .persistence
        .add_vacancy_working_shift(stored.id, fixture.shift_type.id, fixture.workline.id)
        .unwrap();
    (stored, working_shift_id)
}

/// Names of every embedded shift type copy with the given id.
pub fn embedded_shift_type_names<D: SnapshotDocument>(document: &D, id: Uuid) -> Vec<String> {
    document
        .views()
        .into_iter()
        .flat_map(CellView::shift_type_copies)
        .filter(|copy| copy.id == id)
        .map(|copy| copy.display.name.clone())
        .collect()
}

/// Names of every embedded workline copy with the given id.
pub fn embedded_workline_names<D: SnapshotDocument>(document: &D, id: Uuid) -> Vec<String> {
    document
        .views()
        .into_iter()
        .flat_map(CellView::workline_copies)
        .filter(|copy| copy.id == id)
        .map(|copy| copy.display.name.clone())
        .collect()
}
