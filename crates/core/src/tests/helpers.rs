// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftboard_audit::{AuditContext, Platform};
use shiftboard_domain::{
    BoundaryMarker, CellView, MonthlySchedule, ScheduleCalendar, ScheduleCell, ShiftType,
    ShiftTypeCopy, ShiftTypeDisplay, VacancyCalendar, VacancyCell, VacancyMonth, VacancyTimeline,
    Workline, WorklineCopy, WorklineDisplay,
};
use time::macros::datetime;
use uuid::Uuid;

pub fn create_test_context(method: &str) -> AuditContext {
    AuditContext::new(
        String::from(method),
        Platform::Api,
        datetime!(2026-04-15 08:00:00 UTC),
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
            calendar_label_color_code: String::from("#FFFFFF"),
            calendar_background_color_code: String::from("#1E88E5"),
            vacancy_label_color_code: String::from("#FFFFFF"),
            vacancy_background_color_code: String::from("#43A047"),
            date_blocked: None,
            order_index: 0,
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
            is_overlap_acceptable: false,
            date_blocked: None,
            order_index: 0,
        },
    )
}

pub fn view(shift_types: &[&ShiftType], worklines: &[&Workline]) -> CellView {
    CellView {
        shift_types: Some(shift_types.iter().map(|st| st.to_copy()).collect()),
        worklines: Some(worklines.iter().map(|wl| wl.to_copy()).collect()),
        ..CellView::default()
    }
}

pub fn boundary(shift_type: &ShiftType) -> BoundaryMarker {
    BoundaryMarker {
        shift_type: Some(shift_type.to_copy()),
        ..BoundaryMarker::default()
    }
}

pub fn schedule_cell(
    date: &str,
    planned: Option<CellView>,
    actual: Option<CellView>,
) -> ScheduleCell {
    ScheduleCell {
        date: Some(String::from(date)),
        planned,
        actual,
        ..ScheduleCell::default()
    }
}

pub fn create_test_schedule(cells: Vec<ScheduleCell>) -> MonthlySchedule {
    MonthlySchedule {
        id: Uuid::new_v4(),
        employee_id: Uuid::new_v4(),
        year: 2026,
        month: 4,
        calendar: ScheduleCalendar(cells),
        deleted_at: None,
    }
}

pub fn vacancy_month(cells: Vec<(&str, CellView)>) -> VacancyMonth {
    VacancyMonth {
        dates: Some(
            cells
                .into_iter()
                .map(|(date, planned)| VacancyCell {
                    date: Some(String::from(date)),
                    planned: Some(planned),
                    ..VacancyCell::default()
                })
                .collect(),
        ),
        ..VacancyMonth::default()
    }
}

pub fn create_test_vacancy(months: Vec<VacancyMonth>) -> VacancyTimeline {
    VacancyTimeline {
        id: Uuid::new_v4(),
        organization_id: Uuid::new_v4(),
        title: String::from("Night cover"),
        timeline: VacancyCalendar(months),
        deleted_at: None,
    }
}

pub fn shift_type_copies(schedule: &MonthlySchedule, id: Uuid) -> Vec<ShiftTypeCopy> {
    use shiftboard_domain::SnapshotDocument;
    schedule
        .calendar
        .views()
        .into_iter()
        .flat_map(CellView::shift_type_copies)
        .filter(|copy| copy.id == id)
        .cloned()
        .collect()
}

pub fn workline_copies(vacancy: &VacancyTimeline, id: Uuid) -> Vec<WorklineCopy> {
    use shiftboard_domain::SnapshotDocument;
    vacancy
        .timeline
        .views()
        .into_iter()
        .flat_map(CellView::workline_copies)
        .filter(|copy| copy.id == id)
        .cloned()
        .collect()
}
