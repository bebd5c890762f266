// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    boundary, create_test_schedule, create_test_shift_type, create_test_vacancy,
    create_test_workline, schedule_cell, shift_type_copies, vacancy_month, view, workline_copies,
};
use crate::{sync_document, sync_snapshot};
use serde_json::json;
use shiftboard_domain::{
    CellView, MonthlySchedule, ScheduleCalendar, ScheduleCell, SnapshotDocument, VacancyTimeline,
};
use uuid::Uuid;

#[test]
fn test_shift_type_update_reaches_list_and_boundary_copies() {
    let org = Uuid::new_v4();
    let day = create_test_shift_type(org, "Day", "D");
    let night = create_test_shift_type(org, "Night", "N");
    let actual = CellView {
        from: Some(boundary(&day)),
        to: Some(boundary(&night)),
        ..CellView::default()
    };
    let schedule = create_test_schedule(vec![
        schedule_cell("2026-04-01", Some(view(&[&day], &[])), Some(actual)),
        schedule_cell("2026-04-02", Some(view(&[&night], &[])), None),
    ]);

    let mut updated = day.clone();
    updated.display.calendar_label_color_code = String::from("#000000");
    let synced: Vec<MonthlySchedule> = sync_snapshot(&updated, std::slice::from_ref(&schedule));

    let copies = shift_type_copies(&synced[0], day.id);
    assert_eq!(copies.len(), 2);
    assert!(
        copies
            .iter()
            .all(|copy| copy.display.calendar_label_color_code == "#000000")
    );
    assert_eq!(synced[0].calendar.0[1], schedule.calendar.0[1]);
    assert_eq!(
        shift_type_copies(&synced[0], night.id),
        shift_type_copies(&schedule, night.id)
    );
}

#[test]
fn test_workline_update_leaves_other_months_untouched() {
    let org = Uuid::new_v4();
    let front = create_test_workline(org, "Front desk", "FD");
    let back = create_test_workline(org, "Back office", "BO");
    let vacancy = create_test_vacancy(vec![
        vacancy_month(vec![("2026-04-01", view(&[], &[&back]))]),
        vacancy_month(vec![
            ("2026-05-01", view(&[], &[&back])),
            ("2026-05-02", view(&[], &[&front])),
        ]),
    ]);

    let mut updated = front.clone();
    updated.display.name = String::from("Reception");
    let synced: Vec<VacancyTimeline> = sync_snapshot(&updated, std::slice::from_ref(&vacancy));

    let before = serde_json::to_string(&vacancy.timeline.0[0]).unwrap();
    let after = serde_json::to_string(&synced[0].timeline.0[0]).unwrap();
    assert_eq!(before, after);

    let copies = workline_copies(&synced[0], front.id);
    assert_eq!(copies.len(), 1);
    assert_eq!(copies[0].display.name, "Reception");
    assert_eq!(
        workline_copies(&synced[0], back.id),
        workline_copies(&vacancy, back.id)
    );
}

#[test]
fn test_unreferenced_entity_returns_equal_aggregates() {
    let org = Uuid::new_v4();
    let day = create_test_shift_type(org, "Day", "D");
    let stranger = create_test_shift_type(org, "Late", "L");
    let schedule = create_test_schedule(vec![schedule_cell(
        "2026-04-01",
        Some(view(&[&day], &[])),
        None,
    )]);

    let synced = sync_snapshot(&stranger, std::slice::from_ref(&schedule));

    assert_eq!(synced, vec![schedule]);
}

#[test]
fn test_input_aggregates_are_not_mutated() {
    let org = Uuid::new_v4();
    let day = create_test_shift_type(org, "Day", "D");
    let schedule = create_test_schedule(vec![schedule_cell(
        "2026-04-01",
        Some(view(&[&day], &[])),
        None,
    )]);
    let original = schedule.clone();

    let mut updated = day.clone();
    updated.display.name = String::from("Early");
    let synced = sync_snapshot(&updated, std::slice::from_ref(&schedule));

    assert_eq!(schedule, original);
    assert_ne!(synced[0], original);
}

#[test]
fn test_cells_missing_views_are_skipped() {
    let org = Uuid::new_v4();
    let day = create_test_shift_type(org, "Day", "D");
    let schedule = create_test_schedule(vec![
        ScheduleCell::default(),
        schedule_cell("2026-04-02", None, Some(CellView::default())),
        schedule_cell("2026-04-03", Some(view(&[&day], &[])), None),
    ]);

    let mut updated = day.clone();
    updated.display.order_index = 7;
    let synced = sync_snapshot(&updated, std::slice::from_ref(&schedule));

    assert_eq!(synced[0].calendar.0[0], schedule.calendar.0[0]);
    assert_eq!(synced[0].calendar.0[1], schedule.calendar.0[1]);
    assert_eq!(shift_type_copies(&synced[0], day.id)[0].display.order_index, 7);
}

#[test]
fn test_same_id_twice_in_one_cell_updates_both() {
    let org = Uuid::new_v4();
    let day = create_test_shift_type(org, "Day", "D");
    let planned = CellView {
        from: Some(boundary(&day)),
        ..view(&[&day], &[])
    };
    let schedule = create_test_schedule(vec![schedule_cell("2026-04-01", Some(planned), None)]);

    let mut updated = day.clone();
    updated.display.is_working_shift = false;
    let synced = sync_snapshot(&updated, std::slice::from_ref(&schedule));

    let copies = shift_type_copies(&synced[0], day.id);
    assert_eq!(copies.len(), 2);
    assert!(copies.iter().all(|copy| !copy.display.is_working_shift));
}

#[test]
fn test_extra_keys_and_absent_members_survive() {
    let org = Uuid::new_v4();
    let day = create_test_shift_type(org, "Day", "D");
    let raw = json!([{
        "date": "2026-04-01",
        "note": "swap requested",
        "planned": {
            "shiftTypes": [{
                "id": day.id,
                "name": "Day",
                "mnemonic": "D",
                "isWorkingShift": true,
                "calendarLabelColorCode": "#FFFFFF",
                "calendarBackgroundColorCode": "#1E88E5",
                "vacancyLabelColorCode": "#FFFFFF",
                "vacancyBackgroundColorCode": "#43A047",
                "orderIndex": 0,
                "legacyCode": 12
            }],
            "hours": 8
        }
    }]);
    let calendar: ScheduleCalendar = serde_json::from_value(raw).unwrap();

    let mut updated = day.clone();
    updated.display.name = String::from("Daytime");
    let synced = sync_document(&updated, &calendar);
    let written = serde_json::to_value(&synced).unwrap();

    let cell = &written[0];
    assert_eq!(cell["note"], json!("swap requested"));
    assert_eq!(cell["planned"]["hours"], json!(8));
    assert!(cell.get("actual").is_none());
    assert!(cell["planned"].get("worklines").is_none());
    let copy = &cell["planned"]["shiftTypes"][0];
    assert_eq!(copy["name"], json!("Daytime"));
    assert_eq!(copy["legacyCode"], json!(12));
    assert_eq!(copy["id"], json!(day.id));
}

#[test]
fn test_workline_sync_ignores_shift_type_sites() {
    let org = Uuid::new_v4();
    let day = create_test_shift_type(org, "Day", "D");
    let front = create_test_workline(org, "Front desk", "FD");
    let schedule = create_test_schedule(vec![schedule_cell(
        "2026-04-01",
        Some(view(&[&day], &[&front])),
        Some(view(&[&day], &[&front])),
    )]);

    let mut updated = front.clone();
    updated.display.is_overlap_acceptable = true;
    let synced = sync_snapshot(&updated, std::slice::from_ref(&schedule));

    assert_eq!(synced[0].calendar.occurrences::<shiftboard_domain::Workline>(front.id), 2);
    assert_eq!(
        shift_type_copies(&synced[0], day.id),
        shift_type_copies(&schedule, day.id)
    );
    assert!(
        synced[0]
            .calendar
            .views()
            .into_iter()
            .flat_map(CellView::workline_copies)
            .all(|copy| copy.display.is_overlap_acceptable)
    );
}

#[test]
fn test_output_preserves_input_order() {
    let org = Uuid::new_v4();
    let day = create_test_shift_type(org, "Day", "D");
    let first = create_test_schedule(vec![]);
    let second = create_test_schedule(vec![schedule_cell(
        "2026-04-01",
        Some(view(&[&day], &[])),
        None,
    )]);

    let synced = sync_snapshot(&day, &[first.clone(), second.clone()]);

    assert_eq!(synced.len(), 2);
    assert_eq!(synced[0].id, first.id);
    assert_eq!(synced[1].id, second.id);
}
