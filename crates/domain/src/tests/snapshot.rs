// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::{Value, json};
use uuid::Uuid;

use super::{create_test_shift_type, create_test_workline};
use crate::{
    BoundaryMarker, CellView, ScheduleCalendar, ScheduleCell, ShiftType, SnapshotDocument,
    VacancyCalendar, Workline,
};

fn shift_type_json(id: Uuid) -> Value {
    json!({
        "id": id,
        "name": "Day",
        "mnemonic": "D",
        "isWorkingShift": true,
        "calendarLabelColorCode": "#FFFFFF",
        "calendarBackgroundColorCode": "#1E88E5",
        "vacancyLabelColorCode": "#FFFFFF",
        "vacancyBackgroundColorCode": "#43A047",
        "dateBlocked": null,
        "orderIndex": 1,
        "legacyCode": 17
    })
}

#[test]
fn test_schedule_calendar_preserves_unknown_keys_and_absent_members() {
    let id: Uuid = Uuid::new_v4();
    let raw: Value = json!([
        {
            "date": "2026-03-01",
            "holiday": true,
            "planned": {
                "shiftTypes": [shift_type_json(id)],
                "from": { "shiftType": shift_type_json(id), "time": "08:00" },
                "comment": "swap requested"
            }
        },
        { "date": "2026-03-02" }
    ]);

    let calendar: ScheduleCalendar = serde_json::from_value(raw.clone()).unwrap();
    let written: Value = serde_json::to_value(&calendar).unwrap();

    assert_eq!(written, raw);
}

#[test]
fn test_schedule_views_cover_planned_and_actual() {
    let calendar = ScheduleCalendar(vec![
        ScheduleCell {
            planned: Some(CellView::default()),
            actual: Some(CellView::default()),
            ..ScheduleCell::default()
        },
        ScheduleCell {
            actual: Some(CellView::default()),
            ..ScheduleCell::default()
        },
        ScheduleCell::default(),
    ]);

    assert_eq!(calendar.views().len(), 3);
}

#[test]
fn test_shift_type_occurrences_include_boundary_markers() {
    let organization_id: Uuid = Uuid::new_v4();
    let shift_type: ShiftType = create_test_shift_type(organization_id, "D");
    let other: ShiftType = create_test_shift_type(organization_id, "N");

    let view = CellView {
        shift_types: Some(vec![shift_type.to_copy(), other.to_copy()]),
        from: Some(BoundaryMarker {
            shift_type: Some(shift_type.to_copy()),
            ..BoundaryMarker::default()
        }),
        to: Some(BoundaryMarker {
            shift_type: Some(other.to_copy()),
            ..BoundaryMarker::default()
        }),
        ..CellView::default()
    };
    let calendar = ScheduleCalendar(vec![ScheduleCell {
        planned: Some(view.clone()),
        actual: Some(view),
        ..ScheduleCell::default()
    }]);

    assert_eq!(calendar.occurrences::<ShiftType>(shift_type.id), 4);
    assert_eq!(calendar.occurrences::<ShiftType>(other.id), 4);
    assert!(!calendar.references::<Workline>(shift_type.id));
}

#[test]
fn test_vacancy_views_skip_months_without_dates() {
    let workline: Workline = create_test_workline(Uuid::new_v4(), "FD");
    let raw: Value = json!([
        { "month": "2026-03" },
        {
            "month": "2026-04",
            "dates": [
                { "date": "2026-04-01" },
                {
                    "date": "2026-04-02",
                    "planned": { "worklines": [serde_json::to_value(workline.to_copy()).unwrap()] }
                }
            ]
        }
    ]);

    let calendar: VacancyCalendar = serde_json::from_value(raw).unwrap();

    assert_eq!(calendar.views().len(), 1);
    assert_eq!(calendar.occurrences::<Workline>(workline.id), 1);
}
