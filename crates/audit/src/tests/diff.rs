// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AuditDiff, AuditError, DiffOutcome, FieldChange, diff};
use serde_json::json;
use shiftboard_domain::AuditedColumn;

const NAME_AND_MNEMONIC: &[AuditedColumn] = &[
    AuditedColumn::value("name"),
    AuditedColumn::value("mnemonic"),
];

fn changed(outcome: DiffOutcome) -> AuditDiff {
    match outcome {
        DiffOutcome::Changed(body) => body,
        DiffOutcome::Unchanged => panic!("expected a changed outcome"),
    }
}

#[test]
fn test_creation_emits_new_for_every_declared_column() {
    let desirable = json!({ "name": "Night", "mnemonic": "", "orderIndex": 3 });

    let body = changed(diff("ShiftType", None, &desirable, NAME_AND_MNEMONIC, false).unwrap());

    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "name": { "new": "Night" }, "mnemonic": { "new": "" } })
    );
}

#[test]
fn test_creation_skips_columns_absent_on_desirable() {
    let desirable = json!({ "name": "Night" });

    let body = changed(diff("ShiftType", None, &desirable, NAME_AND_MNEMONIC, true).unwrap());

    assert_eq!(body.len(), 1);
    assert!(body.get("mnemonic").is_none());
}

#[test]
fn test_update_reports_only_changed_columns() {
    let existing = json!({ "name": "Day", "mnemonic": "D" });
    let desirable = json!({ "name": "Day shift", "mnemonic": "D" });

    let body = changed(
        diff(
            "ShiftType",
            Some(&existing),
            &desirable,
            NAME_AND_MNEMONIC,
            true,
        )
        .unwrap(),
    );

    assert_eq!(body.columns().collect::<Vec<_>>(), vec!["name"]);
    assert_eq!(
        body.get("name"),
        Some(&FieldChange::Updated {
            old: json!("Day"),
            new: json!("Day shift"),
        })
    );
}

#[test]
fn test_undeclared_columns_never_appear() {
    let existing = json!({ "name": "Day", "mnemonic": "D", "secret": 1 });
    let desirable = json!({ "name": "Day", "mnemonic": "D", "secret": 2 });

    let outcome = diff(
        "ShiftType",
        Some(&existing),
        &desirable,
        NAME_AND_MNEMONIC,
        true,
    )
    .unwrap();

    assert_eq!(outcome, DiffOutcome::Unchanged);
}

#[test]
fn test_no_change_without_requirement_yields_empty_body() {
    let row = json!({ "name": "Day", "mnemonic": "D" });

    let body = changed(diff("ShiftType", Some(&row), &row, NAME_AND_MNEMONIC, false).unwrap());

    assert!(body.is_empty());
}

#[test]
fn test_json_columns_compare_deeply() {
    let columns = &[AuditedColumn::json("calendar")];
    let existing = json!({ "calendar": [{ "date": "2026-03-01", "planned": { "a": 1, "b": 2 } }] });
    let reordered =
        json!({ "calendar": [{ "planned": { "b": 2, "a": 1 }, "date": "2026-03-01" }] });
    let altered = json!({ "calendar": [{ "date": "2026-03-01", "planned": { "a": 1, "b": 3 } }] });

    assert_eq!(
        diff("MonthlySchedule", Some(&existing), &reordered, columns, true).unwrap(),
        DiffOutcome::Unchanged
    );
    let body = changed(diff("MonthlySchedule", Some(&existing), &altered, columns, true).unwrap());
    assert!(body.get("calendar").is_some());
}

#[test]
fn test_instants_are_normalized_before_comparison() {
    let columns = &[AuditedColumn::instant("deletedAt")];
    let existing = json!({ "deletedAt": "2026-03-01T12:00:00+02:00" });
    let desirable = json!({ "deletedAt": "2026-03-01T10:00:00Z" });

    let outcome = diff("ShiftType", Some(&existing), &desirable, columns, true).unwrap();

    assert_eq!(outcome, DiffOutcome::Unchanged);
}

#[test]
fn test_date_only_instant_means_midnight_utc() {
    let columns = &[AuditedColumn::instant("dateBlocked")];
    let existing = json!({ "dateBlocked": "2026-03-01" });
    let desirable = json!({ "dateBlocked": "2026-03-01T00:00:00Z" });

    let outcome = diff("ShiftType", Some(&existing), &desirable, columns, true).unwrap();

    assert_eq!(outcome, DiffOutcome::Unchanged);
}

#[test]
fn test_null_instants_are_equal() {
    let columns = &[AuditedColumn::instant("deletedAt")];
    let row = json!({ "deletedAt": null });

    assert_eq!(
        diff("ShiftType", Some(&row), &row, columns, true).unwrap(),
        DiffOutcome::Unchanged
    );
}

#[test]
fn test_setting_an_instant_is_a_change() {
    let columns = &[AuditedColumn::instant("deletedAt")];
    let existing = json!({ "deletedAt": null });
    let desirable = json!({ "deletedAt": "2026-03-01T10:00:00Z" });

    let body = changed(diff("ShiftType", Some(&existing), &desirable, columns, true).unwrap());

    assert_eq!(
        body.get("deletedAt"),
        Some(&FieldChange::Updated {
            old: json!(null),
            new: json!("2026-03-01T10:00:00Z"),
        })
    );
}

#[test]
fn test_column_missing_on_one_side_counts_as_null() {
    let columns = &[AuditedColumn::value("title")];
    let existing = json!({});
    let desirable = json!({ "title": "Night cover" });

    let body = changed(
        diff("VacancyTimeline", Some(&existing), &desirable, columns, true).unwrap(),
    );

    assert_eq!(body.get("title").and_then(FieldChange::old_value), Some(&json!(null)));
}

#[test]
fn test_column_missing_on_both_sides_is_an_error() {
    let row = json!({ "name": "Day" });

    let result = diff("ShiftType", Some(&row), &row, NAME_AND_MNEMONIC, true);

    assert!(matches!(
        result,
        Err(AuditError::UnknownColumn { column, .. }) if column == "mnemonic"
    ));
}

#[test]
fn test_unparsable_instant_is_an_error() {
    let columns = &[AuditedColumn::instant("deletedAt")];
    let existing = json!({ "deletedAt": null });
    let desirable = json!({ "deletedAt": "not a date" });

    let result = diff("ShiftType", Some(&existing), &desirable, columns, true);

    assert!(matches!(result, Err(AuditError::InvalidInstant { .. })));
}

#[test]
fn test_non_object_row_is_an_error() {
    let result = diff("ShiftType", None, &json!([1, 2]), NAME_AND_MNEMONIC, false);

    assert!(matches!(result, Err(AuditError::NotAnObject { .. })));
}

#[test]
fn test_diff_body_deserializes_both_shapes() {
    let body: AuditDiff = serde_json::from_value(json!({
        "name": { "old": "Day", "new": "Night" },
        "mnemonic": { "new": "N" },
    }))
    .unwrap();

    assert!(matches!(body.get("name"), Some(FieldChange::Updated { .. })));
    assert!(matches!(body.get("mnemonic"), Some(FieldChange::Created { .. })));
}
