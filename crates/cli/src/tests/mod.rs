// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use clap::{CommandFactory, Parser};
use shiftboard_audit::{AuditContext, AuditRecord, Platform};
use shiftboard_domain::{EntityKind, ShiftType, ShiftTypeDisplay};
use shiftboard_persistence::Persistence;
use time::macros::datetime;
use uuid::Uuid;

use crate::{Args, Command, ResyncTarget, write_records};

fn create_test_shift_type() -> ShiftType {
    ShiftType::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        ShiftTypeDisplay {
            name: String::from("Late"),
            mnemonic: String::from("L"),
            is_working_shift: true,
            calendar_label_color_code: String::from("#FFFFFF"),
            calendar_background_color_code: String::from("#3949AB"),
            vacancy_label_color_code: String::from("#FFFFFF"),
            vacancy_background_color_code: String::from("#5E35B1"),
            date_blocked: None,
            order_index: 2,
        },
    )
}

#[test]
fn test_cli_definition_is_consistent() {
    Args::command().debug_assert();
}

#[test]
fn test_parse_resync_shift_type() {
    let id = Uuid::new_v4();
    let args = Args::try_parse_from([
        "shiftboard",
        "resync",
        "shift-type",
        &id.to_string(),
        "--platform",
        "api",
    ])
    .unwrap();

    assert_eq!(args.platform, Platform::Api);
    assert!(matches!(
        args.command,
        Command::Resync(ResyncTarget::ShiftType { id: parsed }) if parsed == id
    ));
}

#[test]
fn test_parse_history_kind() {
    let id = Uuid::new_v4();
    let args = Args::try_parse_from(["shiftboard", "history", "vacancy", &id.to_string()]).unwrap();

    assert_eq!(args.platform, Platform::System);
    assert!(matches!(
        args.command,
        Command::History { kind: EntityKind::VacancyTimeline, id: parsed } if parsed == id
    ));
}

#[test]
fn test_parse_rejects_unknown_kind_and_platform() {
    let id = Uuid::new_v4().to_string();

    assert!(Args::try_parse_from(["shiftboard", "history", "rota", &id]).is_err());
    assert!(
        Args::try_parse_from([
            "shiftboard",
            "resync",
            "workline",
            &id,
            "--platform",
            "desktop"
        ])
        .is_err()
    );
}

#[test]
fn test_write_records_emits_one_json_line_each() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let ctx = AuditContext::new(
        String::from("createShiftType"),
        Platform::Web,
        datetime!(2026-06-01 12:00:00 UTC),
    );
    let shift_type = create_test_shift_type();
    persistence.create_shift_type(shift_type.clone(), &ctx).unwrap();
    let records = persistence
        .history_for(EntityKind::ShiftType, shift_type.id)
        .unwrap();

    let mut out: Vec<u8> = Vec::new();
    write_records(&mut out, &records).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    let decoded: AuditRecord = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(decoded, records[0]);
}

#[test]
fn test_resync_of_unknown_entity_fails() {
    let args = Args::try_parse_from([
        "shiftboard",
        "resync",
        "workline",
        &Uuid::new_v4().to_string(),
    ])
    .unwrap();

    let mut out: Vec<u8> = Vec::new();
    assert!(args.run(&mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_history_of_unknown_entity_is_empty() {
    let args = Args::try_parse_from([
        "shiftboard",
        "history",
        "shift-type",
        &Uuid::new_v4().to_string(),
    ])
    .unwrap();

    let mut out: Vec<u8> = Vec::new();
    args.run(&mut out).unwrap();
    assert!(out.is_empty());
}
