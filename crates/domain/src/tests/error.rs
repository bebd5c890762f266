// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DependentKind, DomainError, EntityKind, LifecycleState};
use uuid::Uuid;

#[test]
fn test_domain_error_display() {
    let entity_id: Uuid = Uuid::nil();

    let err: DomainError = DomainError::ChangeViolatesReference {
        entity: EntityKind::Workline,
        entity_id,
        dependent: DependentKind::WorkingShiftPlan,
        field: "worklineId",
    };
    assert_eq!(
        format!("{err}"),
        "Change violates reference: Workline 00000000-0000-0000-0000-000000000000 is still referenced by WorkingShiftPlan.worklineId"
    );

    let err: DomainError = DomainError::InvalidLifecycleTransition {
        entity: EntityKind::ShiftType,
        entity_id,
        from: LifecycleState::Deleted,
        to: LifecycleState::Deleted,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid lifecycle transition for ShiftType 00000000-0000-0000-0000-000000000000: Deleted -> Deleted"
    );

    let err: DomainError = DomainError::DuplicateMnemonic {
        entity: EntityKind::ShiftType,
        mnemonic: String::from("D"),
    };
    assert_eq!(
        format!("{err}"),
        "An active ShiftType with mnemonic 'D' already exists"
    );

    let err: DomainError = DomainError::UnknownEntityKind(String::from("Shift"));
    assert_eq!(format!("{err}"), "Unknown entity kind: Shift");
}
