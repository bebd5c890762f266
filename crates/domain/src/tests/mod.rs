// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod error;
mod snapshot;

use crate::{ShiftType, ShiftTypeDisplay, Workline, WorklineDisplay};
use uuid::Uuid;

pub fn create_test_shift_type_display(name: &str, mnemonic: &str) -> ShiftTypeDisplay {
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
    }
}

pub fn create_test_workline_display(name: &str, mnemonic: &str) -> WorklineDisplay {
    WorklineDisplay {
        name: String::from(name),
        mnemonic: String::from(mnemonic),
        is_overlap_acceptable: false,
        date_blocked: None,
        order_index: 0,
    }
}

pub fn create_test_shift_type(organization_id: Uuid, mnemonic: &str) -> ShiftType {
    ShiftType::new(
        Uuid::new_v4(),
        organization_id,
        create_test_shift_type_display("Day", mnemonic),
    )
}

pub fn create_test_workline(organization_id: Uuid, mnemonic: &str) -> Workline {
    Workline::new(
        Uuid::new_v4(),
        organization_id,
        create_test_workline_display("Front desk", mnemonic),
    )
}
