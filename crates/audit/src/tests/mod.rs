// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod diff;

use crate::{AuditContext, Platform};
use shiftboard_domain::{ShiftType, ShiftTypeDisplay};
use time::macros::datetime;
use uuid::Uuid;

pub fn create_test_context(method: &str) -> AuditContext {
    AuditContext::new(
        String::from(method),
        Platform::Web,
        datetime!(2026-03-01 09:30:00 UTC),
    )
}

pub fn create_test_shift_type(name: &str, mnemonic: &str) -> ShiftType {
    ShiftType::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
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
