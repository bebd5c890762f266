// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! ## Module Organization
//!
//! - `dimensions`: Shift type and workline rows
//! - `aggregates`: Monthly schedule and vacancy rows (snapshot column writes)
//! - `dependents`: Reference-holding rows
//! - `transitions`: High-level orchestration combining core rules, row
//!   writes and history appends inside one transaction

pub mod aggregates;
pub mod dependents;
pub mod dimensions;
pub mod transitions;
