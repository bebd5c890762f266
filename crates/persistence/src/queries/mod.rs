// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `dimensions`: Shift type and workline lookups
//! - `aggregates`: Monthly schedule and vacancy lookups
//! - `references`: Dependent reference counts and affected aggregate lookup

pub mod aggregates;
pub mod dimensions;
pub mod references;
