// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod error;
mod lifecycle;
mod state;
mod sync;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{
    apply_aggregate_create, apply_dimension_create, apply_dimension_update, apply_resync,
};
pub use error::CoreError;
pub use lifecycle::{restore, restore_dimension, soft_delete};
pub use state::{
    AffectedAggregates, AggregateRewrite, DimensionUpdateResult, SyncResult, TransitionResult,
};
pub use sync::{sync_document, sync_snapshot};
