// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The snapshot synchronizer.
//!
//! Propagates a dimension entity's display fields into every embedded copy
//! of it. Inputs are never mutated; copies of other entities, ids and
//! unknown keys are left exactly as they were.

use shiftboard_domain::{Dimension, EmbeddedCopy, SnapshotBearing, SnapshotDocument};

/// Overwrites, in place, every copy of `desirable` found in `document`.
fn sync_in_place<D, Doc>(desirable: &D, document: &mut Doc)
where
    D: Dimension,
    Doc: SnapshotDocument,
{
    let id = desirable.id();
    for view in document.views_mut() {
        for copy in D::copies_in_view_mut(view) {
            if copy.id() == id {
                copy.overwrite_display(desirable.display());
            }
        }
    }
}

/// Returns a copy of `document` with every copy of `desirable` refreshed.
#[must_use]
pub fn sync_document<D, Doc>(desirable: &D, document: &Doc) -> Doc
where
    D: Dimension,
    Doc: SnapshotDocument + Clone,
{
    let mut synced: Doc = document.clone();
    sync_in_place(desirable, &mut synced);
    synced
}

/// Synchronizes every aggregate's snapshot with `desirable`.
///
/// One output per input, in input order. Aggregates that embed no copy of
/// the entity come back structurally equal to their input.
#[must_use]
pub fn sync_snapshot<D, A>(desirable: &D, aggregates: &[A]) -> Vec<A>
where
    D: Dimension,
    A: SnapshotBearing,
{
    aggregates
        .iter()
        .map(|aggregate| {
            let mut synced: A = aggregate.clone();
            sync_in_place(desirable, synced.snapshot_mut());
            synced
        })
        .collect()
}
