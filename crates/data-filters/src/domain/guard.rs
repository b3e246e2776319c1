//! # Scope Guards
//!
//! The RAII object returned by `enable`/`disable`. Restores the captured
//! slot snapshot exactly once, on drop or on explicit release, on every
//! exit path including unwinding.

use super::identity::FilterIdentity;
use super::scoped::ScopedState;
use super::state::DataFilterState;
use std::sync::Arc;
use tracing::trace;

/// Scoped acquisition of a filter toggle.
///
/// Holds the slot of the context the toggle was made in plus the slot
/// content captured just before the toggle. Release writes the snapshot
/// back; a guard created for an already-satisfied toggle is a no-op whose
/// release touches nothing.
///
/// Release is exactly-once and may happen from a different logical context
/// than the one that created the guard (an abandoned operation's guard
/// dropped by its parent): the guard restores the originating context's
/// slot, whose internal lock makes that safe.
#[must_use = "dropping the guard immediately reverts the toggle"]
#[derive(Debug)]
pub struct FilterGuard {
    inner: Option<GuardInner>,
}

#[derive(Debug)]
struct GuardInner {
    identity: FilterIdentity,
    slot: Arc<ScopedState>,
    snapshot: Option<DataFilterState>,
}

impl FilterGuard {
    /// Guard for a toggle that was already satisfied. Release does nothing.
    pub fn noop() -> Self {
        Self { inner: None }
    }

    pub(crate) fn restoring(
        identity: FilterIdentity,
        slot: Arc<ScopedState>,
        snapshot: Option<DataFilterState>,
    ) -> Self {
        Self {
            inner: Some(GuardInner {
                identity,
                slot,
                snapshot,
            }),
        }
    }

    /// Whether release will restore anything.
    pub fn is_noop(&self) -> bool {
        self.inner.is_none()
    }

    /// Release eagerly instead of at end of scope.
    pub fn release(mut self) {
        self.restore_once();
    }

    fn restore_once(&mut self) {
        if let Some(inner) = self.inner.take() {
            inner.slot.restore(inner.snapshot);
            trace!(filter = %inner.identity, "left filter toggle scope");
        }
    }
}

impl Drop for FilterGuard {
    fn drop(&mut self) {
        self.restore_once();
    }
}
