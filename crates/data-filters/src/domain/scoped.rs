//! # Scoped Filter State
//!
//! The fork-isolated container filter toggles live in.
//!
//! ## Problem
//!
//! A request-scoped override ("show soft-deleted rows for this admin
//! action") must follow the logical operation it belongs to, including into
//! concurrent sub-operations, without ever leaking back out. A toggle made
//! inside a spawned worker that survived the worker's completion would
//! silently corrupt query results of unrelated concurrent requests.
//!
//! ## Solution
//!
//! A [`FilterContext`] is owned by exactly one logical execution context and
//! threaded explicitly through calls. Spawning a concurrent sub-operation
//! goes through [`FilterContext::fork`], which deep-copies every slot's
//! current value into a physically disjoint context. The child sees the
//! parent's state as of the fork; writes on either side touch only that
//! side's slots, so write-back is not even representable. Joining the child
//! is a no-op for filter state.
//!
//! Slots carry a mutex for interior mutability, but by construction no two
//! logical contexts share a slot, so the lock is never contended; it exists
//! so a scope guard can be released from a context other than the one that
//! created it (abandonment) without a data race.

use super::identity::FilterIdentity;
use super::state::DataFilterState;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

/// One filter's state slot within one logical execution context.
///
/// `None` means the filter was never read or toggled along this context's
/// ancestry chain. Absence is not "disabled": it means "derive from the
/// configured defaults on first read".
#[derive(Debug, Default)]
pub struct ScopedState {
    value: Mutex<Option<DataFilterState>>,
}

impl ScopedState {
    /// An unset slot.
    pub fn unset() -> Self {
        Self::default()
    }

    /// The value visible in the owning context, if any was ever set.
    pub fn read(&self) -> Option<DataFilterState> {
        *self.value.lock()
    }

    /// Replace the value visible to the owning context and its future forks.
    pub fn write(&self, state: DataFilterState) {
        *self.value.lock() = Some(state);
    }

    /// Write back a previously captured snapshot, clearing the slot when the
    /// snapshot predates any value.
    pub fn restore(&self, snapshot: Option<DataFilterState>) {
        *self.value.lock() = snapshot;
    }

    /// Disjoint copy carrying the current value, for [`FilterContext::fork`].
    fn fork(&self) -> Self {
        Self {
            value: Mutex::new(*self.value.lock()),
        }
    }
}

/// Filter state view of one logical execution context.
///
/// Create one per logical operation (request, job, test) at its entry point
/// and pass it along; [`fork`](Self::fork) it into anything spawned
/// concurrently. Dropping a context drops every override made within it.
#[derive(Debug, Default)]
pub struct FilterContext {
    slots: RwLock<HashMap<FilterIdentity, Arc<ScopedState>>>,
}

impl FilterContext {
    /// A fresh context with no filter touched yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot this context into a child for a concurrent sub-operation.
    ///
    /// The child observes every filter value as of this call. Writes in the
    /// child stay in the child; writes in the parent after the fork stay in
    /// the parent. This is the single correctness-critical property of the
    /// subsystem.
    pub fn fork(&self) -> Self {
        let slots = self.slots.read();
        let forked = slots
            .iter()
            .map(|(identity, slot)| (identity.clone(), Arc::new(slot.fork())))
            .collect();
        Self {
            slots: RwLock::new(forked),
        }
    }

    /// Current state of a filter in this context, without creating a slot.
    pub fn state_of(&self, identity: &FilterIdentity) -> Option<DataFilterState> {
        self.slots.read().get(identity).and_then(|slot| slot.read())
    }

    /// Slot for `identity`, created unset on first access.
    pub(crate) fn slot(&self, identity: &FilterIdentity) -> Arc<ScopedState> {
        if let Some(slot) = self.slots.read().get(identity) {
            return Arc::clone(slot);
        }
        let mut slots = self.slots.write();
        Arc::clone(
            slots
                .entry(identity.clone())
                .or_insert_with(|| Arc::new(ScopedState::unset())),
        )
    }
}
