//! # Filter Handle
//!
//! Per-identity toggle object: the state machine between "never touched",
//! "inside an enable scope" and "inside a disable scope".
//!
//! ## Toggle Semantics
//!
//! - A read (`is_enabled`) lazily initializes the context slot from the
//!   configured defaults, inactive.
//! - A toggle that is already satisfied returns a no-op guard and leaves
//!   `is_active` alone.
//! - An effective toggle snapshots the prior slot content and writes the
//!   target bit with `is_active = true`. Releasing the guard writes the
//!   snapshot back: for a nested toggle that restores only the effective
//!   bit (the snapshot is itself active), for a first toggle it fully
//!   reverts the slot to its pre-call inactive or untouched content.

use super::guard::FilterGuard;
use super::identity::FilterIdentity;
use super::options::DataFilterOptions;
use super::scoped::FilterContext;
use super::state::DataFilterState;
use std::sync::Arc;
use tracing::trace;

/// Toggle handle for one filter identity.
///
/// Constructed at most once per identity by the registry; stateless apart
/// from the identity and the configuration captured at construction. All
/// per-operation state lives in the [`FilterContext`] passed to each call.
#[derive(Debug)]
pub struct FilterHandle {
    identity: FilterIdentity,
    options: Arc<DataFilterOptions>,
}

impl FilterHandle {
    pub fn new(identity: FilterIdentity, options: Arc<DataFilterOptions>) -> Self {
        Self { identity, options }
    }

    /// Identity this handle toggles.
    pub fn identity(&self) -> &FilterIdentity {
        &self.identity
    }

    /// Effective toggle value in `ctx`.
    ///
    /// Initializes the slot from the configured defaults if the filter was
    /// never touched along this context's ancestry chain.
    pub fn is_enabled(&self, ctx: &FilterContext) -> bool {
        let slot = ctx.slot(&self.identity);
        if let Some(state) = slot.read() {
            return state.is_enabled;
        }
        let initial = self.options.initial_state_of(&self.identity);
        slot.write(initial);
        initial.is_enabled
    }

    /// True iff `ctx` is inside an enable/disable scope for this filter.
    pub fn is_active(&self, ctx: &FilterContext) -> bool {
        ctx.state_of(&self.identity)
            .is_some_and(|state| state.is_active)
    }

    /// Force the filter on for the extent of the returned guard.
    pub fn enable(&self, ctx: &FilterContext) -> FilterGuard {
        self.toggle(ctx, true)
    }

    /// Force the filter off for the extent of the returned guard.
    pub fn disable(&self, ctx: &FilterContext) -> FilterGuard {
        self.toggle(ctx, false)
    }

    fn toggle(&self, ctx: &FilterContext, target: bool) -> FilterGuard {
        let slot = ctx.slot(&self.identity);
        let snapshot = slot.read();
        let effective = snapshot.map_or_else(
            || self.options.initial_state_of(&self.identity).is_enabled,
            |state| state.is_enabled,
        );

        if effective == target {
            return FilterGuard::noop();
        }

        slot.write(DataFilterState::active(target));
        trace!(filter = %self.identity, enabled = target, "entered filter toggle scope");
        FilterGuard::restoring(self.identity.clone(), slot, snapshot)
    }
}
