//! # Default Filter State Configuration
//!
//! Composition-time configuration: a per-identity default state override
//! plus one global fallback. Read once at handle construction; a filter
//! never toggled in a context derives its effective state from here.

use super::identity::FilterIdentity;
use super::state::DataFilterState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configured default states for all filters.
///
/// Built and mutated only at the composition root, then frozen behind an
/// `Arc` for the life of the process. The global default is `true`: filters
/// apply unless something says otherwise.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataFilterOptions {
    default_states: HashMap<FilterIdentity, DataFilterState>,
    default_filter_state: bool,
}

impl Default for DataFilterOptions {
    fn default() -> Self {
        Self {
            default_states: HashMap::new(),
            default_filter_state: true,
        }
    }
}

impl DataFilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the global fallback applied to filters without an override.
    pub fn with_default_filter_state(mut self, enabled: bool) -> Self {
        self.default_filter_state = enabled;
        self
    }

    /// Override the default state of one filter identity.
    pub fn with_default_state(
        mut self,
        identity: FilterIdentity,
        state: DataFilterState,
    ) -> Self {
        self.set_default_state(identity, state);
        self
    }

    /// Composition-time mutator counterpart of [`Self::with_default_state`].
    pub fn set_default_state(&mut self, identity: FilterIdentity, state: DataFilterState) {
        self.default_states.insert(identity, state);
    }

    /// The global fallback.
    pub fn default_filter_state(&self) -> bool {
        self.default_filter_state
    }

    /// The configured per-identity overrides.
    pub fn default_states(&self) -> &HashMap<FilterIdentity, DataFilterState> {
        &self.default_states
    }

    /// State a slot is lazily initialized with: the per-identity override's
    /// enabled bit, else the global fallback. Always inactive; configuration
    /// never puts a context inside a toggle scope.
    pub fn initial_state_of(&self, identity: &FilterIdentity) -> DataFilterState {
        let enabled = self
            .default_states
            .get(identity)
            .map_or(self.default_filter_state, |state| state.is_enabled);
        DataFilterState::new(enabled)
    }
}
