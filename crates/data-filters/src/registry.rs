//! # Filter Registry
//!
//! Concurrent get-or-create cache of filter handles.
//!
//! ## Invariant
//!
//! At most one factory invocation per identity, even under concurrent first
//! access from arbitrarily many threads; every caller receives the same
//! `Arc`. Entries are never removed for the life of the process.
//!
//! The fast path is a shared read-lock lookup. On a miss the write lock is
//! taken and the lookup repeated before invoking the factory, so two racing
//! first-touch callers serialize on construction and the loser reuses the
//! winner's handle. A factory error inserts nothing.

use crate::domain::errors::FilterError;
use crate::domain::handle::FilterHandle;
use crate::domain::identity::FilterIdentity;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Append-only, identity-keyed cache of filter handles.
#[derive(Debug, Default)]
pub struct FilterRegistry {
    handles: RwLock<HashMap<FilterIdentity, Arc<FilterHandle>>>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Already-registered handle for `identity`, without any side effect.
    pub fn get(&self, identity: &FilterIdentity) -> Option<Arc<FilterHandle>> {
        self.handles.read().get(identity).cloned()
    }

    /// Handle for `identity`, constructing it via `factory` on first access.
    pub fn get_or_create<F>(
        &self,
        identity: &FilterIdentity,
        factory: F,
    ) -> Result<Arc<FilterHandle>, FilterError>
    where
        F: FnOnce() -> Result<Arc<FilterHandle>, FilterError>,
    {
        if let Some(handle) = self.handles.read().get(identity) {
            return Ok(Arc::clone(handle));
        }

        let mut handles = self.handles.write();
        if let Some(handle) = handles.get(identity) {
            return Ok(Arc::clone(handle));
        }

        let handle = factory()?;
        handles.insert(identity.clone(), Arc::clone(&handle));
        debug!(filter = %identity, "registered filter handle");
        Ok(handle)
    }

    /// Point-in-time copy of the registry, for diagnostics.
    pub fn snapshot(&self) -> HashMap<FilterIdentity, Arc<FilterHandle>> {
        self.handles.read().clone()
    }

    /// Number of registered handles.
    pub fn len(&self) -> usize {
        self.handles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.read().is_empty()
    }
}
