//! # Data Filter Facade
//!
//! The aggregate entry point the surrounding system talks to: typed and
//! dynamic toggle/query operations layered over the registry, the resolver
//! seam and the configured defaults.
//!
//! One `DataFilter` is constructed at the composition root and shared
//! (`Arc`) with every consumer; per-operation state lives in the
//! [`FilterContext`] each call receives.

use crate::adapters::options_resolver::OptionsResolver;
use crate::domain::descriptor::FilterDescriptor;
use crate::domain::errors::FilterError;
use crate::domain::guard::FilterGuard;
use crate::domain::handle::FilterHandle;
use crate::domain::identity::{FilterIdentity, FilterKind};
use crate::domain::options::DataFilterOptions;
use crate::domain::scoped::FilterContext;
use crate::domain::state::DataFilterState;
use crate::ports::resolver::FilterResolver;
use crate::registry::FilterRegistry;
use std::collections::HashMap;
use std::sync::Arc;

/// Aggregate filter-state manager.
pub struct DataFilter {
    registry: FilterRegistry,
    options: Arc<DataFilterOptions>,
    resolver: Arc<dyn FilterResolver>,
}

impl DataFilter {
    /// Facade with the default options-backed resolver.
    pub fn new(options: DataFilterOptions) -> Self {
        let options = Arc::new(options);
        let resolver = Arc::new(OptionsResolver::new(Arc::clone(&options)));
        Self {
            registry: FilterRegistry::new(),
            options,
            resolver,
        }
    }

    /// Facade with a caller-supplied resolver (e.g. a DI container shim).
    pub fn with_resolver(options: DataFilterOptions, resolver: Arc<dyn FilterResolver>) -> Self {
        Self {
            registry: FilterRegistry::new(),
            options: Arc::new(options),
            resolver,
        }
    }

    // ---- statically-typed path -------------------------------------------

    /// Force filter `F` on for the extent of the returned guard.
    pub fn enable<F: FilterKind>(&self, ctx: &FilterContext) -> Result<FilterGuard, FilterError> {
        Ok(self.get_or_add::<F>()?.enable(ctx))
    }

    /// Force filter `F` off for the extent of the returned guard.
    pub fn disable<F: FilterKind>(&self, ctx: &FilterContext) -> Result<FilterGuard, FilterError> {
        Ok(self.get_or_add::<F>()?.disable(ctx))
    }

    /// Effective toggle value of `F` in `ctx`; memoizes the handle.
    pub fn is_enabled<F: FilterKind>(&self, ctx: &FilterContext) -> Result<bool, FilterError> {
        Ok(self.filter(&F::identity(), true)?.is_enabled(ctx))
    }

    /// Like [`Self::is_enabled`] but without memoizing the handle into
    /// [`Self::read_only_filters`]. For diagnostics that must not perturb
    /// the cache.
    pub fn is_enabled_uncached<F: FilterKind>(
        &self,
        ctx: &FilterContext,
    ) -> Result<bool, FilterError> {
        Ok(self.filter(&F::identity(), false)?.is_enabled(ctx))
    }

    /// True iff `ctx` is inside an enable/disable scope for `F`.
    pub fn is_active<F: FilterKind>(&self, ctx: &FilterContext) -> bool {
        ctx.state_of(&F::identity())
            .is_some_and(|state| state.is_active)
    }

    /// Memoized handle for `F`, constructing it on first access.
    pub fn get_or_add<F: FilterKind>(&self) -> Result<Arc<FilterHandle>, FilterError> {
        self.filter(&F::identity(), true)
    }

    // ---- dynamic (identity-by-value) path --------------------------------

    /// Dynamic counterpart of [`Self::enable`]. Validates eagerly: a
    /// malformed descriptor is rejected before any state is touched.
    pub fn enable_dyn(
        &self,
        descriptor: &FilterDescriptor,
        ctx: &FilterContext,
    ) -> Result<FilterGuard, FilterError> {
        let identity = descriptor.validate()?;
        Ok(self.filter(&identity, true)?.enable(ctx))
    }

    /// Dynamic counterpart of [`Self::disable`].
    pub fn disable_dyn(
        &self,
        descriptor: &FilterDescriptor,
        ctx: &FilterContext,
    ) -> Result<FilterGuard, FilterError> {
        let identity = descriptor.validate()?;
        Ok(self.filter(&identity, true)?.disable(ctx))
    }

    /// Dynamic counterpart of [`Self::is_enabled`].
    ///
    /// Rejects malformed descriptors with
    /// [`FilterError::InvalidFilterIdentity`] rather than defaulting.
    pub fn is_enabled_dyn(
        &self,
        descriptor: &FilterDescriptor,
        ctx: &FilterContext,
    ) -> Result<bool, FilterError> {
        let identity = descriptor.validate()?;
        Ok(self.filter(&identity, true)?.is_enabled(ctx))
    }

    /// Dynamic counterpart of [`Self::is_enabled_uncached`].
    pub fn is_enabled_dyn_uncached(
        &self,
        descriptor: &FilterDescriptor,
        ctx: &FilterContext,
    ) -> Result<bool, FilterError> {
        let identity = descriptor.validate()?;
        Ok(self.filter(&identity, false)?.is_enabled(ctx))
    }

    /// Dynamic counterpart of [`Self::is_active`].
    pub fn is_active_dyn(
        &self,
        descriptor: &FilterDescriptor,
        ctx: &FilterContext,
    ) -> Result<bool, FilterError> {
        let identity = descriptor.validate()?;
        Ok(ctx
            .state_of(&identity)
            .is_some_and(|state| state.is_active))
    }

    /// Dynamic counterpart of [`Self::get_or_add`].
    pub fn get_or_add_dyn(
        &self,
        descriptor: &FilterDescriptor,
    ) -> Result<Arc<FilterHandle>, FilterError> {
        let identity = descriptor.validate()?;
        self.filter(&identity, true)
    }

    // ---- diagnostics -----------------------------------------------------

    /// Snapshot of the handles resolved so far. Diagnostic, not
    /// authoritative: uncached reads never show up here.
    pub fn read_only_filters(&self) -> HashMap<FilterIdentity, Arc<FilterHandle>> {
        self.registry.snapshot()
    }

    /// The configured per-identity default states.
    pub fn default_filter_states(&self) -> &HashMap<FilterIdentity, DataFilterState> {
        self.options.default_states()
    }

    /// The configuration this facade was composed with.
    pub fn options(&self) -> &DataFilterOptions {
        &self.options
    }

    fn filter(
        &self,
        identity: &FilterIdentity,
        cache_result: bool,
    ) -> Result<Arc<FilterHandle>, FilterError> {
        if cache_result {
            self.registry
                .get_or_create(identity, || self.resolver.resolve(identity))
        } else {
            match self.registry.get(identity) {
                Some(handle) => Ok(handle),
                None => self.resolver.resolve(identity),
            }
        }
    }
}
