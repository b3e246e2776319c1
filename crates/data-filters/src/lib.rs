//! # data-filters
//!
//! Scoped, fork-isolated toggle state for named data filters.
//!
//! ## Role in System
//!
//! - **Toggle machinery only**: registers, scopes and queries named boolean
//!   filters (soft-delete visibility, multi-tenant isolation, ...); the
//!   query layer decides what a filter predicate actually does.
//! - **Fork isolation**: a concurrent sub-operation inherits its parent's
//!   filter state at fork time and can never write back into the parent or
//!   into sibling forks.
//! - **Composition-root owned**: one explicitly constructed [`DataFilter`]
//!   is shared with consumers; there is no hidden process-wide singleton.
//!
//! ## Flow
//!
//! ```text
//! [DataFilter] ──get_or_create──→ [FilterRegistry] ──resolve──→ [FilterHandle]
//!                                                                    │
//!                              [DataFilterOptions] ──defaults──→ [ScopedState]
//!                                                              (per FilterContext)
//! ```
//!
//! ## Example
//!
//! ```
//! use data_filters::{DataFilter, DataFilterOptions, FilterContext, SoftDelete};
//!
//! let filter = DataFilter::new(DataFilterOptions::default());
//! let ctx = FilterContext::new();
//!
//! // Filters apply by default.
//! assert!(filter.is_enabled::<SoftDelete>(&ctx)?);
//!
//! {
//!     let _guard = filter.disable::<SoftDelete>(&ctx)?;
//!     assert!(!filter.is_enabled::<SoftDelete>(&ctx)?);
//!
//!     // A spawned sub-operation gets a snapshot; its toggles stay its own.
//!     let child = ctx.fork();
//!     let inner = filter.enable::<SoftDelete>(&child)?;
//!     assert!(filter.is_enabled::<SoftDelete>(&child)?);
//!     drop(inner);
//!     drop(child);
//!
//!     assert!(!filter.is_enabled::<SoftDelete>(&ctx)?);
//! }
//!
//! assert!(filter.is_enabled::<SoftDelete>(&ctx)?);
//! # Ok::<(), data_filters::FilterError>(())
//! ```

pub mod adapters;
pub mod domain;
pub mod facade;
pub mod ports;
pub mod registry;

pub use adapters::OptionsResolver;
pub use domain::{
    DataFilterOptions, DataFilterState, Entity, FilterContext, FilterDescriptor, FilterError,
    FilterGuard, FilterHandle, FilterIdentity, FilterKind, ForEntity, MultiTenant, ScopedState,
    SoftDelete, TypeArg,
};
pub use facade::DataFilter;
pub use ports::FilterResolver;
pub use registry::FilterRegistry;
