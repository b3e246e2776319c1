//! # Standard Filter Markers
//!
//! The two filter kinds every deployment of this mechanism ends up defining:
//! soft-delete visibility and multi-tenant isolation. They are identity
//! markers only; what the corresponding predicate looks like is the query
//! layer's business.

use super::identity::FilterKind;

/// Marker for the soft-delete filter.
///
/// When enabled, the query layer hides rows flagged as deleted. Disable it
/// for the extent of an operation that must see them:
///
/// ```
/// use data_filters::{DataFilter, DataFilterOptions, FilterContext, SoftDelete};
///
/// let filter = DataFilter::new(DataFilterOptions::default());
/// let ctx = FilterContext::new();
///
/// let _guard = filter.disable::<SoftDelete>(&ctx)?;
/// assert!(!filter.is_enabled::<SoftDelete>(&ctx)?);
/// # Ok::<(), data_filters::FilterError>(())
/// ```
pub struct SoftDelete;

impl FilterKind for SoftDelete {
    const NAME: &'static str = "SoftDelete";
}

/// Marker for the multi-tenant isolation filter.
///
/// When enabled, the query layer restricts rows to the current tenant.
pub struct MultiTenant;

impl FilterKind for MultiTenant {
    const NAME: &'static str = "MultiTenant";
}
