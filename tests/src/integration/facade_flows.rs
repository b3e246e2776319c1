//! # Facade Flows
//!
//! End-to-end scenarios against the [`DataFilter`] facade: configured
//! defaults, scoped toggles, nesting, the dynamic identity path and the
//! registry cache contract.

#[cfg(test)]
mod tests {
    use data_filters::{
        DataFilter, DataFilterOptions, DataFilterState, Entity, FilterContext, FilterDescriptor,
        FilterError, FilterKind, ForEntity, MultiTenant, SoftDelete, TypeArg,
    };
    use std::sync::Arc;

    struct Order;
    impl Entity for Order {
        const NAME: &'static str = "Order";
    }

    #[test]
    fn test_global_default_state_applies_to_untouched_filters() {
        let ctx = FilterContext::new();

        let enabled = DataFilter::new(DataFilterOptions::default());
        assert!(enabled.is_enabled::<SoftDelete>(&ctx).unwrap());

        let disabled =
            DataFilter::new(DataFilterOptions::new().with_default_filter_state(false));
        assert!(!disabled.is_enabled::<MultiTenant>(&ctx).unwrap());
    }

    #[test]
    fn test_per_filter_override_beats_global_default() {
        let options = DataFilterOptions::new()
            .with_default_state(MultiTenant::identity(), DataFilterState::new(false));
        let filter = DataFilter::new(options);
        let ctx = FilterContext::new();

        assert!(!filter.is_enabled::<MultiTenant>(&ctx).unwrap());
        assert!(filter.is_enabled::<SoftDelete>(&ctx).unwrap());
    }

    #[test]
    fn test_disable_scope_reverts_on_release() {
        let filter = DataFilter::new(DataFilterOptions::default());
        let ctx = FilterContext::new();

        assert!(filter.is_enabled::<SoftDelete>(&ctx).unwrap());
        {
            let _guard = filter.disable::<SoftDelete>(&ctx).unwrap();
            assert!(!filter.is_enabled::<SoftDelete>(&ctx).unwrap());
        }
        assert!(filter.is_enabled::<SoftDelete>(&ctx).unwrap());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_nested_filters_across_spawn() {
        let filter = Arc::new(DataFilter::new(DataFilterOptions::default()));
        let ctx = FilterContext::new();

        assert!(filter.is_enabled::<SoftDelete>(&ctx).unwrap());

        {
            let _outer = filter.disable::<SoftDelete>(&ctx).unwrap();

            let child = ctx.fork();
            let child_filter = Arc::clone(&filter);
            tokio::spawn(async move {
                let _inner = child_filter.enable::<SoftDelete>(&child).unwrap();
                assert!(child_filter.is_enabled::<SoftDelete>(&child).unwrap());
            })
            .await
            .unwrap();

            assert!(!filter.is_enabled::<SoftDelete>(&ctx).unwrap());
        }

        assert!(filter.is_enabled::<SoftDelete>(&ctx).unwrap());
    }

    #[test]
    fn test_entity_scoped_filter_is_independent() {
        let filter = DataFilter::new(DataFilterOptions::default());
        let ctx = FilterContext::new();

        assert!(filter
            .is_enabled_dyn(&FilterDescriptor::of::<SoftDelete>(), &ctx)
            .unwrap());

        {
            let _guard = filter
                .disable::<ForEntity<SoftDelete, Order>>(&ctx)
                .unwrap();
            assert!(!filter
                .is_enabled::<ForEntity<SoftDelete, Order>>(&ctx)
                .unwrap());
            // The unparameterized filter is a different key and stays on.
            assert!(filter.is_enabled::<SoftDelete>(&ctx).unwrap());
        }

        assert!(filter
            .is_enabled::<ForEntity<SoftDelete, Order>>(&ctx)
            .unwrap());
    }

    #[test]
    fn test_malformed_descriptors_are_rejected() {
        let filter = DataFilter::new(DataFilterOptions::default());
        let ctx = FilterContext::new();

        let malformed = [
            FilterDescriptor::absent(),
            FilterDescriptor::entity_type("Order"),
            FilterDescriptor::marker("SoftDelete")
                .with_arg(TypeArg::entity("Order"))
                .with_arg(TypeArg::entity("Invoice")),
            FilterDescriptor::marker("SoftDelete")
                .with_arg(TypeArg::parameterized("SoftDelete<Order>")),
        ];

        for descriptor in &malformed {
            let err = filter.is_enabled_dyn(descriptor, &ctx).unwrap_err();
            assert!(
                matches!(err, FilterError::InvalidFilterIdentity { .. }),
                "descriptor {descriptor} should be invalid"
            );
        }

        // Eager validation: nothing was resolved or memoized.
        assert!(filter.read_only_filters().is_empty());
    }

    #[test]
    fn test_cached_read_populates_read_only_filters() {
        let filter = DataFilter::new(DataFilterOptions::default());
        let ctx = FilterContext::new();

        assert!(!filter
            .read_only_filters()
            .contains_key(&SoftDelete::identity()));

        assert!(filter.is_enabled::<SoftDelete>(&ctx).unwrap());

        assert!(filter
            .read_only_filters()
            .contains_key(&SoftDelete::identity()));
    }

    #[test]
    fn test_uncached_read_bypasses_registry() {
        let filter = DataFilter::new(DataFilterOptions::default());
        let ctx = FilterContext::new();

        assert!(filter.is_enabled_uncached::<SoftDelete>(&ctx).unwrap());
        assert!(filter
            .is_enabled_dyn_uncached(&FilterDescriptor::of::<SoftDelete>(), &ctx)
            .unwrap());

        assert!(filter.read_only_filters().is_empty());
    }

    #[test]
    fn test_guard_release_is_explicit_and_final() {
        let filter = DataFilter::new(DataFilterOptions::default());
        let ctx = FilterContext::new();

        let guard = filter.disable::<SoftDelete>(&ctx).unwrap();
        assert!(!filter.is_enabled::<SoftDelete>(&ctx).unwrap());

        guard.release();
        assert!(filter.is_enabled::<SoftDelete>(&ctx).unwrap());
        assert!(!filter.is_active::<SoftDelete>(&ctx));
    }
}
