//! # Registry Races
//!
//! Hard invariant: at most one handle construction per identity, no matter
//! how many threads race the first access, and every caller ends up holding
//! the same handle instance.

#[cfg(test)]
mod tests {
    use data_filters::{
        DataFilter, DataFilterOptions, FilterError, FilterHandle, FilterIdentity, FilterRegistry,
        FilterResolver, SoftDelete,
    };
    use data_filters::FilterKind;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};

    /// Resolver that counts how often it is asked to construct a handle.
    struct CountingResolver {
        options: Arc<DataFilterOptions>,
        calls: AtomicUsize,
    }

    impl CountingResolver {
        fn new() -> Self {
            Self {
                options: Arc::new(DataFilterOptions::default()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl FilterResolver for CountingResolver {
        fn resolve(
            &self,
            identity: &FilterIdentity,
        ) -> Result<Arc<FilterHandle>, FilterError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(FilterHandle::new(
                identity.clone(),
                Arc::clone(&self.options),
            )))
        }
    }

    #[test]
    fn test_concurrent_first_access_constructs_once() {
        const THREADS: usize = 16;

        let registry = Arc::new(FilterRegistry::new());
        let resolver = Arc::new(CountingResolver::new());
        let barrier = Arc::new(Barrier::new(THREADS));
        let identity = SoftDelete::identity();

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let resolver = Arc::clone(&resolver);
                let barrier = Arc::clone(&barrier);
                let identity = identity.clone();
                std::thread::spawn(move || {
                    barrier.wait();
                    registry
                        .get_or_create(&identity, || resolver.resolve(&identity))
                        .unwrap()
                })
            })
            .collect();

        let resolved: Vec<_> = handles.into_iter().map(|t| t.join().unwrap()).collect();

        assert_eq!(resolver.calls(), 1);
        assert_eq!(registry.len(), 1);
        for handle in &resolved[1..] {
            assert!(Arc::ptr_eq(&resolved[0], handle));
        }
    }

    #[test]
    fn test_facade_races_share_one_handle_per_identity() {
        const THREADS: usize = 8;

        let resolver = Arc::new(CountingResolver::new());
        let filter = Arc::new(DataFilter::with_resolver(
            DataFilterOptions::default(),
            Arc::clone(&resolver) as Arc<dyn FilterResolver>,
        ));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let filter = Arc::clone(&filter);
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    filter.get_or_add::<SoftDelete>().unwrap()
                })
            })
            .collect();

        let resolved: Vec<_> = handles.into_iter().map(|t| t.join().unwrap()).collect();

        assert_eq!(resolver.calls(), 1);
        for handle in &resolved[1..] {
            assert!(Arc::ptr_eq(&resolved[0], handle));
        }
    }

    #[test]
    fn test_uncached_access_never_registers() {
        let resolver = Arc::new(CountingResolver::new());
        let filter = DataFilter::with_resolver(
            DataFilterOptions::default(),
            Arc::clone(&resolver) as Arc<dyn FilterResolver>,
        );
        let ctx = data_filters::FilterContext::new();

        assert!(filter.is_enabled_uncached::<SoftDelete>(&ctx).unwrap());
        assert!(filter.is_enabled_uncached::<SoftDelete>(&ctx).unwrap());

        // Each uncached miss resolves afresh and memoizes nothing.
        assert_eq!(resolver.calls(), 2);
        assert!(filter.read_only_filters().is_empty());
    }

    #[test]
    fn test_uncached_access_reuses_cached_handle_when_present() {
        let resolver = Arc::new(CountingResolver::new());
        let filter = DataFilter::with_resolver(
            DataFilterOptions::default(),
            Arc::clone(&resolver) as Arc<dyn FilterResolver>,
        );
        let ctx = data_filters::FilterContext::new();

        let cached = filter.get_or_add::<SoftDelete>().unwrap();
        assert!(filter.is_enabled_uncached::<SoftDelete>(&ctx).unwrap());

        assert_eq!(resolver.calls(), 1);
        assert!(Arc::ptr_eq(
            &cached,
            &filter.read_only_filters()[&SoftDelete::identity()]
        ));
    }

    /// Resolver modelling a composition root that never wired the filter up.
    struct FailingResolver;

    impl FilterResolver for FailingResolver {
        fn resolve(
            &self,
            identity: &FilterIdentity,
        ) -> Result<Arc<FilterHandle>, FilterError> {
            Err(FilterError::ResolutionFailed {
                identity: identity.clone(),
                reason: "filter not wired at composition root".to_string(),
            })
        }
    }

    #[test]
    fn test_resolution_failure_propagates_and_inserts_nothing() {
        let filter =
            DataFilter::with_resolver(DataFilterOptions::default(), Arc::new(FailingResolver));
        let ctx = data_filters::FilterContext::new();

        let err = filter.is_enabled::<SoftDelete>(&ctx).unwrap_err();
        assert!(matches!(err, FilterError::ResolutionFailed { .. }));
        assert!(filter.read_only_filters().is_empty());
    }
}
