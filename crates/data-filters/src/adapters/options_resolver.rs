//! # Options-Backed Resolver
//!
//! The default [`FilterResolver`]: every well-formed identity gets a handle
//! wired to the shared [`DataFilterOptions`]. Deployments with a DI
//! container substitute their own resolver at the composition root.

use crate::domain::errors::FilterError;
use crate::domain::handle::FilterHandle;
use crate::domain::identity::FilterIdentity;
use crate::domain::options::DataFilterOptions;
use crate::ports::resolver::FilterResolver;
use std::sync::Arc;

/// Resolver constructing handles directly from the configured options.
#[derive(Debug)]
pub struct OptionsResolver {
    options: Arc<DataFilterOptions>,
}

impl OptionsResolver {
    pub fn new(options: Arc<DataFilterOptions>) -> Self {
        Self { options }
    }
}

impl FilterResolver for OptionsResolver {
    fn resolve(&self, identity: &FilterIdentity) -> Result<Arc<FilterHandle>, FilterError> {
        Ok(Arc::new(FilterHandle::new(
            identity.clone(),
            Arc::clone(&self.options),
        )))
    }
}
