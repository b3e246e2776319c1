//! # Filter Resolver Port
//!
//! Seam towards whatever owns handle construction (a service locator, a DI
//! container, a hand-rolled composition root). The registry calls through
//! this exactly once per identity.

use crate::domain::errors::FilterError;
use crate::domain::handle::FilterHandle;
use crate::domain::identity::FilterIdentity;
use std::sync::Arc;

/// Produces a fresh [`FilterHandle`] for a well-formed identity.
///
/// Failure means misconfiguration (e.g. an identity the composition root
/// never wired up) and is fatal to the calling operation; nothing here is
/// retried and a failed resolution inserts nothing into the registry.
pub trait FilterResolver: Send + Sync {
    fn resolve(&self, identity: &FilterIdentity) -> Result<Arc<FilterHandle>, FilterError>;
}
