use super::identity::FilterIdentity;
use thiserror::Error;

/// Errors surfaced by the data-filter subsystem.
///
/// Both variants are caller-facing bugs or misconfiguration; nothing here is
/// transient or worth retrying.
#[derive(Debug, Clone, Error)]
pub enum FilterError {
    /// A runtime-supplied filter descriptor does not name a usable filter.
    #[error("Invalid filter identity '{descriptor}': {reason}")]
    InvalidFilterIdentity { descriptor: String, reason: String },

    /// The resolver could not produce a handle for a well-formed identity.
    #[error("Failed to resolve filter handle for '{identity}': {reason}")]
    ResolutionFailed {
        identity: FilterIdentity,
        reason: String,
    },
}
