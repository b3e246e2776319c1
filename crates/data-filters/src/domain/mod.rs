//! Domain model: identities, toggle state, scoped contexts, guards, handles.

pub mod descriptor;
pub mod errors;
pub mod guard;
pub mod handle;
pub mod identity;
pub mod markers;
pub mod options;
pub mod scoped;
pub mod state;

pub use descriptor::{FilterDescriptor, TypeArg};
pub use errors::FilterError;
pub use guard::FilterGuard;
pub use handle::FilterHandle;
pub use identity::{Entity, FilterIdentity, FilterKind, ForEntity};
pub use markers::{MultiTenant, SoftDelete};
pub use options::DataFilterOptions;
pub use scoped::{FilterContext, ScopedState};
pub use state::DataFilterState;
