//! # Runtime Filter Descriptors
//!
//! The identity-by-value entry path for callers that only learn the filter
//! kind at runtime (admin tooling, generic query middleware).
//!
//! ## Problem
//!
//! The typed path ([`FilterKind`](super::identity::FilterKind)) cannot be
//! malformed. A runtime-built description can: it may name nothing at all,
//! name an entity type instead of a filter marker, carry more than one type
//! argument, or nest a parameterized argument inside another. Each of those
//! shapes must be rejected before any registry or context state is touched.
//!
//! ## Solution
//!
//! [`FilterDescriptor`] is a closed, unvalidated shape that can represent
//! every malformed case. [`FilterDescriptor::validate`] is the single
//! checkpoint turning it into a canonical [`FilterIdentity`]; every dynamic
//! facade operation validates first and mutates nothing on rejection.

use super::errors::FilterError;
use super::identity::{FilterIdentity, FilterKind};
use std::borrow::Cow;
use std::fmt;
use tracing::warn;

/// One type argument attached to a filter descriptor.
#[derive(Clone, Debug)]
pub struct TypeArg {
    name: Cow<'static, str>,
    /// True iff the argument itself carries type arguments
    /// (e.g. `SoftDelete<SoftDelete<Order>>`).
    parameterized: bool,
}

impl TypeArg {
    /// A concrete entity type argument, e.g. `Order`.
    pub fn entity(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            parameterized: false,
        }
    }

    /// An argument that is itself generic. Always rejected by validation.
    pub fn parameterized(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            parameterized: true,
        }
    }

    /// Argument type name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Unvalidated, runtime-built description of a filter identity.
#[derive(Clone, Debug, Default)]
pub struct FilterDescriptor {
    base: Option<Cow<'static, str>>,
    /// Whether `base` names a filter marker, as opposed to an arbitrary
    /// (entity) type handed in by mistake.
    is_marker: bool,
    args: Vec<TypeArg>,
}

impl FilterDescriptor {
    /// The absent descriptor. Models a caller passing no identity at all.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Descriptor naming an unparameterized filter marker, e.g. `SoftDelete`.
    pub fn marker(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            base: Some(name.into()),
            is_marker: true,
            args: Vec::new(),
        }
    }

    /// Descriptor naming a plain (non-marker) type.
    ///
    /// Valid only once an entity argument is attached to a marker; on its
    /// own this is the "passed a concrete entity where a filter was
    /// expected" mistake and validation rejects it.
    pub fn entity_type(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            base: Some(name.into()),
            is_marker: false,
            args: Vec::new(),
        }
    }

    /// Descriptor for a compile-time filter kind. Always validates cleanly.
    pub fn of<F: FilterKind>() -> Self {
        match F::identity() {
            FilterIdentity::Kind(kind) => Self::marker(kind),
            FilterIdentity::ForEntity { kind, entity } => {
                Self::marker(kind).with_arg(TypeArg::entity(entity))
            }
        }
    }

    /// Attach a type argument.
    pub fn with_arg(mut self, arg: TypeArg) -> Self {
        self.args.push(arg);
        self
    }

    /// Validate into a canonical identity.
    ///
    /// Rejects, in order: an absent base name; more than one type argument;
    /// a bare base that is not a filter marker; a single argument that is
    /// itself parameterized. Rejection has no side effects.
    pub fn validate(&self) -> Result<FilterIdentity, FilterError> {
        let Some(base) = self.base.as_ref() else {
            return Err(self.reject("no filter kind was named"));
        };

        if self.args.len() > 1 {
            return Err(self.reject("a filter takes at most one entity type argument"));
        }

        match self.args.first() {
            None if !self.is_marker => {
                Err(self.reject("the named type is not a filter marker"))
            }
            None => Ok(FilterIdentity::kind(base.clone())),
            Some(arg) if arg.parameterized => {
                Err(self.reject("the entity type argument must not itself be generic"))
            }
            Some(arg) => Ok(FilterIdentity::for_entity(base.clone(), arg.name.clone())),
        }
    }

    fn reject(&self, reason: &str) -> FilterError {
        warn!(descriptor = %self, reason, "rejected filter descriptor");
        FilterError::InvalidFilterIdentity {
            descriptor: self.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for FilterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.base {
            None => write!(f, "<absent>"),
            Some(base) => {
                write!(f, "{base}")?;
                if !self.args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in self.args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg.name)?;
                        if arg.parameterized {
                            write!(f, "<..>")?;
                        }
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
        }
    }
}
