//! # Filter Identity
//!
//! The comparable key that names one filter "kind".
//!
//! An identity is either a bare filter kind (`SoftDelete`) or a kind scoped
//! to a single entity type (`SoftDelete<Order>`). The two hash and compare
//! as distinct keys: toggling `SoftDelete<Order>` never touches the state of
//! the unparameterized `SoftDelete` filter, and vice versa.
//!
//! Compile-time callers go through the [`FilterKind`] / [`Entity`] marker
//! traits; runtime callers build a [`crate::FilterDescriptor`] and validate
//! it into a `FilterIdentity`.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// Key identifying one filter kind, optionally scoped to an entity type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterIdentity {
    /// Unparameterized filter kind, e.g. `SoftDelete`.
    Kind(Cow<'static, str>),
    /// Filter kind scoped to one entity type, e.g. `SoftDelete<Order>`.
    ForEntity {
        kind: Cow<'static, str>,
        entity: Cow<'static, str>,
    },
}

impl FilterIdentity {
    /// Identity of an unparameterized filter kind.
    pub fn kind(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Kind(name.into())
    }

    /// Identity of a filter kind scoped to a single entity type.
    pub fn for_entity(
        kind: impl Into<Cow<'static, str>>,
        entity: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::ForEntity {
            kind: kind.into(),
            entity: entity.into(),
        }
    }

    /// Name of the filter kind, without any entity scope.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Kind(kind) => kind,
            Self::ForEntity { kind, .. } => kind,
        }
    }

    /// Name of the entity scope, if any.
    pub fn entity_name(&self) -> Option<&str> {
        match self {
            Self::Kind(_) => None,
            Self::ForEntity { entity, .. } => Some(entity.as_ref()),
        }
    }
}

impl fmt::Display for FilterIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "{kind}"),
            Self::ForEntity { kind, entity } => write!(f, "{kind}<{entity}>"),
        }
    }
}

/// Compile-time marker for a filter kind.
///
/// Implementors are zero-sized marker types; they carry no behavior, only a
/// stable name the identity is derived from.
pub trait FilterKind: 'static {
    /// Stable name of this filter kind.
    const NAME: &'static str;

    /// Identity used to key registry entries and context slots.
    fn identity() -> FilterIdentity {
        FilterIdentity::kind(Self::NAME)
    }
}

/// Compile-time marker for an entity type a filter can be scoped to.
pub trait Entity: 'static {
    /// Stable name of the entity type.
    const NAME: &'static str;
}

/// A filter kind narrowed to a single entity type.
///
/// `ForEntity<SoftDelete, Order>` is the typed spelling of
/// `SoftDelete<Order>`: an independent toggle that does not share state with
/// the unparameterized `SoftDelete` filter.
pub struct ForEntity<F, E>(PhantomData<fn() -> (F, E)>);

impl<F: FilterKind, E: Entity> FilterKind for ForEntity<F, E> {
    const NAME: &'static str = F::NAME;

    fn identity() -> FilterIdentity {
        FilterIdentity::for_entity(F::NAME, E::NAME)
    }
}
