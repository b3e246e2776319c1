//! # Filter Toggle State
//!
//! The boolean pair every filter slot carries.
//!
//! `is_enabled` is the effective toggle value the query layer reads.
//! `is_active` distinguishes "explicitly toggled somewhere in this logical
//! operation" from "derived from configured defaults". A slot that was only
//! lazily initialized from defaults is never active.

use serde::{Deserialize, Serialize};

/// Toggle state for one filter within one logical execution context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFilterState {
    /// Effective toggle value. The surrounding query layer applies the
    /// filter predicate iff this is true.
    pub is_enabled: bool,
    /// True iff the current context (or an ancestor it forked from) is
    /// inside an `enable`/`disable` scope for this filter.
    pub is_active: bool,
}

impl DataFilterState {
    /// An inactive state, as produced by lazy initialization from defaults.
    pub fn new(is_enabled: bool) -> Self {
        Self {
            is_enabled,
            is_active: false,
        }
    }

    /// An active state, as produced by entering an enable/disable scope.
    pub fn active(is_enabled: bool) -> Self {
        Self {
            is_enabled,
            is_active: true,
        }
    }
}

impl Default for DataFilterState {
    fn default() -> Self {
        Self::new(true)
    }
}
