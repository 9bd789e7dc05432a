// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by the container and the algorithms.
//!
//! A restricted array is a row of slots. Each slot is either a value in
//! `MIN_VALUE..=MAX_VALUE` or the empty marker (`None`). The logical length is
//! the number of occupied slots before the first empty one.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Contiguity**: occupied slots form a prefix. Once a slot is empty, every
//!   later slot is empty too. `length` relies on this to stop at the first gap.
//!
//! - **Range**: every occupied slot holds a value in `[MIN_VALUE, MAX_VALUE]`.
//!   The algorithms never check this; the container's constructors do.
//!
//! Rather than trusting yourself to remember these, use `WellFormedArray` and
//! `SortedPrefix` from `verify`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer stored in an occupied slot.
pub type Value = u8;

/// One slot of the backing store. `None` is the empty marker.
pub type Slot = Option<Value>;

/// Smallest value a slot may hold.
pub const MIN_VALUE: Value = 1;

/// Largest value a slot may hold.
pub const MAX_VALUE: Value = 221;

/// Smallest capacity the random constructors pick.
pub const MIN_CAPACITY: usize = 1;

/// Largest capacity the random constructors pick.
pub const MAX_CAPACITY: usize = 20;

/// Check that a value lies in the declared range.
#[inline]
pub fn in_range(value: Value) -> bool {
    (MIN_VALUE..=MAX_VALUE).contains(&value)
}

// =============================================================================
// SEARCH OUTCOME
// =============================================================================

/// Result of a linear search.
///
/// Linear search on an empty prefix answers `Undetermined`, not `NotFound`:
/// no scan happened, so there is nothing to report. Binary search does not
/// share this third state and answers a plain `false` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The target occurs in the scanned prefix.
    Found,
    /// The whole prefix was scanned without a match.
    NotFound,
    /// The logical length was zero, so no scan took place.
    Undetermined,
}

impl SearchOutcome {
    /// True only for `Found`.
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, SearchOutcome::Found)
    }

    /// True only for `Undetermined`.
    #[inline]
    pub fn is_undetermined(self) -> bool {
        matches!(self, SearchOutcome::Undetermined)
    }

    /// Collapse to a tri-state boolean: `Some(true)`, `Some(false)`, or `None`
    /// when undetermined.
    #[inline]
    pub fn as_option(self) -> Option<bool> {
        match self {
            SearchOutcome::Found => Some(true),
            SearchOutcome::NotFound => Some(false),
            SearchOutcome::Undetermined => None,
        }
    }
}

impl From<SearchOutcome> for Option<bool> {
    fn from(outcome: SearchOutcome) -> Self {
        outcome.as_option()
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchOutcome::Found => "found",
            SearchOutcome::NotFound => "not found",
            SearchOutcome::Undetermined => "undetermined",
        };
        f.write_str(label)
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Bounds used when building random arrays.
///
/// The defaults match the declared ranges: capacity in `[1, 20]` and values in
/// `[1, 221]`. Narrower bounds are accepted; wider ones are clamped by
/// `ArrayConfig::normalized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConfig {
    pub min_capacity: usize,
    pub max_capacity: usize,
    pub min_value: Value,
    pub max_value: Value,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            min_capacity: MIN_CAPACITY,
            max_capacity: MAX_CAPACITY,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
        }
    }
}

impl ArrayConfig {
    /// Clamp every bound into the declared ranges and order each pair.
    pub fn normalized(self) -> Self {
        let clamp_cap = |c: usize| c.clamp(MIN_CAPACITY, MAX_CAPACITY);
        let clamp_val = |v: Value| v.clamp(MIN_VALUE, MAX_VALUE);

        let (lo_cap, hi_cap) = (clamp_cap(self.min_capacity), clamp_cap(self.max_capacity));
        let (lo_val, hi_val) = (clamp_val(self.min_value), clamp_val(self.max_value));

        Self {
            min_capacity: lo_cap.min(hi_cap),
            max_capacity: lo_cap.max(hi_cap),
            min_value: lo_val.min(hi_val),
            max_value: lo_val.max(hi_val),
        }
    }
}
