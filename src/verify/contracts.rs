// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime postconditions for the algorithms.
//!
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Check **outputs only**. Inputs are the caller's responsibility, and an
//!    unsorted array handed to `binary_search` must not trip anything here.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function      | Called From      | Property                         |
//! |------------------------|------------------|----------------------------------|
//! | `check_sorted_prefix`  | `sort`           | prefix is non-decreasing         |
//! | `check_is_largest`     | `find_largest`   | no slot in the prefix is larger  |
//! | `check_is_smallest`    | `find_smallest`  | no slot in the prefix is smaller |
//!
//! A `length` past the array's capacity is a caller error with unspecified
//! results, so contracts stand down in that case instead of panicking.

use crate::restricted::RestrictedArray;
use crate::types::Value;

// ============================================================================
// SORT CONTRACTS
// ============================================================================

/// Check that the first `length` slots are non-decreasing.
///
/// Slots are compared as `Option<Value>`, so an empty marker sorts before any
/// value. That only matters when `length` overshoots the occupied prefix.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_sorted_prefix(array: &RestrictedArray, length: usize) {
    if length > array.capacity() {
        return;
    }

    for i in 1..length {
        debug_assert!(
            array.get(i - 1) <= array.get(i),
            "Contract violation: SortedPrefix - slot[{}] ({:?}) > slot[{}] ({:?})",
            i - 1,
            array.get(i - 1),
            i,
            array.get(i)
        );
    }
}

// ============================================================================
// EXTREME CONTRACTS
// ============================================================================

/// Check that `largest` is at least every occupied slot in the prefix.
///
/// # Panics (debug builds only)
/// Panics if some slot holds a larger value.
#[inline]
pub fn check_is_largest(array: &RestrictedArray, length: usize, largest: Value) {
    let bound = length.min(array.capacity());
    for i in 0..bound {
        if let Some(value) = array.get(i) {
            debug_assert!(
                value <= largest,
                "Contract violation: Largest - slot[{}] = {} > reported {}",
                i,
                value,
                largest
            );
        }
    }
}

/// Check that `smallest` is at most every occupied slot in the prefix.
///
/// # Panics (debug builds only)
/// Panics if some slot holds a smaller value.
#[inline]
pub fn check_is_smallest(array: &RestrictedArray, length: usize, smallest: Value) {
    let bound = length.min(array.capacity());
    for i in 0..bound {
        if let Some(value) = array.get(i) {
            debug_assert!(
                value >= smallest,
                "Contract violation: Smallest - slot[{}] = {} < reported {}",
                i,
                value,
                smallest
            );
        }
    }
}
