//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::restricted::RestrictedArray;
use crate::types::Value;

/// The worked example used throughout the docs: `[33, 12, 78, 4, 56]`.
pub const SAMPLE_VALUES: [Value; 5] = [33, 12, 78, 4, 56];

/// Create a full array holding exactly `values`.
///
/// This is the canonical implementation used across all tests.
pub fn make_array(values: &[Value]) -> RestrictedArray {
    RestrictedArray::from_slice(values).expect("test values must be in range")
}

/// Create an array of `capacity` slots with `values` in the leading slots.
pub fn make_array_with_capacity(capacity: usize, values: &[Value]) -> RestrictedArray {
    RestrictedArray::from_values(capacity, values).expect("test values must fit")
}

/// The sample array with three spare empty slots.
pub fn sample_array() -> RestrictedArray {
    make_array_with_capacity(8, &SAMPLE_VALUES)
}

/// Check `a[i - 1] <= a[i]` for every adjacent pair.
pub fn is_non_decreasing(values: &[Value]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Check that two slices hold the same multiset of values.
pub fn is_permutation(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts = [0i32; 256];
    for &v in a {
        counts[v as usize] += 1;
    }
    for &v in b {
        counts[v as usize] -= 1;
    }
    counts.iter().all(|&c| c == 0)
}
