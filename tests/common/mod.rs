//! Shared test utilities and fixtures.

#![allow(dead_code)]

use restricted_array::{length, RestrictedArray, Value, WellFormedArray};

// Re-export canonical test utilities from restricted_array::testing
pub use restricted_array::testing::{
    is_non_decreasing, is_permutation, make_array, make_array_with_capacity, sample_array,
    SAMPLE_VALUES,
};

/// Assert the occupied slots form a contiguous prefix.
pub fn assert_well_formed(array: &RestrictedArray) {
    if let Err(e) = WellFormedArray::from_array(array) {
        panic!("array not well-formed: {} ({:?})", e, array.slots());
    }
}

/// Build an array and return it along with its computed length.
pub fn array_and_length(values: &[Value]) -> (RestrictedArray, usize) {
    let array = make_array(values);
    let n = length(&array);
    (array, n)
}

/// Values `[1, 221]` in ascending order, `count` of them, evenly spaced.
pub fn ascending_values(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| (1 + i * 220 / count.max(1)) as Value)
        .collect()
}
