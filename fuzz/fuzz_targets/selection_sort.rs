// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for selection sort.
//!
//! Throws arbitrary arrays (any capacity up to 20, any fill level) at `sort`
//! and checks the output is a sorted permutation with the tail untouched.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use restricted_array::{length, sort, RestrictedArray, Value, MAX_CAPACITY, MAX_VALUE};

#[derive(Debug, Arbitrary)]
struct Input {
    raw: Vec<u8>,
    spare: u8,
}

fuzz_target!(|input: Input| {
    let values: Vec<Value> = input
        .raw
        .iter()
        .take(MAX_CAPACITY)
        .map(|v| 1 + v % MAX_VALUE)
        .collect();
    let capacity = (values.len() + input.spare as usize % 4).clamp(1, MAX_CAPACITY);
    let Ok(mut array) = RestrictedArray::from_values(capacity, &values) else {
        return;
    };

    let n = length(&array);
    sort(&mut array, n);

    let sorted = array.values();
    assert_eq!(sorted.len(), values.len(), "sort changed the length");
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "not sorted: {:?}", sorted);

    let mut expected = values.clone();
    expected.sort_unstable();
    assert_eq!(sorted, expected, "not a permutation of the input");
    assert_eq!(array.capacity(), capacity);
});
