// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for lengths that lie about the array.
//!
//! A length past the occupied prefix is a caller error with unspecified
//! results, but it must never panic or read out of bounds.

#![no_main]

use libfuzzer_sys::fuzz_target;
use restricted_array::{
    binary_search, find_largest, find_smallest, reverse, search, sort, RestrictedArray, Value,
    MAX_CAPACITY, MAX_VALUE,
};

fuzz_target!(|data: (Vec<u8>, u8, u8)| {
    let (raw, claimed, target) = data;
    let values: Vec<Value> = raw.iter().take(MAX_CAPACITY).map(|v| 1 + v % MAX_VALUE).collect();
    let Ok(mut array) = RestrictedArray::from_values(MAX_CAPACITY, &values) else {
        return;
    };
    let n = claimed as usize % (2 * MAX_CAPACITY + 1);

    let _ = search(&array, n, target);
    let _ = binary_search(&array, n, target);
    let _ = find_largest(&array, n);
    let _ = find_smallest(&array, n);
    reverse(&mut array, n);
    sort(&mut array, n);

    assert_eq!(array.capacity(), MAX_CAPACITY);
});
