// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target comparing linear and binary search.
//!
//! On a sorted, non-empty prefix both searches must agree. On an empty prefix
//! linear search must say Undetermined while binary search says false.

#![no_main]

use libfuzzer_sys::fuzz_target;
use restricted_array::{
    binary_search, length, search, sort, RestrictedArray, SearchOutcome, Value, MAX_CAPACITY,
    MAX_VALUE,
};

fuzz_target!(|data: (Vec<u8>, u8)| {
    let (raw, target) = data;
    let values: Vec<Value> = raw.iter().take(MAX_CAPACITY).map(|v| 1 + v % MAX_VALUE).collect();
    let Ok(mut array) = RestrictedArray::from_slice(&values) else {
        return;
    };

    let n = length(&array);
    sort(&mut array, n);

    let linear = search(&array, n, target);
    let binary = binary_search(&array, n, target);

    if n == 0 {
        assert_eq!(linear, SearchOutcome::Undetermined);
        assert!(!binary);
    } else {
        assert_eq!(linear.is_found(), binary, "searches disagree on {}", target);
        assert_eq!(binary, values.contains(&target));
    }
});
