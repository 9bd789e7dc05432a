// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Classic array algorithms over a `RestrictedArray`.
//!
//! Every function here is a bounded traversal of the first `length` slots.
//! Nothing allocates, nothing is cached, nothing carries state between calls.
//! `length` is computed by scanning; every other function takes it as an
//! argument and trusts it.
//!
//! # Empty-input behavior
//!
//! | Function          | `length == 0`                      |
//! |-------------------|------------------------------------|
//! | `search`          | `SearchOutcome::Undetermined`      |
//! | `binary_search`   | `false`                            |
//! | `find_largest`    | `Err(ArrayError::EmptyInput)`      |
//! | `find_smallest`   | `Err(ArrayError::EmptyInput)`      |
//! | `reverse`, `sort` | no-op                              |
//!
//! The search asymmetry is intentional. A linear scan of nothing has not
//! answered the question; a bisection of nothing has.
//!
//! # Preconditions
//!
//! `length` must not exceed the occupied prefix, and `binary_search` expects
//! that prefix sorted ascending. Neither is checked. Violating them yields
//! unspecified (but memory-safe, non-panicking) results.

use crate::error::ArrayError;
use crate::restricted::RestrictedArray;
use crate::types::{SearchOutcome, Value};
use crate::verify::contracts::{check_is_largest, check_is_smallest, check_sorted_prefix};
use std::cmp::Ordering;
use std::io::{self, Write};

/// Count the occupied slots before the first empty one.
///
/// Time: O(n). Space: O(1).
pub fn length(array: &RestrictedArray) -> usize {
    let mut index = 0;
    while array.get(index).is_some() {
        index += 1;
    }
    index
}

/// Print the occupied prefix to stdout, space-separated, newline-terminated.
pub fn print_array(array: &RestrictedArray) {
    println!("{}", array);
}

/// Write the occupied prefix to `out` in the `print_array` format.
///
/// Values are separated by exactly one space, with no leading or trailing
/// separator, followed by a single `\n`. An empty array writes just `\n`.
pub fn write_array<W: Write>(out: &mut W, array: &RestrictedArray) -> io::Result<()> {
    writeln!(out, "{}", array)
}

/// Linear search over the first `length` slots.
///
/// Time: O(n). Space: O(1).
pub fn search(array: &RestrictedArray, length: usize, value_to_find: Value) -> SearchOutcome {
    if length == 0 {
        return SearchOutcome::Undetermined;
    }

    for index in 0..length {
        if array.get(index) == Some(value_to_find) {
            return SearchOutcome::Found;
        }
    }
    SearchOutcome::NotFound
}

/// Largest value among the first `length` slots.
///
/// Time: O(n). Space: O(1).
pub fn find_largest(array: &RestrictedArray, length: usize) -> Result<Value, ArrayError> {
    let largest = scan_extreme(array, length, |current, best| current > best)?;
    check_is_largest(array, length, largest);
    Ok(largest)
}

/// Smallest value among the first `length` slots.
///
/// Time: O(n). Space: O(1).
pub fn find_smallest(array: &RestrictedArray, length: usize) -> Result<Value, ArrayError> {
    let smallest = scan_extreme(array, length, |current, best| current < best)?;
    check_is_smallest(array, length, smallest);
    Ok(smallest)
}

/// Running-extreme scan shared by `find_largest` and `find_smallest`.
///
/// Seeds with slot 0 and replaces only when `improves` holds strictly, so the
/// earliest of several equal extremes wins.
fn scan_extreme(
    array: &RestrictedArray,
    length: usize,
    improves: impl Fn(Value, Value) -> bool,
) -> Result<Value, ArrayError> {
    if length == 0 {
        return Err(ArrayError::EmptyInput);
    }

    let mut extreme = array.get(0);
    for index in 1..length {
        let Some(current) = array.get(index) else {
            continue;
        };
        match extreme {
            Some(best) if !improves(current, best) => {}
            _ => extreme = Some(current),
        }
    }
    extreme.ok_or(ArrayError::EmptyInput)
}

/// Reverse the first `length` slots in place.
///
/// Two pointers walk inward from both ends, swapping as they go, until they
/// meet or cross. Time: O(n). Space: O(1).
pub fn reverse(array: &mut RestrictedArray, length: usize) {
    if length <= 1 {
        return;
    }

    let mut left = 0;
    let mut right = length - 1;
    while left < right {
        array.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Binary search over the first `length` slots, which must be ascending.
///
/// Sortedness is the caller's job. On unsorted input the answer is
/// unspecified; this function will not detect it. Use
/// `verify::SortedPrefix` when the order needs to be proven first.
///
/// Time: O(log n). Space: O(1).
pub fn binary_search(array: &RestrictedArray, length: usize, value_to_find: Value) -> bool {
    if length == 0 {
        return false;
    }

    let mut low = 0;
    let mut high = length - 1;
    while low <= high {
        let mid = (low + high) / 2;
        match array.get(mid).cmp(&Some(value_to_find)) {
            Ordering::Equal => return true,
            Ordering::Greater => {
                // high would drop below low = 0
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
            Ordering::Less => low = mid + 1,
        }
    }
    false
}

/// Sort the first `length` slots ascending, in place, with selection sort.
///
/// For each position, find the earliest minimum of the unsorted remainder and
/// swap it into place if it is not already there. Exactly `n(n-1)/2`
/// comparisons and at most `n-1` swaps.
///
/// Time: O(n²). Space: O(1).
pub fn sort(array: &mut RestrictedArray, length: usize) {
    for index in 0..length {
        let mut min_index = index;
        for candidate in index + 1..length {
            if array.get(candidate) < array.get(min_index) {
                min_index = candidate;
            }
        }
        if min_index != index {
            array.swap(index, min_index);
        }
    }

    // INVARIANT: prefix is non-decreasing after every full pass
    check_sorted_prefix(array, length);
}
