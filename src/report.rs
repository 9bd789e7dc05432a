// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-shot summary of every algorithm over a single array.
//!
//! The report never touches the caller's array. Sorting and reversing happen
//! on a clone, and linear search runs against the original order so its
//! answer reflects the array as given.

use crate::algorithms::{binary_search, find_largest, find_smallest, length, reverse, search, sort};
use crate::restricted::RestrictedArray;
use crate::types::{SearchOutcome, Value};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub capacity: usize,
    pub length: usize,
    pub values: Vec<Value>,
    pub largest: Option<Value>,
    pub smallest: Option<Value>,
    pub sorted: Vec<Value>,
    pub reversed: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetReport>,
}

/// Where a specific value was looked for, and what each search said.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetReport {
    pub value: Value,
    pub linear: SearchOutcome,
    pub binary: bool,
}

impl Report {
    pub fn from_array(array: &RestrictedArray) -> Self {
        let length = length(array);

        let mut working = array.clone();
        sort(&mut working, length);
        let sorted = working.values();
        reverse(&mut working, length);
        let reversed = working.values();

        Self {
            capacity: array.capacity(),
            length,
            values: array.values(),
            largest: find_largest(array, length).ok(),
            smallest: find_smallest(array, length).ok(),
            sorted,
            reversed,
            target: None,
        }
    }

    /// Add both search results for `value`.
    ///
    /// Binary search runs over the sorted copy rebuilt from `self.sorted`.
    pub fn with_target(mut self, array: &RestrictedArray, value: Value) -> Self {
        let linear = search(array, self.length, value);
        let binary = match RestrictedArray::from_values(array.capacity(), &self.sorted) {
            Ok(sorted) => binary_search(&sorted, self.length, value),
            Err(_) => false,
        };

        self.target = Some(TargetReport {
            value,
            linear,
            binary,
        });
        self
    }
}
