// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime failures reported by the container and the algorithms.
//!
//! Only two algorithms can fail: `find_largest` and `find_smallest` have no
//! answer for an empty prefix. Everything else here comes from the container's
//! constructors and setters.

use crate::types::{Value, MAX_CAPACITY, MAX_VALUE, MIN_CAPACITY, MIN_VALUE};
use std::fmt;

/// Error type for container and algorithm failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// The logical length is zero, so there is no extreme to report.
    EmptyInput,
    /// Index is past the end of the backing store.
    IndexOutOfBounds { index: usize, capacity: usize },
    /// Value is outside `[MIN_VALUE, MAX_VALUE]`.
    ValueOutOfRange { value: Value },
    /// More values were supplied than the array has slots.
    CapacityExceeded { values: usize, capacity: usize },
    /// Capacity must be at least one slot.
    ZeroCapacity,
    /// Random arrays take a capacity in `[MIN_CAPACITY, MAX_CAPACITY]`.
    CapacityOutOfRange { capacity: usize },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::EmptyInput => write!(f, "no result for an empty array"),
            ArrayError::IndexOutOfBounds { index, capacity } => {
                write!(f, "index {} >= capacity {}", index, capacity)
            }
            ArrayError::ValueOutOfRange { value } => {
                write!(
                    f,
                    "value {} outside [{}, {}]",
                    value, MIN_VALUE, MAX_VALUE
                )
            }
            ArrayError::CapacityExceeded { values, capacity } => {
                write!(f, "{} values do not fit in capacity {}", values, capacity)
            }
            ArrayError::ZeroCapacity => write!(f, "capacity must be at least 1"),
            ArrayError::CapacityOutOfRange { capacity } => {
                write!(
                    f,
                    "capacity {} outside [{}, {}]",
                    capacity, MIN_CAPACITY, MAX_CAPACITY
                )
            }
        }
    }
}

impl std::error::Error for ArrayError {}
