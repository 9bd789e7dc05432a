// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wrappers that check an invariant once and guarantee it afterwards.
//!
//! | Type              | What's Guaranteed                                   |
//! |-------------------|-----------------------------------------------------|
//! | `WellFormedArray` | occupied slots contiguous, every value in range     |
//! | `SortedPrefix`    | first `length` slots occupied and non-decreasing    |
//!
//! # Example
//!
//! ```
//! use restricted_array::{RestrictedArray, SortedPrefix};
//!
//! let array = RestrictedArray::from_slice(&[4, 12, 33]).unwrap();
//! let sorted = SortedPrefix::new(&array, 3).unwrap();
//! assert!(sorted.contains(12));
//! ```

use crate::algorithms::{binary_search, length};
use crate::restricted::RestrictedArray;
use crate::types::{in_range, Value};
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// An occupied slot follows an empty one.
    NonContiguous { position: usize },
    /// A slot holds a value outside the declared range.
    ValueOutOfRange { index: usize, value: Value },
    /// `slot[position - 1] > slot[position]`.
    Unsorted { position: usize },
    /// The claimed length does not fit in the array.
    LengthExceedsCapacity { length: usize, capacity: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::NonContiguous { position } => {
                write!(f, "occupied slot {} follows an empty slot", position)
            }
            InvariantError::ValueOutOfRange { index, value } => {
                write!(f, "slot {} holds out-of-range value {}", index, value)
            }
            InvariantError::Unsorted { position } => {
                write!(f, "prefix not sorted at position {}", position)
            }
            InvariantError::LengthExceedsCapacity { length, capacity } => {
                write!(f, "length {} > capacity {}", length, capacity)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// An array whose occupied slots are contiguous and in range.
///
/// # Invariants (enforced at construction)
/// - No occupied slot follows an empty one
/// - Every occupied slot is in `[MIN_VALUE, MAX_VALUE]`
#[derive(Debug, Clone, Copy)]
pub struct WellFormedArray<'a> {
    array: &'a RestrictedArray,
    length: usize,
}

impl<'a> WellFormedArray<'a> {
    /// Validate an array.
    pub fn from_array(array: &'a RestrictedArray) -> Result<Self, InvariantError> {
        let length = length(array);

        for (index, slot) in array.slots().iter().enumerate() {
            match *slot {
                Some(_) if index > length => {
                    return Err(InvariantError::NonContiguous { position: index });
                }
                Some(value) if !in_range(value) => {
                    return Err(InvariantError::ValueOutOfRange { index, value });
                }
                _ => {}
            }
        }

        Ok(Self { array, length })
    }

    /// Logical length, computed at validation time.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_array(&self) -> &'a RestrictedArray {
        self.array
    }
}

/// A prefix known to be fully occupied and ascending.
///
/// This is the opt-in sortedness check. `binary_search` does not validate its
/// input; wrap the array here first when the order is not already known.
///
/// # Invariants (enforced at construction)
/// - `length <= capacity`
/// - every slot in `0..length` is occupied
/// - `slot[i - 1] <= slot[i]` for all `0 < i < length`
#[derive(Debug, Clone, Copy)]
pub struct SortedPrefix<'a> {
    array: &'a RestrictedArray,
    length: usize,
}

impl<'a> SortedPrefix<'a> {
    /// Validate the first `length` slots of `array`.
    pub fn new(array: &'a RestrictedArray, length: usize) -> Result<Self, InvariantError> {
        let capacity = array.capacity();
        if length > capacity {
            return Err(InvariantError::LengthExceedsCapacity { length, capacity });
        }

        let mut previous: Option<Value> = None;
        for position in 0..length {
            let Some(current) = array.get(position) else {
                return Err(InvariantError::NonContiguous { position });
            };
            if previous.is_some_and(|p| p > current) {
                return Err(InvariantError::Unsorted { position });
            }
            previous = Some(current);
        }

        Ok(Self { array, length })
    }

    /// Binary search within the validated prefix.
    pub fn contains(&self, value: Value) -> bool {
        binary_search(self.array, self.length, value)
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_array(&self) -> &'a RestrictedArray {
        self.array
    }
}
