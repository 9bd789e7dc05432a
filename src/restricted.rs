// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed-capacity container the algorithms run against.
//!
//! A `RestrictedArray` owns a boxed slice of slots whose size never changes
//! after construction. There is no push, no pop, no resize. Values go in
//! through `set`, or through one of the constructors, and the logical length
//! is whatever prefix happens to be occupied.
//!
//! Reads past the end return the empty marker rather than panicking, the same
//! way a read past the last value does. That keeps every algorithm total even
//! when a caller hands it a length larger than the array.

use crate::error::ArrayError;
use crate::types::{in_range, ArrayConfig, Slot, Value, MAX_CAPACITY, MIN_CAPACITY};
use rand::Rng;
use std::fmt;
use tracing::debug;

/// Fixed-capacity array of integer slots terminated by the empty marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestrictedArray {
    slots: Box<[Slot]>,
}

impl RestrictedArray {
    /// Create an array with `capacity` empty slots.
    pub fn new(capacity: usize) -> Result<Self, ArrayError> {
        if capacity == 0 {
            return Err(ArrayError::ZeroCapacity);
        }
        Ok(Self {
            slots: vec![None; capacity].into_boxed_slice(),
        })
    }

    /// Create an array of `capacity` slots whose leading slots hold `values`.
    pub fn from_values(capacity: usize, values: &[Value]) -> Result<Self, ArrayError> {
        if values.len() > capacity {
            return Err(ArrayError::CapacityExceeded {
                values: values.len(),
                capacity,
            });
        }
        if let Some(&value) = values.iter().find(|&&v| !in_range(v)) {
            return Err(ArrayError::ValueOutOfRange { value });
        }

        let mut array = Self::new(capacity)?;
        for (slot, &value) in array.slots.iter_mut().zip(values) {
            *slot = Some(value);
        }
        Ok(array)
    }

    /// Create a completely full array sized to `values`.
    ///
    /// An empty `values` still yields one (empty) slot.
    pub fn from_slice(values: &[Value]) -> Result<Self, ArrayError> {
        Self::from_values(values.len().max(1), values)
    }

    /// Random capacity and random values, using the default bounds.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random_with_config(ArrayConfig::default(), rng)
    }

    /// Random capacity and random values drawn from `config`.
    pub fn random_with_config<R: Rng + ?Sized>(config: ArrayConfig, rng: &mut R) -> Self {
        let config = config.normalized();
        let capacity = rng.gen_range(config.min_capacity..=config.max_capacity);
        Self::fill_random(capacity, config, rng)
    }

    /// Fixed capacity in `[MIN_CAPACITY, MAX_CAPACITY]`, every slot filled
    /// with a random value.
    pub fn random_with_capacity<R: Rng + ?Sized>(
        capacity: usize,
        rng: &mut R,
    ) -> Result<Self, ArrayError> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
            return Err(ArrayError::CapacityOutOfRange { capacity });
        }
        Ok(Self::fill_random(capacity, ArrayConfig::default(), rng))
    }

    fn fill_random<R: Rng + ?Sized>(capacity: usize, config: ArrayConfig, rng: &mut R) -> Self {
        let slots: Box<[Slot]> = (0..capacity)
            .map(|_| Some(rng.gen_range(config.min_value..=config.max_value)))
            .collect();
        debug!(capacity, "populated random restricted array");
        Self { slots }
    }

    /// Number of slots, occupied or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Read a slot. Past the end this is the empty marker.
    #[inline]
    pub fn get(&self, index: usize) -> Slot {
        self.slots.get(index).copied().flatten()
    }

    /// Write a slot. `None` empties it.
    ///
    /// Emptying a slot in the middle truncates the logical length there; the
    /// values after it become unreachable until the gap is filled again.
    pub fn set(&mut self, index: usize, slot: Slot) -> Result<(), ArrayError> {
        let capacity = self.capacity();
        if let Some(value) = slot {
            if !in_range(value) {
                return Err(ArrayError::ValueOutOfRange { value });
            }
        }
        let target = self
            .slots
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, capacity })?;
        *target = slot;
        Ok(())
    }

    /// Exchange two slots. Indices past the end are ignored.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.slots.len() && b < self.slots.len() {
            self.slots.swap(a, b);
        }
    }

    /// The raw backing store, empty markers included.
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The occupied prefix as plain values.
    pub fn values(&self) -> Vec<Value> {
        self.slots.iter().map_while(|slot| *slot).collect()
    }
}

/// Formats the occupied prefix the same way `print_array` does, minus the
/// trailing newline.
impl fmt::Display for RestrictedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, self.slots.iter().map_while(|slot| *slot))
    }
}

/// Plain values in the print format, for callers holding a `Vec<Value>`
/// rather than an array (reports, CLI output).
#[derive(Debug, Clone, Copy)]
pub struct ValueList<'a>(pub &'a [Value]);

impl fmt::Display for ValueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, self.0.iter().copied())
    }
}

fn write_values(f: &mut fmt::Formatter<'_>, values: impl Iterator<Item = Value>) -> fmt::Result {
    for (i, value) in values.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}
