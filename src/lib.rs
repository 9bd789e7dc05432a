//! Classic array algorithms over a fixed-capacity, sentinel-terminated array.
//!
//! A `RestrictedArray` has a capacity fixed at creation and holds integers in
//! `[1, 221]`. Unused trailing slots hold an empty marker, and the logical
//! length is the number of occupied slots before the first empty one. The
//! algorithms take that length as an argument and work in place.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  types.rs   │────▶│ restricted.rs│────▶│ algorithms.rs │
//! │ (Value,Slot,│     │ (container,  │     │ (length, sort,│
//! │SearchOutcome│     │  population) │     │  search, ...) │
//! └─────────────┘     └──────────────┘     └───────────────┘
//!        │                   │                     │
//!        ▼                   ▼                     ▼
//! ┌───────────────────────────────────────────────────────┐
//! │                       verify/                          │
//! │   (WellFormedArray, SortedPrefix, debug contracts)     │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! # Complexity
//!
//! | Function          | Time       | Space |
//! |-------------------|------------|-------|
//! | `length`          | O(n)       | O(1)  |
//! | `print_array`     | O(n)       | O(1)  |
//! | `search`          | O(n)       | O(1)  |
//! | `find_largest`    | O(n)       | O(1)  |
//! | `find_smallest`   | O(n)       | O(1)  |
//! | `reverse`         | O(n)       | O(1)  |
//! | `binary_search`   | O(log n)   | O(1)  |
//! | `sort`            | O(n²)      | O(1)  |
//!
//! # Usage
//!
//! ```
//! use restricted_array::{binary_search, find_largest, length, sort, RestrictedArray};
//!
//! let mut array = RestrictedArray::from_values(8, &[33, 12, 78, 4, 56]).unwrap();
//! let n = length(&array);
//! assert_eq!(find_largest(&array, n), Ok(78));
//!
//! sort(&mut array, n);
//! assert_eq!(array.values(), vec![4, 12, 33, 56, 78]);
//! assert!(binary_search(&array, n, 56));
//! ```

// Module declarations
pub mod algorithms;
pub mod error;
pub mod report;
mod restricted;
pub mod testing;
pub mod types;
pub mod verify;

// Re-exports for public API
pub use algorithms::{
    binary_search, find_largest, find_smallest, length, print_array, reverse, search, sort,
    write_array,
};
pub use error::ArrayError;
pub use report::{Report, TargetReport};
pub use restricted::{RestrictedArray, ValueList};
pub use types::{
    ArrayConfig, SearchOutcome, Slot, Value, MAX_CAPACITY, MAX_VALUE, MIN_CAPACITY, MIN_VALUE,
};
pub use verify::{InvariantError, SortedPrefix, WellFormedArray};
