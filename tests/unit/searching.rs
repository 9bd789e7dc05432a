//! Linear and binary search, including their deliberately different answers
//! for an empty prefix.

use super::common::{array_and_length, ascending_values, make_array, make_array_with_capacity};
use restricted_array::{binary_search, search, RestrictedArray, SearchOutcome};

#[test]
fn linear_search_three_outcomes() {
    let (array, n) = array_and_length(&[5, 3, 9]);
    assert_eq!(search(&array, n, 9), SearchOutcome::Found);
    assert_eq!(search(&array, n, 7), SearchOutcome::NotFound);

    let empty = RestrictedArray::new(3).unwrap();
    assert_eq!(search(&empty, 0, 9), SearchOutcome::Undetermined);
}

#[test]
fn empty_input_asymmetry_is_preserved() {
    let empty = RestrictedArray::new(5).unwrap();

    // Linear search has no answer; binary search says "no".
    assert_eq!(search(&empty, 0, 1), SearchOutcome::Undetermined);
    assert_ne!(search(&empty, 0, 1), SearchOutcome::NotFound);
    assert!(!binary_search(&empty, 0, 1));
}

#[test]
fn linear_search_finds_first_and_last() {
    let (array, n) = array_and_length(&[10, 20, 30, 40]);
    assert!(search(&array, n, 10).is_found());
    assert!(search(&array, n, 40).is_found());
}

#[test]
fn linear_search_unsorted_input() {
    let (array, n) = array_and_length(&[221, 1, 100, 7]);
    assert!(search(&array, n, 7).is_found());
    assert!(!search(&array, n, 8).is_found());
}

#[test]
fn linear_search_zero_length_on_full_array() {
    // The array has data, but a zero length means nothing was scanned.
    let array = make_array(&[1, 2, 3]);
    assert!(search(&array, 0, 1).is_undetermined());
}

#[test]
fn binary_search_every_present_value() {
    for count in 1..=20 {
        let values = ascending_values(count);
        let (array, n) = array_and_length(&values);
        for &v in &values {
            assert!(binary_search(&array, n, v), "count {} value {}", count, v);
        }
    }
}

#[test]
fn binary_search_absent_values() {
    let (array, n) = array_and_length(&[4, 12, 33, 56, 78]);
    for v in [1, 3, 5, 13, 34, 57, 79, 221] {
        assert!(!binary_search(&array, n, v), "false positive for {}", v);
    }
}

#[test]
fn binary_search_ignores_slots_past_length() {
    let array = make_array_with_capacity(6, &[1, 5, 9, 200]);
    assert!(!binary_search(&array, 3, 200));
    assert!(binary_search(&array, 4, 200));
}

#[test]
fn binary_search_single_element() {
    let (array, n) = array_and_length(&[42]);
    assert!(binary_search(&array, n, 42));
    assert!(!binary_search(&array, n, 41));
    assert!(!binary_search(&array, n, 43));
}
