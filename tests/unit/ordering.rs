//! Extremes, reversal and selection sort.

use super::common::{array_and_length, assert_well_formed, make_array, make_array_with_capacity};
use restricted_array::{find_largest, find_smallest, reverse, sort, ArrayError, RestrictedArray};

// ============================================================================
// EXTREMES
// ============================================================================

#[test]
fn extremes_of_small_array() {
    let (array, n) = array_and_length(&[4, 9, 2]);
    assert_eq!(find_largest(&array, n), Ok(9));
    assert_eq!(find_smallest(&array, n), Ok(2));
}

#[test]
fn extremes_fail_on_empty_prefix() {
    let array = RestrictedArray::new(3).unwrap();
    assert_eq!(find_largest(&array, 0), Err(ArrayError::EmptyInput));
    assert_eq!(find_smallest(&array, 0), Err(ArrayError::EmptyInput));
}

#[test]
fn extremes_only_consider_length() {
    let array = make_array(&[5, 6, 221, 1]);
    assert_eq!(find_largest(&array, 2), Ok(6));
    assert_eq!(find_smallest(&array, 2), Ok(5));
}

#[test]
fn extremes_with_all_equal_values() {
    let (array, n) = array_and_length(&[7, 7, 7, 7]);
    assert_eq!(find_largest(&array, n), Ok(7));
    assert_eq!(find_smallest(&array, n), Ok(7));
}

// ============================================================================
// REVERSE
// ============================================================================

#[test]
fn reverse_twice_is_identity() {
    let original = [8, 1, 200, 33, 4, 19];
    let (mut array, n) = array_and_length(&original);
    reverse(&mut array, n);
    assert_eq!(array.values(), vec![19, 4, 33, 200, 1, 8]);
    reverse(&mut array, n);
    assert_eq!(array.values(), original.to_vec());
}

#[test]
fn reverse_short_prefixes_unchanged() {
    let (mut array, _) = array_and_length(&[3, 2, 1]);
    reverse(&mut array, 0);
    reverse(&mut array, 1);
    assert_eq!(array.values(), vec![3, 2, 1]);
}

#[test]
fn reverse_keeps_empty_tail() {
    let mut array = make_array_with_capacity(7, &[1, 2, 3]);
    reverse(&mut array, 3);
    assert_eq!(array.values(), vec![3, 2, 1]);
    assert_eq!(array.capacity(), 7);
    assert_well_formed(&array);
}

// ============================================================================
// SELECTION SORT
// ============================================================================

#[test]
fn sort_example() {
    let (mut array, n) = array_and_length(&[5, 3, 9, 1]);
    sort(&mut array, n);
    assert_eq!(array.values(), vec![1, 3, 5, 9]);
}

#[test]
fn sort_reverse_sorted_input() {
    let (mut array, n) = array_and_length(&[6, 5, 4, 3, 2, 1]);
    sort(&mut array, n);
    assert_eq!(array.values(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn sort_already_sorted_is_unchanged() {
    let (mut array, n) = array_and_length(&[1, 2, 3, 4, 5]);
    let before = array.clone();
    sort(&mut array, n);
    assert_eq!(array, before);
}

#[test]
fn sort_twice_equals_sort_once() {
    let (mut array, n) = array_and_length(&[90, 14, 14, 3, 221, 60]);
    sort(&mut array, n);
    let once = array.clone();
    sort(&mut array, n);
    assert_eq!(array, once);
}

#[test]
fn sort_full_capacity() {
    let values: Vec<u8> = (1..=20).rev().collect();
    let (mut array, n) = array_and_length(&values);
    sort(&mut array, n);
    assert_eq!(array.values(), (1..=20).collect::<Vec<u8>>());
}
