//! Length and print behavior over the container's slot layout.

use super::common::{assert_well_formed, make_array, make_array_with_capacity};
use restricted_array::{length, write_array, RestrictedArray, MAX_CAPACITY};

fn printed(array: &RestrictedArray) -> String {
    let mut out = Vec::new();
    write_array(&mut out, array).expect("write to Vec cannot fail");
    String::from_utf8(out).expect("output is ASCII")
}

// ============================================================================
// LENGTH
// ============================================================================

#[test]
fn length_counts_leading_occupied_slots() {
    let array = make_array_with_capacity(10, &[9, 8, 7, 6]);
    assert_eq!(length(&array), 4);
    assert_well_formed(&array);
}

#[test]
fn length_of_all_empty_is_zero() {
    for capacity in 1..=MAX_CAPACITY {
        let array = RestrictedArray::new(capacity).unwrap();
        assert_eq!(length(&array), 0, "capacity {}", capacity);
    }
}

#[test]
fn length_of_full_array_is_capacity() {
    let values: Vec<u8> = (1..=20).collect();
    let array = make_array(&values);
    assert_eq!(length(&array), array.capacity());
}

#[test]
fn length_is_recomputed_after_changes() {
    let mut array = make_array_with_capacity(5, &[1, 2]);
    assert_eq!(length(&array), 2);

    array.set(2, Some(3)).unwrap();
    assert_eq!(length(&array), 3);

    array.set(0, None).unwrap();
    assert_eq!(length(&array), 0);
}

// ============================================================================
// PRINT
// ============================================================================

#[test]
fn print_format_single_spaces_and_newline() {
    let array = make_array_with_capacity(8, &[33, 12, 78, 4, 56]);
    assert_eq!(printed(&array), "33 12 78 4 56\n");
}

#[test]
fn print_has_no_leading_or_trailing_separator() {
    let out = printed(&make_array(&[1, 2, 3]));
    assert!(!out.starts_with(' '));
    assert!(!out.ends_with(" \n"));
    assert_eq!(out.matches(' ').count(), 2);
}

#[test]
fn print_stops_at_first_empty_slot() {
    let mut array = make_array(&[5, 6, 7, 8]);
    array.set(2, None).unwrap();
    assert_eq!(printed(&array), "5 6\n");
}

#[test]
fn print_empty_array_is_just_newline() {
    assert_eq!(printed(&RestrictedArray::new(4).unwrap()), "\n");
}
