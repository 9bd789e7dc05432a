//! The worked example, one step at a time, on a single array instance.

use super::common::{sample_array, SAMPLE_VALUES};
use restricted_array::{
    binary_search, find_largest, find_smallest, length, reverse, search, sort, write_array,
    Report, SearchOutcome, SortedPrefix,
};

#[test]
fn sample_lifecycle() {
    let mut array = sample_array();
    let n = length(&array);
    assert_eq!(n, 5);
    assert_eq!(array.capacity(), 8);

    assert_eq!(find_largest(&array, n), Ok(78));
    assert_eq!(find_smallest(&array, n), Ok(4));
    assert_eq!(search(&array, n, 78), SearchOutcome::Found);

    sort(&mut array, n);
    assert_eq!(array.values(), vec![4, 12, 33, 56, 78]);
    assert!(binary_search(&array, n, 56));
    assert!(!binary_search(&array, n, 99));

    let sorted = SortedPrefix::new(&array, n).expect("sort output is sorted");
    assert!(sorted.contains(4));

    reverse(&mut array, n);
    assert_eq!(array.values(), vec![78, 56, 33, 12, 4]);
    assert_eq!(length(&array), n);

    let mut out = Vec::new();
    write_array(&mut out, &array).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "78 56 33 12 4\n");
}

#[test]
fn sample_report_matches_stepwise_results() {
    let array = sample_array();
    let report = Report::from_array(&array).with_target(&array, 56);

    assert_eq!(report.values, SAMPLE_VALUES.to_vec());
    assert_eq!(report.largest, Some(78));
    assert_eq!(report.smallest, Some(4));
    assert_eq!(report.sorted, vec![4, 12, 33, 56, 78]);
    assert_eq!(report.reversed, vec![78, 56, 33, 12, 4]);

    let target = report.target.expect("target requested");
    assert_eq!(target.linear, SearchOutcome::Found);
    assert!(target.binary);
}
