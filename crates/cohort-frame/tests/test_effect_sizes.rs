//! Tests for the dataframe-level binary effect size

use approx::assert_abs_diff_eq;
use cohort_frame::{CohortStatsExt, Error};
use polars::prelude::*;

#[test]
fn test_binary_effect_size_value() {
    let df = df![
        "score" => &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        "arm" => &["t", "t", "t", "c", "c", "c"],
    ]
    .unwrap();

    let effect = df.binary_effect_size("score", "arm").unwrap();

    // means 2 and 5, both stds 1: d = -3
    assert_abs_diff_eq!(effect.magnitude, -3.0, epsilon = 1e-12);
    assert_eq!(effect.sample_sizes, Some((3, 3)));
}

#[test]
fn test_single_category_is_rejected() {
    let df = df!["v" => &[1.0, 2.0, 3.0], "c" => &["a", "a", "a"]].unwrap();

    match df.binary_effect_size("v", "c") {
        Err(Error::NotBinary { column, found }) => {
            assert_eq!(column, "c");
            assert_eq!(found, vec!["a".to_string()]);
        }
        other => panic!("expected NotBinary, got {other:?}"),
    }
}

#[test]
fn test_three_categories_are_rejected() {
    let df = df!["v" => &[1.0, 2.0, 3.0], "c" => &["a", "b", "c"]].unwrap();

    let err = df.binary_effect_size("v", "c").unwrap_err();
    // the message names the offending column and the observed values
    let message = err.to_string();
    assert!(message.contains('c'));
    assert!(message.contains("\"a\""));
    assert!(message.contains("\"b\""));
}

#[test]
fn test_whitespace_categories_are_normalized() {
    let df = df![
        "v" => &[1.0, 2.0, 3.0, 4.0],
        "c" => &[" t", "t ", "c", " c "],
    ]
    .unwrap();

    let effect = df.binary_effect_size("v", "c").unwrap();
    assert_eq!(effect.sample_sizes, Some((2, 2)));
}

#[test]
fn test_degenerate_spread_yields_zero() {
    let df = df![
        "v" => &[5.0, 5.0, 5.0, 5.0],
        "c" => &["a", "a", "b", "b"],
    ]
    .unwrap();

    assert_eq!(df.binary_effect_size("v", "c").unwrap().magnitude, 0.0);
}

#[test]
fn test_small_group_yields_zero() {
    // one observation per group: undefined stds, zero by policy
    let df = df!["v" => &[1.0, 9.0], "c" => &["a", "b"]].unwrap();
    assert_eq!(df.binary_effect_size("v", "c").unwrap().magnitude, 0.0);
}

#[test]
fn test_unknown_columns() {
    let df = df!["v" => &[1.0], "c" => &["a"]].unwrap();

    assert!(matches!(
        df.binary_effect_size("missing", "c"),
        Err(Error::InvalidColumn(name)) if name == "missing"
    ));
    assert!(matches!(
        df.binary_effect_size("v", "missing"),
        Err(Error::InvalidColumn(name)) if name == "missing"
    ));
}

#[test]
fn test_non_numeric_value_column_is_rejected() {
    let df = df!["v" => &["x", "y"], "c" => &["a", "b"]].unwrap();
    assert!(matches!(
        df.binary_effect_size("v", "c"),
        Err(Error::TypeMismatch { .. })
    ));
}

#[test]
fn test_null_categories_do_not_count_as_a_value() {
    let df = DataFrame::new(vec![
        Series::new(
            PlSmallStr::from("v"),
            vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)],
        )
        .into(),
        Series::new(
            PlSmallStr::from("c"),
            vec![Some("a"), Some("a"), None, Some("b"), Some("b")],
        )
        .into(),
    ])
    .unwrap();

    // two real values plus nulls is still binary
    let effect = df.binary_effect_size("v", "c").unwrap();
    assert_eq!(effect.sample_sizes, Some((2, 2)));
}
