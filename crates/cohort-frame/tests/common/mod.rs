//! Common test utilities for cohort-frame tests

use polars::prelude::*;

/// Three-rows-per-group frame with one numeric and one categorical
/// column besides the grouping column.
pub fn two_group_df() -> DataFrame {
    df![
        "group" => &["x", "x", "x", "y", "y", "y"],
        "val" => &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        "cat" => &["a", "a", "b", "b", "b", "a"],
    ]
    .unwrap()
}

/// Small clinical-flavored frame with missing values in both column
/// kinds.
pub fn patients_df() -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            PlSmallStr::from("age"),
            vec![Some(34.0), Some(71.0), None, Some(55.0), Some(19.0)],
        )
        .into(),
        Series::new(
            PlSmallStr::from("arm"),
            vec![
                Some("treated"),
                Some("control"),
                Some("treated"),
                None,
                Some("control"),
            ],
        )
        .into(),
        Series::new(
            PlSmallStr::from("score"),
            vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), None],
        )
        .into(),
    ])
    .unwrap()
}
