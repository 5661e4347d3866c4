use stackbar::{RawSeries, normalize};

#[test]
fn single_series() {
    let d = normalize(&RawSeries::Single(vec![1.0, 2.0, 3.0]));
    assert!(!d.is_multi_series);
    assert_eq!(d.series_count, 3);
    assert_eq!(d.max_subseries_length, 1);
    assert_eq!(d.global_max, 3.0);
    assert_eq!(d.matrix, vec![vec![1.0, 2.0], vec![2.0, 1.0], vec![3.0, 0.0]]);
    assert_eq!(d.color_count(), 3);
    assert_eq!(d.color_index(2, 0), 2);
}

#[test]
fn ragged_multi_series_is_padded() {
    let d = normalize(&RawSeries::Multi(vec![vec![1.0, 2.0], vec![3.0]]));
    assert!(d.is_multi_series);
    assert_eq!(d.series_count, 2);
    assert_eq!(d.max_subseries_length, 2);
    assert_eq!(d.global_max, 3.0);
    assert_eq!(d.matrix, vec![vec![1.0, 2.0, 0.0], vec![3.0, 0.0, 0.0]]);
    assert_eq!(d.values(1), &[3.0, 0.0]);
    assert_eq!(d.remainder(1), 0.0);
    assert_eq!(d.color_index(1, 1), 1);
}

#[test]
fn empty_input() {
    let d = normalize(&RawSeries::Single(vec![]));
    assert_eq!(d.series_count, 0);
    assert_eq!(d.global_max, 0.0);
    assert!(d.matrix.is_empty());
}

#[test]
fn all_zero_rows() {
    let d = normalize(&RawSeries::Multi(vec![vec![0.0, 0.0], vec![0.0]]));
    assert_eq!(d.global_max, 0.0);
    assert_eq!(d.matrix, vec![vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0]]);
}

#[test]
fn negative_and_non_finite_values_are_clamped() {
    let d = normalize(&RawSeries::Multi(vec![vec![-1.0, 2.0], vec![f64::NAN, f64::INFINITY]]));
    assert_eq!(d.matrix, vec![vec![0.0, 2.0, 0.0], vec![0.0, 0.0, 2.0]]);
    assert_eq!(d.global_max, 2.0);
}

#[test]
fn first_entry_decides_the_input_shape() {
    let multi: RawSeries = serde_json::from_str("[[1, 2], 3]").unwrap();
    assert_eq!(multi, RawSeries::Multi(vec![vec![1.0, 2.0], vec![3.0]]));

    let single: RawSeries = serde_json::from_str("[1, [2, 3]]").unwrap();
    assert_eq!(single, RawSeries::Single(vec![1.0, 5.0]));

    let empty: RawSeries = serde_json::from_str("[]").unwrap();
    assert!(empty.is_empty());
}

#[test]
fn overflowing_rows_keep_a_finite_scale() {
    let d = normalize(&RawSeries::Multi(vec![vec![1e308, 1e308], vec![1.0]]));
    assert!(d.global_max.is_finite());
    assert!(d.global_max > 1e308);
    for row in &d.matrix {
        let total: f64 = row.iter().sum();
        assert!(total.is_finite());
        assert!((total - d.global_max).abs() <= 1e-9 * d.global_max);
    }
    assert_eq!(d.matrix[0][0], 1e308);
}
