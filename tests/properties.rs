use proptest::prelude::*;
use stackbar::path::{max_len, pad_right};
use stackbar::render::palette_slot;
use stackbar::{RawSeries, normalize};

fn rows() -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(0.0f64..1_000.0, 0..6), 0..8)
}

proptest! {
    #[test]
    fn every_row_sums_to_the_global_max(rows in rows()) {
        let data = normalize(&RawSeries::Multi(rows));
        for row in &data.matrix {
            let total: f64 = row.iter().sum();
            prop_assert!((total - data.global_max).abs() <= 1e-9 * data.global_max.max(1.0));
            prop_assert!(row.iter().all(|v| *v >= 0.0));
        }
    }

    #[test]
    fn matrix_is_rectangular(rows in rows()) {
        let expected = max_len(&rows);
        let data = normalize(&RawSeries::Multi(rows));
        prop_assert_eq!(data.max_subseries_length, expected);
        prop_assert!(data.matrix.iter().all(|row| row.len() == expected + 1));
    }

    #[test]
    fn padding_is_idempotent(values in prop::collection::vec(0i32..100, 0..10), target in 0usize..12) {
        let once = pad_right(&values, 0, target);
        let twice = pad_right(&once, 0, target);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.len(), values.len().max(target));
        prop_assert_eq!(&once[..values.len()], &values[..]);
    }

    #[test]
    fn palette_slots_cycle(index in 0usize..1_000, len in 1usize..12) {
        let slot = palette_slot(index, len).unwrap();
        prop_assert!(slot < len);
        prop_assert_eq!(palette_slot(index + len, len), Some(slot));
    }
}

#[test]
fn empty_palette_has_no_slot() {
    assert_eq!(palette_slot(3, 0), None);
}
