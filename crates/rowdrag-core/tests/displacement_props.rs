#![forbid(unsafe_code)]

//! Property tests for the displacement kernel and drop resolution.

use proptest::prelude::*;
use rowdrag_core::{Activation, RowLayout, compute_displacements, resolve_target_index};

fn layout_strategy() -> impl Strategy<Value = RowLayout> {
    prop::collection::vec(
        prop_oneof![Just(0.0_f64), 1.0_f64..80.0],
        1..12,
    )
    .prop_flat_map(|heights| {
        let len = heights.len();
        (Just(heights), 0..len)
    })
    .prop_map(|(heights, source)| {
        RowLayout::from_heights(&heights, source).expect("generated heights are valid")
    })
}

/// Indices of non-source rows with nonzero displacement.
fn displaced(layout: &RowLayout, frame: &[f64]) -> Vec<usize> {
    frame
        .iter()
        .enumerate()
        .filter(|&(index, &value)| index != layout.source_index() && value != 0.0)
        .map(|(index, _)| index)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn source_row_tracks_offset_exactly(layout in layout_strategy(), dy in -600.0_f64..600.0) {
        let frame = compute_displacements(&layout, dy);
        prop_assert_eq!(frame.len(), layout.len());
        prop_assert_eq!(frame[layout.source_index()], dy);
    }

    #[test]
    fn neighbors_shift_by_exactly_one_source_height(
        layout in layout_strategy(),
        dy in -600.0_f64..600.0,
    ) {
        let frame = compute_displacements(&layout, dy);
        let height = layout.source_height();
        for (index, &value) in frame.iter().enumerate() {
            if index == layout.source_index() {
                continue;
            }
            prop_assert!(
                value == 0.0 || (dy > 0.0 && value == -height) || (dy < 0.0 && value == height),
                "row {} displaced by {} for dy {}", index, value, dy
            );
        }
    }

    #[test]
    fn displaced_rows_form_a_contiguous_run_next_to_the_source(
        layout in layout_strategy(),
        dy in -600.0_f64..600.0,
    ) {
        let frame = compute_displacements(&layout, dy);
        let rows = displaced(&layout, &frame);
        let source = layout.source_index();
        let expected: Vec<usize> = if dy > 0.0 {
            (source + 1..source + 1 + rows.len()).collect()
        } else {
            (source - rows.len()..source).collect()
        };
        prop_assert_eq!(rows, expected);
    }

    #[test]
    fn growing_offset_never_releases_a_displaced_row(
        layout in layout_strategy(),
        steps in prop::collection::vec(0.5_f64..15.0, 1..40),
        downward in any::<bool>(),
    ) {
        let sign = if downward { 1.0 } else { -1.0 };
        let mut dy = 0.0;
        let mut previous = Vec::new();
        for step in steps {
            dy += sign * step;
            let rows = displaced(&layout, &compute_displacements(&layout, dy));
            prop_assert!(rows.len() >= previous.len());
            for index in &previous {
                prop_assert!(rows.contains(index));
            }
            previous = rows;
        }
    }

    #[test]
    fn returning_to_origin_restores_every_row(
        layout in layout_strategy(),
        distance in -400.0_f64..400.0,
    ) {
        let rows: Vec<usize> = (0..layout.len()).collect();
        let source = rows[layout.source_index()];
        let heights: Vec<f64> = (0..layout.len())
            .map(|index| layout.height(index).unwrap_or(0.0))
            .collect();
        let mut activation =
            Activation::capture(rows, &source, |&row| heights[row]).expect("source present");

        activation.update(distance);
        activation.update(0.0);
        prop_assert!(activation.movements().iter().all(|&value| value == 0.0));
    }

    #[test]
    fn drop_resolution_is_idempotent_and_in_bounds(
        layout in layout_strategy(),
        dy in -600.0_f64..600.0,
    ) {
        let frame = compute_displacements(&layout, dy);
        let first = resolve_target_index(&frame, layout.source_index());
        let second = resolve_target_index(&frame, layout.source_index());
        prop_assert_eq!(first, second);
        prop_assert!(first < layout.len());
    }

    #[test]
    fn drop_lands_past_every_displaced_row(
        layout in layout_strategy(),
        dy in -600.0_f64..600.0,
    ) {
        let frame = compute_displacements(&layout, dy);
        let source = layout.source_index();
        let moved = displaced(&layout, &frame).len();
        let target = resolve_target_index(&frame, source);
        if dy > 0.0 && layout.source_height() > 0.0 {
            prop_assert_eq!(target, source + moved);
        } else if dy < 0.0 && layout.source_height() > 0.0 {
            prop_assert_eq!(target, source - moved);
        } else {
            prop_assert_eq!(target, source);
        }
    }
}

#[test]
fn five_equal_rows_drag_down_45() {
    let layout = RowLayout::from_heights(&[40.0; 5], 2).expect("valid heights");
    let frame = compute_displacements(&layout, 45.0);
    assert_eq!(frame, vec![0.0, 0.0, 45.0, -40.0, 0.0]);
    assert_eq!(resolve_target_index(&frame, 2), 3);
}

#[test]
fn five_equal_rows_drag_down_10() {
    let layout = RowLayout::from_heights(&[40.0; 5], 2).expect("valid heights");
    let frame = compute_displacements(&layout, 10.0);
    assert_eq!(frame, vec![0.0, 0.0, 10.0, 0.0, 0.0]);
    assert_eq!(resolve_target_index(&frame, 2), 2);
}

#[test]
fn neighbors_displace_in_order_of_proximity() {
    let layout = RowLayout::from_heights(&[40.0; 6], 0).expect("valid heights");
    let mut order = Vec::new();
    let mut dy = 0.0;
    while dy < 240.0 {
        dy += 1.0;
        let frame = compute_displacements(&layout, dy);
        for (index, &value) in frame.iter().enumerate().skip(1) {
            if value != 0.0 && !order.contains(&index) {
                order.push(index);
            }
        }
    }
    assert_eq!(order, vec![1, 2, 3, 4, 5]);
}
