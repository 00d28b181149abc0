#![forbid(unsafe_code)]

//! Per-frame row displacement.
//!
//! Given the vertical drag offset `dy` (current pointer Y minus press Y) and
//! the frozen [`RowLayout`], every row gets a vertical offset:
//!
//! - the source row tracks the pointer exactly (`dy`);
//! - a row on the side the drag is heading toward shifts by one source-row
//!   height, opposite the drag direction, once the dragged row's leading
//!   edge has crossed that row's trailing boundary;
//! - every other row stays at `0`.
//!
//! Dragging upward measures the crossing against the row's bottom minus the
//! source height, since the leading edge is then the source's upper edge.
//!
//! # Invariants
//!
//! 1. `out[source_index] == dy` for every `dy`.
//! 2. Non-source values are exactly `0`, `-source_height` (rows below, drag
//!    down), or `+source_height` (rows above, drag up).
//! 3. Displaced rows form a contiguous run adjacent to the source.
//! 4. The result depends only on `dy` and the layout.

use std::cmp::Ordering;

use crate::layout::RowLayout;

/// Sign of `value` as `-1`, `0`, or `1`. Zero and NaN map to `0`.
fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Displacement of a single row for drag offset `dy`.
#[must_use]
pub fn displacement_for_row(layout: &RowLayout, index: usize, dy: f64) -> f64 {
    let source_index = layout.source_index();
    if index == source_index {
        return dy;
    }

    let direction = sign(dy);
    let side = match index.cmp(&source_index) {
        Ordering::Less => -1,
        Ordering::Greater => 1,
        Ordering::Equal => 0,
    };
    if direction == 0 || direction != side {
        return 0.0;
    }

    let Some(&bottom) = layout.bottoms().get(index) else {
        return 0.0;
    };
    let source_height = layout.source_height();
    let leading_edge_adjust = if dy < 0.0 { source_height } else { 0.0 };
    let crossing =
        f64::from(direction) * (layout.source_mid_point() + dy - bottom - leading_edge_adjust);

    if crossing > 0.0 {
        if dy > 0.0 { -source_height } else { source_height }
    } else {
        0.0
    }
}

/// Displacement of every row for drag offset `dy`, parallel to the layout.
#[must_use]
pub fn compute_displacements(layout: &RowLayout, dy: f64) -> Vec<f64> {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!(
        "compute_displacements",
        rows = layout.len(),
        source_index = layout.source_index(),
        dy
    )
    .entered();

    (0..layout.len())
        .map(|index| displacement_for_row(layout, index, dy))
        .collect()
}

/// Indices whose displacement differs between two frames.
///
/// Indices present in only one of the slices count as changed.
pub fn changed_rows<'a>(previous: &'a [f64], next: &'a [f64]) -> impl Iterator<Item = usize> + 'a {
    let len = previous.len().max(next.len());
    (0..len).filter(move |&index| previous.get(index) != next.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_rows(source: usize) -> RowLayout {
        RowLayout::from_heights(&[40.0; 5], source).expect("valid heights")
    }

    #[test]
    fn source_tracks_pointer() {
        let layout = five_rows(2);
        for dy in [-500.0, -45.0, -0.5, 0.0, 0.5, 45.0, 500.0] {
            assert_eq!(compute_displacements(&layout, dy)[2], dy);
        }
    }

    #[test]
    fn drag_down_past_first_neighbor() {
        let layout = five_rows(2);
        assert_eq!(
            compute_displacements(&layout, 45.0),
            vec![0.0, 0.0, 45.0, -40.0, 0.0]
        );
    }

    #[test]
    fn drag_down_below_row_threshold() {
        let layout = five_rows(2);
        assert_eq!(
            compute_displacements(&layout, 10.0),
            vec![0.0, 0.0, 10.0, 0.0, 0.0]
        );
    }

    #[test]
    fn drag_up_past_first_neighbor() {
        let layout = five_rows(2);
        assert_eq!(
            compute_displacements(&layout, -45.0),
            vec![0.0, 40.0, -45.0, 0.0, 0.0]
        );
    }

    #[test]
    fn drag_up_past_two_neighbors() {
        let layout = five_rows(2);
        assert_eq!(
            compute_displacements(&layout, -61.0),
            vec![40.0, 40.0, -61.0, 0.0, 0.0]
        );
    }

    #[test]
    fn crossing_boundary_is_strict() {
        let layout = five_rows(2);
        // mid(140) + dy(20) - bottom(160) == 0, not past the boundary yet.
        assert_eq!(displacement_for_row(&layout, 3, 20.0), 0.0);
        assert_eq!(displacement_for_row(&layout, 3, 20.5), -40.0);
        assert_eq!(displacement_for_row(&layout, 1, -20.0), 0.0);
        assert_eq!(displacement_for_row(&layout, 1, -20.5), 40.0);
    }

    #[test]
    fn rows_behind_the_drag_never_move() {
        let layout = five_rows(2);
        let down = compute_displacements(&layout, 150.0);
        assert_eq!(&down[..2], &[0.0, 0.0]);
        let up = compute_displacements(&layout, -150.0);
        assert_eq!(&up[3..], &[0.0, 0.0]);
    }

    #[test]
    fn zero_offset_moves_nothing() {
        let layout = five_rows(0);
        assert_eq!(compute_displacements(&layout, 0.0), vec![0.0; 5]);
    }

    #[test]
    fn uses_source_height_for_uneven_rows() {
        let layout = RowLayout::from_heights(&[10.0, 60.0, 10.0, 10.0], 1).expect("valid heights");
        // mid = 70 + 30 = 100; row 2 bottom = 80, row 3 bottom = 90.
        assert_eq!(
            compute_displacements(&layout, 1.0),
            vec![0.0, 1.0, -60.0, -60.0]
        );
    }

    #[test]
    fn single_row_only_tracks_pointer() {
        let layout = RowLayout::from_heights(&[40.0], 0).expect("valid heights");
        assert_eq!(compute_displacements(&layout, 75.0), vec![75.0]);
        assert_eq!(compute_displacements(&layout, -75.0), vec![-75.0]);
    }

    #[test]
    fn changed_rows_reports_differences() {
        let previous = [0.0, 0.0, 10.0, 0.0];
        let next = [0.0, 0.0, 45.0, -40.0];
        assert_eq!(changed_rows(&previous, &next).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(changed_rows(&next, &next).count(), 0);
    }

    #[test]
    fn changed_rows_counts_length_mismatch() {
        let previous: [f64; 0] = [];
        let next = [0.0, 5.0];
        assert_eq!(changed_rows(&previous, &next).collect::<Vec<_>>(), vec![0, 1]);
    }
}
