//! Horizontal flip of a rectangular block of cells.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::chart::Chart;

/// The block of cells to flip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlipRegion {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl FlipRegion {
    pub fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self { rows, cols }
    }

    /// Flip the whole chart.
    pub fn whole() -> Self {
        Self { rows: 0..usize::MAX, cols: 0..usize::MAX }
    }
}

/// Reverse each row of the block left to right.
///
/// Both ranges are clamped to the chart; cells outside the block are not
/// touched.
pub fn flip_horizontally(chart: Chart, region: &FlipRegion) -> Chart {
    let mut out = chart;
    let row_end = region.rows.end.min(out.rows());
    let col_end = region.cols.end.min(out.cols());
    let col_start = region.cols.start.min(col_end);

    for r in region.rows.start.min(row_end)..row_end {
        out.row_mut(r)[col_start..col_end].reverse();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::StitchSize;

    fn chart(rows: &[&[u8]]) -> Chart {
        Chart::from_rows(rows, StitchSize::new(1.0, 1.0)).unwrap()
    }

    #[test]
    fn whole_chart_is_mirrored() {
        let out = flip_horizontally(chart(&[&[1, 4, 0], &[3, 3, 5]]), &FlipRegion::whole());
        assert_eq!(out.to_rows(), vec![vec![0, 4, 1], vec![5, 3, 3]]);
    }

    #[test]
    fn only_the_block_changes() {
        let input = chart(&[&[1, 2, 3, 4], &[1, 2, 3, 4], &[1, 2, 3, 4]]);
        let out = flip_horizontally(input, &FlipRegion::new(1..2, 1..4));
        assert_eq!(out.to_rows(), vec![vec![1, 2, 3, 4], vec![1, 4, 3, 2], vec![1, 2, 3, 4]]);
    }

    #[test]
    fn flipping_twice_restores_the_chart() {
        let input = chart(&[&[1, 2, 3, 4, 5], &[0, 6, 1, 0, 2]]);
        let region = FlipRegion::new(0..2, 1..4);
        let twice = flip_horizontally(flip_horizontally(input.clone(), &region), &region);
        assert_eq!(twice, input);
    }

    #[test]
    fn out_of_range_block_is_clamped() {
        let input = chart(&[&[1, 0]]);
        assert_eq!(flip_horizontally(input.clone(), &FlipRegion::new(3..9, 0..2)), input);
        assert_eq!(flip_horizontally(input.clone(), &FlipRegion::new(0..1, 5..9)), input);
        #[allow(clippy::reversed_empty_ranges)]
        let backwards = FlipRegion::new(0..1, 2..0);
        assert_eq!(flip_horizontally(input.clone(), &backwards), input);
    }
}
