//! Left/right symmetry.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::chart::Chart;

/// Which half of the chart is the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn from_name(name: &str) -> Option<Side> {
        match name.to_lowercase().as_str() {
            "left" | "l" => Some(Side::Left),
            "right" | "r" => Some(Side::Right),
            _ => None,
        }
    }
}

/// Mirror settings: the reference half and the rows to rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symmetry {
    pub side: Side,
    pub rows: Range<usize>,
}

impl Symmetry {
    pub fn new(side: Side, rows: Range<usize>) -> Self {
        Self { side, rows }
    }

    /// Mirror every row of the chart.
    pub fn whole(side: Side) -> Self {
        Self { side, rows: 0..usize::MAX }
    }
}

/// Overwrite the non-reference half with the mirror image of the reference.
///
/// With an odd column count the middle column belongs to neither half and
/// is left as is. Rows outside the range (clamped to the chart) are not
/// touched. Running it twice gives the same chart as running it once.
pub fn symmetrize(chart: Chart, symmetry: &Symmetry) -> Chart {
    let mut out = chart;
    let cols = out.cols();
    let center = cols / 2;
    let end = symmetry.rows.end.min(out.rows());

    for r in symmetry.rows.start.min(end)..end {
        let row = out.row_mut(r);
        for c in 0..center {
            let mirror = cols - 1 - c;
            match symmetry.side {
                Side::Left => row[mirror] = row[c],
                Side::Right => row[c] = row[mirror],
            }
        }
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
    fn left_reference_copies_to_the_right() {
        let out = symmetrize(chart(&[&[1, 4, 0, 0]]), &Symmetry::whole(Side::Left));
        assert_eq!(out.to_rows(), vec![vec![1, 4, 4, 1]]);
    }

    #[test]
    fn right_reference_copies_to_the_left() {
        let out = symmetrize(chart(&[&[0, 0, 5, 3]]), &Symmetry::whole(Side::Right));
        assert_eq!(out.to_rows(), vec![vec![3, 5, 5, 3]]);
    }

    #[test]
    fn odd_middle_column_is_untouched() {
        let out = symmetrize(chart(&[&[1, 2, 6, 0, 0]]), &Symmetry::whole(Side::Left));
        assert_eq!(out.to_rows(), vec![vec![1, 2, 6, 2, 1]]);
    }

    #[test]
    fn only_rows_in_range_change() {
        let input = chart(&[&[1, 0], &[1, 0], &[1, 0]]);
        let out = symmetrize(input, &Symmetry::new(Side::Left, 1..2));
        assert_eq!(out.to_rows(), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn out_of_range_rows_are_clamped() {
        let input = chart(&[&[1, 0]]);
        assert_eq!(symmetrize(input.clone(), &Symmetry::new(Side::Left, 5..9)), input);
        #[allow(clippy::reversed_empty_ranges)]
        let backwards = Symmetry::new(Side::Left, 3..1);
        assert_eq!(symmetrize(input.clone(), &backwards), input);
    }

    #[test]
    fn is_idempotent() {
        let input = chart(&[&[1, 2, 3, 4, 5], &[0, 6, 1, 0, 2], &[3, 3, 0, 1, 1]]);
        for side in [Side::Left, Side::Right] {
            let symmetry = Symmetry::whole(side);
            let once = symmetrize(input.clone(), &symmetry);
            let twice = symmetrize(once.clone(), &symmetry);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn side_names_round_trip() {
        for side in [Side::Left, Side::Right] {
            assert_eq!(Side::from_name(side.name()), Some(side));
        }
        assert_eq!(Side::from_name("middle"), None);
    }
}
