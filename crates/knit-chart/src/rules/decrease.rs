//! Decreases along stepped edges.

use crate::chart::{Chart, Symbol};

/// Place decreases next to cast-off cells.
///
/// A KNIT directly left of a CAST_OFF becomes K2TOG. A NONE directly
/// right of a CAST_OFF becomes SSK. Both tests read the input, and the two
/// never target the same cell (one rewrites KNIT, the other NONE).
pub fn decreases(chart: Chart) -> Chart {
    let mut out = chart.clone();
    let (none, knit, cast_off) = (Symbol::None.code(), Symbol::Knit.code(), Symbol::CastOff.code());
    for r in 0..chart.rows() {
        let row = chart.row(r);
        for (c, pair) in row.windows(2).enumerate() {
            let (left, right) = (pair[0], pair[1]);
            if left == knit && right == cast_off {
                out.set(r, c, Symbol::K2tog.code());
            }
            if left == cast_off && right == none {
                out.set(r, c + 1, Symbol::Ssk.code());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::StitchSize;

    #[test]
    fn k2tog_left_of_cast_off_and_ssk_right_of_it() {
        let chart = Chart::from_rows(&[[1u8, 3, 3, 0, 0]], StitchSize::new(1.0, 1.0)).unwrap();
        let out = decreases(chart);
        assert_eq!(out.to_rows(), vec![vec![4, 3, 3, 5, 0]]);
    }

    #[test]
    fn isolated_cells_are_untouched() {
        let chart = Chart::from_rows(&[[1u8, 0, 3, 1], [0, 1, 1, 0]], StitchSize::new(1.0, 1.0)).unwrap();
        let out = decreases(chart);
        // The lone cast-off at col 2 has NONE on its left and KNIT on its right
        assert_eq!(out.to_rows(), vec![vec![1, 0, 3, 1], vec![0, 1, 1, 0]]);
    }

    #[test]
    fn single_column_chart_is_fine() {
        let chart = Chart::from_rows(&[[3u8], [1]], StitchSize::new(1.0, 1.0)).unwrap();
        assert_eq!(decreases(chart.clone()), chart);
    }
}
