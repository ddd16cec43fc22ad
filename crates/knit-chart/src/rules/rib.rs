//! 1x1 ribbing for hems and cuffs.

use crate::chart::{Chart, Symbol};

/// Turn KNIT into PURL on odd columns of every row strictly below `start_row`.
///
/// Other symbols, NONE included, are left alone.
pub fn rib(chart: Chart, start_row: usize) -> Chart {
    let mut out = chart;
    let (knit, purl) = (Symbol::Knit.code(), Symbol::Purl.code());
    for r in start_row.saturating_add(1)..out.rows() {
        for cell in out.row_mut(r).iter_mut().skip(1).step_by(2) {
            if *cell == knit {
                *cell = purl;
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
    fn alternates_below_start_row() {
        let chart = Chart::from_rows(
            &[[1u8, 1, 1, 1], [1, 1, 1, 1], [0, 1, 1, 0]],
            StitchSize::new(1.0, 1.0),
        )
        .unwrap();
        let out = rib(chart, 0);
        assert_eq!(
            out.to_rows(),
            vec![vec![1, 1, 1, 1], vec![1, 2, 1, 2], vec![0, 2, 1, 0]]
        );
    }

    #[test]
    fn start_row_past_the_end_changes_nothing() {
        let chart = Chart::from_rows(&[[1u8, 1]], StitchSize::new(1.0, 1.0)).unwrap();
        assert_eq!(rib(chart.clone(), 5), chart);
        assert_eq!(rib(chart.clone(), usize::MAX), chart);
    }
}
