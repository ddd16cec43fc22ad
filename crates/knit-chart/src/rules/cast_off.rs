//! Cast-off edges.

use crate::chart::{Chart, Symbol};

/// Mark every NONE cell sitting directly on top of a KNIT cell as CAST_OFF.
pub fn cast_off(chart: Chart) -> Chart {
    let mut out = chart.clone();
    let (none, knit) = (Symbol::None.code(), Symbol::Knit.code());
    for r in 0..chart.rows().saturating_sub(1) {
        for c in 0..chart.cols() {
            if chart.get(r + 1, c) == knit && chart.get(r, c) == none {
                out.set(r, c, Symbol::CastOff.code());
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
    fn caps_knit_columns() {
        let chart = Chart::from_rows(
            &[[0u8, 0, 0], [0, 1, 0], [1, 1, 2]],
            StitchSize::new(1.0, 1.0),
        )
        .unwrap();
        let out = cast_off(chart);
        assert_eq!(
            out.to_rows(),
            vec![vec![0, 3, 0], vec![3, 1, 0], vec![1, 1, 2]]
        );
    }

    #[test]
    fn every_new_cast_off_had_knit_below_and_none_above() {
        let input = Chart::from_rows(
            &[[0u8, 0, 0, 0], [0, 1, 1, 0], [1, 1, 1, 1], [1, 2, 1, 1]],
            StitchSize::new(1.0, 1.0),
        )
        .unwrap();
        let out = cast_off(input.clone());
        for r in 0..out.rows() {
            for c in 0..out.cols() {
                if out.is(r, c, Symbol::CastOff) && !input.is(r, c, Symbol::CastOff) {
                    assert!(input.is(r, c, Symbol::None));
                    assert!(input.is(r + 1, c, Symbol::Knit));
                }
            }
        }
        assert_eq!(out.count(Symbol::CastOff), 4);
    }
}
