//! Knit-one-below markers on lone edge stitches.

use crate::chart::{Chart, Symbol};

/// Scan every 2x2 window whose top two cells are NONE.
///
/// If only the lower-left cell is KNIT the upper-right becomes K1B; if
/// only the lower-right cell is KNIT the upper-left becomes K1B.
pub fn k1b(chart: Chart) -> Chart {
    let mut out = chart.clone();
    let (none, knit, k1b) = (Symbol::None.code(), Symbol::Knit.code(), Symbol::K1b.code());
    for r in 0..chart.rows().saturating_sub(1) {
        for c in 0..chart.cols().saturating_sub(1) {
            let (tl, tr) = (chart.get(r, c), chart.get(r, c + 1));
            let (bl, br) = (chart.get(r + 1, c), chart.get(r + 1, c + 1));
            if tl != none || tr != none {
                continue;
            }
            if bl == knit && br == none {
                out.set(r, c + 1, k1b);
            } else if bl == none && br == knit {
                out.set(r, c, k1b);
            }
        }
    }
    out
}
