//! Row chunking.
//!
//! Flat-knitted pieces are worked two rows at a time, so a shape edge can
//! only move every other row. The left half and the right half of a piece
//! are paired on opposite row parities, which staggers the steps on the
//! two edges by one row.

use crate::chart::{Chart, Symbol};

/// Pair rows and let the lower row of each pair widen the upper row.
///
/// With `offset = rows % 2`, the left half (`col < cols / 2`) pairs upper
/// rows `offset, offset + 2, ...` and the right half pairs upper rows
/// starting at `1 - offset`. Where the lower row of a pair is KNIT, the
/// upper row becomes KNIT too. Predicates read the input chart only.
pub fn chunk_rows(chart: Chart) -> Chart {
    let (rows, cols) = (chart.rows(), chart.cols());
    let mid = cols / 2;
    let offset = rows % 2;
    let mut out = chart.clone();

    let knit = Symbol::Knit.code();
    let halves = [(0..mid, offset), (mid..cols, 1 - offset)];
    for (columns, first_upper) in halves {
        for upper in (first_upper..rows).step_by(2) {
            if upper + 1 >= rows {
                break;
            }
            for c in columns.clone() {
                if chart.get(upper + 1, c) == knit {
                    out.set(upper, c, knit);
                }
            }
        }
    }
    out
}
