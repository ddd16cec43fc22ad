//! Top padding.

use crate::chart::{Chart, Symbol};

/// Prepend one NONE row so the top edge gets a row to cast off into.
pub fn pad_top(chart: Chart) -> Chart {
    chart.with_row_prepended(Symbol::None)
}
