//! Outline to stitch grid.
//!
//! Each chart cell is one stitch. A cell is KNIT when its center lies
//! inside the outline, NONE otherwise. Nothing here ever fails: outlines
//! that cannot be filled produce an empty chart and a warning.

use log::{debug, warn};
use rayon::prelude::*;

use crate::chart::{Chart, StitchSize, Symbol};
use crate::geometry::{whole_steps, BoundingBox, Point};
use crate::outline::{Outline, SAMPLES_PER_SEGMENT};
use crate::region::Region;

/// Largest chart `rasterize` will allocate. A whole sweater at a fine
/// gauge is well under a million cells.
pub const MAX_CELLS: usize = 50_000_000;

/// Rows and columns of the grid covering `bbox`, or `None` when the cell
/// count overflows or exceeds [`MAX_CELLS`].
pub fn grid_size(bbox: &BoundingBox, stitch: StitchSize) -> Option<(usize, usize)> {
    let cols = whole_steps(bbox.width(), stitch.width);
    let rows = whole_steps(bbox.height(), stitch.length);
    match rows.checked_mul(cols) {
        Some(cells) if cells <= MAX_CELLS => Some((rows, cols)),
        _ => None,
    }
}

/// Rasterize an outline at one stitch per cell.
///
/// The grid is anchored at the outline's bounding-box origin and covers
/// `floor(width / stitch.width)` columns by `floor(height / stitch.length)`
/// rows.
///
/// ## Rust Lesson #20: Data parallelism with rayon
///
/// `par_chunks_mut(cols)` hands every row of the cell buffer to a worker
/// as a disjoint `&mut [u8]`. The borrow checker knows the chunks cannot
/// overlap, so there is no locking and no unsafe code; the region is
/// shared read-only across threads.
pub fn rasterize(outline: &Outline, stitch: StitchSize) -> Chart {
    if !(stitch.width > 0.0 && stitch.length > 0.0) {
        warn!(
            "stitch size {} x {} mm is not positive, returning an empty chart",
            stitch.width, stitch.length
        );
        return Chart::new(0, 0, stitch);
    }

    let Some(bbox) = outline.bounding_box() else {
        warn!("outline has no segments, returning an empty chart");
        return Chart::new(0, 0, stitch);
    };

    let Some((rows, cols)) = grid_size(&bbox, stitch) else {
        warn!(
            "{:.3} x {:.3} mm outline at {} x {} mm stitches needs more than {} cells, returning an empty chart",
            bbox.width(),
            bbox.height(),
            stitch.width,
            stitch.length,
            MAX_CELLS
        );
        return Chart::new(0, 0, stitch);
    };
    let mut chart = Chart::new(rows, cols, stitch);
    debug!(
        "rasterizing {:.3} x {:.3} mm outline into {} rows x {} cols",
        bbox.width(),
        bbox.height(),
        rows,
        cols
    );

    if !outline.is_closed() {
        warn!("outline is not closed, returning an empty {}x{} chart", rows, cols);
        return chart;
    }

    let points = outline.flatten(SAMPLES_PER_SEGMENT);
    let Some(region) = Region::from_points(&points) else {
        warn!(
            "outline flattens to a degenerate ring ({} points), returning an empty {}x{} chart",
            points.len(),
            rows,
            cols
        );
        return chart;
    };

    if cols == 0 || rows == 0 {
        return chart;
    }

    let knit = Symbol::Knit.code();
    chart
        .cells_mut()
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, cells)| {
            let y = bbox.min_y + row as f64 * stitch.length + stitch.length / 2.0;
            for (col, cell) in cells.iter_mut().enumerate() {
                let x = bbox.min_x + col as f64 * stitch.width + stitch.width / 2.0;
                if region.contains(Point::new(x, y)) {
                    *cell = knit;
                }
            }
        });

    debug!("filled {} of {} cells", chart.count(Symbol::Knit), rows * cols);
    chart
}

// ============================================================================
// TESTS
// ============================================================================
