//! Error types for the knit-chart library.
//!
//! Geometry trouble inside the rasterizer is *not* an error: it is logged
//! and answered with an empty chart. The errors here are for input that
//! never should have reached the pipeline, and for I/O at the edges.

use thiserror::Error;

/// A dimension record that cannot describe a garment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DimensionError {
    #[error("invalid dimensions: `{field}` must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("invalid dimensions: `{field}` rounds to zero stitches at this gauge (got {value} mm)")]
    BelowOneStitch { field: &'static str, value: f64 },

    #[error("invalid dimensions: derived `{field}` is {value} mm, which leaves no room for the garment shape")]
    Inconsistent { field: &'static str, value: f64 },
}

/// SVG path data that cannot be turned into an outline.
#[derive(Error, Debug)]
pub enum PathDataError {
    #[error("path data parse error: {0}")]
    Parse(#[from] svgtypes::Error),

    #[error("SVG parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("path data contains no drawable segments")]
    Empty,

    #[error("no <path> element with a `d` attribute found in SVG")]
    NoPathElement,
}

/// Failure while writing a chart or an outline.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
