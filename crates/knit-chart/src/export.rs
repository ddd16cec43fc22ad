//! Chart and outline output.
//!
//! Charts go out as integer codes (CSV), as glyphs for people to read, or
//! as JSON. Outlines go out as a standalone SVG document.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::chart::{Chart, StitchSize, Symbol};
use crate::error::ExportError;
use crate::outline::Outline;

/// Default field separator for CSV and glyph output.
pub const DEFAULT_DELIMITER: &str = ",";

/// Write integer codes, one chart row per line.
pub fn write_csv<W: Write>(chart: &Chart, mut writer: W, delimiter: &str) -> Result<(), ExportError> {
    for row in chart.iter_rows() {
        let line: Vec<String> = row.iter().map(|code| code.to_string()).collect();
        writeln!(writer, "{}", line.join(delimiter))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write display glyphs, one chart row per line.
///
/// KNIT has an empty glyph, so a knit cell shows up as two delimiters in a
/// row. That is what spreadsheet users expect from a blank stitch.
pub fn write_glyphs<W: Write>(chart: &Chart, mut writer: W, delimiter: &str) -> Result<(), ExportError> {
    for row in chart.iter_rows() {
        let line: Vec<&str> = row.iter().map(|&code| Symbol::from_code(code).glyph()).collect();
        writeln!(writer, "{}", line.join(delimiter))?;
    }
    writer.flush()?;
    Ok(())
}

/// JSON form of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartJson {
    pub rows: usize,
    pub cols: usize,
    pub stitch_width: f64,
    pub stitch_length: f64,
    pub cells: Vec<Vec<u8>>,
}

impl From<&Chart> for ChartJson {
    fn from(chart: &Chart) -> Self {
        let stitch = chart.stitch();
        Self {
            rows: chart.rows(),
            cols: chart.cols(),
            stitch_width: stitch.width,
            stitch_length: stitch.length,
            cells: chart.to_rows(),
        }
    }
}

impl ChartJson {
    /// Back to a chart. `None` when `cells` is ragged or disagrees with
    /// `rows`/`cols`.
    pub fn to_chart(&self) -> Option<Chart> {
        let stitch = StitchSize::new(self.stitch_width, self.stitch_length);
        let chart = Chart::from_rows(&self.cells, stitch)?;
        if chart.rows() != self.rows || (self.rows > 0 && chart.cols() != self.cols) {
            return None;
        }
        Some(chart)
    }
}

/// Write a chart as pretty-printed JSON.
pub fn write_json<W: Write>(chart: &Chart, mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, &ChartJson::from(chart))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// A standalone SVG document showing one outline, sized in millimeters.
pub fn outline_svg_document(outline: &Outline) -> String {
    let (min_x, min_y, width, height) = match outline.bounding_box() {
        Some(b) => (b.min_x, b.min_y, b.width(), b.height()),
        None => (0.0, 0.0, 0.0, 0.0),
    };
    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{:.2}mm" height="{:.2}mm"
     viewBox="{:.3} {:.3} {:.3} {:.3}">
  <path d="{}" fill="none" stroke="black" stroke-width="0.5"/>
</svg>
"##,
        width,
        height,
        min_x,
        min_y,
        width,
        height,
        outline.to_path_data()
    )
}

// ============================================================================
// TESTS
// ============================================================================
