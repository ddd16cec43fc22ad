//! Stitch symbols and the chart grid they are stored in.
//!
//! A chart cell holds a symbol's numeric code (`u8`). Every pass compares
//! and writes codes; glyphs only show up at export time.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A knitting chart symbol.
///
/// ## Rust Lesson #10: Enums with explicit discriminants
///
/// `#[repr(u8)]` pins the in-memory value of each variant, so
/// `Symbol::Purl as u8` is always `2`. That makes the numeric code part of
/// the type instead of a separate lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    /// Background, no stitch.
    None = 0,
    Knit = 1,
    Purl = 2,
    CastOff = 3,
    /// Knit two together (right-leaning decrease).
    K2tog = 4,
    /// Slip, slip, knit (left-leaning decrease).
    Ssk = 5,
    /// Knit one below.
    K1b = 6,
}

impl Symbol {
    /// Numeric code stored in chart cells.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Glyph used when exporting a chart for people to read.
    pub const fn glyph(self) -> &'static str {
        match self {
            Symbol::None => "#",
            Symbol::Knit => "",
            Symbol::Purl => "-",
            Symbol::CastOff => "●",
            Symbol::K2tog => "＼",
            Symbol::Ssk => "／",
            Symbol::K1b => "∨",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Symbol::None => "none",
            Symbol::Knit => "knit",
            Symbol::Purl => "purl",
            Symbol::CastOff => "cast-off",
            Symbol::K2tog => "k2tog",
            Symbol::Ssk => "ssk",
            Symbol::K1b => "k1b",
        }
    }

    /// Map a stored code back to a symbol. Unknown codes read as `None`.
    pub const fn from_code(code: u8) -> Symbol {
        match code {
            1 => Symbol::Knit,
            2 => Symbol::Purl,
            3 => Symbol::CastOff,
            4 => Symbol::K2tog,
            5 => Symbol::Ssk,
            6 => Symbol::K1b,
            _ => Symbol::None,
        }
    }

    pub const fn all() -> &'static [Symbol] {
        &[
            Symbol::None,
            Symbol::Knit,
            Symbol::Purl,
            Symbol::CastOff,
            Symbol::K2tog,
            Symbol::Ssk,
            Symbol::K1b,
        ]
    }
}

/// Physical footprint of one stitch, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StitchSize {
    pub width: f64,
    pub length: f64,
}

impl StitchSize {
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }
}

/// Row-major grid of symbol codes.
///
/// Row 0 is the top of the piece (shoulder line), the last row is the
/// hem or cuff edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
    stitch: StitchSize,
}

impl Chart {
    /// An all-`None` chart.
    pub fn new(rows: usize, cols: usize, stitch: StitchSize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Symbol::None.code(); rows * cols],
            stitch,
        }
    }

    /// Build a chart from explicit rows. Every row must have the same length.
    ///
    /// Returns `None` when the rows are ragged.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], stitch: StitchSize) -> Option<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows.iter().any(|r| r.as_ref().len() != cols) {
            return None;
        }
        let cells = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Some(Self { rows: rows.len(), cols, cells, stitch })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn stitch(&self) -> StitchSize {
        self.stitch
    }

    /// Code at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, code: u8) {
        self.cells[row * self.cols + col] = code;
    }

    /// Whether the cell at `(row, col)` holds `symbol`.
    #[inline]
    pub fn is(&self, row: usize, col: usize, symbol: Symbol) -> bool {
        self.get(row, col) == symbol.code()
    }

    #[inline]
    pub fn symbol_at(&self, row: usize, col: usize) -> Symbol {
        Symbol::from_code(self.get(row, col))
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let cols = self.cols;
        &mut self.cells[row * cols..(row + 1) * cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() on an empty row width would panic
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// How many cells hold `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|&&c| c == symbol.code()).count()
    }

    /// True if every cell holds `symbol` (vacuously true when empty).
    pub fn is_all(&self, symbol: Symbol) -> bool {
        self.cells.iter().all(|&c| c == symbol.code())
    }

    /// Consume the chart and return a copy with a row of `symbol` on top.
    pub fn with_row_prepended(self, symbol: Symbol) -> Chart {
        let mut cells = Vec::with_capacity(self.cells.len() + self.cols);
        cells.resize(self.cols, symbol.code());
        cells.extend_from_slice(&self.cells);
        Chart {
            rows: self.rows + 1,
            cols: self.cols,
            cells,
            stitch: self.stitch,
        }
    }

    /// Rows as nested vectors, for serialization.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for Chart {
    type Output = u8;

    fn index(&self, (row, col): (usize, usize)) -> &u8 {
        &self.cells[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Chart {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut u8 {
        &mut self.cells[row * self.cols + col]
    }
}

/// Compact debug rendering: `.` for none, the first letter-ish mark otherwise.
impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: String = row
                .iter()
                .map(|&code| match Symbol::from_code(code) {
                    Symbol::None => '.',
                    Symbol::Knit => 'k',
                    Symbol::Purl => 'p',
                    Symbol::CastOff => 'o',
                    Symbol::K2tog => '\\',
                    Symbol::Ssk => '/',
                    Symbol::K1b => 'v',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn stitch() -> StitchSize {
        StitchSize::new(5.0, 3.572)
    }

    #[test]
    fn codes_are_stable() {
        let codes: Vec<u8> = Symbol::all().iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn glyphs_match_export_table() {
        assert_eq!(Symbol::None.glyph(), "#");
        assert_eq!(Symbol::Knit.glyph(), "");
        assert_eq!(Symbol::Purl.glyph(), "-");
        assert_eq!(Symbol::CastOff.glyph(), "●");
        assert_eq!(Symbol::K2tog.glyph(), "＼");
        assert_eq!(Symbol::Ssk.glyph(), "／");
        assert_eq!(Symbol::K1b.glyph(), "∨");
    }

    #[test]
    fn from_code_round_trips_and_defaults_to_none() {
        for &symbol in Symbol::all() {
            assert_eq!(Symbol::from_code(symbol.code()), symbol);
        }
        assert_eq!(Symbol::from_code(42), Symbol::None);
    }

    #[test]
    fn new_chart_is_empty() {
        let chart = Chart::new(3, 4, stitch());
        assert_eq!(chart.rows(), 3);
        assert_eq!(chart.cols(), 4);
        assert!(chart.is_all(Symbol::None));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 1], vec![1]];
        assert!(Chart::from_rows(&rows, stitch()).is_none());
    }

    #[test]
    fn indexing_is_row_major() {
        let chart = Chart::from_rows(&[[0u8, 1, 2], [3, 4, 5]], stitch()).unwrap();
        assert_eq!(chart[(0, 2)], 2);
        assert_eq!(chart[(1, 0)], 3);
        assert_eq!(chart.row(1), &[3, 4, 5]);
        assert_eq!(chart.symbol_at(1, 1), Symbol::K2tog);
    }

    #[test]
    fn prepend_row_shifts_everything_down() {
        let chart = Chart::from_rows(&[[1u8, 1], [2, 2]], stitch()).unwrap();
        let padded = chart.with_row_prepended(Symbol::None);
        assert_eq!(padded.rows(), 3);
        assert_eq!(padded.to_rows(), vec![vec![0, 0], vec![1, 1], vec![2, 2]]);
    }

    #[test]
    fn display_draws_one_line_per_row() {
        let chart = Chart::from_rows(&[[0u8, 1, 2], [3, 4, 5]], stitch()).unwrap();
        assert_eq!(chart.to_string(), ".kp\no\\/\n");
    }
}
