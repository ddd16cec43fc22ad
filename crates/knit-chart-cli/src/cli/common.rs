//! Common utilities shared across CLI commands.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

use knit_chart::{
    write_csv, write_glyphs, write_json, Chart, DimensionError, DimensionInput, Dimensions, ExportError,
    PathDataError, Piece, Side,
};

/// Everything a command can fail with.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error("{} is not a valid YAML dimension file: {source}", path.display())]
    Yaml { path: PathBuf, source: serde_yaml::Error },

    #[error("{} is not a valid JSON dimension file: {source}", path.display())]
    Json { path: PathBuf, source: serde_json::Error },

    #[error(transparent)]
    Dimensions(#[from] DimensionError),

    #[error(transparent)]
    PathData(#[from] PathDataError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("stitch size must be positive, got {width} x {length} mm")]
    InvalidStitch { width: f64, length: f64 },

    #[error("{width:.3} x {height:.3} mm at {stitch_width} x {stitch_length} mm stitches needs more than {max} cells")]
    ChartTooLarge { width: f64, height: f64, stitch_width: f64, stitch_length: f64, max: usize },
}

/// Output format for charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartFormat {
    /// Integer symbol codes
    Csv,
    /// Display glyphs
    Glyphs,
    /// JSON object with grid size, stitch size and cells
    Json,
}

impl ChartFormat {
    /// File extension for charts written in this format.
    pub fn extension(self) -> &'static str {
        match self {
            ChartFormat::Csv => "csv",
            ChartFormat::Glyphs => "txt",
            ChartFormat::Json => "json",
        }
    }
}

/// Reference half for mirrored charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    Left,
    Right,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Side {
        match side {
            SideArg::Left => Side::Left,
            SideArg::Right => Side::Right,
        }
    }
}

/// clap value parser for garment pieces.
pub fn parse_piece(name: &str) -> Result<Piece, String> {
    Piece::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = Piece::all().iter().map(Piece::name).collect();
        format!("unknown piece '{}' (expected one of: {}, front, back)", name, known.join(", "))
    })
}

/// Turn a delimiter argument into the literal separator.
///
/// Shells make a bare tab awkward to type, so `tab` and `\t` are accepted.
pub fn resolve_delimiter(arg: &str) -> &str {
    match arg {
        "tab" | "\\t" => "\t",
        other => other,
    }
}

pub fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

pub fn write_file(path: &Path, contents: &[u8]) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write { path: path.to_path_buf(), source })
}

/// Load and validate a dimension file.
///
/// `.json` files are read as JSON; anything else as YAML (which also
/// accepts plain JSON).
pub fn load_dimensions(path: &Path) -> Result<Dimensions, CliError> {
    let text = read_file(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let input: DimensionInput = if is_json {
        serde_json::from_str(&text).map_err(|source| CliError::Json { path: path.to_path_buf(), source })?
    } else {
        serde_yaml::from_str(&text).map_err(|source| CliError::Yaml { path: path.to_path_buf(), source })?
    };
    log::debug!("loaded dimensions from {}", path.display());
    Ok(Dimensions::new(input)?)
}

/// Write one chart in the chosen format.
pub fn write_chart<W: Write>(chart: &Chart, format: ChartFormat, delimiter: &str, writer: W) -> Result<(), CliError> {
    match format {
        ChartFormat::Csv => write_csv(chart, writer, delimiter)?,
        ChartFormat::Glyphs => write_glyphs(chart, writer, delimiter)?,
        ChartFormat::Json => write_json(chart, writer)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_parser_accepts_short_names() {
        assert_eq!(parse_piece("front"), Ok(Piece::FrontBody));
        assert_eq!(parse_piece("sleeve"), Ok(Piece::Sleeve));
        assert!(parse_piece("hood").unwrap_err().contains("front_body"));
    }

    #[test]
    fn tab_delimiter_aliases() {
        assert_eq!(resolve_delimiter("tab"), "\t");
        assert_eq!(resolve_delimiter("\\t"), "\t");
        assert_eq!(resolve_delimiter(";"), ";");
    }

    #[test]
    fn extensions_per_format() {
        assert_eq!(ChartFormat::Csv.extension(), "csv");
        assert_eq!(ChartFormat::Glyphs.extension(), "txt");
        assert_eq!(ChartFormat::Json.extension(), "json");
    }
}
