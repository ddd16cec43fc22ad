//! Trace command implementation.
//!
//! Rasterizes an arbitrary closed path instead of a garment piece.

use std::io;
use std::path::{Path, PathBuf};

use clap::Args;
use log::debug;

use knit_chart::{first_path_data, grid_size, rasterize, Outline, RuleEngine, StitchSize, MAX_CELLS};

use super::common::{read_file, resolve_delimiter, write_chart, write_file, ChartFormat, CliError, SideArg};

#[derive(Args, Debug)]
pub struct TraceArgs {
    /// SVG file, file holding path data, or path data itself
    pub input: String,

    /// Stitch width in mm
    #[arg(long)]
    pub stitch_width: f64,

    /// Stitch length (row height) in mm
    #[arg(long)]
    pub stitch_length: f64,

    /// Run the shaping rules (no ribbing) on the raw silhouette
    #[arg(long)]
    pub rules: bool,

    /// Mirror the chart from this half (implies --rules)
    #[arg(long, value_enum)]
    pub symmetry: Option<SideArg>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ChartFormat::Csv)]
    pub format: ChartFormat,

    /// Field separator for csv and glyphs (`tab` for a tab)
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,
}

/// Resolve the input argument to SVG path data.
fn path_data_from_input(input: &str) -> Result<String, CliError> {
    let path = Path::new(input);
    if !path.is_file() {
        return Ok(input.to_string());
    }
    let text = read_file(path)?;
    if text.trim_start().starts_with('<') {
        Ok(first_path_data(&text)?)
    } else {
        Ok(text)
    }
}

/// Execute the trace command.
pub fn cmd_trace(args: TraceArgs) -> Result<(), CliError> {
    if !(args.stitch_width > 0.0 && args.stitch_length > 0.0) {
        return Err(CliError::InvalidStitch { width: args.stitch_width, length: args.stitch_length });
    }
    let stitch = StitchSize::new(args.stitch_width, args.stitch_length);

    let d = path_data_from_input(&args.input)?;
    let outline = Outline::from_path_data(&d)?;
    debug!("traced outline with {} segments", outline.segments().len());
    if let Some(bbox) = outline.bounding_box() {
        if grid_size(&bbox, stitch).is_none() {
            return Err(CliError::ChartTooLarge {
                width: bbox.width(),
                height: bbox.height(),
                stitch_width: stitch.width,
                stitch_length: stitch.length,
                max: MAX_CELLS,
            });
        }
    }

    let mut chart = rasterize(&outline, stitch);
    if args.rules || args.symmetry.is_some() {
        let symmetry = args.symmetry.map(|side| knit_chart::Symmetry::whole(side.into()));
        chart = RuleEngine::without_ribbing(symmetry).apply(chart);
    }

    let delimiter = resolve_delimiter(&args.delimiter);
    match args.output {
        Some(path) => {
            let mut buf = Vec::new();
            write_chart(&chart, args.format, delimiter, &mut buf)?;
            write_file(&path, &buf)
        }
        None => write_chart(&chart, args.format, delimiter, io::stdout().lock()),
    }
}
