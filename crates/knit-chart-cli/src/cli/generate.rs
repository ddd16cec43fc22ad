//! Generate command implementation.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use log::info;

use knit_chart::{generate_charts, ChartJson, ChartOptions, ExportError};

use super::common::{load_dimensions, resolve_delimiter, write_chart, write_file, ChartFormat, CliError, SideArg};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Dimension file (.yaml, .yml or .json)
    pub dimensions: PathBuf,

    /// Directory to write front_body/back_body/sleeve charts into (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ChartFormat::Csv)]
    pub format: ChartFormat,

    /// Field separator for csv and glyphs (`tab` for a tab)
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Mirror every chart from this half
    #[arg(long, value_enum)]
    pub symmetry: Option<SideArg>,
}

/// Execute the generate command.
pub fn cmd_generate(args: GenerateArgs) -> Result<(), CliError> {
    let dims = load_dimensions(&args.dimensions)?;
    let options = ChartOptions { symmetry: args.symmetry.map(Into::into) };
    let charts = generate_charts(&dims, options);
    let delimiter = resolve_delimiter(&args.delimiter);

    match args.output {
        Some(dir) => {
            fs::create_dir_all(&dir).map_err(|source| CliError::Write { path: dir.clone(), source })?;
            for (piece, chart) in charts.iter() {
                let path = dir.join(format!("{}.{}", piece.name(), args.format.extension()));
                let mut buf = Vec::new();
                write_chart(chart, args.format, delimiter, &mut buf)?;
                write_file(&path, &buf)?;
                info!("wrote {} ({} x {})", path.display(), chart.rows(), chart.cols());
            }
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if args.format == ChartFormat::Json {
                // One JSON object keyed by piece name
                let all: serde_json::Map<String, serde_json::Value> = charts
                    .iter()
                    .map(|(piece, chart)| {
                        serde_json::to_value(ChartJson::from(chart))
                            .map(|value| (piece.name().to_string(), value))
                    })
                    .collect::<Result<_, _>>()
                    .map_err(ExportError::from)?;
                serde_json::to_writer_pretty(&mut out, &all).map_err(ExportError::from)?;
                writeln!(out).map_err(ExportError::from)?;
            } else {
                for (i, (piece, chart)) in charts.iter().enumerate() {
                    if i > 0 {
                        writeln!(out).map_err(ExportError::from)?;
                    }
                    writeln!(out, "# {}", piece.name()).map_err(ExportError::from)?;
                    write_chart(chart, args.format, delimiter, &mut out)?;
                }
            }
        }
    }
    Ok(())
}
