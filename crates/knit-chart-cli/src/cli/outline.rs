//! Outline command implementation.

use std::path::PathBuf;

use clap::Args;

use knit_chart::{outline_svg_document, Outline, Piece};

use super::common::{load_dimensions, parse_piece, write_file, CliError};

#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// Dimension file (.yaml, .yml or .json)
    pub dimensions: PathBuf,

    /// Garment piece: front, back or sleeve
    #[arg(short, long, value_parser = parse_piece)]
    pub piece: Piece,

    /// Output SVG file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the outline command.
pub fn cmd_outline(args: OutlineArgs) -> Result<(), CliError> {
    let dims = load_dimensions(&args.dimensions)?;
    let svg = outline_svg_document(&Outline::for_piece(&dims, args.piece));

    match args.output {
        Some(path) => write_file(&path, svg.as_bytes()),
        None => {
            print!("{}", svg);
            Ok(())
        }
    }
}
