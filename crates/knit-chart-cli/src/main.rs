//! knit-chart - knitting charts from garment dimensions
//!
//! Usage:
//!   knit-chart generate <dimensions.yaml> [-o DIR]   Front, back and sleeve charts
//!   knit-chart outline <dimensions.yaml> -p sleeve   Piece outline as SVG
//!   knit-chart trace <file.svg> --stitch-width 5 --stitch-length 3.6
//!   knit-chart symbols                               List chart symbols

mod cli;

use clap::{Parser, Subcommand};

use cli::{cmd_generate, cmd_outline, cmd_symbols, cmd_trace, CliError, GenerateArgs, OutlineArgs, TraceArgs};

#[derive(Parser, Debug)]
#[command(name = "knit-chart", version, about = "Knitting charts from garment dimensions")]
struct Cli {
    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate front body, back body and sleeve charts
    Generate(GenerateArgs),
    /// Write a garment piece outline as an SVG document
    Outline(OutlineArgs),
    /// Rasterize an arbitrary closed SVG path into a chart
    Trace(TraceArgs),
    /// List chart symbols
    Symbols,
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Generate(args) => cmd_generate(args),
        Command::Outline(args) => cmd_outline(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Symbols => {
            cmd_symbols();
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
