//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `generate` - Build front, back and sleeve charts from a dimension file
//! - `outline` - Write one garment piece outline as SVG
//! - `trace` - Rasterize an arbitrary SVG path into a chart
//! - `symbols` - List chart symbols

pub mod common;
pub mod generate;
pub mod outline;
pub mod symbols;
pub mod trace;

pub use common::CliError;
pub use generate::{cmd_generate, GenerateArgs};
pub use outline::{cmd_outline, OutlineArgs};
pub use symbols::cmd_symbols;
pub use trace::{cmd_trace, TraceArgs};
