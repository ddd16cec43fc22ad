//! # knit-chart
//!
//! Garment outlines and knitting chart generation.
//!
//! The pipeline, per garment piece:
//!
//! ```text
//! DimensionInput -> Dimensions -> Outline -> rasterize -> RuleEngine -> Chart
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod chart;
pub mod dimensions;
pub mod error;
pub mod export;
pub mod garment;
pub mod geometry;
pub mod outline;
pub mod path_data;
pub mod rasterize;
pub mod region;
pub mod rules;

// Re-export common types at crate root for convenience.
pub use chart::{Chart, StitchSize, Symbol};
pub use dimensions::{BodyShape, DimensionInput, Dimensions, NeckShape, ShoulderShape};
pub use error::{DimensionError, ExportError, PathDataError};
pub use export::{outline_svg_document, write_csv, write_glyphs, write_json, ChartJson, DEFAULT_DELIMITER};
pub use garment::{chart_for_piece, generate_charts, ChartOptions, GarmentCharts};
pub use geometry::{BoundingBox, Point, Polygon};
pub use outline::{Outline, OutlineBuilder, Piece, Segment};
pub use path_data::first_path_data;
pub use rasterize::{grid_size, rasterize, MAX_CELLS};
pub use region::Region;
pub use rules::{FlipRegion, Rule, RuleEngine, Side, Symmetry};
