//! Pattern rules applied to a rasterized chart.
//!
//! A freshly rasterized piece is a silhouette of KNIT cells. The rules
//! turn it into something knittable: rows worked in pairs, cast-off edges,
//! decreases, ribbing and (optionally) a mirrored layout.
//!
//! Each rule is a pure `Chart -> Chart` transform. Rules take the chart by
//! value, read from the input and write to a copy, so a rule never sees its
//! own writes.

mod cast_off;
mod chunk;
mod decrease;
mod flip;
mod k1b;
mod pad;
mod rib;
mod symmetry;

pub use cast_off::cast_off;
pub use chunk::chunk_rows;
pub use decrease::decreases;
pub use flip::{flip_horizontally, FlipRegion};
pub use k1b::k1b;
pub use pad::pad_top;
pub use rib::rib;
pub use symmetry::{symmetrize, Side, Symmetry};

use log::debug;

use crate::chart::Chart;

/// One chart transform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    ChunkRows,
    PadTop,
    /// Rib every row strictly below `start_row`.
    Rib { start_row: usize },
    CastOff,
    Decreases,
    K1b,
    Symmetrize(Symmetry),
    /// Reverse a block of cells left to right.
    Flip(FlipRegion),
}

impl Rule {
    /// Every rule, with default parameters for the parameterized ones.
    pub fn all() -> Vec<Rule> {
        vec![
            Rule::ChunkRows,
            Rule::PadTop,
            Rule::Rib { start_row: 0 },
            Rule::CastOff,
            Rule::Decreases,
            Rule::K1b,
            Rule::Symmetrize(Symmetry::whole(Side::Left)),
            Rule::Flip(FlipRegion::whole()),
        ]
    }

    /// Get rule name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::ChunkRows => "chunk-rows",
            Rule::PadTop => "pad-top",
            Rule::Rib { .. } => "rib",
            Rule::CastOff => "cast-off",
            Rule::Decreases => "decreases",
            Rule::K1b => "k1b",
            Rule::Symmetrize(_) => "symmetrize",
            Rule::Flip(_) => "flip",
        }
    }

    /// Parse a rule from `name` or `name:argument`.
    ///
    /// `rib:<row>` sets the ribbing start row (default 0) and
    /// `symmetrize:<left|right>` the reference side (default left).
    /// Parameterless rules reject an argument.
    pub fn from_name(text: &str) -> Option<Rule> {
        let (name, arg) = match text.split_once(':') {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (text, None),
        };
        let rule = match name.trim().to_lowercase().as_str() {
            "rib" => {
                let start_row = match arg {
                    Some(a) => a.parse().ok()?,
                    None => 0,
                };
                return Some(Rule::Rib { start_row });
            }
            "symmetrize" | "symmetry" => {
                let side = match arg {
                    Some(a) => Side::from_name(a)?,
                    None => Side::Left,
                };
                return Some(Rule::Symmetrize(Symmetry::whole(side)));
            }
            "chunk-rows" | "chunk" => Rule::ChunkRows,
            "pad-top" | "pad" => Rule::PadTop,
            "cast-off" => Rule::CastOff,
            "decreases" | "decrease" => Rule::Decreases,
            "k1b" => Rule::K1b,
            "flip" => Rule::Flip(FlipRegion::whole()),
            _ => return None,
        };
        match arg {
            Some(_) => None,
            None => Some(rule),
        }
    }

    /// Run this rule on a chart.
    pub fn apply(&self, chart: Chart) -> Chart {
        match self {
            Rule::ChunkRows => chunk_rows(chart),
            Rule::PadTop => pad_top(chart),
            Rule::Rib { start_row } => rib(chart, *start_row),
            Rule::CastOff => cast_off(chart),
            Rule::Decreases => decreases(chart),
            Rule::K1b => k1b(chart),
            Rule::Symmetrize(symmetry) => symmetrize(chart, symmetry),
            Rule::Flip(region) => flip_horizontally(chart, region),
        }
    }
}

/// An ordered list of rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The garment sequence: chunk rows, pad the top, rib below
    /// `start_row`, cast off, decreases, K1B, then the optional mirror.
    ///
    /// `start_row` counts rows of the padded chart.
    pub fn standard(start_row: usize, symmetry: Option<Symmetry>) -> Self {
        let mut rules = vec![
            Rule::ChunkRows,
            Rule::PadTop,
            Rule::Rib { start_row },
            Rule::CastOff,
            Rule::Decreases,
            Rule::K1b,
        ];
        rules.extend(symmetry.map(Rule::Symmetrize));
        Self { rules }
    }

    /// The standard sequence for a shape with no rib band.
    pub fn without_ribbing(symmetry: Option<Symmetry>) -> Self {
        let mut engine = Self::standard(0, symmetry);
        engine.rules.retain(|rule| !matches!(rule, Rule::Rib { .. }));
        engine
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule in order.
    pub fn apply(&self, chart: Chart) -> Chart {
        self.rules.iter().fold(chart, |chart, rule| {
            let chart = rule.apply(chart);
            debug!("applied {} -> {}x{}", rule.name(), chart.rows(), chart.cols());
            chart
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
