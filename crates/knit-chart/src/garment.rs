//! The sweater pipeline: dimensions in, three finished charts out.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::dimensions::Dimensions;
use crate::outline::{Outline, Piece};
use crate::rasterize::rasterize;
use crate::rules::{RuleEngine, Side, Symmetry};

/// Knobs for chart generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Mirror every chart from this half. `None` keeps the raw layout.
    pub symmetry: Option<Side>,
}

/// Finished charts for one sweater.
#[derive(Debug, Clone, PartialEq)]
pub struct GarmentCharts {
    pub front_body: Chart,
    pub back_body: Chart,
    pub sleeve: Chart,
}

impl GarmentCharts {
    pub fn get(&self, piece: Piece) -> &Chart {
        match piece {
            Piece::FrontBody => &self.front_body,
            Piece::BackBody => &self.back_body,
            Piece::Sleeve => &self.sleeve,
        }
    }

    /// Pieces paired with their charts, in `Piece::all()` order.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, &Chart)> {
        Piece::all().iter().map(move |&piece| (piece, self.get(piece)))
    }
}

/// Build, rasterize and finish the chart for one piece.
pub fn chart_for_piece(dims: &Dimensions, piece: Piece, options: ChartOptions) -> Chart {
    let outline = Outline::for_piece(dims, piece);
    let raw = rasterize(&outline, dims.stitch());

    let start_row = match piece {
        Piece::FrontBody | Piece::BackBody => dims.start_row_of_ribbed_hem(),
        Piece::Sleeve => dims.start_row_of_ribbed_cuff(),
    };
    let symmetry = options.symmetry.map(Symmetry::whole);
    let chart = RuleEngine::standard(start_row, symmetry).apply(raw);

    debug!(
        "{}: {} rows x {} cols, ribbing below row {}",
        piece.name(),
        chart.rows(),
        chart.cols(),
        start_row
    );
    chart
}

/// Generate all three charts.
///
/// The pieces are independent, so they are built in parallel with
/// `rayon::join`.
pub fn generate_charts(dims: &Dimensions, options: ChartOptions) -> GarmentCharts {
    info!("generating charts for {} x {} mm body", dims.width_of_body(), dims.length_of_body());
    let ((front_body, back_body), sleeve) = rayon::join(
        || {
            rayon::join(
                || chart_for_piece(dims, Piece::FrontBody, options),
                || chart_for_piece(dims, Piece::BackBody, options),
            )
        },
        || chart_for_piece(dims, Piece::Sleeve, options),
    );
    GarmentCharts { front_body, back_body, sleeve }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Symbol;
    use crate::dimensions::tests::sample;

    #[test]
    fn charts_have_padded_grid_sizes() {
        let dims = sample();
        let charts = generate_charts(&dims, ChartOptions::default());
        assert_eq!((charts.front_body.rows(), charts.front_body.cols()), (168, 100));
        assert_eq!((charts.back_body.rows(), charts.back_body.cols()), (168, 100));
        assert_eq!((charts.sleeve.rows(), charts.sleeve.cols()), (154, 76));
    }

    #[test]
    fn top_row_is_padding_or_cast_off() {
        let dims = sample();
        let charts = generate_charts(&dims, ChartOptions::default());
        for (piece, chart) in charts.iter() {
            for &code in chart.row(0) {
                let symbol = Symbol::from_code(code);
                assert!(
                    matches!(symbol, Symbol::None | Symbol::CastOff | Symbol::Ssk),
                    "{}: {:?} in top row",
                    piece.name(),
                    symbol
                );
            }
        }
    }

    #[test]
    fn front_neck_is_deeper_than_back() {
        let dims = sample();
        let charts = generate_charts(&dims, ChartOptions::default());
        // Center column: count leading non-knit rows down from the top
        let depth = |chart: &Chart| {
            (0..chart.rows()).take_while(|&r| !chart.is(r, 50, Symbol::Knit)).count()
        };
        assert!(depth(&charts.front_body) > depth(&charts.back_body));
    }

    #[test]
    fn symmetry_mirrors_every_piece() {
        let dims = sample();
        let charts = generate_charts(&dims, ChartOptions { symmetry: Some(Side::Left) });
        for (piece, chart) in charts.iter() {
            let cols = chart.cols();
            for r in 0..chart.rows() {
                for c in 0..cols / 2 {
                    assert_eq!(chart.get(r, c), chart.get(r, cols - 1 - c), "{} ({}, {})", piece.name(), r, c);
                }
            }
        }
    }

    #[test]
    fn single_piece_matches_full_run() {
        let dims = sample();
        let charts = generate_charts(&dims, ChartOptions::default());
        let sleeve = chart_for_piece(&dims, Piece::Sleeve, ChartOptions::default());
        assert_eq!(charts.sleeve, sleeve);
    }
}
