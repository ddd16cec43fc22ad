//! Garment dimensions and the stitch grid they are snapped to.
//!
//! [`DimensionInput`] is what a user writes down (millimeters and a gauge).
//! [`Dimensions`] is the validated record the rest of the crate consumes:
//! every length that ends up on a grid line has been floored to a whole
//! number of stitches, so rasterizing an outline built from it produces
//! whole-number grid sizes.

use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::chart::StitchSize;
use crate::error::DimensionError;
use crate::geometry::whole_steps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyShape {
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeckShape {
    #[serde(alias = "crew-Neck")]
    CrewNeck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShoulderShape {
    Standard,
}

/// Raw garment measurements, all lengths in millimeters.
///
/// Gauges are stitches (width) and rows (height) per 10 cm. The sleeve and
/// cuff widths are *half* widths: the sleeve piece is twice as wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionInput {
    pub gauge_height: f64,
    pub gauge_width: f64,

    pub length_of_body: f64,
    pub length_of_shoulder_drop: f64,
    pub length_of_ribbed_hem: f64,
    pub length_of_front_neck_drop: f64,
    pub length_of_back_neck_drop: f64,

    pub width_of_body: f64,
    pub width_of_neck: f64,

    pub length_of_sleeve: f64,
    pub length_of_ribbed_cuff: f64,

    pub width_of_sleeve: f64,
    pub width_of_cuff: f64,

    pub body_shape_type: BodyShape,
    pub neck_shape_type: NeckShape,
    pub shoulder_shape_type: ShoulderShape,

    /// Make horizontal stitch counts odd instead of even.
    pub is_odd: bool,
}

/// A validated, grid-aligned dimension record.
///
/// Construct with [`Dimensions::new`]; there is no way to mutate it after.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimensions {
    input: DimensionInput,
    stitch: StitchSize,
}

/// Footprint of one stitch for a gauge, rounded *up* to a micrometer.
pub fn stitch_dimension(gauge: f64) -> f64 {
    (100_000.0 / gauge).ceil() / 1000.0
}

impl Dimensions {
    /// Round `input` onto the stitch grid and check it describes a garment.
    pub fn new(input: DimensionInput) -> Result<Self, DimensionError> {
        check_positive(&input)?;

        let stitch = StitchSize::new(
            stitch_dimension(input.gauge_width),
            stitch_dimension(input.gauge_height),
        );

        let rows = |value: f64| whole_steps(value, stitch.length) as f64 * stitch.length;
        let cols = |value: f64| whole_steps(value, stitch.width) as f64 * stitch.width;
        let odd_or_even_cols = |value: f64| {
            let pairs = whole_steps(value, stitch.width * 2.0) as f64;
            let even = pairs * 2.0 * stitch.width;
            if input.is_odd { even + stitch.width } else { even }
        };
        let odd_or_even_half_cols = |value: f64| {
            if input.is_odd { cols(value) + stitch.width / 2.0 } else { cols(value) }
        };

        let rounded = DimensionInput {
            length_of_body: rows(input.length_of_body),
            length_of_shoulder_drop: rows(input.length_of_shoulder_drop),
            length_of_ribbed_hem: rows(input.length_of_ribbed_hem),
            length_of_front_neck_drop: rows(input.length_of_front_neck_drop),
            length_of_back_neck_drop: rows(input.length_of_back_neck_drop),
            width_of_body: odd_or_even_cols(input.width_of_body),
            width_of_neck: odd_or_even_cols(input.width_of_neck),
            length_of_sleeve: rows(input.length_of_sleeve),
            length_of_ribbed_cuff: rows(input.length_of_ribbed_cuff),
            width_of_sleeve: odd_or_even_half_cols(input.width_of_sleeve),
            width_of_cuff: odd_or_even_half_cols(input.width_of_cuff),
            ..input
        };

        let dims = Self { input: rounded, stitch };
        dims.check_consistent()?;

        info!("dimensions initialized");
        debug!("{}", dims);
        Ok(dims)
    }

    fn check_consistent(&self) -> Result<(), DimensionError> {
        let i = &self.input;
        let snapped = [
            ("length_of_body", i.length_of_body),
            ("length_of_shoulder_drop", i.length_of_shoulder_drop),
            ("length_of_ribbed_hem", i.length_of_ribbed_hem),
            ("length_of_front_neck_drop", i.length_of_front_neck_drop),
            ("length_of_back_neck_drop", i.length_of_back_neck_drop),
            ("width_of_body", i.width_of_body),
            ("width_of_neck", i.width_of_neck),
            ("length_of_sleeve", i.length_of_sleeve),
            ("length_of_ribbed_cuff", i.length_of_ribbed_cuff),
            ("width_of_sleeve", i.width_of_sleeve),
            ("width_of_cuff", i.width_of_cuff),
        ];
        for (field, value) in snapped {
            if value <= 0.0 {
                return Err(DimensionError::BelowOneStitch { field, value });
            }
        }

        let derived = [
            ("width_of_horizontal_armhole", self.width_of_horizontal_armhole()),
            ("length_of_vertical_armhole", self.length_of_vertical_armhole()),
            ("width_of_shoulder", self.width_of_shoulder()),
            ("length_of_body_side", self.length_of_body_side()),
            ("length_of_sleeve_cap", self.length_of_sleeve_cap()),
            ("length_of_sleeve_side", self.length_of_sleeve_side()),
        ];
        for (field, value) in derived {
            if value <= 0.0 {
                return Err(DimensionError::Inconsistent { field, value });
            }
        }

        // The neck curve has to bottom out above the hem rib.
        let above_hem = i.length_of_body - i.length_of_ribbed_hem;
        for (field, drop) in [
            ("length_of_front_neck_drop", i.length_of_front_neck_drop),
            ("length_of_back_neck_drop", i.length_of_back_neck_drop),
        ] {
            if drop >= above_hem {
                return Err(DimensionError::Inconsistent { field, value: drop });
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Inputs (after rounding)
    // ------------------------------------------------------------------

    pub fn input(&self) -> &DimensionInput {
        &self.input
    }

    pub fn stitch(&self) -> StitchSize {
        self.stitch
    }

    pub fn stitch_width(&self) -> f64 {
        self.stitch.width
    }

    pub fn stitch_length(&self) -> f64 {
        self.stitch.length
    }

    pub fn is_odd(&self) -> bool {
        self.input.is_odd
    }

    pub fn length_of_body(&self) -> f64 {
        self.input.length_of_body
    }

    pub fn length_of_shoulder_drop(&self) -> f64 {
        self.input.length_of_shoulder_drop
    }

    pub fn length_of_ribbed_hem(&self) -> f64 {
        self.input.length_of_ribbed_hem
    }

    pub fn length_of_front_neck_drop(&self) -> f64 {
        self.input.length_of_front_neck_drop
    }

    pub fn length_of_back_neck_drop(&self) -> f64 {
        self.input.length_of_back_neck_drop
    }

    pub fn width_of_body(&self) -> f64 {
        self.input.width_of_body
    }

    pub fn width_of_neck(&self) -> f64 {
        self.input.width_of_neck
    }

    pub fn length_of_sleeve(&self) -> f64 {
        self.input.length_of_sleeve
    }

    pub fn length_of_ribbed_cuff(&self) -> f64 {
        self.input.length_of_ribbed_cuff
    }

    pub fn width_of_sleeve(&self) -> f64 {
        self.input.width_of_sleeve
    }

    pub fn width_of_cuff(&self) -> f64 {
        self.input.width_of_cuff
    }

    // ------------------------------------------------------------------
    // Derived lengths
    // ------------------------------------------------------------------

    /// Underarm to the top of the hem rib.
    pub fn length_of_body_side(&self) -> f64 {
        self.length_of_body()
            - self.length_of_shoulder_drop()
            - self.length_of_vertical_armhole()
            - self.length_of_ribbed_hem()
    }

    /// Armhole depth; matches the sleeve half width, in whole rows.
    pub fn length_of_vertical_armhole(&self) -> f64 {
        self.snap_rows(self.width_of_sleeve())
    }

    /// A tenth of the body width, in whole stitches.
    pub fn width_of_horizontal_armhole(&self) -> f64 {
        self.snap_cols(self.width_of_body() * 0.1)
    }

    /// What is left of the body width for one shoulder.
    pub fn width_of_shoulder(&self) -> f64 {
        (self.width_of_body() - self.width_of_horizontal_armhole() * 2.0 - self.width_of_neck()) / 2.0
    }

    /// Twice the horizontal armhole, in whole rows.
    pub fn length_of_sleeve_cap(&self) -> f64 {
        self.snap_rows(self.width_of_horizontal_armhole() * 2.0)
    }

    /// Cap base to the top of the cuff rib.
    pub fn length_of_sleeve_side(&self) -> f64 {
        self.length_of_sleeve() - self.length_of_sleeve_cap() - self.length_of_ribbed_cuff()
    }

    // ------------------------------------------------------------------
    // Stitch and row counts
    // ------------------------------------------------------------------

    pub fn rows_of_body(&self) -> usize {
        self.rows_in(self.length_of_body())
    }

    pub fn rows_of_shoulder_drop(&self) -> usize {
        self.rows_in(self.length_of_shoulder_drop())
    }

    pub fn rows_of_ribbed_hem(&self) -> usize {
        self.rows_in(self.length_of_ribbed_hem())
    }

    pub fn rows_of_front_neck_drop(&self) -> usize {
        self.rows_in(self.length_of_front_neck_drop())
    }

    pub fn rows_of_back_neck_drop(&self) -> usize {
        self.rows_in(self.length_of_back_neck_drop())
    }

    pub fn cols_of_body(&self) -> usize {
        self.cols_in(self.width_of_body())
    }

    pub fn cols_of_neck(&self) -> usize {
        self.cols_in(self.width_of_neck())
    }

    pub fn rows_of_sleeve(&self) -> usize {
        self.rows_in(self.length_of_sleeve())
    }

    pub fn rows_of_ribbed_cuff(&self) -> usize {
        self.rows_in(self.length_of_ribbed_cuff())
    }

    pub fn cols_of_sleeve(&self) -> usize {
        self.cols_in(self.width_of_sleeve())
    }

    pub fn cols_of_cuff(&self) -> usize {
        self.cols_in(self.width_of_cuff())
    }

    pub fn rows_of_body_side(&self) -> usize {
        self.rows_in(self.length_of_body_side())
    }

    pub fn rows_of_vertical_armhole(&self) -> usize {
        self.rows_in(self.length_of_vertical_armhole())
    }

    pub fn cols_of_horizontal_armhole(&self) -> usize {
        self.cols_in(self.width_of_horizontal_armhole())
    }

    pub fn cols_of_shoulder(&self) -> usize {
        self.cols_in(self.width_of_shoulder())
    }

    pub fn rows_of_sleeve_side(&self) -> usize {
        self.rows_in(self.length_of_sleeve_side())
    }

    pub fn rows_of_sleeve_cap(&self) -> usize {
        self.rows_in(self.length_of_sleeve_cap())
    }

    /// Last body row that is *not* hem rib. Rows after it (once the chart
    /// has its padding row on top) are ribbed.
    pub fn start_row_of_ribbed_hem(&self) -> usize {
        self.rows_in(self.length_of_body() - self.length_of_ribbed_hem())
    }

    /// Last sleeve row that is not cuff rib.
    pub fn start_row_of_ribbed_cuff(&self) -> usize {
        self.rows_in(self.length_of_sleeve() - self.length_of_ribbed_cuff())
    }

    // ------------------------------------------------------------------

    fn rows_in(&self, length: f64) -> usize {
        whole_steps(length, self.stitch.length)
    }

    fn cols_in(&self, width: f64) -> usize {
        whole_steps(width, self.stitch.width)
    }

    fn snap_rows(&self, length: f64) -> f64 {
        self.rows_in(length) as f64 * self.stitch.length
    }

    fn snap_cols(&self, width: f64) -> f64 {
        self.cols_in(width) as f64 * self.stitch.width
    }
}

fn check_positive(input: &DimensionInput) -> Result<(), DimensionError> {
    let fields = [
        ("gauge_height", input.gauge_height),
        ("gauge_width", input.gauge_width),
        ("length_of_body", input.length_of_body),
        ("length_of_shoulder_drop", input.length_of_shoulder_drop),
        ("length_of_ribbed_hem", input.length_of_ribbed_hem),
        ("length_of_front_neck_drop", input.length_of_front_neck_drop),
        ("length_of_back_neck_drop", input.length_of_back_neck_drop),
        ("width_of_body", input.width_of_body),
        ("width_of_neck", input.width_of_neck),
        ("length_of_sleeve", input.length_of_sleeve),
        ("length_of_ribbed_cuff", input.length_of_ribbed_cuff),
        ("width_of_sleeve", input.width_of_sleeve),
        ("width_of_cuff", input.width_of_cuff),
    ];
    for (field, value) in fields {
        // `!(value > 0.0)` also catches NaN
        if !value.is_finite() || !(value > 0.0) {
            return Err(DimensionError::NonPositive { field, value });
        }
    }
    Ok(())
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = &self.input;
        writeln!(f, "Dimensions:")?;
        writeln!(f, "  gauge: {} rows x {} stitches", i.gauge_height, i.gauge_width)?;
        writeln!(f, "  stitch: {} x {} mm", self.stitch.width, self.stitch.length)?;
        writeln!(f, "  body: {} x {} mm", i.width_of_body, i.length_of_body)?;
        writeln!(f, "  shoulder drop: {} mm, shoulder width: {} mm", i.length_of_shoulder_drop, self.width_of_shoulder())?;
        writeln!(f, "  neck: {} mm wide, drop front {} / back {} mm", i.width_of_neck, i.length_of_front_neck_drop, i.length_of_back_neck_drop)?;
        writeln!(f, "  armhole: {} x {} mm", self.width_of_horizontal_armhole(), self.length_of_vertical_armhole())?;
        writeln!(f, "  body side: {} mm, hem rib: {} mm", self.length_of_body_side(), i.length_of_ribbed_hem)?;
        writeln!(f, "  sleeve: {} mm long, half width {} mm", i.length_of_sleeve, i.width_of_sleeve)?;
        writeln!(f, "  sleeve cap: {} mm, sleeve side: {} mm", self.length_of_sleeve_cap(), self.length_of_sleeve_side())?;
        writeln!(f, "  cuff: half width {} mm, rib {} mm", i.width_of_cuff, i.length_of_ribbed_cuff)?;
        write!(f, "  odd stitch count: {}", i.is_odd)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Gauge 20 x 28 per 10 cm, a medium crew-neck sweater.
    pub(crate) fn sample_input() -> DimensionInput {
        DimensionInput {
            gauge_height: 28.0,
            gauge_width: 20.0,
            length_of_body: 600.0,
            length_of_shoulder_drop: 20.0,
            length_of_ribbed_hem: 50.0,
            length_of_front_neck_drop: 80.0,
            length_of_back_neck_drop: 20.0,
            width_of_body: 500.0,
            width_of_neck: 180.0,
            length_of_sleeve: 550.0,
            length_of_ribbed_cuff: 50.0,
            width_of_sleeve: 190.0,
            width_of_cuff: 100.0,
            body_shape_type: BodyShape::Standard,
            neck_shape_type: NeckShape::CrewNeck,
            shoulder_shape_type: ShoulderShape::Standard,
            is_odd: false,
        }
    }

    pub(crate) fn sample() -> Dimensions {
        Dimensions::new(sample_input()).unwrap()
    }

    fn is_whole_multiple(value: f64, step: f64) -> bool {
        let n = (value / step).round();
        (value - n * step).abs() < 1e-9
    }

    fn is_half_multiple(value: f64, step: f64) -> bool {
        is_whole_multiple(value - step / 2.0, step)
    }

    #[test]
    fn stitch_size_rounds_up_to_micrometers() {
        let dims = sample();
        assert_eq!(dims.stitch_width(), 5.0);
        assert_eq!(dims.stitch_length(), 3.572);
    }

    #[test]
    fn lengths_snap_to_whole_rows() {
        let dims = sample();
        assert_eq!(dims.rows_of_body(), 167);
        assert_eq!(dims.rows_of_shoulder_drop(), 5);
        assert_eq!(dims.rows_of_ribbed_hem(), 13);
        assert_eq!(dims.rows_of_front_neck_drop(), 22);
        assert_eq!(dims.rows_of_back_neck_drop(), 5);
        assert_eq!(dims.rows_of_sleeve(), 153);
        assert_eq!(dims.rows_of_ribbed_cuff(), 13);

        let sl = dims.stitch_length();
        for value in [
            dims.length_of_body(),
            dims.length_of_shoulder_drop(),
            dims.length_of_ribbed_hem(),
            dims.length_of_front_neck_drop(),
            dims.length_of_back_neck_drop(),
            dims.length_of_sleeve(),
            dims.length_of_ribbed_cuff(),
            dims.length_of_vertical_armhole(),
            dims.length_of_sleeve_cap(),
            dims.length_of_body_side(),
            dims.length_of_sleeve_side(),
        ] {
            assert!(is_whole_multiple(value, sl), "{} is not a multiple of {}", value, sl);
        }
    }

    #[test]
    fn widths_snap_to_even_stitch_counts() {
        let dims = sample();
        assert_eq!(dims.cols_of_body(), 100);
        assert_eq!(dims.cols_of_neck(), 36);
        assert_eq!(dims.cols_of_sleeve(), 38);
        assert_eq!(dims.cols_of_cuff(), 20);
        assert_eq!(dims.cols_of_horizontal_armhole(), 10);
        assert_eq!(dims.width_of_shoulder(), 110.0);
        assert_eq!(dims.cols_of_body() % 2, 0);
    }

    #[test]
    fn odd_flag_adds_a_stitch_or_half() {
        let mut input = sample_input();
        input.is_odd = true;
        let dims = Dimensions::new(input).unwrap();
        let sw = dims.stitch_width();

        assert_eq!(dims.cols_of_body() % 2, 1);
        assert_eq!(dims.cols_of_neck() % 2, 1);
        assert!(is_whole_multiple(dims.width_of_body(), sw));
        assert!(is_half_multiple(dims.width_of_sleeve(), sw));
        assert!(is_half_multiple(dims.width_of_cuff(), sw));
    }

    #[test]
    fn derived_lengths() {
        let dims = sample();
        assert_eq!(dims.rows_of_vertical_armhole(), 53);
        assert_eq!(dims.rows_of_sleeve_cap(), 27);
        assert_eq!(dims.rows_of_body_side(), 96);
        assert_eq!(dims.rows_of_sleeve_side(), 113);
        assert_eq!(dims.start_row_of_ribbed_hem(), 154);
        assert_eq!(dims.start_row_of_ribbed_cuff(), 140);
    }

    #[test]
    fn rejects_non_positive_input() {
        let mut input = sample_input();
        input.width_of_neck = 0.0;
        assert_eq!(
            Dimensions::new(input),
            Err(DimensionError::NonPositive { field: "width_of_neck", value: 0.0 })
        );

        let mut input = sample_input();
        input.gauge_width = f64::NAN;
        assert!(matches!(
            Dimensions::new(input),
            Err(DimensionError::NonPositive { field: "gauge_width", .. })
        ));
    }

    #[test]
    fn rejects_lengths_below_one_stitch() {
        let mut input = sample_input();
        input.length_of_shoulder_drop = 2.0;
        assert!(matches!(
            Dimensions::new(input),
            Err(DimensionError::BelowOneStitch { field: "length_of_shoulder_drop", .. })
        ));
    }

    #[test]
    fn rejects_neck_wider_than_body() {
        let mut input = sample_input();
        input.width_of_neck = 420.0;
        let err = Dimensions::new(input).unwrap_err();
        assert!(matches!(err, DimensionError::Inconsistent { field: "width_of_shoulder", .. }));
        assert!(err.to_string().starts_with("invalid dimensions"));
    }

    #[test]
    fn rejects_neck_drop_into_hem() {
        let mut input = sample_input();
        input.length_of_front_neck_drop = 560.0;
        assert!(matches!(
            Dimensions::new(input),
            Err(DimensionError::Inconsistent { field: "length_of_front_neck_drop", .. })
        ));
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = r#"
gauge_height: 28
gauge_width: 20
length_of_body: 600
length_of_shoulder_drop: 20
length_of_ribbed_hem: 50
length_of_front_neck_drop: 80
length_of_back_neck_drop: 20
width_of_body: 500
width_of_neck: 180
length_of_sleeve: 550
length_of_ribbed_cuff: 50
width_of_sleeve: 190
width_of_cuff: 100
body_shape_type: standard
neck_shape_type: crew-Neck
shoulder_shape_type: standard
is_odd: false
"#;
        let input: DimensionInput = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(input, sample_input());
    }

    #[test]
    fn display_mentions_stitch_size() {
        let text = sample().to_string();
        assert!(text.contains("stitch: 5 x 3.572 mm"), "{}", text);
    }
}
