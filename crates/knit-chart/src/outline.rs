//! Garment piece outlines.
//!
//! An [`Outline`] is a closed run of line, quadratic and cubic segments in
//! millimeters. The builder mirrors SVG's relative path commands (`c`, `l`,
//! `h`, `v`, `Z`) because that is how a pattern drafter thinks about a
//! piece: "curve out by the armhole width, then straight up half the
//! armhole depth, then...".
//!
//! ## Curve Evaluation
//!
//! Segments are lyon_geom types over `f64`, which gives us exact parametric
//! sampling and exact bounding boxes (curve extrema included) for free.

use std::fmt::Write as _;

use lyon_geom::{point, CubicBezierSegment, LineSegment, QuadraticBezierSegment};

use crate::dimensions::Dimensions;
use crate::geometry::{BoundingBox, Point};

/// Uniform parametric subdivisions per segment when flattening.
///
/// A body piece is a few hundred millimeters across and a stitch is a few
/// millimeters, so 100 chords per segment keep the chord error far below
/// one stitch.
pub const SAMPLES_PER_SEGMENT: usize = 100;

/// Tolerance for "same point" checks on outline endpoints, in millimeters.
pub const CLOSE_TOLERANCE: f64 = 1e-6;

/// One piece of an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(LineSegment<f64>),
    Quadratic(QuadraticBezierSegment<f64>),
    Cubic(CubicBezierSegment<f64>),
}

impl Segment {
    pub fn from(&self) -> Point {
        let p = match self {
            Segment::Line(s) => s.from,
            Segment::Quadratic(s) => s.from,
            Segment::Cubic(s) => s.from,
        };
        Point::new(p.x, p.y)
    }

    pub fn to(&self) -> Point {
        let p = match self {
            Segment::Line(s) => s.to,
            Segment::Quadratic(s) => s.to,
            Segment::Cubic(s) => s.to,
        };
        Point::new(p.x, p.y)
    }

    /// Point at parameter `t` in `0.0..=1.0`.
    pub fn sample(&self, t: f64) -> Point {
        let p = match self {
            Segment::Line(s) => s.sample(t),
            Segment::Quadratic(s) => s.sample(t),
            Segment::Cubic(s) => s.sample(t),
        };
        Point::new(p.x, p.y)
    }

    /// Tight bounding box, including curve extrema.
    pub fn bounding_box(&self) -> BoundingBox {
        let b = match self {
            Segment::Line(s) => s.bounding_box(),
            Segment::Quadratic(s) => s.bounding_box(),
            Segment::Cubic(s) => s.bounding_box(),
        };
        BoundingBox::new(b.min.x, b.min.y, b.max.x, b.max.y)
    }
}

/// A closed garment-piece contour.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    segments: Vec<Segment>,
    closed: bool,
}

impl Outline {
    /// Build the outline for one garment piece.
    pub fn for_piece(dims: &Dimensions, piece: Piece) -> Outline {
        match piece {
            Piece::FrontBody => body_outline(dims, dims.length_of_front_neck_drop()),
            Piece::BackBody => body_outline(dims, dims.length_of_back_neck_drop()),
            Piece::Sleeve => sleeve_outline(dims),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the path was closed *and* actually ends where it starts.
    pub fn is_closed(&self) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => self.closed && start.approx_eq(end, CLOSE_TOLERANCE),
            _ => false,
        }
    }

    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(Segment::from)
    }

    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(Segment::to)
    }

    /// Union of all segment boxes, `None` for an empty outline.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.segments
            .iter()
            .map(Segment::bounding_box)
            .reduce(|a, b| a.union(&b))
    }

    /// Sample every segment at `samples + 1` evenly spaced parameters.
    ///
    /// Joints appear twice (end of one segment, start of the next); the
    /// region repair step drops those duplicates.
    pub fn flatten(&self, samples: usize) -> Vec<Point> {
        let samples = samples.max(1);
        let mut points = Vec::with_capacity(self.segments.len() * (samples + 1));
        for segment in &self.segments {
            for i in 0..=samples {
                let t = i as f64 / samples as f64;
                points.push(segment.sample(t));
            }
        }
        points
    }

    /// Absolute SVG path data (`M`, `L`, `Q`, `C`, `Z`).
    pub fn to_path_data(&self) -> String {
        let mut d = String::new();
        let Some(start) = self.start() else {
            return d;
        };
        // Writing to a String cannot fail.
        let _ = write!(d, "M {} {}", start.x, start.y);
        for segment in &self.segments {
            let _ = match segment {
                Segment::Line(s) => write!(d, " L {} {}", s.to.x, s.to.y),
                Segment::Quadratic(s) => {
                    write!(d, " Q {} {} {} {}", s.ctrl.x, s.ctrl.y, s.to.x, s.to.y)
                }
                Segment::Cubic(s) => write!(
                    d,
                    " C {} {} {} {} {} {}",
                    s.ctrl1.x, s.ctrl1.y, s.ctrl2.x, s.ctrl2.y, s.to.x, s.to.y
                ),
            };
        }
        if self.closed {
            d.push_str(" Z");
        }
        d
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Incremental outline construction with SVG-style commands.
///
/// ## Rust Lesson #24: Builders that consume `self`
///
/// Each method takes `mut self` and returns `Self`, so calls chain:
/// `OutlineBuilder::move_to(0.0, 0.0).line_by(10.0, 0.0).close()`.
/// The builder is moved through the chain; nothing else can observe a
/// half-built outline.
#[derive(Debug, Clone)]
pub struct OutlineBuilder {
    segments: Vec<Segment>,
    start: Point,
    current: Point,
}

impl OutlineBuilder {
    /// Start a new outline at an absolute position.
    pub fn move_to(x: f64, y: f64) -> Self {
        let start = Point::new(x, y);
        Self { segments: Vec::new(), start, current: start }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    /// Where the next segment will begin.
    pub fn current(&self) -> Point {
        self.current
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.segments.push(Segment::Line(LineSegment {
            from: point(self.current.x, self.current.y),
            to: point(x, y),
        }));
        self.current = Point::new(x, y);
        self
    }

    pub fn quadratic_to(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.segments.push(Segment::Quadratic(QuadraticBezierSegment {
            from: point(self.current.x, self.current.y),
            ctrl: point(cx, cy),
            to: point(x, y),
        }));
        self.current = Point::new(x, y);
        self
    }

    pub fn cubic_to(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.segments.push(Segment::Cubic(CubicBezierSegment {
            from: point(self.current.x, self.current.y),
            ctrl1: point(c1x, c1y),
            ctrl2: point(c2x, c2y),
            to: point(x, y),
        }));
        self.current = Point::new(x, y);
        self
    }

    /// SVG `l`.
    pub fn line_by(self, dx: f64, dy: f64) -> Self {
        let (x, y) = (self.current.x + dx, self.current.y + dy);
        self.line_to(x, y)
    }

    /// SVG `h`.
    pub fn horizontal_by(self, dx: f64) -> Self {
        self.line_by(dx, 0.0)
    }

    /// SVG `v`.
    pub fn vertical_by(self, dy: f64) -> Self {
        self.line_by(0.0, dy)
    }

    /// SVG `q`: control and end point relative to the current point.
    pub fn quadratic_by(self, cdx: f64, cdy: f64, dx: f64, dy: f64) -> Self {
        let c = self.current;
        self.quadratic_to(c.x + cdx, c.y + cdy, c.x + dx, c.y + dy)
    }

    /// SVG `c`: both controls and the end point relative to the current point.
    pub fn cubic_by(self, c1dx: f64, c1dy: f64, c2dx: f64, c2dy: f64, dx: f64, dy: f64) -> Self {
        let c = self.current;
        self.cubic_to(c.x + c1dx, c.y + c1dy, c.x + c2dx, c.y + c2dy, c.x + dx, c.y + dy)
    }

    /// SVG `Z`: add a straight segment back to the start if needed.
    pub fn close(mut self) -> Outline {
        if !self.current.approx_eq(self.start, CLOSE_TOLERANCE) {
            let start = self.start;
            self = self.line_to(start.x, start.y);
        }
        Outline { segments: self.segments, closed: true }
    }

    /// Finish without closing. Rasterizing an open outline yields an empty chart.
    pub fn finish_open(self) -> Outline {
        Outline { segments: self.segments, closed: false }
    }
}

// ============================================================================
// GARMENT PIECES
// ============================================================================

/// The garment pieces a sweater is knitted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    FrontBody,
    BackBody,
    Sleeve,
}

impl Piece {
    pub fn all() -> &'static [Piece] {
        &[Piece::FrontBody, Piece::BackBody, Piece::Sleeve]
    }

    /// Stable name, used for file names and CLI arguments.
    pub fn name(&self) -> &'static str {
        match self {
            Piece::FrontBody => "front_body",
            Piece::BackBody => "back_body",
            Piece::Sleeve => "sleeve",
        }
    }

    /// Parse a piece name. Accepts the short forms `front` and `back`.
    pub fn from_name(name: &str) -> Option<Piece> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "front_body" | "front" => Some(Piece::FrontBody),
            "back_body" | "back" => Some(Piece::BackBody),
            "sleeve" => Some(Piece::Sleeve),
            _ => None,
        }
    }
}

/// Body piece (front or back), starting at the right underarm and running
/// up the armhole, over both shoulders and the neck, down the far side and
/// back along the hem.
fn body_outline(dims: &Dimensions, neck_drop: f64) -> Outline {
    let sw = dims.stitch_width();
    let armhole_w = dims.width_of_horizontal_armhole();
    let armhole_h = dims.length_of_vertical_armhole();
    let half_armhole_h = armhole_h / 2.0;
    let shoulder_w = dims.width_of_shoulder();
    let shoulder_drop = dims.length_of_shoulder_drop();
    let half_neck = dims.width_of_neck() / 2.0;

    // The flat part of the shoulder next to the neck. Sized so the slope
    // steps down one row every `cols/rows` stitches, and the flat run is
    // half of one such step.
    let steps_per_row = dims.cols_of_shoulder() as f64 / dims.rows_of_shoulder_drop() as f64;
    let flat_shoulder = (steps_per_row / 2.0).floor() * sw;
    let sloped_shoulder = shoulder_w - flat_shoulder;

    OutlineBuilder::move_to(0.0, shoulder_drop + armhole_h)
        // Right armhole curve, halfway up
        .cubic_by(armhole_w, 0.0, armhole_w, -half_armhole_h, armhole_w, -half_armhole_h)
        .vertical_by(-half_armhole_h)
        // Shoulder slope, then flat to the neck
        .line_by(sloped_shoulder, -shoulder_drop)
        .horizontal_by(flat_shoulder)
        // Neckline down to center front/back and back up
        .cubic_by(0.0, neck_drop, half_neck, neck_drop, half_neck, neck_drop)
        .cubic_by(half_neck, 0.0, half_neck, -neck_drop, half_neck, -neck_drop)
        // Other shoulder, mirrored
        .horizontal_by(flat_shoulder)
        .line_by(sloped_shoulder, shoulder_drop)
        .vertical_by(half_armhole_h)
        .cubic_by(0.0, half_armhole_h, armhole_w, half_armhole_h, armhole_w, half_armhole_h)
        // Side seam and hem
        .vertical_by(dims.length_of_body_side() + dims.length_of_ribbed_hem())
        .horizontal_by(-dims.width_of_body())
        .close()
}

/// Sleeve: cap peak, tapering underarm seams, cuff.
fn sleeve_outline(dims: &Dimensions) -> Outline {
    let half_sleeve = dims.width_of_sleeve();
    let cuff = dims.width_of_cuff();
    let cap = dims.length_of_sleeve_cap();
    let cuff_rib = dims.length_of_ribbed_cuff();

    OutlineBuilder::move_to(0.0, cap)
        .cubic_by(half_sleeve / 2.0, 0.0, half_sleeve / 2.0, -cap, half_sleeve, -cap)
        .cubic_by(half_sleeve / 2.0, 0.0, half_sleeve / 2.0, cap, half_sleeve, cap)
        .line_by(cuff - half_sleeve, dims.length_of_sleeve_side())
        .vertical_by(cuff_rib)
        .horizontal_by(-cuff * 2.0)
        .vertical_by(-cuff_rib)
        .close()
}

// ============================================================================
// TESTS
// ============================================================================
