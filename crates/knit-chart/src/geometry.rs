//! Core geometry types for knit-chart.
//!
//! Everything here is in millimeters, in a piece's local coordinate space:
//! x grows to the right, y grows *down* (same as SVG), so the shoulder line
//! sits at small y and the hem at large y.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = printable with `{:?}`
//! - `Clone` / `Copy` = duplicate the value (Copy = implicitly, for small stack values)
//! - `PartialEq` = comparable with `==`

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates agree within `tolerance`.
    #[inline]
    pub fn approx_eq(&self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// A simple closed ring of vertices. The closing edge from the last vertex
/// back to the first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub outer: Vec<Point>,
}

impl Polygon {
    pub fn new(outer: Vec<Point>) -> Self {
        Self { outer }
    }

    /// Get the bounding box, or `None` for an empty ring.
    ///
    /// ## Rust Lesson #6: Option<T>
    ///
    /// Rust has no `null`. `Option<T>` is either `Some(value)` or `None`,
    /// and the compiler makes you handle both.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        if self.outer.is_empty() {
            return None;
        }

        let min_x = self.outer.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = self.outer.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = self.outer.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = self.outer.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        Some(BoundingBox::new(min_x, min_y, max_x, max_y))
    }

    /// Calculate signed area using the shoelace formula.
    ///
    /// Positive for counter-clockwise winding in a y-up frame (which is
    /// clockwise on screen, since our y grows downward).
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area_of_points(&self.outer)
    }

    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }
}

/// Calculate signed area of a point sequence using the shoelace formula.
pub fn signed_area_of_points(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}

/// Number of whole `step`s that fit in `length`.
///
/// Lengths in this crate are built as `n * step`, and `n * step / step`
/// can land a hair under `n` in floating point, so the floor is taken with
/// a small tolerance.
#[inline]
pub fn whole_steps(length: f64, step: f64) -> usize {
    const STEP_TOLERANCE: f64 = 1e-6;
    let steps = (length / step + STEP_TOLERANCE).floor();
    if steps <= 0.0 { 0 } else { steps as usize }
}

// ============================================================================
// TESTS
// ============================================================================
