//! Fill regions: repaired rings and non-zero winding containment.
//!
//! This is the HOT PATH of rasterization. Every chart cell center is tested
//! against the ring, so a body piece costs tens of thousands of tests
//! against a ring of ~1300 vertices.

use crate::geometry::{BoundingBox, Point, Polygon};

/// Vertices closer than this (mm) are treated as the same vertex.
pub const VERTEX_TOLERANCE: f64 = 1e-9;

// ============================================================================
// RING REPAIR
// ============================================================================
//
// Flattened outlines repeat every joint vertex, repeat the start at the
// end, and may contain zero-width spikes where a curve doubles back on
// itself. None of that changes the filled area, but it does confuse edge
// walking, so it is cleaned up once before any containment tests.

/// A ring that is safe to fill.
///
/// Invariants: at least 3 vertices, no two consecutive vertices equal, no
/// explicit closing vertex, no `A B A` spikes, non-zero extent on both
/// axes, and non-negative signed area.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    ring: Polygon,
    bbox: BoundingBox,
}

impl Region {
    /// Repair a flattened point sequence into a fillable region.
    ///
    /// Returns `None` for anything that cannot enclose area: fewer than
    /// three distinct vertices, non-finite coordinates, or a ring that is
    /// flat along either axis.
    pub fn from_points(points: &[Point]) -> Option<Region> {
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return None;
        }

        let mut ring = dedup_consecutive(points);
        remove_spikes(&mut ring);
        if ring.len() < 3 {
            return None;
        }

        let mut polygon = Polygon::new(ring);
        let bbox = polygon.bounding_box()?;
        if bbox.width() <= VERTEX_TOLERANCE || bbox.height() <= VERTEX_TOLERANCE {
            return None;
        }

        // Winding direction does not change non-zero containment, but a
        // single orientation keeps debugging output comparable.
        if polygon.is_clockwise() {
            polygon.outer.reverse();
        }

        Some(Region { ring: polygon, bbox })
    }

    pub fn ring(&self) -> &Polygon {
        &self.ring
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Non-zero winding containment.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        if p.x < self.bbox.min_x || p.x > self.bbox.max_x || p.y < self.bbox.min_y || p.y > self.bbox.max_y {
            return false;
        }
        winding_number(p, &self.ring.outer) != 0
    }
}

/// Drop consecutive duplicates, including the wrap-around duplicate where
/// the last vertex repeats the first.
fn dedup_consecutive(points: &[Point]) -> Vec<Point> {
    let mut ring: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if ring.last().is_none_or(|last| !last.approx_eq(p, VERTEX_TOLERANCE)) {
            ring.push(p);
        }
    }
    while ring.len() > 1 && ring[0].approx_eq(ring[ring.len() - 1], VERTEX_TOLERANCE) {
        ring.pop();
    }
    ring
}

/// Remove `A B A` spikes until none remain.
///
/// Dropping `B` leaves two equal neighbors, so one `A` goes too. The ring
/// is treated cyclically.
fn remove_spikes(ring: &mut Vec<Point>) {
    let mut changed = true;
    while changed && ring.len() >= 3 {
        changed = false;
        let n = ring.len();
        for i in 0..n {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            if prev.approx_eq(next, VERTEX_TOLERANCE) {
                // Remove the spike tip and the following duplicate. Remove
                // the higher index first so the lower one stays valid.
                let tip = i;
                let dup = (i + 1) % n;
                let (hi, lo) = if tip > dup { (tip, dup) } else { (dup, tip) };
                ring.remove(hi);
                ring.remove(lo);
                changed = true;
                break;
            }
        }
    }
}

// ============================================================================
// WINDING NUMBER
// ============================================================================

/// Which side of the directed line `a -> b` the point `p` is on.
///
/// Positive on the left, negative on the right, zero on the line.
#[inline]
fn is_left(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// Winding number of `ring` around `p`.
///
/// Counts signed crossings of a horizontal ray: upward edges with `p` on
/// their left add one, downward edges with `p` on their right subtract
/// one. Self-intersecting rings are fine; overlapping lobes simply wind
/// more than once.
pub fn winding_number(p: Point, ring: &[Point]) -> i32 {
    let n = ring.len();
    if n < 3 {
        return 0;
    }

    let mut winding = 0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b, p) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && is_left(a, b, p) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

// ============================================================================
// TESTS
// ============================================================================
