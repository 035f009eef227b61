// Copyright 2025 Lars Brubaker
// License: MIT
//
// Integer point type and the geometric predicates used by the quad-edge
// subdivision. Coordinates are already quantised by the caller's ScaleModel;
// nothing in here ever sees a floating-point input coordinate.

use std::cmp::Ordering;
use std::fmt;

/// Sentinel stored in `z` when a point carries no elevation.
pub const Z_UNSET: i32 = i32::MIN;

/// An immutable integer (x, y, z) sample.
///
/// Ordering is lexicographic on (x, y); z only breaks ties so that `Ord`
/// stays consistent with `Eq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Point { x, y, z }
    }

    /// A point with no elevation.
    #[inline]
    pub const fn xy(x: i32, y: i32) -> Self {
        Point { x, y, z: Z_UNSET }
    }

    #[inline]
    pub fn has_z(&self) -> bool {
        self.z != Z_UNSET
    }

    /// Compare on (x, y) only.
    #[inline]
    pub fn compare_xy(&self, other: &Point) -> Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }

    #[inline]
    pub fn equals_xy(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_xy(other).then(self.z.cmp(&other.z))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Which side of a directed line a point falls on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    On,
}

impl Side {
    /// Side of (x, y) relative to the directed line (x1, y1) -> (x2, y2).
    /// Exact: the cross product is evaluated in 128-bit integers.
    #[inline]
    pub fn of(x1: i32, y1: i32, x2: i32, y2: i32, x: i32, y: i32) -> Side {
        match orient(x1, y1, x2, y2, x, y).cmp(&0) {
            Ordering::Greater => Side::Left,
            Ordering::Less => Side::Right,
            Ordering::Equal => Side::On,
        }
    }
}

/// Twice the signed area of the triangle (1, 2, p). Positive when p is to
/// the left of 1->2.
#[inline]
pub fn orient(x1: i32, y1: i32, x2: i32, y2: i32, x: i32, y: i32) -> i128 {
    let dx1 = x2 as i128 - x1 as i128;
    let dy1 = y2 as i128 - y1 as i128;
    let dx2 = x as i128 - x1 as i128;
    let dy2 = y as i128 - y1 as i128;
    dx1 * dy2 - dy1 * dx2
}

/// Euclidean distance from (x, y) to the closed segment (x1, y1)-(x2, y2).
pub fn distance_segment_point(x1: i32, y1: i32, x2: i32, y2: i32, x: i32, y: i32) -> f64 {
    let dx = x2 as f64 - x1 as f64;
    let dy = y2 as f64 - y1 as f64;
    let px = x as f64 - x1 as f64;
    let py = y as f64 - y1 as f64;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return px.hypot(py);
    }
    let r = (px * dx + py * dy) / len_sq;
    if r <= 0.0 {
        px.hypot(py)
    } else if r >= 1.0 {
        (x as f64 - x2 as f64).hypot(y as f64 - y2 as f64)
    } else {
        let cross = px * dy - py * dx;
        cross.abs() / len_sq.sqrt()
    }
}

/// In-circle determinant for p against the circle through a, b, c
/// (counter-clockwise). Positive means strictly inside.
///
/// The 2x2 minors are exact, but they are combined with the squared lengths in
/// `f64`. This is not robust for large or nearly co-circular inputs; sign
/// errors there only cost a non-Delaunay flip decision, never topology.
pub fn in_circle(a: Point, b: Point, c: Point, p: Point) -> f64 {
    let delta = |q: Point| (q.x as i128 - p.x as i128, q.y as i128 - p.y as i128);
    let (adx, ady) = delta(a);
    let (bdx, bdy) = delta(b);
    let (cdx, cdy) = delta(c);

    let ab_det = (adx * bdy - bdx * ady) as f64;
    let bc_det = (bdx * cdy - cdx * bdy) as f64;
    let ca_det = (cdx * ady - adx * cdy) as f64;

    let a_lift = (adx * adx + ady * ady) as f64;
    let b_lift = (bdx * bdx + bdy * bdy) as f64;
    let c_lift = (cdx * cdx + cdy * cdy) as f64;

    a_lift * bc_det + b_lift * ca_det + c_lift * ab_det
}

/// The in-circle test against a triangle whose third corner is at infinity
/// on the left of a->b. The circle opens into the half-plane left of the
/// line; on the line itself only the open segment a-b is inside. Exact.
pub fn in_half_plane(a: Point, b: Point, p: Point) -> bool {
    match orient(a.x, a.y, b.x, b.y, p.x, p.y).cmp(&0) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => {
            let within = |v: i32, s: i32, t: i32| s.min(t) <= v && v <= s.max(t);
            within(p.x, a.x, b.x)
                && within(p.y, a.y, b.y)
                && !p.equals_xy(a.x, a.y)
                && !p.equals_xy(b.x, b.y)
        }
    }
}
