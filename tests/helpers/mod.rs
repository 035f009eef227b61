// Copyright 2025 Lars Brubaker
// Shared test utilities for tin-delaunay tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tin_delaunay::{Point, ScaleModel, Subdivision};

/// Build a subdivision sized to the points' bounds and insert them in order.
pub fn build(points: &[Point]) -> Subdivision {
    let mut sub = Subdivision::new(bounds_of(points), ScaleModel::default())
        .expect("bounds too large for a frame");
    sub.insert_vertices(points.iter().copied())
        .expect("insertion failed");
    sub
}

pub fn bounds_of(points: &[Point]) -> [i32; 4] {
    if points.is_empty() {
        return [0; 4];
    }
    let mut b = [i32::MAX, i32::MAX, i32::MIN, i32::MIN];
    for p in points {
        b[0] = b[0].min(p.x);
        b[1] = b[1].min(p.y);
        b[2] = b[2].max(p.x);
        b[3] = b[3].max(p.y);
    }
    b
}

/// All emitted triangles in enumeration order.
pub fn triangles(sub: &mut Subdivision) -> Vec<[Point; 3]> {
    let mut out = Vec::new();
    sub.for_each_triangle(|t| out.push(*t));
    out
}

/// Triangles with sorted corners, sorted. Two subdivisions with equal
/// canonical lists have the same topology.
pub fn canonical(tris: &[[Point; 3]]) -> Vec<[(i32, i32); 3]> {
    let mut out: Vec<[(i32, i32); 3]> = tris
        .iter()
        .map(|t| {
            let mut c = [(t[0].x, t[0].y), (t[1].x, t[1].y), (t[2].x, t[2].y)];
            c.sort();
            c
        })
        .collect();
    out.sort();
    out
}

/// Twice the signed area.
pub fn orient(a: Point, b: Point, c: Point) -> i128 {
    let (ax, ay) = (a.x as i128, a.y as i128);
    let (bx, by) = (b.x as i128, b.y as i128);
    let (cx, cy) = (c.x as i128, c.y as i128);
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

/// Exact in-circle determinant; positive when p is strictly inside the
/// circle through the counter-clockwise triangle (a, b, c). Exact for
/// coordinates up to about 1e6.
pub fn in_circle_exact(a: Point, b: Point, c: Point, p: Point) -> i128 {
    let d = |q: Point| (q.x as i128 - p.x as i128, q.y as i128 - p.y as i128);
    let (adx, ady) = d(a);
    let (bdx, bdy) = d(b);
    let (cdx, cdy) = d(c);
    let a_lift = adx * adx + ady * ady;
    let b_lift = bdx * bdx + bdy * bdy;
    let c_lift = cdx * cdx + cdy * cdy;
    a_lift * (bdx * cdy - cdx * bdy) + b_lift * (cdx * ady - adx * cdy)
        + c_lift * (adx * bdy - bdx * ady)
}

/// Panic if any point lies strictly inside a triangle's circumcircle.
pub fn assert_delaunay(tris: &[[Point; 3]], points: &[Point]) {
    for t in tris {
        let [a, b, c] = *t;
        assert!(orient(a, b, c) > 0, "triangle {a} / {b} / {c} is not counter-clockwise");
        for &p in points {
            if t.iter().any(|v| v.equals_xy(p.x, p.y)) {
                continue;
            }
            assert!(
                in_circle_exact(a, b, c, p) <= 0,
                "{p} is inside the circumcircle of {a} / {b} / {c}"
            );
        }
    }
}

pub type EdgeKey = ((i32, i32), (i32, i32));

fn edge_key(a: Point, b: Point) -> EdgeKey {
    let (a, b) = ((a.x, a.y), (b.x, b.y));
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// How many emitted triangles border each undirected edge.
pub fn edge_incidence(tris: &[[Point; 3]]) -> HashMap<EdgeKey, usize> {
    let mut map = HashMap::new();
    for t in tris {
        for i in 0..3 {
            *map.entry(edge_key(t[i], t[(i + 1) % 3])).or_insert(0) += 1;
        }
    }
    map
}

/// V - E + F over the emitted triangles; 1 for a single disc.
pub fn euler_characteristic(tris: &[[Point; 3]]) -> i64 {
    let vertices: HashSet<(i32, i32)> = tris
        .iter()
        .flat_map(|t| t.iter().map(|p| (p.x, p.y)))
        .collect();
    let edges = edge_incidence(tris).len();
    vertices.len() as i64 - edges as i64 + tris.len() as i64
}

/// Points on the convex hull boundary, collinear ones included
/// (Andrew's monotone chain).
pub fn hull_size(points: &[Point]) -> usize {
    let mut sorted: Vec<(i32, i32)> = points.iter().map(|p| (p.x, p.y)).collect();
    sorted.sort();
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted.len();
    }
    let xy = |q: (i32, i32)| Point::xy(q.0, q.1);
    let chain = |iter: &mut dyn Iterator<Item = &(i32, i32)>| {
        let mut out: Vec<(i32, i32)> = Vec::new();
        for &q in iter {
            while out.len() >= 2
                && orient(xy(out[out.len() - 2]), xy(out[out.len() - 1]), xy(q)) < 0
            {
                out.pop();
            }
            out.push(q);
        }
        out.len()
    };
    chain(&mut sorted.iter()) + chain(&mut sorted.iter().rev()) - 2
}

/// Octagon of integer vertices on a circle of `radius` around the origin.
pub fn octagon(radius: f64) -> Vec<Point> {
    (0..8)
        .map(|k| {
            let a = k as f64 * std::f64::consts::FRAC_PI_4;
            Point::new((radius * a.cos()).round() as i32, (radius * a.sin()).round() as i32, k)
        })
        .collect()
}

/// `n` distinct points, uniform in [0, range) x [0, range).
pub fn random_points(seed: u64, n: usize, range: i32) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let x = rng.random_range(0..range);
        let y = rng.random_range(0..range);
        if seen.insert((x, y)) {
            out.push(Point::new(x, y, rng.random_range(0..1000)));
        }
    }
    out
}

/// Regular grid of `side` x `side` points.
pub fn grid(side: i32, spacing: i32) -> Vec<Point> {
    (0..side)
        .flat_map(|i| (0..side).map(move |j| Point::new(i * spacing, j * spacing, i + j)))
        .collect()
}
