// Copyright 2025 Lars Brubaker
// License: MIT
//
// Immutable triangle arrays extracted from a built subdivision.
//
// Coordinates stay quantised: three parallel `i32` arrays hold three entries
// per triangle, de-quantised on access through the ScaleModel.

use crate::scale::ScaleModel;

/// One triangle in real-world coordinates: `vertices[v] = [x, y, z]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [[f64; 3]; 3],
}

impl Triangle {
    /// Point-in-triangle test, inclusive of edges. Degenerate triangles
    /// contain nothing.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let [a, b, c] = self.vertices;
        let cross =
            |p: [f64; 3], q: [f64; 3]| (q[0] - p[0]) * (y - p[1]) - (q[1] - p[1]) * (x - p[0]);
        let area = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
        if area == 0.0 {
            return false;
        }
        let d1 = cross(a, b);
        let d2 = cross(b, c);
        let d3 = cross(c, a);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    /// z of the triangle's plane at (x, y). NaN when degenerate or when a
    /// corner has no z.
    pub fn elevation(&self, x: f64, y: f64) -> f64 {
        let [a, b, c] = self.vertices;
        let det = (b[1] - c[1]) * (a[0] - c[0]) + (c[0] - b[0]) * (a[1] - c[1]);
        if det == 0.0 {
            return f64::NAN;
        }
        let l1 = ((b[1] - c[1]) * (x - c[0]) + (c[0] - b[0]) * (y - c[1])) / det;
        let l2 = ((c[1] - a[1]) * (x - c[0]) + (a[0] - c[0]) * (y - c[1])) / det;
        let l3 = 1.0 - l1 - l2;
        l1 * a[2] + l2 * b[2] + l3 * c[2]
    }

    /// `[min_x, min_y, max_x, max_y]`.
    pub fn bounds(&self) -> [f64; 4] {
        let mut b = [f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY];
        for v in &self.vertices {
            b[0] = b[0].min(v[0]);
            b[1] = b[1].min(v[1]);
            b[2] = b[2].max(v[0]);
            b[3] = b[3].max(v[1]);
        }
        b
    }
}

#[derive(Clone, Debug)]
pub struct IntTin {
    scale: ScaleModel,
    bounding_box: Option<[f64; 4]>,
    triangle_count: usize,
    x: Vec<i32>,
    y: Vec<i32>,
    z: Vec<i32>,
}

impl IntTin {
    /// Takes ownership of the parallel coordinate arrays. All three must
    /// hold exactly three entries per triangle.
    pub fn new(
        scale: ScaleModel,
        bounding_box: Option<[f64; 4]>,
        x: Vec<i32>,
        y: Vec<i32>,
        z: Vec<i32>,
    ) -> Self {
        debug_assert!(x.len() % 3 == 0 && x.len() == y.len() && x.len() == z.len());
        IntTin {
            scale,
            bounding_box,
            triangle_count: x.len() / 3,
            x,
            y,
            z,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// Bounds of the input vertices, `None` for an empty TIN.
    pub fn bounding_box(&self) -> Option<[f64; 4]> {
        self.bounding_box
    }

    pub fn scale(&self) -> &ScaleModel {
        &self.scale
    }

    fn coordinate(&self, axis: usize, values: &[i32], triangle: usize, vertex: usize) -> f64 {
        if vertex >= 3 {
            return f64::NAN;
        }
        match values.get(triangle * 3 + vertex) {
            Some(&v) => self.scale.to_double(axis, v),
            None => f64::NAN,
        }
    }

    pub fn vertex_x(&self, triangle: usize, vertex: usize) -> f64 {
        self.coordinate(0, &self.x, triangle, vertex)
    }

    pub fn vertex_y(&self, triangle: usize, vertex: usize) -> f64 {
        self.coordinate(1, &self.y, triangle, vertex)
    }

    pub fn vertex_z(&self, triangle: usize, vertex: usize) -> f64 {
        self.coordinate(2, &self.z, triangle, vertex)
    }

    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        if index >= self.triangle_count {
            return None;
        }
        let mut vertices = [[0.0; 3]; 3];
        for (v, corner) in vertices.iter_mut().enumerate() {
            *corner = [
                self.vertex_x(index, v),
                self.vertex_y(index, v),
                self.vertex_z(index, v),
            ];
        }
        Some(Triangle { vertices })
    }

    pub fn for_each_triangle<F>(&self, mut visitor: F)
    where
        F: FnMut(&Triangle),
    {
        for t in (0..self.triangle_count).filter_map(|i| self.triangle(i)) {
            visitor(&t);
        }
    }

    /// Every triangle containing (x, y). Two or more when the point is on a
    /// shared edge or vertex.
    pub fn triangles_at(&self, x: f64, y: f64) -> Vec<Triangle> {
        let mut found = Vec::new();
        self.for_each_triangle(|t| {
            if t.contains(x, y) {
                found.push(*t);
            }
        });
        found
    }

    /// Interpolated z at (x, y) from the first triangle containing it, or NaN
    /// outside the TIN.
    pub fn elevation(&self, x: f64, y: f64) -> f64 {
        (0..self.triangle_count)
            .filter_map(|i| self.triangle(i))
            .find(|t| t.contains(x, y))
            .map_or(f64::NAN, |t| t.elevation(x, y))
    }
}
