// Copyright 2025 Lars Brubaker
// License: MIT
//
// TinBuilder: collects quantised vertices and their bounds, builds one
// subdivision on first use and extracts the triangles.

use tracing::info;

use crate::error::TinResult;
use crate::geom::Point;
use crate::scale::ScaleModel;
use crate::subdivision::Subdivision;
use crate::tin::IntTin;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BuilderOption {
    /// Sort vertices on (x, y) before the bulk insert. Improves locality of
    /// the point-location walk and lets adjacent duplicates be skipped.
    SortVertices,
}

/// `[min_x, min_y, max_x, max_y]` with nothing in it yet.
const EMPTY_BOUNDS: [i32; 4] = [i32::MAX, i32::MAX, i32::MIN, i32::MIN];

pub struct TinBuilder {
    scale: ScaleModel,
    vertices: Vec<Point>,
    bounds: [i32; 4],
    sort_vertices: bool,
    subdivision: Option<Subdivision>,
}

impl TinBuilder {
    pub fn new(scale: ScaleModel) -> Self {
        TinBuilder {
            scale,
            vertices: Vec::new(),
            bounds: EMPTY_BOUNDS,
            sort_vertices: false,
            subdivision: None,
        }
    }

    /// Start from known (quantised) bounds, e.g. a tile extent.
    pub fn with_bounds(scale: ScaleModel, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        let mut builder = Self::new(scale);
        builder.expand_bounds(min_x, min_y);
        builder.expand_bounds(max_x, max_y);
        builder
    }

    pub fn set_option(&mut self, option: BuilderOption, value: bool) {
        match option {
            BuilderOption::SortVertices => self.sort_vertices = value,
        }
    }

    pub fn is_sort_vertices(&self) -> bool {
        self.sort_vertices
    }

    pub fn scale(&self) -> &ScaleModel {
        &self.scale
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Quantised bounds, `None` until a vertex or explicit bounds are given.
    pub fn bounds(&self) -> Option<[i32; 4]> {
        if self.bounds[0] > self.bounds[2] {
            None
        } else {
            Some(self.bounds)
        }
    }

    /// Bounds in real-world coordinates.
    pub fn bounding_box(&self) -> Option<[f64; 4]> {
        self.bounds().map(|[min_x, min_y, max_x, max_y]| {
            [
                self.scale.to_double(0, min_x),
                self.scale.to_double(1, min_y),
                self.scale.to_double(0, max_x),
                self.scale.to_double(1, max_y),
            ]
        })
    }

    fn expand_bounds(&mut self, x: i32, y: i32) {
        self.bounds[0] = self.bounds[0].min(x);
        self.bounds[1] = self.bounds[1].min(y);
        self.bounds[2] = self.bounds[2].max(x);
        self.bounds[3] = self.bounds[3].max(y);
    }

    // ──────────────── Input ────────────────

    /// Add a quantised vertex. Once the TIN is built the vertex also goes
    /// straight into the subdivision; it must then lie inside the frame that
    /// was sized from the bounds at build time. A rejected vertex is not
    /// recorded.
    pub fn add_vertex(&mut self, p: Point) -> TinResult<()> {
        if let Some(sub) = self.subdivision.as_mut() {
            sub.insert_vertex(p)?;
        }
        self.expand_bounds(p.x, p.y);
        self.vertices.push(p);
        Ok(())
    }

    pub fn insert_vertex(&mut self, x: i32, y: i32, z: i32) -> TinResult<()> {
        self.add_vertex(Point::new(x, y, z))
    }

    /// Quantise a real-world point and add it. A NaN z means no elevation.
    pub fn insert_point(&mut self, x: f64, y: f64, z: f64) -> TinResult<()> {
        let [x, y, z] = self.scale.to_int_xyz(x, y, z)?;
        self.insert_vertex(x, y, z)
    }

    // ──────────────── Build ────────────────

    /// Build the subdivision from the accumulated vertices. Later calls do
    /// nothing.
    pub fn build_tin(&mut self) -> TinResult<()> {
        self.subdivision().map(|_| ())
    }

    /// The built subdivision, building it first if needed.
    pub fn subdivision(&mut self) -> TinResult<&mut Subdivision> {
        let sub = match self.subdivision.take() {
            Some(sub) => sub,
            None => self.create_subdivision()?,
        };
        Ok(self.subdivision.insert(sub))
    }

    fn create_subdivision(&mut self) -> TinResult<Subdivision> {
        let bounds = self.bounds().unwrap_or([0; 4]);
        let mut sub = Subdivision::new(bounds, self.scale)?;
        if self.sort_vertices {
            // Stable, so the first z seen for an (x, y) survives.
            self.vertices.sort_by(Point::compare_xy);
        }
        sub.insert_vertices(self.vertices.iter().copied())?;
        info!(
            vertices = self.vertices.len(),
            edges = sub.edge_count(),
            sorted = self.sort_vertices,
            "Built TIN"
        );
        Ok(sub)
    }

    // ──────────────── Output ────────────────

    /// Visit every triangle as `[x1, y1, z1, .., z3]` in real-world units.
    pub fn for_each_triangle<F>(&mut self, visitor: F) -> TinResult<()>
    where
        F: FnMut([f64; 9]),
    {
        self.subdivision()?.for_each_triangle_f64(visitor);
        Ok(())
    }

    pub fn for_each_triangle_int<F>(&mut self, visitor: F) -> TinResult<()>
    where
        F: FnMut([i32; 9]),
    {
        self.subdivision()?.for_each_triangle_int(visitor);
        Ok(())
    }

    /// Extract the triangles into exactly-sized arrays: one pass to count,
    /// one to fill.
    pub fn new_tin(&mut self) -> TinResult<IntTin> {
        let scale = self.scale;
        let bounding_box = self.bounding_box();
        let sub = self.subdivision()?;

        let count = sub.triangle_count();
        let mut x = vec![0; count * 3];
        let mut y = vec![0; count * 3];
        let mut z = vec![0; count * 3];
        let mut i = 0;
        sub.for_each_triangle(|corners| {
            for p in corners {
                x[i] = p.x;
                y[i] = p.y;
                z[i] = p.z;
                i += 1;
            }
        });
        debug_assert_eq!(i, count * 3);

        info!(triangles = count, "Extracted TIN");
        Ok(IntTin::new(scale, bounding_box, x, y, z))
    }
}
