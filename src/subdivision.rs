// Copyright 2025 Lars Brubaker
// License: MIT
//
// Incremental Delaunay triangulation over a quad-edge subdivision.
//
// A synthetic frame triangle encloses the bounding box so that every inserted
// point falls inside an existing face. Insertion locates the face, fans it to
// the new vertex and then flips edges until the ring around the new vertex is
// locally Delaunay. Faces touching a frame vertex are never reported.
//
// The flip test treats the frame corners as points at infinity. Every
// convex hull edge of the real points therefore survives, however flat the
// triangle behind it.

mod locate;
mod output;


use tracing::{debug, trace, warn};

use crate::error::{TinError, TinResult};
use crate::geom::{distance_segment_point, in_circle, in_half_plane, Point, Side};
use crate::quadedge::{quartet, sym, EdgeIdx, QuadEdgeGraph};
use crate::scale::ScaleModel;

/// Frame offset never drops below this, so a single point or a degenerate
/// box still gets a proper enclosing triangle.
const MIN_FRAME_OFFSET: i64 = 10;

/// Frame offset as a multiple of the larger bounding-box side.
const FRAME_FACTOR: i64 = 10;

/// As the offset grows the corners run off along (0, 1), (-1, -1) and
/// (1, -1). A circle through a real vertex and two of them tends to the
/// half-plane through that vertex with this inward normal, indexed by the
/// corner left out.
const FRAME_PAIR_NORMALS: [(i64, i64); 3] = [(0, -1), (3, 1), (-3, 1)];

pub struct Subdivision {
    graph: QuadEdgeGraph,
    frame: [Point; 3],
    start_edge: EdgeIdx,
    last_edge: EdgeIdx,
    edge_count: usize,
    generation: u32,
    scale: ScaleModel,
}

/// A frame coordinate, if it fits. `i32::MIN` stays reserved.
fn frame_coordinate(v: i64) -> Option<i32> {
    i32::try_from(v).ok().filter(|&v| v != i32::MIN)
}

impl Subdivision {
    /// Build the frame for `bounds = [min_x, min_y, max_x, max_y]`.
    ///
    /// Fails when a frame corner would fall outside the `i32` range.
    pub fn new(bounds: [i32; 4], scale: ScaleModel) -> TinResult<Self> {
        let [min_x, min_y, max_x, max_y] = bounds.map(i64::from);
        let width = (max_x - min_x).max(0);
        let height = (max_y - min_y).max(0);
        let offset = (FRAME_FACTOR * width.max(height)).max(MIN_FRAME_OFFSET);

        let corners = [
            (min_x + width / 2, min_y + height + offset),
            (min_x - offset, min_y - offset),
            (min_x + width + offset, min_y - offset),
        ]
        .map(|(x, y)| Some(Point::xy(frame_coordinate(x)?, frame_coordinate(y)?)));
        let [Some(apex), Some(left), Some(right)] = corners else {
            warn!(?bounds, offset, "Bounds too large for a frame");
            return Err(TinError::BoundsTooLarge { bounds });
        };
        let frame = [apex, left, right];

        let mut graph = QuadEdgeGraph::with_capacity(64);
        let start = graph.make_edge(apex, left);
        let e2 = graph.make_edge(left, right);
        graph.splice(sym(start), e2);
        let e3 = graph.make_edge(right, apex);
        graph.splice(sym(e2), e3);
        graph.splice(sym(e3), start);

        debug!(
            ?bounds,
            offset,
            apex = %apex,
            left = %left,
            right = %right,
            "Created subdivision frame"
        );

        Ok(Subdivision {
            graph,
            frame,
            start_edge: start,
            last_edge: start,
            edge_count: 3,
            generation: 0,
            scale,
        })
    }

    // ──────────────── Accessors ────────────────

    /// Apex, lower-left and lower-right frame corners.
    pub fn frame_vertices(&self) -> &[Point; 3] {
        &self.frame
    }

    pub fn is_frame_coordinate(&self, x: i32, y: i32) -> bool {
        self.frame.iter().any(|f| f.equals_xy(x, y))
    }

    /// Index of the frame corner at p: apex 0, left 1, right 2.
    fn frame_corner(&self, p: Point) -> Option<usize> {
        self.frame.iter().position(|f| f.equals_xy(p.x, p.y))
    }

    /// (x, y) is strictly inside the frame triangle.
    pub fn encloses(&self, x: i32, y: i32) -> bool {
        let [apex, left, right] = self.frame;
        [(apex, left), (left, right), (right, apex)]
            .iter()
            .all(|(a, b)| Side::of(a.x, a.y, b.x, b.y, x, y) == Side::Left)
    }

    /// Live undirected edges, frame included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The first frame edge; never deleted.
    pub fn starting_edge(&self) -> EdgeIdx {
        self.start_edge
    }

    pub fn graph(&self) -> &QuadEdgeGraph {
        &self.graph
    }

    pub fn scale(&self) -> &ScaleModel {
        &self.scale
    }

    // ──────────────── Insertion ────────────────

    /// Insert one vertex and restore the Delaunay property around it.
    ///
    /// A point that coincides with an existing vertex is ignored. A point on
    /// an edge of the located face splits that edge. The point must lie
    /// inside the frame.
    pub fn insert_vertex(&mut self, p: Point) -> TinResult<()> {
        let (x, y) = (p.x, p.y);
        if !self.encloses(x, y) {
            return Err(TinError::OutsideFrame { x, y });
        }
        let mut e = self.find_quad_edge(x, y)?;

        if self.graph.org(e).equals_xy(x, y) || self.graph.dst(e).equals_xy(x, y) {
            return Ok(());
        }

        let face = [e, self.graph.l_next(e), self.graph.l_prev(e)];
        if let Some(&on) = face.iter().find(|&&cand| self.is_on_edge(cand, x, y)) {
            trace!(edge = %self.graph.describe(on), point = %p, "Splitting edge");
            e = self.graph.o_prev(on);
            let doomed = self.graph.next(e);
            self.delete(doomed);
        }

        self.edge_count += 1;
        let origin = self.graph.org(e);
        let base = self.graph.make_edge(origin, p);
        self.graph.splice(base, e);

        let e = self.connect_edges(e, base);
        self.swap_edges(base, e, p);
        Ok(())
    }

    /// Insert a sequence, skipping a point only when it repeats the (x, y)
    /// of the point immediately before it. Sorted input therefore loses all
    /// duplicates; unsorted input relies on `insert_vertex` to ignore them.
    pub fn insert_vertices<I>(&mut self, points: I) -> TinResult<()>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut previous: Option<Point> = None;
        for p in points {
            if previous.is_some_and(|q| q.equals_xy(p.x, p.y)) {
                continue;
            }
            self.insert_vertex(p)?;
            previous = Some(p);
        }
        Ok(())
    }

    /// (x, y) is exactly on the supporting line of e and within one unit of
    /// the segment. A point off the line but closer than one unit is
    /// inserted into the face instead, so for integer input this amounts to
    /// lying on the open segment.
    fn is_on_edge(&self, e: EdgeIdx, x: i32, y: i32) -> bool {
        let from = self.graph.org(e);
        let to = self.graph.dst(e);
        Side::of(from.x, from.y, to.x, to.y, x, y) == Side::On
            && distance_segment_point(from.x, from.y, to.x, to.y, x, y) < 1.0
    }

    /// Close the face around the new spoke `start`, adding one spoke per
    /// boundary edge. Returns the last boundary edge visited.
    fn connect_edges(&mut self, mut e: EdgeIdx, start: EdgeIdx) -> EdgeIdx {
        let mut base = start;
        let mut l_next = self.graph.l_next(e);
        loop {
            let e2 = sym(base);
            self.edge_count += 1;
            let from = self.graph.dst(e);
            let to = self.graph.org(e2);
            base = self.graph.make_edge(from, to);
            self.graph.splice(base, l_next);
            self.graph.splice(sym(base), e2);
            e = self.graph.o_prev(base);
            l_next = self.graph.l_next(e);
            if l_next == start {
                return e;
            }
        }
    }

    /// Flip suspect edges of the star around p until none needs it.
    fn swap_edges(&mut self, start: EdgeIdx, mut e: EdgeIdx, p: Point) {
        loop {
            if self.is_swap_required(e, p) {
                self.graph.swap(e);
                e = self.graph.o_prev(e);
            } else {
                let n = self.graph.next(e);
                if n == start {
                    return;
                }
                e = self.graph.l_prev(n);
            }
        }
    }

    /// Flip test for e after inserting p on its left.
    ///
    /// Only a triangle (org, across, dst) right of e can be flipped away;
    /// it is when p falls strictly inside its circumcircle. With frame
    /// corners taken at infinity that circle becomes a half-plane.
    fn is_swap_required(&self, e: EdgeIdx, p: Point) -> bool {
        let from = self.graph.org(e);
        let to = self.graph.dst(e);
        let across = self.graph.dst(self.graph.o_prev(e));
        if Side::of(from.x, from.y, to.x, to.y, across.x, across.y) != Side::Right {
            return false;
        }

        // (from, across, to) is counter-clockwise.
        match [from, across, to].map(|q| self.frame_corner(q)) {
            [None, None, None] => in_circle(from, across, to, p) > 0.0,
            [Some(_), None, None] => in_half_plane(across, to, p),
            [None, Some(_), None] => in_half_plane(to, from, p),
            [None, None, Some(_)] => in_half_plane(from, across, p),
            [None, Some(a), Some(b)] => faces_frame_pair(from, a, b, p),
            [Some(a), None, Some(b)] => faces_frame_pair(across, a, b, p),
            [Some(a), Some(b), None] => faces_frame_pair(to, a, b, p),
            [Some(_), Some(_), Some(_)] => false,
        }
    }

    // ──────────────── Deletion ────────────────

    /// Unlink an undirected edge from both origin rings and mark it dead.
    pub fn delete(&mut self, e: EdgeIdx) {
        if quartet(self.last_edge) == quartet(e) {
            let candidate = self.graph.next(e);
            self.last_edge = if quartet(candidate) == quartet(e) {
                self.start_edge
            } else {
                candidate
            };
        }
        self.edge_count -= 1;

        let e_prev = self.graph.o_prev(e);
        self.graph.splice(e, e_prev);
        let s = sym(e);
        let s_prev = self.graph.o_prev(s);
        self.graph.splice(s, s_prev);
        self.graph.delete(e);
    }
}

/// p is strictly inside the limit circle through `vertex` and frame corners
/// `a` and `b`.
fn faces_frame_pair(vertex: Point, a: usize, b: usize, p: Point) -> bool {
    let (nx, ny) = FRAME_PAIR_NORMALS[3 - a - b];
    let dx = i64::from(p.x) - i64::from(vertex.x);
    let dy = i64::from(p.y) - i64::from(vertex.y);
    dx * nx + dy * ny > 0
}
