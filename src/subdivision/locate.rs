// Copyright 2025 Lars Brubaker
// License: MIT
//
// Point location by walking the triangulation from the last located edge.

use tracing::warn;

use super::Subdivision;
use crate::error::LocateFailure;
use crate::geom::Side;
use crate::quadedge::{sym, EdgeIdx};

impl Subdivision {
    /// Find an edge of the face containing (x, y).
    ///
    /// If (x, y) is a vertex, the returned edge has it as origin or
    /// destination. Otherwise the point is inside or on the boundary of the
    /// left face of the returned edge. The walk is capped at the live edge
    /// count and assumes the triangulation is Delaunay.
    pub fn find_quad_edge(&mut self, x: i32, y: i32) -> Result<EdgeIdx, LocateFailure> {
        let g = &self.graph;
        let bound = self.edge_count.max(3);
        let mut e = self.last_edge;

        for _ in 0..bound {
            let from = g.org(e);
            let to = g.dst(e);
            if from.equals_xy(x, y) || to.equals_xy(x, y) {
                self.last_edge = e;
                return Ok(e);
            }

            if Side::of(from.x, from.y, to.x, to.y, x, y) == Side::Right {
                e = sym(e);
                continue;
            }

            let o_next = g.next(e);
            let o_next_to = g.dst(o_next);
            if Side::of(from.x, from.y, o_next_to.x, o_next_to.y, x, y) == Side::Left {
                e = o_next;
                continue;
            }

            let d_prev = g.d_prev(e);
            let d_prev_from = g.org(d_prev);
            if Side::of(d_prev_from.x, d_prev_from.y, to.x, to.y, x, y) == Side::Left {
                e = d_prev;
                continue;
            }

            // Inside the left face. The third corner is the one vertex not
            // yet compared against.
            let l_prev = g.l_prev(e);
            let found = if g.org(l_prev).equals_xy(x, y) { l_prev } else { e };
            self.last_edge = found;
            return Ok(found);
        }

        let edge = g.describe(e);
        warn!(edge = %edge, bound, x, y, "Point location did not converge");
        Err(LocateFailure { edge })
    }
}
