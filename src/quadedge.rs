// Copyright 2025 Lars Brubaker
// License: MIT
//
// Quad-edge algebra (Guibas & Stolfi, 1985) over an index arena.
//
// Design:
//   - INVALID: u32::MAX  (null edge)
//   - Directed edges are allocated four at a time. Quartet q owns edges
//     4q..4q+3:  e = 4q, rot(e) = 4q+1, sym(e) = 4q+2, inv_rot(e) = 4q+3.
//     rot/sym/inv_rot only touch the low two bits.
//   - `next` holds one entry per directed edge (the Onext ring).
//   - Origins and visit stamps exist only for the primal edges (even index)
//     and are stored at e >> 1.
//   - Deleted quartets are unlinked and flagged dead; their slots are never
//     reused.

use crate::geom::Point;

pub const INVALID: u32 = u32::MAX;

/// Index of a directed edge in a `QuadEdgeGraph`.
pub type EdgeIdx = u32;

/// Dual of e, directed from its right face to its left face.
#[inline(always)]
pub fn rot(e: EdgeIdx) -> EdgeIdx {
    (e & !3) | (e.wrapping_add(1) & 3)
}

/// The same undirected edge in the opposite direction.
#[inline(always)]
pub fn sym(e: EdgeIdx) -> EdgeIdx {
    e ^ 2
}

/// Dual of e, directed from its left face to its right face.
#[inline(always)]
pub fn inv_rot(e: EdgeIdx) -> EdgeIdx {
    (e & !3) | (e.wrapping_add(3) & 3)
}

#[inline(always)]
pub fn quartet(e: EdgeIdx) -> u32 {
    e >> 2
}

/// True for edges of the primal subdivision (e and sym(e)), false for duals.
#[inline(always)]
pub fn is_primal(e: EdgeIdx) -> bool {
    e & 1 == 0
}

/// The quad-edge graph.
#[derive(Clone, Debug, Default)]
pub struct QuadEdgeGraph {
    next: Vec<EdgeIdx>,
    origins: Vec<Point>,
    visits: Vec<u32>,
    live: Vec<bool>,
}

impl QuadEdgeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(quartets: usize) -> Self {
        QuadEdgeGraph {
            next: Vec::with_capacity(quartets * 4),
            origins: Vec::with_capacity(quartets * 2),
            visits: Vec::with_capacity(quartets * 2),
            live: Vec::with_capacity(quartets),
        }
    }

    /// Number of quartets ever allocated, live or dead.
    #[inline]
    pub fn quartet_count(&self) -> usize {
        self.live.len()
    }

    /// Create an isolated edge from `from` to `to`.
    pub fn make_edge(&mut self, from: Point, to: Point) -> EdgeIdx {
        let e = (self.live.len() as EdgeIdx) << 2;
        // e and sym(e) are alone in their origin rings; the two duals form
        // one ring around the single face.
        self.next.push(e);
        self.next.push(e + 3);
        self.next.push(e + 2);
        self.next.push(e + 1);
        self.origins.push(from);
        self.origins.push(to);
        self.visits.push(0);
        self.visits.push(0);
        self.live.push(true);
        e
    }

    // ──────────────── Navigation ────────────────

    /// Next edge CCW around the origin.
    #[inline]
    pub fn next(&self, e: EdgeIdx) -> EdgeIdx {
        self.next[e as usize]
    }

    #[inline]
    pub fn org(&self, e: EdgeIdx) -> Point {
        debug_assert!(is_primal(e), "dual edge {e} has no origin");
        self.origins[(e >> 1) as usize]
    }

    #[inline]
    pub fn dst(&self, e: EdgeIdx) -> Point {
        self.org(sym(e))
    }

    #[inline]
    fn set_org(&mut self, e: EdgeIdx, p: Point) {
        self.origins[(e >> 1) as usize] = p;
    }

    /// Oprev: next edge CW around the origin (rot.next.rot).
    #[inline]
    pub fn o_prev(&self, e: EdgeIdx) -> EdgeIdx {
        rot(self.next(rot(e)))
    }

    /// Dnext: next edge CCW into the destination (sym.next.sym).
    #[inline]
    pub fn d_next(&self, e: EdgeIdx) -> EdgeIdx {
        sym(self.next(sym(e)))
    }

    /// Dprev: next edge CW into the destination (inv_rot.next.inv_rot).
    #[inline]
    pub fn d_prev(&self, e: EdgeIdx) -> EdgeIdx {
        inv_rot(self.next(inv_rot(e)))
    }

    /// Lnext: next edge CCW around the left face (inv_rot.next.rot).
    #[inline]
    pub fn l_next(&self, e: EdgeIdx) -> EdgeIdx {
        rot(self.next(inv_rot(e)))
    }

    /// Lprev: previous edge around the left face (next.sym).
    #[inline]
    pub fn l_prev(&self, e: EdgeIdx) -> EdgeIdx {
        sym(self.next(e))
    }

    /// Rnext: next edge CCW around the right face (rot.next.inv_rot).
    #[inline]
    pub fn r_next(&self, e: EdgeIdx) -> EdgeIdx {
        inv_rot(self.next(rot(e)))
    }

    /// Rprev: previous edge around the right face (sym.next).
    #[inline]
    pub fn r_prev(&self, e: EdgeIdx) -> EdgeIdx {
        self.next(sym(e))
    }

    /// The direction of e whose origin sorts before its destination.
    pub fn get_primary(&self, e: EdgeIdx) -> EdgeIdx {
        if self.org(e) <= self.dst(e) {
            e
        } else {
            sym(e)
        }
    }

    // ──────────────── Topology ────────────────

    /// Exchange the origin rings of a and b, and independently the left-face
    /// rings. Joins two distinct rings into one or splits one ring in two.
    pub fn splice(&mut self, a: EdgeIdx, b: EdgeIdx) {
        let a_next = self.next(a);
        let b_next = self.next(b);
        let alpha = rot(a_next);
        let beta = rot(b_next);
        let alpha_next = self.next(alpha);
        let beta_next = self.next(beta);

        self.next[a as usize] = b_next;
        self.next[b as usize] = a_next;
        self.next[alpha as usize] = beta_next;
        self.next[beta as usize] = alpha_next;
    }

    /// Turn e counterclockwise inside its enclosing quadrilateral.
    pub fn swap(&mut self, e: EdgeIdx) {
        let a = self.o_prev(e);
        let s = sym(e);
        let b = self.o_prev(s);
        self.splice(e, a);
        self.splice(s, b);
        let a_lnext = self.l_next(a);
        self.splice(e, a_lnext);
        let b_lnext = self.l_next(b);
        self.splice(s, b_lnext);
        let a_dst = self.dst(a);
        let b_dst = self.dst(b);
        self.set_org(e, a_dst);
        self.set_org(s, b_dst);
    }

    /// Mark the whole quartet dead. The caller unlinks it first.
    pub fn delete(&mut self, e: EdgeIdx) {
        self.live[quartet(e) as usize] = false;
    }

    #[inline]
    pub fn is_live(&self, e: EdgeIdx) -> bool {
        self.live[quartet(e) as usize]
    }

    // ──────────────── Visit stamps ────────────────

    #[inline]
    pub fn is_visited(&self, e: EdgeIdx, generation: u32) -> bool {
        self.visits[(e >> 1) as usize] == generation
    }

    #[inline]
    pub fn set_visited(&mut self, e: EdgeIdx, generation: u32) {
        self.visits[(e >> 1) as usize] = generation;
    }

    /// Reset every stamp to the never-visited generation (0).
    pub fn clear_visits(&mut self) {
        self.visits.iter_mut().for_each(|v| *v = 0);
    }

    /// `LINESTRING(x1 y1 z1,x2 y2 z2)` for diagnostics.
    pub fn describe(&self, e: EdgeIdx) -> String {
        if e == INVALID || !is_primal(e) {
            return format!("EDGE({e})");
        }
        let from = self.org(e);
        let to = self.dst(e);
        format!("LINESTRING({from},{to})")
    }
}
