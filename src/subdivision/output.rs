// Copyright 2025 Lars Brubaker
// License: MIT
//
// Triangle enumeration: a depth-first walk over the faces, marking edges
// with the current visit generation.

use super::Subdivision;
use crate::geom::Point;
use crate::quadedge::sym;

impl Subdivision {
    /// Start a new visit generation. On wraparound every stamp is cleared so
    /// no stale stamp can match.
    fn next_generation(&mut self) -> u32 {
        if self.generation == u32::MAX {
            self.graph.clear_visits();
            self.generation = 0;
        }
        self.generation += 1;
        self.generation
    }

    /// Call `visitor` once for every bounded triangle, vertices in the
    /// order of the face's edge ring (counter-clockwise).
    pub fn for_each_triangle<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&[Point; 3]),
    {
        let generation = self.next_generation();
        let mut stack = vec![self.start_edge];

        while let Some(e) = stack.pop() {
            if self.graph.is_visited(e, generation) {
                continue;
            }

            let mut corners = [Point::xy(0, 0); 3];
            let mut count = 0usize;
            let mut touches_frame = false;
            let mut cur = e;
            loop {
                let p = self.graph.org(cur);
                if count < 3 {
                    corners[count] = p;
                }
                count += 1;
                touches_frame |= self.is_frame_coordinate(p.x, p.y);

                let s = sym(cur);
                if !self.graph.is_visited(s, generation) {
                    stack.push(s);
                }
                self.graph.set_visited(cur, generation);

                cur = self.graph.l_next(cur);
                if cur == e {
                    break;
                }
            }

            if count == 3 && !touches_frame {
                visitor(&corners);
            }
        }
    }

    /// Integer variant: `[x1, y1, z1, x2, y2, z2, x3, y3, z3]`.
    pub fn for_each_triangle_int<F>(&mut self, mut visitor: F)
    where
        F: FnMut([i32; 9]),
    {
        self.for_each_triangle(|[a, b, c]| {
            visitor([a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z]);
        });
    }

    /// Like `for_each_triangle_int`, de-quantised through the scale model.
    /// An unset z becomes NaN.
    pub fn for_each_triangle_f64<F>(&mut self, mut visitor: F)
    where
        F: FnMut([f64; 9]),
    {
        let scale = self.scale;
        self.for_each_triangle_int(|t| {
            let mut out = [0.0; 9];
            for (i, v) in t.iter().enumerate() {
                out[i] = scale.to_double(i % 3, *v);
            }
            visitor(out);
        });
    }

    pub fn triangle_count(&mut self) -> usize {
        let mut count = 0;
        self.for_each_triangle(|_| count += 1);
        count
    }
}
