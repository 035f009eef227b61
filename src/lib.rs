// tin-delaunay: incremental Delaunay TIN construction on a quad-edge subdivision
// Copyright 2025 Lars Brubaker
// License: MIT
//
// Input points are quantised to an integer grid by a ScaleModel. All
// topology and orientation tests run on those integers; only the in-circle
// combination and the final output use floating point.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod builder;
pub mod error;
pub mod geom;
pub mod quadedge;
pub mod scale;
pub mod subdivision;
pub mod tin;

pub use builder::{BuilderOption, TinBuilder};
pub use error::{LocateFailure, TinError, TinResult};
pub use geom::{Point, Side, Z_UNSET};
pub use quadedge::{EdgeIdx, QuadEdgeGraph};
pub use scale::ScaleModel;
pub use subdivision::Subdivision;
pub use tin::{IntTin, Triangle};
