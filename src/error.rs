// Copyright 2025 Lars Brubaker
// License: MIT
//
// Error types for TIN construction.

use thiserror::Error;

/// Point location did not converge within the live edge count.
///
/// It is never retried; `edge` describes where the walk gave up.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("point location failed to converge at {edge}")]
pub struct LocateFailure {
    pub edge: String,
}

/// Errors raised while building a subdivision or feeding a `TinBuilder`.
#[derive(Debug, Error)]
pub enum TinError {
    #[error(transparent)]
    Locate(#[from] LocateFailure),

    /// The frame triangle for these bounds would not fit in `i32`.
    #[error("bounds {bounds:?} are too large to enclose in a frame")]
    BoundsTooLarge { bounds: [i32; 4] },

    /// A vertex outside the frame built for the original bounds.
    #[error("vertex ({x}, {y}) lies outside the subdivision frame")]
    OutsideFrame { x: i32, y: i32 },

    /// A scale factor of zero or a non-finite scale.
    #[error("invalid {axis} scale: {value} (must be finite and non-zero)")]
    InvalidScale { axis: char, value: f64 },

    /// A coordinate that is not finite or does not quantise into an `i32`.
    #[error("{axis} coordinate {value} cannot be represented at the configured scale")]
    CoordinateOutOfRange { axis: char, value: f64 },
}

/// Result type for builder operations.
pub type TinResult<T> = std::result::Result<T, TinError>;
