// Copyright 2025 Lars Brubaker
// License: MIT
//
// Fixed-precision model: maps real-world coordinates to the integer grid the
// triangulation works on, and back.

use crate::error::{TinError, TinResult};
use crate::geom::Z_UNSET;

/// Per-axis scale and offset. `to_int(v) = round((v - offset) * scale)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleModel {
    scale: [f64; 3],
    offset: [f64; 3],
}

const AXES: [char; 3] = ['x', 'y', 'z'];

impl ScaleModel {
    pub fn new(scale_x: f64, scale_y: f64, scale_z: f64) -> TinResult<Self> {
        Self::with_offsets([scale_x, scale_y, scale_z], [0.0; 3])
    }

    pub fn with_offsets(scale: [f64; 3], offset: [f64; 3]) -> TinResult<Self> {
        for axis in 0..3 {
            let value = scale[axis];
            if value == 0.0 || !value.is_finite() {
                return Err(TinError::InvalidScale { axis: AXES[axis], value });
            }
            if !offset[axis].is_finite() {
                return Err(TinError::CoordinateOutOfRange {
                    axis: AXES[axis],
                    value: offset[axis],
                });
            }
        }
        Ok(ScaleModel { scale, offset })
    }

    pub fn scale_x(&self) -> f64 {
        self.scale[0]
    }

    pub fn scale_y(&self) -> f64 {
        self.scale[1]
    }

    pub fn scale_z(&self) -> f64 {
        self.scale[2]
    }

    /// Quantise one coordinate. NaN z is accepted and becomes `Z_UNSET`.
    pub fn to_int(&self, axis: usize, value: f64) -> TinResult<i32> {
        if axis == 2 && value.is_nan() {
            return Ok(Z_UNSET);
        }
        let scaled = ((value - self.offset[axis]) * self.scale[axis]).round();
        // Z_UNSET is reserved, so the lowest representable value is MIN + 1.
        if !scaled.is_finite() || scaled <= i32::MIN as f64 || scaled > i32::MAX as f64 {
            return Err(TinError::CoordinateOutOfRange { axis: AXES[axis], value });
        }
        Ok(scaled as i32)
    }

    /// De-quantise one coordinate; `Z_UNSET` maps to NaN on every axis.
    #[inline]
    pub fn to_double(&self, axis: usize, value: i32) -> f64 {
        if value == Z_UNSET {
            f64::NAN
        } else {
            value as f64 / self.scale[axis] + self.offset[axis]
        }
    }

    pub fn to_int_xyz(&self, x: f64, y: f64, z: f64) -> TinResult<[i32; 3]> {
        Ok([self.to_int(0, x)?, self.to_int(1, y)?, self.to_int(2, z)?])
    }
}

impl Default for ScaleModel {
    fn default() -> Self {
        ScaleModel {
            scale: [1.0; 3],
            offset: [0.0; 3],
        }
    }
}
