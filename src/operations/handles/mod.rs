mod auto_handles;
mod control_handle;

pub use auto_handles::AutoHandles;
pub use control_handle::{control_handle, control_line, HandleSet};

use crate::error::{ParameterError, Result};
use crate::math::vector_2d::distance;
use crate::math::{Point2, Vector2};

/// Handle length at a right-angle corner, as a fraction of the shorter
/// neighbor segment. Makes such corners flatten into a near-circular arc.
pub const CIRCLE_LEN_FACTOR: f64 = 3.0 / 8.0;

/// Parameters shaping automatically generated handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleParams {
    /// Multiplier on handle length: 0 is linear, 1 is round, above 1
    /// increasingly curved.
    pub curvedness: f64,
    /// Asymmetric stretch at vertices with unequal neighbor segments:
    /// 0 is none, positive favors the longer side, negative the shorter.
    pub skew: f64,
}

impl Default for HandleParams {
    fn default() -> Self {
        Self {
            curvedness: 1.0,
            skew: 0.0,
        }
    }
}

impl HandleParams {
    /// Creates handle parameters.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::OutOfRange` if either value is not finite.
    pub fn new(curvedness: f64, skew: f64) -> Result<Self> {
        check_finite("curvedness", curvedness)?;
        check_finite("skew", skew)?;
        Ok(Self { curvedness, skew })
    }
}

fn check_finite(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange {
            parameter,
            value,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
        .into())
    }
}

/// What [`AutoHandles`] emits per vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleMode {
    /// Tangent handles: one per boundary vertex visit, two per interior vertex.
    #[default]
    Tangent,
    /// Experimental: a single handle along the corner bisector per vertex.
    Normal,
}

/// How the missing neighbor of an open path's end vertex is synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointStrategy {
    /// Mirror the opposite neighbor across the bisector of the end segment
    /// and treat the end vertex like an interior one.
    #[default]
    TriangleFlip,
    /// Compute the tangent at the neighboring interior vertex, reflect it in
    /// the end segment and re-anchor it at the end vertex.
    ReflectedTangent,
}

/// A two-point control line from a path vertex to one of its handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlLine {
    pub anchor: Point2,
    pub handle: Point2,
}

impl ControlLine {
    /// Creates a control line from `anchor` to `anchor + offset`.
    #[must_use]
    pub fn from_offset(anchor: Point2, offset: &Vector2) -> Self {
        Self {
            anchor,
            handle: anchor + offset,
        }
    }

    /// Returns `[anchor, handle]`.
    #[must_use]
    pub fn points(&self) -> [Point2; 2] {
        [self.anchor, self.handle]
    }

    /// Returns the handle offset from the anchor.
    #[must_use]
    pub fn offset(&self) -> Vector2 {
        self.handle - self.anchor
    }

    /// Returns the handle length.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(&self.anchor, &self.handle)
    }
}
