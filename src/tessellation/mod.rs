mod build_bezier;
mod flatten_bezier;
mod weights;

pub use build_bezier::BuildCubicBezier;
pub use flatten_bezier::{cubic_bezier_segment, flatten_segment};
pub use weights::{WeightTable, BEZIER_SEGMENTS};

use crate::error::{ParameterError, Result};

/// Parameters controlling Bezier flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenParams {
    /// Segments shorter than this are copied instead of flattened.
    pub min_segment_length: f64,
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            min_segment_length: 0.0,
        }
    }
}

impl FlattenParams {
    /// Creates flattening parameters.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::OutOfRange` if `min_segment_length` is
    /// negative or not finite.
    pub fn new(min_segment_length: f64) -> Result<Self> {
        if !(min_segment_length.is_finite() && min_segment_length >= 0.0) {
            return Err(ParameterError::OutOfRange {
                parameter: "min_segment_length",
                value: min_segment_length,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self { min_segment_length })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_guard() {
        assert!(FlattenParams::default().min_segment_length.abs() < f64::EPSILON);
    }

    #[test]
    fn new_rejects_negative() {
        assert!(FlattenParams::new(-0.5).is_err());
        assert!(FlattenParams::new(f64::NAN).is_err());
        assert!(FlattenParams::new(0.25).is_ok());
    }
}
