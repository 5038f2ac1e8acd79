use std::sync::OnceLock;

use crate::error::{ParameterError, Result};

/// Number of polyline segments each cubic Bezier segment is flattened into.
pub const BEZIER_SEGMENTS: usize = 16;

/// Cubic Bernstein weights sampled at `t = i / n` for `i = 0..=n`.
///
/// Row `i` holds the weights of `[p0, ctrl0, ctrl1, p1]`. Only rows up to
/// `n / 2` are evaluated; row `n - i` is row `i` reversed, since
/// `B_k(1 - t) = B_{3-k}(t)`. The last weight of each evaluated row is
/// `1 - (b0 + b1 + b2)`, so every row sums to one by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    rows: Vec<[f64; 4]>,
}

impl WeightTable {
    /// Builds the table for `segments` subdivisions.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::OutOfRange` if `segments` is zero.
    pub fn new(segments: usize) -> Result<Self> {
        if segments == 0 {
            return Err(ParameterError::OutOfRange {
                parameter: "segments",
                value: 0.0,
                min: 1.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self::build(segments))
    }

    /// Returns the process-wide table for [`BEZIER_SEGMENTS`] subdivisions.
    ///
    /// Built on first use and never modified afterwards.
    #[must_use]
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<WeightTable> = OnceLock::new();
        SHARED.get_or_init(|| Self::build(BEZIER_SEGMENTS))
    }

    #[allow(clippy::cast_precision_loss)]
    fn build(n: usize) -> Self {
        let mut rows = vec![[0.0; 4]; n + 1];
        for i in 0..=n / 2 {
            let t = i as f64 / n as f64;
            let tc = 1.0 - t;
            let b0 = tc * tc * tc;
            let b1 = 3.0 * tc * tc * t;
            let b2 = 3.0 * tc * t * t;
            let b3 = 1.0 - b0 - b1 - b2;

            rows[i] = [b0, b1, b2, b3];
            rows[n - i] = [b3, b2, b1, b0];
        }
        Self { rows }
    }

    /// Returns the subdivision count `n`.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.rows.len() - 1
    }

    /// Returns all `n + 1` rows.
    #[must_use]
    pub fn rows(&self) -> &[[f64; 4]] {
        &self.rows
    }
}
