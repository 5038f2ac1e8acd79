use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, GeometryBuilder};
use crate::math::Point2;
use crate::operations::ValidateControls;

use super::{flatten_segment, FlattenParams, WeightTable};

/// Replaces every straight segment of a geometry by a flattened cubic
/// Bezier curve shaped by the given control handles.
///
/// Controls are consumed in branch and segment order, four points per
/// segment: segment `k` uses points `4k + 1` and `4k + 3` of the control
/// geometry, i.e. the handle ends of control lines `2k` and `2k + 1`.
#[derive(Debug)]
pub struct BuildCubicBezier<'a> {
    geom: &'a Geometry,
    controls: &'a Geometry,
    params: FlattenParams,
    weights: &'a WeightTable,
}

impl<'a> BuildCubicBezier<'a> {
    /// Creates a new `BuildCubicBezier` operation using the shared weight table.
    #[must_use]
    pub fn new(geom: &'a Geometry, controls: &'a Geometry) -> Self {
        Self {
            geom,
            controls,
            params: FlattenParams::default(),
            weights: WeightTable::shared(),
        }
    }

    /// Sets the flattening parameters.
    #[must_use]
    pub fn with_params(mut self, params: FlattenParams) -> Self {
        self.params = params;
        self
    }

    /// Uses `weights` instead of the shared table.
    #[must_use]
    pub fn with_weights(mut self, weights: &'a WeightTable) -> Self {
        self.weights = weights;
        self
    }

    /// Executes the operation, writing a geometry of the input's kind to `builder`.
    ///
    /// Each branch is written as the flattened points of its segments
    /// followed by its last point.
    ///
    /// # Errors
    ///
    /// - `GeometryError::UnsupportedKind` for point geometries
    /// - `ControlsError` if the controls do not fit the geometry
    pub fn execute<B: GeometryBuilder>(&self, mut builder: B) -> Result<B::Output> {
        if !self.geom.kind.is_curve() {
            return Err(GeometryError::UnsupportedKind {
                kind: self.geom.kind,
            }
            .into());
        }
        ValidateControls::new(self.geom, Some(self.controls)).execute()?;

        debug!(
            kind = %self.geom.kind,
            branches = self.geom.branch_count(),
            subdivisions = self.weights.segments(),
            min_segment_length = self.params.min_segment_length,
            "flattening cubic bezier segments"
        );

        let control_coords: Vec<&Point2> = self.controls.coords().collect();
        let mut segment = 0;

        builder.begin_geometry(self.geom.kind);
        for (index, branch) in self.geom.branches.iter().enumerate() {
            trace!(branch = index, points = branch.coords.len(), "flatten branch");
            builder.begin_branch();

            for pair in branch.coords.windows(2) {
                let ctrl0 = control_coords[4 * segment + 1];
                let ctrl1 = control_coords[4 * segment + 3];
                segment += 1;

                let curve =
                    flatten_segment(&pair[0], &pair[1], ctrl0, ctrl1, self.weights, &self.params);
                builder.append_points(&curve);
            }

            if let Some(last) = branch.coords.last() {
                builder.append_point(*last);
            }
            builder.end_branch();
        }

        Ok(builder.end_geometry())
    }
}
