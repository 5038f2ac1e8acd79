use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::{Branch, Geometry, GeometryBuilder, GeometryKind};
use crate::math::vector_2d::{triangle_flip, vector_between};
use crate::math::Point2;

use super::{control_handle, control_line, ControlLine, EndpointStrategy, HandleMode, HandleParams};

/// Generates control handles for every vertex of a line or area geometry.
///
/// Handles of a vertex depend only on its two neighbors. Rings (first and
/// last point equal) wrap around the seam. The ends of open paths get a
/// synthetic neighbor chosen by the [`EndpointStrategy`].
///
/// In [`HandleMode::Tangent`], each branch of `k` points yields `2(k - 1)`
/// control lines in path order: the first vertex contributes its handle
/// toward the next vertex, the last its handle toward the previous one, and
/// every interior vertex both (previous first). Segment `i` is thus shaped by
/// lines `2i` and `2i + 1`.
#[derive(Debug)]
pub struct AutoHandles<'a> {
    geom: &'a Geometry,
    params: HandleParams,
    mode: HandleMode,
    endpoints: EndpointStrategy,
}

impl<'a> AutoHandles<'a> {
    /// Creates a new `AutoHandles` operation in tangent mode.
    #[must_use]
    pub fn new(geom: &'a Geometry, params: HandleParams) -> Self {
        Self {
            geom,
            params,
            mode: HandleMode::default(),
            endpoints: EndpointStrategy::default(),
        }
    }

    /// Sets what is emitted per vertex.
    #[must_use]
    pub fn with_mode(mut self, mode: HandleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets how open path ends are handled.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: EndpointStrategy) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Computes the control lines of every branch, in branch order.
    ///
    /// # Errors
    ///
    /// - `GeometryError::UnsupportedKind` for point geometries
    /// - `GeometryError::TooFewPoints` if any branch has fewer than 3 points
    pub fn control_lines(&self) -> Result<Vec<Vec<ControlLine>>> {
        if !self.geom.kind.is_curve() {
            return Err(GeometryError::UnsupportedKind {
                kind: self.geom.kind,
            }
            .into());
        }
        debug!(
            kind = %self.geom.kind,
            branches = self.geom.branch_count(),
            curvedness = self.params.curvedness,
            skew = self.params.skew,
            mode = ?self.mode,
            "generating control handles"
        );

        self.geom
            .branches
            .iter()
            .enumerate()
            .map(|(index, branch)| self.branch_lines(index, branch))
            .collect()
    }

    /// Writes the control lines to `builder` as a line geometry, one
    /// two-point branch per control line.
    ///
    /// Nothing is written if the input is rejected.
    ///
    /// # Errors
    ///
    /// Same as [`control_lines`](Self::control_lines).
    pub fn execute<B: GeometryBuilder>(&self, mut builder: B) -> Result<B::Output> {
        let lines = self.control_lines()?;
        builder.begin_geometry(GeometryKind::Line);
        for line in lines.iter().flatten() {
            builder.add_branch(&line.points());
        }
        Ok(builder.end_geometry())
    }

    fn branch_lines(&self, index: usize, branch: &Branch) -> Result<Vec<ControlLine>> {
        let coords = &branch.coords;
        let n = coords.len();
        if n < 3 {
            return Err(GeometryError::TooFewPoints {
                branch: index,
                count: n,
            }
            .into());
        }

        let is_ring = branch.is_ring();
        trace!(branch = index, points = n, is_ring, "branch handles");

        // Neighbors beyond the first and last vertex.
        let (before, after) = if is_ring {
            (coords[n - 2], coords[1])
        } else {
            (
                triangle_flip(&coords[2], &coords[0], &coords[1]),
                triangle_flip(&coords[n - 3], &coords[n - 1], &coords[n - 2]),
            )
        };
        let reflect_ends = !is_ring && self.endpoints == EndpointStrategy::ReflectedTangent;

        let capacity = match self.mode {
            HandleMode::Tangent => 2 * (n - 1),
            HandleMode::Normal => n,
        };
        let mut lines = Vec::with_capacity(capacity);

        for i in 0..n {
            let curr = coords[i];
            let prev = if i == 0 { before } else { coords[i - 1] };
            let next = if i == n - 1 { after } else { coords[i + 1] };
            let set = control_handle(
                &curr,
                &vector_between(&curr, &prev),
                &vector_between(&curr, &next),
                &self.params,
            );

            match self.mode {
                HandleMode::Normal => lines.push(set.normal),
                HandleMode::Tangent if i == 0 => lines.push(if reflect_ends {
                    self.reflected_end(&coords[2], &coords[1], &coords[0])
                } else {
                    set.to_next
                }),
                HandleMode::Tangent if i == n - 1 => lines.push(if reflect_ends {
                    self.reflected_end(&coords[n - 3], &coords[n - 2], &coords[n - 1])
                } else {
                    set.to_prev
                }),
                HandleMode::Tangent => {
                    lines.push(set.to_prev);
                    lines.push(set.to_next);
                }
            }
        }

        Ok(lines)
    }

    fn reflected_end(&self, far: &Point2, inner: &Point2, end: &Point2) -> ControlLine {
        control_line(far, inner, end, &self.params, true)
    }
}
