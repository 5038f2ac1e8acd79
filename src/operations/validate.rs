use crate::error::{ControlsError, Result};
use crate::geometry::{Geometry, GeometryKind};

/// Number of control lines a geometry needs: `2k - 2` per branch of `k` points.
#[must_use]
pub fn expected_control_lines(geom: &Geometry) -> usize {
    geom.branches
        .iter()
        .map(|b| (2 * b.coords.len()).saturating_sub(2))
        .sum()
}

/// Checks that caller-supplied control handles fit a geometry.
///
/// The controls must be a line geometry with one two-point branch per
/// expected control line, as produced by
/// [`AutoHandles`](super::handles::AutoHandles).
#[derive(Debug)]
pub struct ValidateControls<'a> {
    geom: &'a Geometry,
    controls: Option<&'a Geometry>,
}

impl<'a> ValidateControls<'a> {
    /// Creates a new `ValidateControls` check.
    #[must_use]
    pub fn new(geom: &'a Geometry, controls: Option<&'a Geometry>) -> Self {
        Self { geom, controls }
    }

    /// Executes the check.
    ///
    /// # Errors
    ///
    /// - `ControlsError::Missing` if no controls were supplied
    /// - `ControlsError::WrongKind` if the controls are not a line geometry
    /// - `ControlsError::WrongCount` if the branch or point count differs
    pub fn execute(&self) -> Result<()> {
        let controls = self.controls.ok_or(ControlsError::Missing)?;

        if controls.kind != GeometryKind::Line {
            return Err(ControlsError::WrongKind {
                found: controls.kind,
            }
            .into());
        }

        let expected_branches = expected_control_lines(self.geom);
        let expected_points = 2 * expected_branches;
        let found_branches = controls.branch_count();
        let found_points = controls.coord_count();
        if found_branches != expected_branches || found_points != expected_points {
            return Err(ControlsError::WrongCount {
                kind: self.geom.kind,
                expected_branches,
                expected_points,
                found_branches,
                found_points,
            }
            .into());
        }

        Ok(())
    }
}
