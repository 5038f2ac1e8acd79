//! Host-facing smoothing operations.
//!
//! These wrap the core operations with the host's failure policy: rejected
//! input yields `None` instead of an error, caller-supplied controls that do
//! not fit leave the input unchanged, and validation reports a status string.

use tracing::warn;

use crate::error::Result;
use crate::geometry::{GeomBuilder, Geometry};
use crate::operations::{AutoHandles, HandleMode, HandleParams, ValidateControls};
use crate::tessellation::BuildCubicBezier;

/// Status reported by [`check_controls`] for usable controls.
pub const CONTROLS_OK: &str = "OK";

/// Smooths `geom` with automatic handles and default parameters.
#[must_use]
pub fn geom_bezier(geom: &Geometry) -> Option<Geometry> {
    bezier(geom, HandleParams::default())
}

/// Smooths `geom` with automatic handles of the given curvedness.
#[must_use]
pub fn geom_bezier_alpha(geom: &Geometry, alpha: f64) -> Option<Geometry> {
    geom_bezier_alpha_skew(geom, alpha, 0.0)
}

/// Smooths `geom` with automatic handles of the given curvedness and skew.
///
/// `alpha`: 0 is linear, 1 is round, above 1 increasingly curved.
/// `skew`: 0 is none, positive favors the longer side, negative the shorter.
#[must_use]
pub fn geom_bezier_alpha_skew(geom: &Geometry, alpha: f64, skew: f64) -> Option<Geometry> {
    bezier(geom, HandleParams::new(alpha, skew).ok()?)
}

/// Automatic control handles with default parameters, as a line geometry.
#[must_use]
pub fn geom_bezier_controls(geom: &Geometry) -> Option<Geometry> {
    auto_controls(geom, HandleParams::default(), HandleMode::Tangent)
}

/// Experimental single bisector handle per vertex, as a line geometry.
#[must_use]
pub fn geom_bezier_controls_radius(geom: &Geometry) -> Option<Geometry> {
    auto_controls(geom, HandleParams::default(), HandleMode::Normal)
}

/// Automatic control handles of the given curvedness.
#[must_use]
pub fn geom_bezier_controls_alpha(geom: &Geometry, alpha: f64) -> Option<Geometry> {
    geom_bezier_controls_alpha_skew(geom, alpha, 0.0)
}

/// Automatic control handles of the given curvedness and skew.
#[must_use]
pub fn geom_bezier_controls_alpha_skew(geom: &Geometry, alpha: f64, skew: f64) -> Option<Geometry> {
    auto_controls(geom, HandleParams::new(alpha, skew).ok()?, HandleMode::Tangent)
}

/// Smooths `geom` with caller-supplied controls.
///
/// Controls that fail [`check_controls`] leave the input unchanged.
#[must_use]
pub fn geom_bezier_with_controls(geom: &Geometry, controls: Option<&Geometry>) -> Option<Geometry> {
    let status = check_controls(geom, controls);
    match controls {
        Some(controls) if status == CONTROLS_OK => {
            soften(BuildCubicBezier::new(geom, controls).execute(GeomBuilder::new()))
        }
        _ => {
            warn!(kind = %geom.kind, %status, "control handles rejected, returning input unchanged");
            Some(geom.clone())
        }
    }
}

/// Checks caller-supplied controls against `geom`.
///
/// Returns [`CONTROLS_OK`] or a description of the mismatch.
#[must_use]
pub fn check_controls(geom: &Geometry, controls: Option<&Geometry>) -> String {
    match ValidateControls::new(geom, controls).execute() {
        Ok(()) => CONTROLS_OK.to_owned(),
        Err(err) => err.to_string(),
    }
}

fn bezier(geom: &Geometry, params: HandleParams) -> Option<Geometry> {
    let controls = auto_controls(geom, params, HandleMode::Tangent)?;
    soften(BuildCubicBezier::new(geom, &controls).execute(GeomBuilder::new()))
}

fn auto_controls(geom: &Geometry, params: HandleParams, mode: HandleMode) -> Option<Geometry> {
    soften(
        AutoHandles::new(geom, params)
            .with_mode(mode)
            .execute(GeomBuilder::new()),
    )
}

fn soften(result: Result<Geometry>) -> Option<Geometry> {
    result.inspect_err(|err| warn!(%err, "no result")).ok()
}
