use thiserror::Error;

use crate::geometry::GeometryKind;

/// Top-level error type for geosmooth.
#[derive(Debug, Error)]
pub enum GeosmoothError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Controls(#[from] ControlsError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Errors related to the input geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("unsupported geometry kind \"{kind}\"")]
    UnsupportedKind { kind: GeometryKind },

    #[error("branch {branch} has {count} points, at least 3 are required")]
    TooFewPoints { branch: usize, count: usize },
}

/// Mismatches between a geometry and caller-supplied control handles.
///
/// The display strings are the status texts reported by
/// [`check_controls`](crate::api::check_controls).
#[derive(Debug, Error)]
pub enum ControlsError {
    #[error("Controls is NULL")]
    Missing,

    #[error("Wrong type of geometry - expected \"line\", found \"{found}\"")]
    WrongKind { found: GeometryKind },

    #[error(
        "Wrong number of control lines / points for {kind} - expected {expected_branches} / {expected_points}, found {found_branches} / {found_points}"
    )]
    WrongCount {
        kind: GeometryKind,
        expected_branches: usize,
        expected_points: usize,
        found_branches: usize,
        found_points: usize,
    },
}

/// Errors related to invalid configuration values.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Convenience type alias for results using [`GeosmoothError`].
pub type Result<T> = std::result::Result<T, GeosmoothError>;
