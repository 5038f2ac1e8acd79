//! Bezier smoothing of polylines and polygons.
//!
//! Every vertex gets a pair of control handles derived from its two
//! neighbors ([`operations::AutoHandles`]), or the caller supplies them.
//! Every straight segment is then replaced by a cubic Bezier curve
//! flattened into a fixed number of points ([`tessellation::BuildCubicBezier`]).

pub mod api;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{GeosmoothError, Result};
