pub mod builder;
pub mod geom;

pub use builder::{GeomBuilder, GeometryBuilder};
pub use geom::{Branch, Geometry, GeometryKind};
