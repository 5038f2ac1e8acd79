use crate::math::Point2;

use super::{Branch, Geometry, GeometryKind};

/// Sequential construction interface for host geometries.
///
/// Callers drive it in strict order: one `begin_geometry`, then for each
/// branch a `begin_branch`, its points, and an `end_branch`, and finally
/// `end_geometry`, which consumes the builder.
pub trait GeometryBuilder {
    /// The host geometry produced by [`end_geometry`](Self::end_geometry).
    type Output;

    /// Starts a geometry of the given kind.
    fn begin_geometry(&mut self, kind: GeometryKind);

    /// Starts a new branch.
    fn begin_branch(&mut self);

    /// Appends a point to the current branch.
    fn append_point(&mut self, point: Point2);

    /// Closes the current branch.
    fn end_branch(&mut self);

    /// Finishes construction.
    fn end_geometry(self) -> Self::Output;

    /// Appends every point of `points` to the current branch.
    fn append_points(&mut self, points: &[Point2]) {
        for &p in points {
            self.append_point(p);
        }
    }

    /// Appends a complete branch holding `points`.
    fn add_branch(&mut self, points: &[Point2]) {
        self.begin_branch();
        self.append_points(points);
        self.end_branch();
    }
}

/// Builds an in-memory [`Geometry`].
#[derive(Debug, Default)]
pub struct GeomBuilder {
    kind: Option<GeometryKind>,
    branches: Vec<Branch>,
    current: Option<Branch>,
}

impl GeomBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GeometryBuilder for GeomBuilder {
    type Output = Geometry;

    fn begin_geometry(&mut self, kind: GeometryKind) {
        self.kind = Some(kind);
        self.branches.clear();
        self.current = None;
    }

    fn begin_branch(&mut self) {
        self.end_branch();
        self.current = Some(Branch::default());
    }

    fn append_point(&mut self, point: Point2) {
        self.current
            .get_or_insert_with(Branch::default)
            .coords
            .push(point);
    }

    fn end_branch(&mut self) {
        if let Some(branch) = self.current.take() {
            self.branches.push(branch);
        }
    }

    fn end_geometry(mut self) -> Geometry {
        self.end_branch();
        let kind = self.kind.unwrap_or(GeometryKind::Line);
        Geometry::new(kind, self.branches)
    }
}
