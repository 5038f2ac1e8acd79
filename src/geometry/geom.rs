use std::fmt;

use crate::math::vector_2d::coord_equals;
use crate::math::Point2;

/// The kind of a [`Geometry`].
///
/// `Line` (open curves) and `Area` (closed curves) share the same
/// branch/point structure. `Point` geometries carry no segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    Line,
    Area,
}

impl GeometryKind {
    /// Returns the host name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Area => "area",
        }
    }

    /// Returns whether the kind is made of straight segments.
    #[must_use]
    pub fn is_curve(self) -> bool {
        matches!(self, Self::Line | Self::Area)
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One connected, ordered sequence of vertices within a geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Branch {
    pub coords: Vec<Point2>,
}

impl Branch {
    /// Creates a branch from its vertices.
    #[must_use]
    pub fn new(coords: Vec<Point2>) -> Self {
        Self { coords }
    }

    /// Returns whether the first and last vertices coincide exactly.
    #[must_use]
    pub fn is_ring(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) if self.coords.len() > 1 => coord_equals(first, last),
            _ => false,
        }
    }

    /// Returns the number of straight segments in this branch.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }
}

/// An ordered collection of branches of one [`GeometryKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub kind: GeometryKind,
    pub branches: Vec<Branch>,
}

impl Geometry {
    /// Creates a geometry from its kind and branches.
    #[must_use]
    pub fn new(kind: GeometryKind, branches: Vec<Branch>) -> Self {
        Self { kind, branches }
    }

    /// Creates an open-curve geometry, one branch per point list.
    #[must_use]
    pub fn line(branches: Vec<Vec<Point2>>) -> Self {
        Self::new(GeometryKind::Line, branches.into_iter().map(Branch::new).collect())
    }

    /// Creates a closed-curve geometry, one branch per point list.
    #[must_use]
    pub fn area(branches: Vec<Vec<Point2>>) -> Self {
        Self::new(GeometryKind::Area, branches.into_iter().map(Branch::new).collect())
    }

    /// Creates a point geometry holding a single branch.
    #[must_use]
    pub fn point(points: Vec<Point2>) -> Self {
        Self::new(GeometryKind::Point, vec![Branch::new(points)])
    }

    /// Returns the number of branches.
    #[must_use]
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Returns the total number of points over all branches.
    #[must_use]
    pub fn coord_count(&self) -> usize {
        self.branches.iter().map(|b| b.coords.len()).sum()
    }

    /// Iterates over all points in branch order.
    pub fn coords(&self) -> impl Iterator<Item = &Point2> + '_ {
        self.branches.iter().flat_map(|b| b.coords.iter())
    }
}
