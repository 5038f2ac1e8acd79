use std::f64::consts::FRAC_PI_2;

use super::{Point2, Vector2, TOLERANCE};

/// Returns the vector from `a` to `b`.
#[must_use]
pub fn vector_between(a: &Point2, b: &Point2) -> Vector2 {
    b - a
}

/// Returns the unit vector in the direction of `v`.
///
/// A vector shorter than [`TOLERANCE`] has no direction; the zero vector is
/// returned instead of a NaN vector.
#[must_use]
pub fn normalize(v: &Vector2) -> Vector2 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vector2::zeros)
}

/// Reflects `v` in the line whose unit normal is `normal`.
///
/// The component of `v` along `normal` flips sign, the component along the
/// line is kept: `v - 2 (v·n) n`.
#[must_use]
pub fn reflect(v: &Vector2, normal: &Vector2) -> Vector2 {
    v - normal * (2.0 * v.dot(normal))
}

/// Returns `v` rotated by 90° counter-clockwise: `(-y, x)`.
#[must_use]
pub fn perpendicular(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Returns `point` moved by `v`.
#[must_use]
pub fn shift(point: &Point2, v: &Vector2) -> Point2 {
    point + v
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Exact coordinate equality, no tolerance.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn coord_equals(a: &Point2, b: &Point2) -> bool {
    a.x == b.x && a.y == b.y
}

/// Unsigned angle between two vectors, in `[0, π]`.
///
/// Returns 0 if either vector is zero-length.
#[must_use]
pub fn angle_between_abs(a: &Vector2, b: &Vector2) -> f64 {
    let cross = a.x * b.y - a.y * b.x;
    let dot = a.dot(b);
    cross.abs().atan2(dot)
}

/// Sharpening factor for a corner with interior angle `theta`.
///
/// Corners at 90° or wider keep full handles (1). Acute corners shrink
/// linearly toward 0 at a cusp.
#[must_use]
pub fn sharpness(theta: f64) -> f64 {
    if theta >= FRAC_PI_2 {
        1.0
    } else {
        theta / FRAC_PI_2
    }
}

/// Reflects point `c` across the perpendicular bisector of segment `a`–`b`.
///
/// This is the tip of triangle `abc` after its baseline has been flipped
/// end for end. The offset `c - a` keeps its component perpendicular to the
/// baseline and loses the sign of its component along it, and is then
/// re-anchored at `b`.
#[must_use]
pub fn triangle_flip(c: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let v = vector_between(a, c);
    let n = perpendicular(&normalize(&vector_between(a, b)));
    let flipped = n * (2.0 * n.dot(&v)) - v;
    shift(b, &flipped)
}
