use tracing::debug;

use crate::math::vector_2d::{
    angle_between_abs, normalize, perpendicular, reflect, sharpness, vector_between,
};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{ControlLine, HandleParams, CIRCLE_LEN_FACTOR};

/// Candidate handles at a single vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSet {
    /// Handle along the corner bisector (experimental normal mode).
    pub normal: ControlLine,
    /// Handle pointing toward the previous neighbor.
    pub to_prev: ControlLine,
    /// Handle pointing toward the next neighbor.
    pub to_next: ControlLine,
}

/// Computes the handles at vertex `p0`.
///
/// `v1` points from `p0` to its previous neighbor and `v2` to its next one.
/// Handle length is `curvedness · 3/8 · sharpness · min(|v1|, |v2|)`, where
/// sharpness shrinks handles at corners tighter than 90°. A non-zero skew
/// then stretches one side by `1 + |skew| · ||v1| - |v2|| / max(|v1|, |v2|)`.
///
/// A zero-length neighbor vector collapses both tangent handles onto `p0`.
#[must_use]
pub fn control_handle(p0: &Point2, v1: &Vector2, v2: &Vector2, params: &HandleParams) -> HandleSet {
    let len_1 = v1.norm();
    let len_2 = v2.norm();
    if len_1 < TOLERANCE || len_2 < TOLERANCE {
        debug!(x = p0.x, y = p0.y, "zero-length neighbor vector, handles collapse onto vertex");
    }

    let v_1hat = normalize(v1);
    let v_2hat = normalize(v2);
    let tangent = normalize(&(v_2hat - v_1hat));
    let normal = normalize(&(v_1hat + v_2hat));

    let len = handle_length(v1, v2, params.curvedness);
    let (stretch_1, stretch_2) = skew_stretch(len_1, len_2, params.skew);

    let tangent_1 = -tangent * (stretch_1 * len);
    let tangent_2 = tangent * (stretch_2 * len);

    HandleSet {
        normal: ControlLine::from_offset(*p0, &(normal * len)),
        to_prev: ControlLine::from_offset(*p0, &tangent_1),
        to_next: ControlLine::from_offset(*p0, &tangent_2),
    }
}

/// Computes the handle at `p1` pointing toward `p2`, for the corner
/// `p0 → p1 → p2`.
///
/// With `reflected`, the handle is instead mirrored in the segment
/// `p1`–`p2`, negated and anchored at `p2`. This gives the handle of an
/// open path's end vertex `p2` pointing back into the path.
#[must_use]
pub fn control_line(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    params: &HandleParams,
    reflected: bool,
) -> ControlLine {
    let v_10 = vector_between(p1, p0);
    let v_12 = vector_between(p1, p2);
    let len_10 = v_10.norm();
    let len_12 = v_12.norm();

    let v_10hat = normalize(&v_10);
    let v_12hat = normalize(&v_12);
    let tangent = normalize(&(v_12hat - v_10hat));

    let len = handle_length(&v_10, &v_12, params.curvedness);
    let (_, stretch_1) = skew_stretch(len_10, len_12, params.skew);
    let ctl = tangent * (stretch_1 * len);

    if reflected {
        let mirrored = reflect(&ctl, &perpendicular(&v_12hat));
        ControlLine::from_offset(*p2, &-mirrored)
    } else {
        ControlLine::from_offset(*p1, &ctl)
    }
}

/// Unstretched handle length for a corner between `v1` and `v2`.
fn handle_length(v1: &Vector2, v2: &Vector2, curvedness: f64) -> f64 {
    let len_base = v1.norm().min(v2.norm());
    let theta = angle_between_abs(v1, v2);
    curvedness * CIRCLE_LEN_FACTOR * sharpness(theta) * len_base
}

/// Returns the `(toward previous, toward next)` stretch multipliers.
///
/// Positive skew stretches the side of the longer neighbor, negative skew
/// the side of the shorter one.
fn skew_stretch(len_1: f64, len_2: f64, skew: f64) -> (f64, f64) {
    let longest = len_1.max(len_2);
    if skew == 0.0 || longest < TOLERANCE {
        return (1.0, 1.0);
    }
    let stretch = 1.0 + skew.abs() * (len_1 - len_2).abs() / longest;
    let toward_prev = (len_1 > len_2) != (skew < 0.0);
    if toward_prev {
        (stretch, 1.0)
    } else {
        (1.0, stretch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    fn corner(theta_deg: f64, len_1: f64, len_2: f64) -> (Vector2, Vector2) {
        let theta = theta_deg * PI / 180.0;
        (
            Vector2::new(len_1, 0.0),
            Vector2::new(len_2 * theta.cos(), len_2 * theta.sin()),
        )
    }

    #[test]
    fn right_angle_handle_length() {
        let p0 = Point2::origin();
        let set = control_handle(
            &p0,
            &Vector2::new(-10.0, 0.0),
            &Vector2::new(0.0, 10.0),
            &HandleParams::default(),
        );
        assert_abs_diff_eq!(set.to_prev.length(), 3.75, epsilon = TOL);
        assert_abs_diff_eq!(set.to_next.length(), 3.75, epsilon = TOL);
        assert_abs_diff_eq!(set.normal.length(), 3.75, epsilon = TOL);
        // Tangent runs parallel to (prev → next).
        let t = set.to_next.offset();
        assert_abs_diff_eq!(t.x, t.y, epsilon = TOL);
        assert!(t.x > 0.0);
    }

    #[test]
    fn handles_are_opposite() {
        let (v1, v2) = corner(110.0, 4.0, 7.0);
        let set = control_handle(&Point2::new(2.0, 3.0), &v1, &v2, &HandleParams::default());
        let sum = set.to_prev.offset() + set.to_next.offset();
        assert!(sum.norm() < TOL);
        assert_eq!(set.to_prev.anchor, Point2::new(2.0, 3.0));
    }

    #[test]
    fn sharper_corner_has_shorter_handles() {
        let params = HandleParams::default();
        let (a1, a2) = corner(30.0, 10.0, 10.0);
        let (b1, b2) = corner(170.0, 10.0, 10.0);
        let acute = control_handle(&Point2::origin(), &a1, &a2, &params);
        let obtuse = control_handle(&Point2::origin(), &b1, &b2, &params);
        assert_abs_diff_eq!(acute.to_next.length(), 1.25, epsilon = TOL);
        assert_abs_diff_eq!(obtuse.to_next.length(), 3.75, epsilon = TOL);
        assert!(obtuse.to_next.length() > acute.to_next.length());
    }

    #[test]
    fn curvedness_scales_length() {
        let (v1, v2) = corner(120.0, 8.0, 8.0);
        let flat = HandleParams { curvedness: 0.0, skew: 0.0 };
        let round = HandleParams { curvedness: 2.0, skew: 0.0 };
        let zero = control_handle(&Point2::origin(), &v1, &v2, &flat);
        let double = control_handle(&Point2::origin(), &v1, &v2, &round);
        assert!(zero.to_next.length() < TOL);
        assert_abs_diff_eq!(double.to_next.length(), 6.0, epsilon = TOL);
    }

    #[test]
    fn skew_stretches_longer_side() {
        let params = HandleParams { curvedness: 1.0, skew: 1.0 };
        let set = control_handle(
            &Point2::origin(),
            &Vector2::new(-4.0, 0.0),
            &Vector2::new(0.0, 2.0),
            &params,
        );
        // len = 3/8 * 2, stretch = |4 - 2| / 4.
        assert_abs_diff_eq!(set.to_prev.length(), 0.75 * 1.5, epsilon = TOL);
        assert_abs_diff_eq!(set.to_next.length(), 0.75, epsilon = TOL);
    }

    #[test]
    fn skew_mirror_symmetry() {
        let pos = HandleParams { curvedness: 1.0, skew: 0.8 };
        let neg = HandleParams { curvedness: 1.0, skew: -0.8 };
        let (v1, v2) = corner(100.0, 6.0, 3.0);
        let (w1, w2) = corner(100.0, 3.0, 6.0);

        let base = control_handle(&Point2::origin(), &v1, &v2, &pos);
        let swapped = control_handle(&Point2::origin(), &w1, &w2, &pos);
        let negated = control_handle(&Point2::origin(), &v1, &v2, &neg);

        assert_abs_diff_eq!(base.to_prev.length(), swapped.to_next.length(), epsilon = TOL);
        assert_abs_diff_eq!(base.to_next.length(), swapped.to_prev.length(), epsilon = TOL);
        assert_abs_diff_eq!(base.to_prev.length(), negated.to_next.length(), epsilon = TOL);
        assert_abs_diff_eq!(base.to_next.length(), negated.to_prev.length(), epsilon = TOL);
        assert!(base.to_prev.length() > base.to_next.length());
    }

    #[test]
    fn skew_without_length_difference_is_noop() {
        let params = HandleParams { curvedness: 1.0, skew: 3.0 };
        let (v1, v2) = corner(135.0, 5.0, 5.0);
        let set = control_handle(&Point2::origin(), &v1, &v2, &params);
        assert_abs_diff_eq!(set.to_prev.length(), set.to_next.length(), epsilon = TOL);
    }

    #[test]
    fn collinear_vertex_handles_lie_on_line() {
        let set = control_handle(
            &Point2::new(10.0, 0.0),
            &Vector2::new(-10.0, 0.0),
            &Vector2::new(10.0, 0.0),
            &HandleParams::default(),
        );
        assert!(set.to_prev.handle.y.abs() < TOL);
        assert!(set.to_next.handle.y.abs() < TOL);
        assert_abs_diff_eq!(set.to_next.handle.x, 13.75, epsilon = TOL);
        assert_abs_diff_eq!(set.to_prev.handle.x, 6.25, epsilon = TOL);
        // Bisector is undefined on a straight line.
        assert!(set.normal.length() < TOL);
    }

    #[test]
    fn zero_length_neighbor_collapses() {
        let set = control_handle(
            &Point2::new(1.0, 1.0),
            &Vector2::zeros(),
            &Vector2::new(3.0, 0.0),
            &HandleParams { curvedness: 1.0, skew: 1.0 },
        );
        assert!(set.to_prev.length() < TOL);
        assert!(set.to_next.length() < TOL);
        assert!(!set.to_next.handle.x.is_nan());
    }

    #[test]
    fn control_line_matches_control_handle() {
        let p0 = Point2::new(0.0, 0.0);
        let p1 = Point2::new(4.0, 1.0);
        let p2 = Point2::new(6.0, 5.0);
        let params = HandleParams { curvedness: 1.2, skew: 0.5 };
        let line = control_line(&p0, &p1, &p2, &params, false);
        let set = control_handle(
            &p1,
            &vector_between(&p1, &p0),
            &vector_between(&p1, &p2),
            &params,
        );
        assert_abs_diff_eq!(line.handle.x, set.to_next.handle.x, epsilon = TOL);
        assert_abs_diff_eq!(line.handle.y, set.to_next.handle.y, epsilon = TOL);
    }

    #[test]
    fn reflected_control_line_anchors_at_end() {
        // Right-angle corner at (10,0); end vertex (10,10).
        let p0 = Point2::new(0.0, 0.0);
        let p1 = Point2::new(10.0, 0.0);
        let p2 = Point2::new(10.0, 10.0);
        let line = control_line(&p0, &p1, &p2, &HandleParams::default(), true);
        assert_eq!(line.anchor, p2);
        assert_abs_diff_eq!(line.length(), 3.75, epsilon = TOL);
        // Tangent at p1 is (1,1)/√2; mirrored in the vertical end segment and
        // negated, it points down and to the right from p2.
        let off = line.offset();
        assert!(off.x > 0.0 && off.y < 0.0, "off={off}");
    }
}
