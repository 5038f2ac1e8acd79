use crate::math::vector_2d::distance;
use crate::math::Point2;

use super::{FlattenParams, WeightTable};

/// Samples the cubic Bezier `p0, ctrl0, ctrl1, p1` at `t = i / n` for
/// `i = 0..n`, with `n` the table's subdivision count.
///
/// The first point is exactly `p0`. `p1` itself is not included, so
/// consecutive segments can be concatenated without duplicate joints.
#[must_use]
pub fn cubic_bezier_segment(
    p0: &Point2,
    p1: &Point2,
    ctrl0: &Point2,
    ctrl1: &Point2,
    weights: &WeightTable,
) -> Vec<Point2> {
    let rows = weights.rows();
    let n = weights.segments();
    let mut curve = Vec::with_capacity(n);
    curve.push(*p0);

    for w in &rows[1..n] {
        curve.push(Point2::new(
            w[0] * p0.x + w[1] * ctrl0.x + w[2] * ctrl1.x + w[3] * p1.x,
            w[0] * p0.y + w[1] * ctrl0.y + w[2] * ctrl1.y + w[3] * p1.y,
        ));
    }

    curve
}

/// Flattens one segment, leaving segments shorter than
/// `params.min_segment_length` unflattened as the single point `p1`.
#[must_use]
pub fn flatten_segment(
    p0: &Point2,
    p1: &Point2,
    ctrl0: &Point2,
    ctrl1: &Point2,
    weights: &WeightTable,
    params: &FlattenParams,
) -> Vec<Point2> {
    if distance(p0, p1) < params.min_segment_length {
        return vec![*p1];
    }
    cubic_bezier_segment(p0, p1, ctrl0, ctrl1, weights)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tessellation::BEZIER_SEGMENTS;

    const TOL: f64 = 1e-10;

    #[test]
    fn starts_at_p0_and_excludes_p1() {
        let p0 = Point2::new(1.5, -2.25);
        let p1 = Point2::new(9.0, 4.0);
        let pts = cubic_bezier_segment(
            &p0,
            &p1,
            &Point2::new(3.0, 5.0),
            &Point2::new(7.0, -1.0),
            WeightTable::shared(),
        );
        assert_eq!(pts.len(), BEZIER_SEGMENTS);
        assert_eq!(pts[0], p0);
        assert!(pts.iter().all(|p| *p != p1));
    }

    #[test]
    fn matches_bernstein_form() {
        let p0 = Point2::new(0.0, 0.0);
        let c0 = Point2::new(0.0, 4.0);
        let c1 = Point2::new(6.0, 4.0);
        let p1 = Point2::new(6.0, 0.0);
        let table = WeightTable::new(8).unwrap();
        let pts = cubic_bezier_segment(&p0, &p1, &c0, &c1, &table);
        for (i, p) in pts.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / 8.0;
            let s = 1.0 - t;
            let x = 3.0 * s * t * t * 6.0 + t * t * t * 6.0;
            let y = 3.0 * s * s * t * 4.0 + 3.0 * s * t * t * 4.0;
            assert!((p.x - x).abs() < TOL, "i={i} p={p}");
            assert!((p.y - y).abs() < TOL, "i={i} p={p}");
        }
    }

    #[test]
    fn collinear_controls_stay_on_line() {
        let pts = cubic_bezier_segment(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
            &Point2::new(3.75, 0.0),
            &Point2::new(6.25, 0.0),
            WeightTable::shared(),
        );
        assert!(pts.iter().all(|p| p.y.abs() < TOL));
        assert!(pts.windows(2).all(|w| w[1].x > w[0].x));
    }

    #[test]
    fn short_segment_left_unflattened() {
        let params = FlattenParams::new(2.0).unwrap();
        let p1 = Point2::new(1.0, 1.0);
        let pts = flatten_segment(
            &Point2::origin(),
            &p1,
            &Point2::new(0.2, 0.5),
            &Point2::new(0.6, 0.9),
            WeightTable::shared(),
            &params,
        );
        assert_eq!(pts, vec![p1]);
    }

    #[test]
    fn default_guard_keeps_zero_length_segment_curved() {
        let p = Point2::new(3.0, 3.0);
        let pts = flatten_segment(&p, &p, &p, &p, WeightTable::shared(), &FlattenParams::default());
        assert_eq!(pts.len(), BEZIER_SEGMENTS);
    }
}
