//! Two-finger gesture math.
//!
//! Given the two touch points at gesture start and their current positions,
//! these functions produce the incremental affine transform that carries the
//! start pair onto the current pair. Every move event recomputes against the
//! matrix captured at gesture start, never against the previous move's
//! result, so dropped or reordered move events cannot accumulate drift.

use crate::transform::{Matrix, Point};

/// Uniform scale plus translation: the spread ratio of the two pairs sets the
/// scale factor, and the translation puts the scaled midpoint of the start
/// pair on the midpoint of the new pair. No rotation.
///
/// Callers must ensure `one != two`; a zero start distance divides by zero
/// and the resulting matrix will not be finite.
pub fn scale_transform(one: Point, two: Point, new_one: Point, new_two: Point) -> Matrix {
    let d = new_one.distance(new_two) / one.distance(two);
    let mid = one.midpoint(two);
    let new_mid = new_one.midpoint(new_two);
    Matrix::new(
        d,
        0.0,
        0.0,
        d,
        new_mid.x - d * mid.x,
        new_mid.y - d * mid.y,
    )
}

/// Rotation plus uniform scale plus translation: additionally rotates by the
/// angle swept between the start segment and the new segment. Same contract
/// as [`scale_transform`].
pub fn rotate_scale_transform(one: Point, two: Point, new_one: Point, new_two: Point) -> Matrix {
    let d = new_one.distance(new_two) / one.distance(two);
    let theta = (new_two.y - new_one.y).atan2(new_two.x - new_one.x)
        - (two.y - one.y).atan2(two.x - one.x);
    let (sin, cos) = theta.sin_cos();
    let (ra, rb, rc, rd) = (d * cos, d * sin, -d * sin, d * cos);
    let mid = one.midpoint(two);
    let new_mid = new_one.midpoint(new_two);
    Matrix::new(
        ra,
        rb,
        rc,
        rd,
        new_mid.x - (ra * mid.x + rc * mid.y),
        new_mid.y - (rb * mid.x + rd * mid.y),
    )
}

/// Composes a move's incremental transform onto the matrix captured at
/// gesture start: apply `base` first, then `incremental`.
pub fn compose(base: &Matrix, incremental: &Matrix) -> Matrix {
    incremental.multiply(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn scale_transform_preserves_new_midpoint_and_spread() {
        let (one, two) = (pt(3.0, 4.0), pt(11.0, -2.0));
        let (new_one, new_two) = (pt(-5.0, 7.0), pt(9.0, 13.0));
        let m = scale_transform(one, two, new_one, new_two);
        let mapped_one = m.apply(one);
        let mapped_two = m.apply(two);
        let mid = mapped_one.midpoint(mapped_two);
        let want = new_one.midpoint(new_two);
        assert!(approx(mid.x, want.x) && approx(mid.y, want.y));
        assert!(approx(
            mapped_one.distance(mapped_two),
            new_one.distance(new_two)
        ));
    }

    #[test]
    fn rotate_scale_carries_the_pair_exactly() {
        let (one, two) = (pt(2.0, 2.0), pt(8.0, 6.0));
        let (new_one, new_two) = (pt(-1.0, 5.0), pt(3.0, -7.0));
        let m = rotate_scale_transform(one, two, new_one, new_two);
        let mapped_one = m.apply(one);
        let mapped_two = m.apply(two);
        assert!(approx(mapped_one.x, new_one.x) && approx(mapped_one.y, new_one.y));
        assert!(approx(mapped_two.x, new_two.x) && approx(mapped_two.y, new_two.y));
    }

    #[test]
    fn zero_rotation_reduces_to_pure_scale() {
        let (one, two) = (pt(0.0, 0.0), pt(10.0, 0.0));
        let (new_one, new_two) = (pt(2.0, 5.0), pt(22.0, 5.0));
        let rotated = rotate_scale_transform(one, two, new_one, new_two);
        let scaled = scale_transform(one, two, new_one, new_two);
        assert!(approx(rotated.a, scaled.a));
        assert!(approx(rotated.b, scaled.b));
        assert!(approx(rotated.c, scaled.c));
        assert!(approx(rotated.d, scaled.d));
        assert!(approx(rotated.tx, scaled.tx));
        assert!(approx(rotated.ty, scaled.ty));
    }

    #[test]
    fn doubling_the_spread_doubles_distance_about_the_midpoint() {
        let m = scale_transform(pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 0.0), pt(20.0, 0.0));
        assert!(approx(m.a, 2.0) && approx(m.d, 2.0));
        assert!(approx(m.b, 0.0) && approx(m.c, 0.0));
        let mid = m.apply(pt(5.0, 0.0));
        assert!(approx(mid.x, 10.0) && approx(mid.y, 0.0));
        let mapped = m.apply(pt(0.0, 0.0)).distance(m.apply(pt(10.0, 0.0)));
        assert!(approx(mapped, 20.0));
    }

    #[test]
    fn unchanged_points_give_the_identity() {
        let (one, two) = (pt(4.0, -3.0), pt(9.0, 1.0));
        let id = Matrix::identity();
        assert_eq!(scale_transform(one, two, one, two), id);
        let m = rotate_scale_transform(one, two, one, two);
        assert!(approx(m.a, id.a) && approx(m.b, id.b));
        assert!(approx(m.c, id.c) && approx(m.d, id.d));
        assert!(approx(m.tx, id.tx) && approx(m.ty, id.ty));
    }

    #[test]
    fn quarter_turn_reports_ninety_degrees_at_unit_scale() {
        let m = rotate_scale_transform(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 0.0), pt(0.0, 1.0));
        assert!(approx(m.angle_deg(), 90.0));
        assert!(approx(m.scale(), 1.0));
    }

    #[test]
    fn compose_applies_the_base_before_the_increment() {
        let base = Matrix::new(1.0, 0.0, 0.0, 1.0, 5.0, 0.0);
        let incremental = Matrix::new(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
        let p = compose(&base, &incremental).apply(pt(1.0, 0.0));
        assert!(approx(p.x, 12.0) && approx(p.y, 0.0));
    }

    #[test]
    fn coincident_start_points_produce_a_non_finite_matrix() {
        let m = scale_transform(pt(1.0, 1.0), pt(1.0, 1.0), pt(0.0, 0.0), pt(2.0, 0.0));
        assert!(!m.is_finite());
        let m = rotate_scale_transform(pt(1.0, 1.0), pt(1.0, 1.0), pt(0.0, 0.0), pt(2.0, 0.0));
        assert!(!m.is_finite());
    }
}
