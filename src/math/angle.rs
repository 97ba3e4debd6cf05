use super::{dot_product, Coordinate, Tolerance, Vector};
use crate::geometry::{Line, Line3, Plane};

/// Angle in degrees between two undirected directions.
///
/// Uses `|u · v|`, so the result is always in `[0°, 90°]`: lines and planes
/// have no orientation and only their acute (or right) angle is meaningful.
///
/// Returns `0.0` when either vector has magnitude at most `tol`. A degenerate
/// direction has no angle, and `0.0` is the defined result rather than an
/// error.
#[must_use]
pub fn angle<T: Coordinate, const N: usize>(
    u: &Vector<T, N>,
    v: &Vector<T, N>,
    tol: Tolerance,
) -> f64 {
    let mag_u = u.magnitude();
    let mag_v = v.magnitude();
    if mag_u <= tol.epsilon() || mag_v <= tol.epsilon() {
        tracing::trace!(mag_u, mag_v, "angle of degenerate direction");
        return 0.0;
    }

    let cos_theta = dot_product(u, v).abs() / (mag_u * mag_v);
    cos_theta.clamp(0.0, 1.0).acos().to_degrees()
}

/// Angle in degrees between two lines, in 2D or 3D.
#[must_use]
pub fn angle_lines<T: Coordinate, const N: usize>(
    l1: &Line<T, N>,
    l2: &Line<T, N>,
    tol: Tolerance,
) -> f64 {
    angle(l1.direction(), l2.direction(), tol)
}

/// Dihedral angle in degrees between two planes, from their normals.
#[must_use]
pub fn angle_planes<T: Coordinate>(p1: &Plane<T>, p2: &Plane<T>, tol: Tolerance) -> f64 {
    angle(p1.normal(), p2.normal(), tol)
}

/// Angle in degrees between a line and a plane.
///
/// This is the complement of the angle between the line direction and the
/// plane normal: `0°` for a line lying along the plane, `90°` for a line
/// along the normal. Returns `0.0` for a degenerate direction or normal.
#[must_use]
pub fn angle_line_plane<T: Coordinate>(line: &Line3<T>, plane: &Plane<T>, tol: Tolerance) -> f64 {
    let dir = line.direction();
    let normal = plane.normal();
    if dir.magnitude() <= tol.epsilon() || normal.magnitude() <= tol.epsilon() {
        tracing::trace!("line-plane angle of degenerate direction");
        return 0.0;
    }
    90.0 - angle(dir, normal, tol)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::{Point2, Point3, Vector2, Vector3};

    const TOL: Tolerance = Tolerance::DEFAULT;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::xyz(x, y, z)
    }

    #[test]
    fn perpendicular_and_parallel() {
        assert_abs_diff_eq!(angle(&v(1.0, 0.0, 0.0), &v(0.0, 3.0, 0.0), TOL), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angle(&v(1.0, 1.0, 0.0), &v(2.0, 2.0, 0.0), TOL), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn angle_with_itself_is_zero() {
        for u in [v(1.0, 2.0, 3.0), v(-0.3, 0.0, 7.0), v(1e-3, 1e-3, 1e-3)] {
            assert_abs_diff_eq!(angle(&u, &u, TOL), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn opposite_directions_fold_to_zero() {
        assert_abs_diff_eq!(angle(&v(1.0, 0.0, 0.0), &v(-1.0, 0.0, 0.0), TOL), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn obtuse_folds_to_acute() {
        let a = Vector2::xy(1.0, 0.0);
        let b = Vector2::xy(-1.0, 1.0);
        assert_abs_diff_eq!(angle(&a, &b, TOL), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn result_is_always_within_right_angle() {
        let dirs = [
            v(1.0, 0.0, 0.0),
            v(-2.0, 1.0, 0.5),
            v(0.1, -0.7, -3.0),
            v(-1.0, -1.0, -1.0),
            v(4.0, 0.0, -4.0),
        ];
        for a in &dirs {
            for b in &dirs {
                let theta = angle(a, b, TOL);
                assert!((0.0..=90.0).contains(&theta), "theta={theta}");
            }
        }
    }

    #[test]
    fn zero_vector_gives_zero() {
        let zero = v(0.0, 0.0, 0.0);
        assert_abs_diff_eq!(angle(&zero, &v(1.0, 0.0, 0.0), TOL), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angle(&v(0.0, 1.0, 0.0), &zero, TOL), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angle(&zero, &zero, TOL), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn integer_directions() {
        let a = Vector::xy(3, 0);
        let b = Vector::xy(2, 2);
        assert_abs_diff_eq!(angle(&a, &b, TOL), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn lines_2d_and_3d() {
        let l1 = Line::through(Point2::xy(0.0, 0.0), Point2::xy(1.0, 0.0));
        let l2 = Line::through(Point2::xy(5.0, 5.0), Point2::xy(6.0, 6.0 + 3.0_f64.sqrt() - 1.0));
        assert_abs_diff_eq!(angle_lines(&l1, &l2, TOL), 60.0, epsilon = 1e-6);

        let m1 = Line::through(Point3::xyz(0.0, 0.0, 0.0), Point3::xyz(0.0, 0.0, 2.0));
        let m2 = Line::through(Point3::xyz(1.0, 1.0, 1.0), Point3::xyz(2.0, 1.0, 1.0));
        assert_abs_diff_eq!(angle_lines(&m1, &m2, TOL), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn planes_use_normals() {
        let xy = Plane::new(v(0.0, 0.0, 1.0), 0.0);
        let tilted = Plane::from_point_normal(Point3::zeros(), v(0.0, 1.0, 1.0), TOL).unwrap();
        assert_abs_diff_eq!(angle_planes(&xy, &tilted, TOL), 45.0, epsilon = 1e-6);
        assert_abs_diff_eq!(angle_planes(&xy, &xy, TOL), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn line_plane_complement() {
        let floor = Plane::new(v(0.0, 0.0, 1.0), 0.0);
        let vertical = Line::new(Point3::zeros(), v(0.0, 0.0, 1.0));
        let flat = Line::new(Point3::zeros(), v(1.0, 0.0, 0.0));
        let diagonal = Line::through(Point3::zeros(), Point3::xyz(1.0, 0.0, 1.0));
        assert_abs_diff_eq!(angle_line_plane(&vertical, &floor, TOL), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angle_line_plane(&flat, &floor, TOL), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angle_line_plane(&diagonal, &floor, TOL), 45.0, epsilon = 1e-6);
    }

    #[test]
    fn line_plane_degenerate_gives_zero() {
        let floor = Plane::new(v(0.0, 0.0, 1.0), 0.0);
        let degenerate = Line::new(Point3::zeros(), Vector3::zeros());
        assert_abs_diff_eq!(angle_line_plane(&degenerate, &floor, TOL), 0.0, epsilon = 1e-9);
    }
}
