use super::{cross_f64, dot_product, Coordinate, Point3, Tolerance, Vector3};
use crate::geometry::{Line3, Plane};

/// Intersection point of a 3D line with a plane.
///
/// Solves `n · (p + t·dir) = d` for `t`. Returns `None` when the line is
/// parallel to the plane, including a line lying in it.
#[must_use]
pub fn line_plane_intersection<T: Coordinate>(
    line: &Line3<T>,
    plane: &Plane<T>,
    tol: Tolerance,
) -> Option<Point3<T>> {
    let nd = dot_product(plane.normal(), line.direction());
    if tol.is_zero(nd) {
        tracing::trace!(nd, "line is parallel to plane");
        return None;
    }

    let t = (plane.d().to_f64() - dot_product(plane.normal(), line.point())) / nd;
    let p = line.point().to_f64_array();
    let dir = line.direction().to_f64_array();
    Some(Point3::from_f64_array(std::array::from_fn(|i| p[i] + t * dir[i])))
}

/// Line of intersection of two planes.
///
/// The direction is `n1 × n2`, normalized. The anchor point is the
/// combination `a·n1 + b·n2` lying on both planes, which assumes unit normals.
/// Returns `None` when the planes are parallel or coincident.
///
/// The anchor divides by `(n1·n2)² - 1`, so planes that are nearly but not
/// exactly parallel produce a far-away, imprecise anchor point.
#[must_use]
pub fn plane_plane_intersection<T: Coordinate>(
    p1: &Plane<T>,
    p2: &Plane<T>,
    tol: Tolerance,
) -> Option<Line3<T>> {
    let n1 = p1.normal().to_f64_array();
    let n2 = p2.normal().to_f64_array();
    let dir = cross_f64(&n1, &n2);
    let len = dir.iter().map(|c| c * c).sum::<f64>().sqrt();
    if len <= tol.epsilon() {
        tracing::trace!(len, "planes are parallel");
        return None;
    }

    let (d1, d2) = (p1.d().to_f64(), p2.d().to_f64());
    let c = dot_product(p1.normal(), p2.normal());
    let denom = c * c - 1.0;
    let a = (d2 * c - d1) / denom;
    let b = (d1 * c - d2) / denom;

    let point = std::array::from_fn(|i| a * n1[i] + b * n2[i]);
    Some(Line3::new(
        Point3::from_f64_array(point),
        Vector3::from_f64_array(dir.map(|v| v / len)),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry::Line;
    use crate::math::distance::{point_line_distance, point_plane_distance};
    use crate::math::orientation::collinear;
    use crate::test_support::init_tracing;

    const TOL: Tolerance = Tolerance::DEFAULT;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::xyz(x, y, z)
    }

    fn plane(normal: Vector3, point: Point3) -> Plane {
        Plane::from_point_normal(point, normal, TOL).unwrap()
    }

    #[test]
    fn vertical_line_hits_floor() {
        let floor = Plane::new(p(0.0, 0.0, 1.0), 0.0);
        let line = Line::new(p(2.0, -3.0, 10.0), p(0.0, 0.0, -1.0));
        assert_eq!(line_plane_intersection(&line, &floor, TOL), Some(p(2.0, -3.0, 0.0)));
    }

    #[test]
    fn oblique_line_hits_offset_plane() {
        let ceiling = Plane::new(p(0.0, 0.0, 1.0), 4.0);
        let line = Line::through(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        let hit = line_plane_intersection(&line, &ceiling, TOL).unwrap();
        assert!(hit.approx_eq(&p(4.0, 4.0, 4.0), TOL));
        assert!(ceiling.contains(&hit, TOL));
    }

    #[test]
    fn hit_lies_on_plane_and_line() {
        let tilted = plane(p(1.0, 2.0, -2.0), p(1.0, 1.0, 1.0));
        let line = Line::through(p(-3.0, 0.5, 2.0), p(4.0, -1.0, 0.0));
        let hit = line_plane_intersection(&line, &tilted, TOL).unwrap();
        assert_abs_diff_eq!(point_plane_distance(&hit, &tilted), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(point_line_distance(&hit, &line), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn parallel_line_misses_plane() {
        init_tracing();
        let floor = Plane::new(p(0.0, 0.0, 1.0), 0.0);
        let above = Line::new(p(0.0, 0.0, 1.0), p(1.0, 0.0, 0.0));
        let inside = Line::new(p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        assert_eq!(line_plane_intersection(&above, &floor, TOL), None);
        assert_eq!(line_plane_intersection(&inside, &floor, TOL), None);
    }

    #[test]
    fn axis_planes_meet_along_axis() {
        let xy = Plane::new(p(0.0, 0.0, 1.0), 0.0);
        let xz = Plane::new(p(0.0, 1.0, 0.0), 0.0);
        let line = plane_plane_intersection(&xy, &xz, TOL).unwrap();
        assert!(collinear(line.direction(), &p(1.0, 0.0, 0.0), TOL));
        assert!(line.point().approx_eq(&p(0.0, 0.0, 0.0), TOL));
    }

    #[test]
    fn offset_planes_meet_on_both() {
        let a = Plane::new(p(0.0, 0.0, 1.0), 2.0);
        let b = Plane::new(p(1.0, 0.0, 0.0), -3.0);
        let line = plane_plane_intersection(&a, &b, TOL).unwrap();
        assert!(line.point().approx_eq(&p(-3.0, 0.0, 2.0), TOL));
        assert_abs_diff_eq!(line.direction().magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn oblique_planes_line_lies_in_both() {
        let a = plane(p(1.0, 1.0, 0.0), p(1.0, 0.0, 0.0));
        let b = plane(p(0.0, 1.0, 1.0), p(0.0, 0.0, 2.0));
        let line = plane_plane_intersection(&a, &b, TOL).unwrap();
        for t in [-5.0, 0.0, 1.5, 10.0] {
            let q = line.point_at(t);
            assert_abs_diff_eq!(point_plane_distance(&q, &a), 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(point_plane_distance(&q, &b), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn parallel_planes_do_not_meet() {
        init_tracing();
        let a = Plane::new(p(0.0, 0.0, 1.0), 0.0);
        let b = Plane::new(p(0.0, 0.0, 1.0), 5.0);
        let flipped = Plane::new(p(0.0, 0.0, -1.0), 1.0);
        assert_eq!(plane_plane_intersection(&a, &b, TOL), None);
        assert_eq!(plane_plane_intersection(&a, &a, TOL), None);
        assert_eq!(plane_plane_intersection(&a, &flipped, TOL), None);
    }
}
