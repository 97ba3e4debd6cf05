use super::{cross_f64, Coordinate, Point, Point2, Point3};
use super::{Tolerance, Vector, Vector3};

/// Position of a point relative to a directed segment `a → b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativePosition {
    /// Strictly left of the supporting line.
    Left,
    /// Strictly right of the supporting line.
    Right,
    /// Collinear, before `a`.
    Behind,
    /// Collinear, past `b`.
    Beyond,
    /// Coincides with `a`.
    Origin,
    /// Coincides with `b`.
    Destination,
    /// Collinear, strictly between `a` and `b`.
    Between,
}

impl RelativePosition {
    /// Whether the point lies on the closed segment `[a, b]`.
    #[must_use]
    pub fn is_on_segment(self) -> bool {
        matches!(self, Self::Between | Self::Origin | Self::Destination)
    }
}

fn dot3(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm3(a: &[f64; 3]) -> f64 {
    dot3(a, a).sqrt()
}

/// Signed area of the triangle `a, b, c`.
///
/// Positive when the points run counter-clockwise, negative when clockwise,
/// zero when collinear. Differences are taken in `f64`, so integer input at
/// the extremes of its range does not overflow.
#[must_use]
pub fn area_triangle_2d<T: Coordinate>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> f64 {
    let ab = b.sub_f64_3(*a);
    let ac = c.sub_f64_3(*a);
    cross_f64(&ab, &ac)[2] / 2.0
}

/// Classifies `c` relative to the directed segment `a → b`.
///
/// Off the line the sign of [`area_triangle_2d`] decides. For collinear
/// points the checks run in a fixed order: `Behind`, `Beyond`, `Origin`,
/// `Destination`, then `Between`. Callers rely on that order.
///
/// `Behind` and `Beyond` need a margin larger than `tol`, so a `c` within
/// rounding noise of `a` or `b` falls through to `Origin` or `Destination`.
#[must_use]
pub fn orientation_2d<T: Coordinate>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    tol: Tolerance,
) -> RelativePosition {
    let area = area_triangle_2d(a, b, c);
    if area > tol.epsilon() {
        return RelativePosition::Left;
    }
    if area < -tol.epsilon() {
        return RelativePosition::Right;
    }

    let ab = b.sub_f64_3(*a);
    let ac = c.sub_f64_3(*a);
    if ab[0] * ac[0] < -tol.epsilon() || ab[1] * ac[1] < -tol.epsilon() {
        return RelativePosition::Behind;
    }
    if norm3(&ac) - norm3(&ab) > tol.epsilon() {
        return RelativePosition::Beyond;
    }
    if c.approx_eq(a, tol) {
        return RelativePosition::Origin;
    }
    if c.approx_eq(b, tol) {
        return RelativePosition::Destination;
    }
    RelativePosition::Between
}

/// Checks whether two direction vectors are parallel or anti-parallel.
///
/// True iff their cross product is the zero vector within `tol`; 2D vectors
/// are embedded at `z = 0`. The zero vector is collinear with everything.
#[must_use]
pub fn collinear<T: Coordinate, const N: usize>(
    u: &Vector<T, N>,
    v: &Vector<T, N>,
    tol: Tolerance,
) -> bool {
    is_zero_cross(&u.to_f64_3(), &v.to_f64_3(), tol)
}

fn is_zero_cross(u: &[f64; 3], v: &[f64; 3], tol: Tolerance) -> bool {
    cross_f64(u, v).iter().all(|&c| tol.is_zero(c))
}

/// Checks whether three points lie on one line.
#[must_use]
pub fn collinear_points<T: Coordinate, const N: usize>(
    a: &Point<T, N>,
    b: &Point<T, N>,
    c: &Point<T, N>,
    tol: Tolerance,
) -> bool {
    is_zero_cross(&b.sub_f64_3(*a), &c.sub_f64_3(*a), tol)
}

/// Checks whether three direction vectors lie in one plane.
#[must_use]
pub fn coplanar<T: Coordinate>(
    u: &Vector3<T>,
    v: &Vector3<T>,
    w: &Vector3<T>,
    tol: Tolerance,
) -> bool {
    is_zero_triple(&u.to_f64_3(), &v.to_f64_3(), &w.to_f64_3(), tol)
}

fn is_zero_triple(u: &[f64; 3], v: &[f64; 3], w: &[f64; 3], tol: Tolerance) -> bool {
    tol.is_zero(dot3(u, &cross_f64(v, w)))
}

/// Checks whether four points lie in one plane.
#[must_use]
pub fn coplanar_points<T: Coordinate>(
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
    d: &Point3<T>,
    tol: Tolerance,
) -> bool {
    is_zero_triple(&b.sub_f64_3(*a), &c.sub_f64_3(*a), &d.sub_f64_3(*a), tol)
}
