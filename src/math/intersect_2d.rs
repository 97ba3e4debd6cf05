use std::cmp::Ordering;

use super::orientation::{orientation_2d, RelativePosition};
use super::{cross_f64, Coordinate, Point2, Tolerance};
use crate::geometry::Line2;

/// Result of intersecting two closed 2D segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<T: Coordinate = f64> {
    /// The segments share no point.
    Disjoint,
    /// The segments cross or touch at exactly one point.
    ///
    /// For integer coordinates a crossing point is truncated toward zero, so
    /// it may not lie on either segment.
    Point(Point2<T>),
    /// The segments are collinear and share the sub-segment between these
    /// endpoints, in lexicographic order.
    Overlap(Point2<T>, Point2<T>),
}

impl<T: Coordinate> SegmentIntersection<T> {
    /// Whether the segments share at least one point.
    #[must_use]
    pub fn intersects(&self) -> bool {
        !matches!(self, Self::Disjoint)
    }
}

/// Tests whether the closed segments `[a, b]` and `[c, d]` share a point.
///
/// Any endpoint lying on the other segment counts as an intersection, which
/// covers touching and collinear overlap. Otherwise the segments must cross
/// properly: `c` and `d` on opposite sides of `a → b` and `a`, `b` on opposite
/// sides of `c → d`.
///
/// The side tests compare triangle areas against the absolute `tol`, so
/// segments much shorter than `sqrt(tol)` read as collinear.
#[must_use]
pub fn segments_intersect<T: Coordinate>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    d: &Point2<T>,
    tol: Tolerance,
) -> bool {
    let ab_c = orientation_2d(a, b, c, tol);
    let ab_d = orientation_2d(a, b, d, tol);
    let cd_a = orientation_2d(c, d, a, tol);
    let cd_b = orientation_2d(c, d, b, tol);

    if [ab_c, ab_d, cd_a, cd_b]
        .iter()
        .any(|pos| pos.is_on_segment())
    {
        return true;
    }

    let left = |pos: RelativePosition| pos == RelativePosition::Left;
    (left(ab_c) ^ left(ab_d)) && (left(cd_a) ^ left(cd_b))
}

/// Computes where the closed segments `[a, b]` and `[c, d]` meet.
///
/// Non-parallel segments that intersect give their crossing point.
/// Parallelism is judged on the sine of the angle between the segments, so
/// short segments that cross are not mistaken for collinear ones. Collinear
/// segments give the overlap of their extents, collapsing to a point when
/// they only touch end to end.
#[must_use]
pub fn segment_segment_intersection<T: Coordinate>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    d: &Point2<T>,
    tol: Tolerance,
) -> SegmentIntersection<T> {
    if !segments_intersect(a, b, c, d, tol) {
        return SegmentIntersection::Disjoint;
    }

    let (numerator, denominator) = crossing(a, b, c, d);
    let (len_ab, len_cd) = (distance(a, b), distance(c, d));
    let proper = len_ab > tol.epsilon() && len_cd > tol.epsilon();
    if proper && !tol.is_zero(denominator / (len_ab * len_cd)) {
        return SegmentIntersection::Point(point_along(a, b, numerator / denominator));
    }

    // Parallel and intersecting, so collinear. Degenerate segments land here
    // too and behave as collinear ones.
    let on = |s0: &Point2<T>, s1: &Point2<T>, p: &Point2<T>| {
        orientation_2d(s0, s1, p, tol).is_on_segment()
    };
    let cmp = |p: &&Point2<T>, q: &&Point2<T>| p.partial_cmp(q).unwrap_or(Ordering::Equal);
    let mut shared = [a, b, c, d]
        .into_iter()
        .filter(|&p| on(a, b, p) && on(c, d, p));

    let Some(first) = shared.next() else {
        return SegmentIntersection::Disjoint;
    };
    let (lo, hi) = shared.fold((first, first), |(lo, hi), p| {
        (
            if cmp(&p, &lo) == Ordering::Less { p } else { lo },
            if cmp(&p, &hi) == Ordering::Greater { p } else { hi },
        )
    });

    if lo.approx_eq(hi, tol) {
        SegmentIntersection::Point(*lo)
    } else {
        SegmentIntersection::Overlap(*lo, *hi)
    }
}

/// Intersection of the infinite lines through `a, b` and through `c, d`.
///
/// Returns `None` when the lines are parallel or coincident, since there is
/// no unique point. For integer coordinates the point is truncated toward
/// zero.
///
/// Parallelism is `|(b - a) × (d - c)| <= tol`. The test is absolute, so
/// defining points closer together than about `sqrt(tol)` read as parallel.
#[must_use]
pub fn line_line_intersection<T: Coordinate>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    d: &Point2<T>,
    tol: Tolerance,
) -> Option<Point2<T>> {
    let (numerator, denominator) = crossing(a, b, c, d);
    if tol.is_zero(denominator) {
        tracing::trace!(denominator, "parallel lines have no unique intersection");
        return None;
    }
    Some(point_along(a, b, numerator / denominator))
}

/// Numerator and denominator of the parameter `t` along `a → b` where the
/// lines through `a, b` and `c, d` cross.
///
/// With `n = (CD.y, -CD.x)` the parameter is `n·AC / n·AB`, and `n · v`
/// equals `v × CD`.
fn crossing<T: Coordinate>(
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
    d: &Point2<T>,
) -> (f64, f64) {
    let ab = b.sub_f64_3(*a);
    let ac = c.sub_f64_3(*a);
    let cd = d.sub_f64_3(*c);
    (cross_f64(&ac, &cd)[2], cross_f64(&ab, &cd)[2])
}

fn distance<T: Coordinate>(p: &Point2<T>, q: &Point2<T>) -> f64 {
    q.sub_f64_3(*p).iter().map(|v| v * v).sum::<f64>().sqrt()
}

fn point_along<T: Coordinate>(a: &Point2<T>, b: &Point2<T>, t: f64) -> Point2<T> {
    let [ax, ay] = a.to_f64_array();
    let ab = b.sub_f64_3(*a);
    Point2::from_f64_array([ax + t * ab[0], ay + t * ab[1]])
}

/// Intersection of two infinite 2D lines.
///
/// Each line is turned into the segment `point → point + direction` and
/// handed to [`line_line_intersection`].
#[must_use]
pub fn lines_intersection_2d<T: Coordinate>(
    l1: &Line2<T>,
    l2: &Line2<T>,
    tol: Tolerance,
) -> Option<Point2<T>> {
    let a = *l1.point();
    let b = a + *l1.direction();
    let c = *l2.point();
    let d = c + *l2.direction();
    line_line_intersection(&a, &b, &c, &d, tol)
}
