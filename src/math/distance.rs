use super::{dot_product, Coordinate, Point, Point3};
use crate::geometry::{Line, Plane};

/// Parameter and foot of the perpendicular from `point` onto `line`, in `f64`.
fn project<T: Coordinate, const N: usize>(point: &Point<T, N>, line: &Line<T, N>) -> [f64; N] {
    let origin = line.point().to_f64_array();
    let dir = line.direction().to_f64_array();
    let p = point.to_f64_array();

    let t: f64 = (0..N).map(|i| (p[i] - origin[i]) * dir[i]).sum();
    std::array::from_fn(|i| origin[i] + t * dir[i])
}

/// Foot of the perpendicular dropped from `point` onto `line`.
///
/// Assumes a unit direction. With a non-unit direction the projection
/// parameter is scaled and the returned point is off the true foot.
#[must_use]
pub fn foot_of_perpendicular<T: Coordinate, const N: usize>(
    point: &Point<T, N>,
    line: &Line<T, N>,
) -> Point<T, N> {
    Point::from_f64_array(project(point, line))
}

/// Shortest distance from `point` to the infinite `line`.
///
/// The foot is kept in `f64`, so integer inputs are not truncated mid-way.
#[must_use]
pub fn point_line_distance<T: Coordinate, const N: usize>(
    point: &Point<T, N>,
    line: &Line<T, N>,
) -> f64 {
    let foot = project(point, line);
    let p = point.to_f64_array();
    foot.iter()
        .zip(p.iter())
        .map(|(f, q)| (f - q) * (f - q))
        .sum::<f64>()
        .sqrt()
}

/// Signed distance from `point` to `plane`: `n · p - d`.
///
/// Positive on the side the normal points to, negative on the back side.
#[must_use]
pub fn point_plane_distance<T: Coordinate>(point: &Point3<T>, plane: &Plane<T>) -> f64 {
    dot_product(plane.normal(), point) - plane.d().to_f64()
}
