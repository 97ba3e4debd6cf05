use crate::error::{GeometryError, Result};
use crate::math::distance::point_plane_distance;
use crate::math::{dot_product, Coordinate, Point3, Tolerance, Vector3};

/// An infinite plane in 3D space.
///
/// Defined by a unit normal `n` and an offset `d`: a point `p` lies on the
/// plane iff `n · p = d`, so `d` is the signed distance of the plane from the
/// origin along `n`.
///
/// Coordinates are expected to be floating point; integer normals only
/// survive normalization when they are axis-aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<T: Coordinate = f64> {
    normal: Vector3<T>,
    d: T,
}

impl<T: Coordinate> Plane<T> {
    /// Creates a plane from a normal and offset, stored as given.
    #[must_use]
    pub fn new(normal: Vector3<T>, d: T) -> Self {
        Self { normal, d }
    }

    /// Creates the plane through `point` with the given normal.
    ///
    /// The normal is normalized and `d` is derived from `point`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `|normal| <= tol`.
    pub fn from_point_normal(point: Point3<T>, normal: Vector3<T>, tol: Tolerance) -> Result<Self> {
        if normal.magnitude() <= tol.epsilon() {
            return Err(GeometryError::ZeroVector.into());
        }
        let mut normal = normal;
        normal.normalize_with(tol);
        let d = T::from_f64(dot_product(&normal, &point));
        Ok(Self { normal, d })
    }

    /// Creates the plane through three points.
    ///
    /// The normal is `(b - a) × (c - a)`, so it faces the side from which
    /// `a, b, c` appear counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the points are collinear.
    pub fn from_points(a: Point3<T>, b: Point3<T>, c: Point3<T>, tol: Tolerance) -> Result<Self> {
        let normal = (b - a).cross(&(c - a));
        if normal.magnitude() <= tol.epsilon() {
            return Err(GeometryError::Degenerate("plane points are collinear".into()).into());
        }
        Self::from_point_normal(a, normal, tol)
    }

    /// Returns the normal vector of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3<T> {
        &self.normal
    }

    /// Returns the offset `d` of the plane.
    #[must_use]
    pub fn d(&self) -> T {
        self.d
    }

    /// Checks whether `point` lies on the plane within `tol`.
    #[must_use]
    pub fn contains(&self, point: &Point3<T>, tol: Tolerance) -> bool {
        tol.is_zero(point_plane_distance(point, self))
    }
}
