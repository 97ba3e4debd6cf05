use crate::error::{GeometryError, Result};
use crate::math::{Coordinate, Point, Tolerance, Vector};

/// An infinite line defined by a point and a direction vector.
///
/// The parametric form is: `P(t) = point + t * direction`.
///
/// Distance, angle and intersection formulas assume `direction` is unit
/// length. [`Line::through`] guarantees that; [`Line::new`] and
/// [`Line::set_direction`] store the vector as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<T: Coordinate, const N: usize> {
    point: Point<T, N>,
    direction: Vector<T, N>,
}

impl<T: Coordinate, const N: usize> Line<T, N> {
    /// Creates a line from a point and a direction, stored as given.
    #[must_use]
    pub fn new(point: Point<T, N>, direction: Vector<T, N>) -> Self {
        Self { point, direction }
    }

    /// Creates the line through `p1` and `p2`, directed from `p1` to `p2`.
    ///
    /// The direction is normalized. If the points coincide the direction stays
    /// the zero vector, following [`Vector::normalize`].
    #[must_use]
    pub fn through(p1: Point<T, N>, p2: Point<T, N>) -> Self {
        Self {
            point: p1,
            direction: (p2 - p1).normalized(),
        }
    }

    /// Creates the line through `p1` and `p2`, rejecting coincident points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `|p2 - p1| <= tol`.
    pub fn try_through(p1: Point<T, N>, p2: Point<T, N>, tol: Tolerance) -> Result<Self> {
        let mut direction = p2 - p1;
        if direction.magnitude() <= tol.epsilon() {
            return Err(GeometryError::ZeroVector.into());
        }
        direction.normalize_with(tol);
        Ok(Self {
            point: p1,
            direction,
        })
    }

    /// Returns the anchor point of the line.
    #[must_use]
    pub fn point(&self) -> &Point<T, N> {
        &self.point
    }

    /// Returns the direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector<T, N> {
        &self.direction
    }

    /// Replaces the anchor point.
    pub fn set_point(&mut self, point: Point<T, N>) {
        self.point = point;
    }

    /// Replaces the direction. The caller re-normalizes if needed.
    pub fn set_direction(&mut self, direction: Vector<T, N>) {
        self.direction = direction;
    }

    /// Evaluates `point + t * direction`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point<T, N> {
        self.point + self.direction * t
    }
}

/// 2D line, `f64` by default.
pub type Line2<T = f64> = Line<T, 2>;
/// 3D line, `f64` by default.
pub type Line3<T = f64> = Line<T, 3>;
