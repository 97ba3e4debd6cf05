use std::cmp::Ordering;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use nalgebra::SVector;

use super::{Coordinate, Tolerance};
use crate::error::{GeometryError, Result};

/// Axis index of the X component.
pub const X: usize = 0;
/// Axis index of the Y component.
pub const Y: usize = 1;
/// Axis index of the Z component.
pub const Z: usize = 2;

/// A fixed-dimension coordinate tuple in 2D or 3D.
///
/// The dimension `N` must be 2 or 3; any other value fails to compile as soon
/// as a constructor is instantiated.
///
/// Equality is component-wise: floating-point components are equal when they
/// differ by at most [`Tolerance::DEFAULT`], integer components must match
/// exactly. Ordering is lexicographic over the same component equality and
/// carries no geometric meaning.
#[derive(Clone, Copy, Debug)]
pub struct Vector<T: Coordinate, const N: usize> {
    coords: SVector<T, N>,
}

impl<T: Coordinate, const N: usize> Vector<T, N> {
    const DIMENSION_CHECK: () = assert!(N == 2 || N == 3, "vector dimension must be 2 or 3");

    /// Creates a vector from a coordinate array.
    #[must_use]
    pub fn from_coords(coords: [T; N]) -> Self {
        let () = Self::DIMENSION_CHECK;
        Self {
            coords: SVector::from(coords),
        }
    }

    /// Creates the zero vector.
    #[must_use]
    pub fn zeros() -> Self {
        Self::from_coords([T::zero(); N])
    }

    /// Returns the coordinates as an array.
    #[must_use]
    pub fn coords(&self) -> [T; N] {
        std::array::from_fn(|axis| self.coords[axis])
    }

    /// Returns the X component.
    #[must_use]
    pub fn x(&self) -> T {
        self.coords[X]
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y(&self) -> T {
        self.coords[Y]
    }

    /// Reads the component on `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::AxisOutOfRange`] if `axis >= N`.
    pub fn component(&self, axis: usize) -> Result<T> {
        if axis >= N {
            return Err(GeometryError::AxisOutOfRange { axis, dimension: N }.into());
        }
        Ok(self.coords[axis])
    }

    /// Sets the component on `axis` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::AxisOutOfRange`] if `axis >= N`; the vector is
    /// left unchanged.
    pub fn assign(&mut self, axis: usize, value: T) -> Result<()> {
        if axis >= N {
            return Err(GeometryError::AxisOutOfRange { axis, dimension: N }.into());
        }
        self.coords[axis] = value;
        Ok(())
    }

    /// Euclidean norm, accumulated in `f64` whatever the coordinate type.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.coords
            .iter()
            .map(|c| {
                let c = c.to_f64();
                c * c
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Scales the vector to unit length in place, using
    /// [`Tolerance::DEFAULT`].
    ///
    /// See [`normalize_with`](Self::normalize_with) for the degenerate-case
    /// contract.
    pub fn normalize(&mut self) {
        self.normalize_with(Tolerance::DEFAULT);
    }

    /// Scales the vector to unit length in place.
    ///
    /// If the magnitude is at most `tol`, the vector is left unchanged. This
    /// is the contract for degenerate input, not an error: callers that need
    /// to distinguish the case check [`magnitude`](Self::magnitude) first.
    ///
    /// Integer coordinates are truncated after division.
    pub fn normalize_with(&mut self, tol: Tolerance) {
        let mag = self.magnitude();
        if mag <= tol.epsilon() {
            tracing::trace!(magnitude = mag, "normalize skipped for degenerate vector");
            return;
        }
        self.coords = self.coords.map(|c| T::from_f64(c.to_f64() / mag));
    }

    /// Returns a unit-length copy; see [`normalize`](Self::normalize).
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Component-wise equality under an explicit tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.approx_eq(*b, tol))
    }

    /// Checks whether every component is zero within `tol`.
    #[must_use]
    pub fn is_zero(&self, tol: Tolerance) -> bool {
        self.coords.iter().all(|c| tol.is_zero(c.to_f64()))
    }

    /// Dot product with `other`; see [`dot_product`].
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        dot_product(self, other)
    }

    /// Coordinates widened to `f64`, with 2D vectors embedded at `z = 0`.
    pub(crate) fn to_f64_3(self) -> [f64; 3] {
        let mut out = [0.0; 3];
        for (slot, c) in out.iter_mut().zip(self.coords.iter()) {
            *slot = c.to_f64();
        }
        out
    }

    /// Coordinates widened to `f64`.
    pub(crate) fn to_f64_array(self) -> [f64; N] {
        let mut out = [0.0; N];
        for (slot, c) in out.iter_mut().zip(self.coords.iter()) {
            *slot = c.to_f64();
        }
        out
    }

    /// `self - other` widened to `f64` before subtracting, so integer
    /// coordinates cannot overflow. 2D vectors are embedded at `z = 0`.
    pub(crate) fn sub_f64_3(self, other: Self) -> [f64; 3] {
        let (a, b) = (self.to_f64_3(), other.to_f64_3());
        std::array::from_fn(|i| a[i] - b[i])
    }

    /// Builds a vector from `f64` accumulator values.
    pub(crate) fn from_f64_array(values: [f64; N]) -> Self {
        Self::from_coords(values.map(T::from_f64))
    }
}

impl<T: Coordinate> Vector<T, 2> {
    /// Creates a 2D vector.
    #[must_use]
    pub fn xy(x: T, y: T) -> Self {
        Self::from_coords([x, y])
    }
}

impl<T: Coordinate> Vector<T, 3> {
    /// Creates a 3D vector.
    #[must_use]
    pub fn xyz(x: T, y: T, z: T) -> Self {
        Self::from_coords([x, y, z])
    }

    /// Returns the Z component.
    #[must_use]
    pub fn z(&self) -> T {
        self.coords[Z]
    }

    /// Cross product with `other`; see [`cross_product_r3`].
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        cross_product_r3(self, other)
    }
}

/// Sum of component-wise products, accumulated in `f64`.
#[must_use]
pub fn dot_product<T: Coordinate, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> f64 {
    a.coords
        .iter()
        .zip(b.coords.iter())
        .map(|(x, y)| x.to_f64() * y.to_f64())
        .sum()
}

/// Scalar 2D cross product `a.x * b.y - a.y * b.x`.
///
/// This is the Z component of the 3D cross product of the vectors embedded
/// at `z = 0`; positive when `b` is counter-clockwise from `a`.
#[must_use]
pub fn cross_product_r2<T: Coordinate>(a: &Vector<T, 2>, b: &Vector<T, 2>) -> f64 {
    a.x().to_f64() * b.y().to_f64() - a.y().to_f64() * b.x().to_f64()
}

/// Full 3D cross product `a × b`.
///
/// Computed in `f64` and converted back to the coordinate type.
#[must_use]
pub fn cross_product_r3<T: Coordinate>(a: &Vector<T, 3>, b: &Vector<T, 3>) -> Vector<T, 3> {
    Vector::from_f64_array(cross_f64(&a.to_f64_3(), &b.to_f64_3()))
}

/// Scalar triple product `a · (b × c)`.
///
/// Six times the signed volume of the tetrahedron spanned by the three
/// vectors from a common origin; zero iff they are coplanar.
#[must_use]
pub fn scalar_triple_product<T: Coordinate>(
    a: &Vector<T, 3>,
    b: &Vector<T, 3>,
    c: &Vector<T, 3>,
) -> f64 {
    let bc = cross_f64(&b.to_f64_3(), &c.to_f64_3());
    let a = a.to_f64_3();
    a[X] * bc[X] + a[Y] * bc[Y] + a[Z] * bc[Z]
}

pub(crate) fn cross_f64(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[Y] * b[Z] - a[Z] * b[Y],
        a[Z] * b[X] - a[X] * b[Z],
        a[X] * b[Y] - a[Y] * b[X],
    ]
}

impl<T: Coordinate, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Coordinate, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self::from_coords(coords)
    }
}

impl<T: Coordinate, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.coords()
    }
}

impl<T: Coordinate, const N: usize> From<SVector<T, N>> for Vector<T, N> {
    fn from(coords: SVector<T, N>) -> Self {
        let () = Self::DIMENSION_CHECK;
        Self { coords }
    }
}

impl<T: Coordinate, const N: usize> From<Vector<T, N>> for SVector<T, N> {
    fn from(v: Vector<T, N>) -> Self {
        v.coords
    }
}

impl<T: Coordinate, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::DEFAULT)
    }
}

impl<T: Coordinate, const N: usize> PartialOrd for Vector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (a, b) in self.coords.iter().zip(other.coords.iter()) {
            if a.approx_eq(*b, Tolerance::DEFAULT) {
                continue;
            }
            return a.partial_cmp(b);
        }
        Some(Ordering::Equal)
    }
}

impl<T: Coordinate, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `axis >= N`.
    fn index(&self, axis: usize) -> &T {
        assert!(axis < N, "axis {axis} is out of range for a {N}-dimensional vector");
        &self.coords[axis]
    }
}

impl<T: Coordinate, const N: usize> IndexMut<usize> for Vector<T, N> {
    /// # Panics
    ///
    /// Panics if `axis >= N`. Writing outside the vector is a caller bug.
    fn index_mut(&mut self, axis: usize) -> &mut T {
        assert!(axis < N, "axis {axis} is out of range for a {N}-dimensional vector");
        &mut self.coords[axis]
    }
}

impl<T: Coordinate, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            coords: self.coords.zip_map(&rhs.coords, |a, b| a + b),
        }
    }
}

impl<T: Coordinate, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            coords: self.coords.zip_map(&rhs.coords, |a, b| a - b),
        }
    }
}

impl<T: Coordinate, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            coords: self.coords.map(|c| -c),
        }
    }
}

/// Scaling by an `f64` factor, computed in `f64` and converted back.
impl<T: Coordinate, const N: usize> Mul<f64> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            coords: self.coords.map(|c| T::from_f64(c.to_f64() * rhs)),
        }
    }
}

/// 2D vector, `f64` by default.
pub type Vector2<T = f64> = Vector<T, 2>;
/// 3D vector, `f64` by default.
pub type Vector3<T = f64> = Vector<T, 3>;
/// Single-precision 2D vector.
pub type Vector2f = Vector<f32, 2>;
/// Single-precision 3D vector.
pub type Vector3f = Vector<f32, 3>;
