mod coordinate;
mod tolerance;
mod vector;

pub mod angle;
pub mod distance;
pub mod intersect_2d;
pub mod intersect_3d;
pub mod orientation;

pub use coordinate::Coordinate;
pub use tolerance::Tolerance;
pub use vector::{
    cross_product_r2, cross_product_r3, dot_product, scalar_triple_product, Vector, Vector2,
    Vector2f, Vector3, Vector3f, X, Y, Z,
};

pub(crate) use vector::cross_f64;

/// A position vector.
pub type Point<T, const N: usize> = Vector<T, N>;

/// 2D point type, `f64` by default.
pub type Point2<T = f64> = Vector<T, 2>;

/// 3D point type, `f64` by default.
pub type Point3<T = f64> = Vector<T, 3>;
