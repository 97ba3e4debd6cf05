pub mod error;
pub mod geometry;
pub mod math;

#[cfg(test)]
mod test_support;

pub use error::{GeomError, Result};
pub use geometry::{Line, Line2, Line3, Plane};
pub use math::{Point, Point2, Point3, Tolerance, Vector, Vector2, Vector3};
