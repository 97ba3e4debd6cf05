use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{AsPrimitive, Zero};

use super::Tolerance;

/// Numeric element type of a [`Vector`](super::Vector).
///
/// Implemented for the signed integer and floating-point primitives.
/// Magnitude, dot and cross products are always accumulated in `f64`
/// regardless of the coordinate type.
pub trait Coordinate:
    nalgebra::Scalar
    + Copy
    + Default
    + PartialOrd
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AsPrimitive<f64>
{
    /// Whether components compare within a tolerance (floats) or exactly
    /// (integers).
    const IS_FLOAT: bool;

    /// Converts an accumulator value back to the coordinate type.
    ///
    /// Integer types truncate toward zero and saturate at their bounds.
    fn from_f64(value: f64) -> Self;

    /// Widens the coordinate into the `f64` accumulator.
    fn to_f64(self) -> f64 {
        self.as_()
    }

    /// Component equality: `|a - b| <= tol` for floats, `a == b` for integers.
    fn approx_eq(self, other: Self, tol: Tolerance) -> bool {
        if Self::IS_FLOAT {
            tol.are_equal(self.to_f64(), other.to_f64())
        } else {
            self == other
        }
    }
}

macro_rules! impl_coordinate {
    ($is_float:expr => $($t:ty),*) => {
        $(
            impl Coordinate for $t {
                const IS_FLOAT: bool = $is_float;

                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_coordinate!(true => f32, f64);
impl_coordinate!(false => i32, i64);
