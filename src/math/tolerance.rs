use crate::error::{ConfigError, Result};

/// Epsilon used for every floating-point comparison to zero or to another
/// float.
///
/// Predicates take it as their last argument so callers can tune sensitivity
/// without recompiling. `PartialEq` on vectors and [`Vector::normalize`]
/// cannot take an argument and use [`Tolerance::DEFAULT`].
///
/// [`Vector::normalize`]: crate::math::Vector::normalize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Default epsilon, `1e-7`.
    pub const DEFAULT: Self = Self { epsilon: 1e-7 };

    /// Creates a tolerance from an explicit epsilon.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTolerance`] if `epsilon` is negative,
    /// NaN or infinite.
    pub fn new(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::InvalidTolerance(epsilon).into());
        }
        Ok(Self { epsilon })
    }

    /// A coarse tolerance (`1e-5`) for single-precision input.
    #[must_use]
    pub const fn loose() -> Self {
        Self { epsilon: 1e-5 }
    }

    /// A strict tolerance (`1e-10`).
    #[must_use]
    pub const fn tight() -> Self {
        Self { epsilon: 1e-10 }
    }

    /// Returns the raw epsilon.
    #[must_use]
    pub const fn epsilon(self) -> f64 {
        self.epsilon
    }

    /// Checks whether `value` is zero within tolerance.
    #[must_use]
    pub fn is_zero(self, value: f64) -> bool {
        value.abs() <= self.epsilon
    }

    /// Checks whether two values are equal within tolerance.
    #[must_use]
    pub fn are_equal(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
