use thiserror::Error;

/// Top-level error type for the geomcore library.
#[derive(Debug, Error)]
pub enum GeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("axis {axis} is out of range for a {dimension}-dimensional vector")]
    AxisOutOfRange { axis: usize, dimension: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to comparison settings.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

/// Convenience type alias for results using [`GeomError`].
pub type Result<T> = std::result::Result<T, GeomError>;
