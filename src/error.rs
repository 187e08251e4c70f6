//! Error types.
//!
//! Two kinds of failure are kept apart:
//!
//! - [`ConfigError`]: the caller supplied a configuration that cannot be used
//!   (empty population, inverted bounds, out-of-range rates).
//! - [`Error::InvariantViolation`]: an internal consistency check of the
//!   ranking engine failed. This never happens on valid input and indicates
//!   a bug; see [`Error::is_defect`].

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The population must contain at least one candidate.
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    /// More bounds were supplied than there are decision dimensions.
    #[error("{got} bounds supplied for a {dimension}-dimensional problem")]
    TooManyBounds {
        /// Problem dimensionality.
        dimension: usize,
        /// Number of bounds supplied.
        got: usize,
    },

    /// A bound is inverted or not finite.
    #[error("invalid bounds for dimension {dimension}: [{lower}, {upper}]")]
    InvalidBounds {
        /// Dimension index of the offending bound.
        dimension: usize,
        /// Lower end.
        lower: f64,
        /// Upper end.
        upper: f64,
    },

    /// A probability lies outside `[0, 1]`.
    #[error("{name} must be in [0, 1], got {value}")]
    InvalidRate {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A distribution index is negative or not finite.
    #[error("{name} must be a non-negative finite number, got {value}")]
    InvalidDistributionIndex {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// `max_generations` is zero.
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
}

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// An objective row does not have the expected number of values.
    #[error("shape mismatch: row {row} has {got} objectives, expected {expected}")]
    ShapeMismatch {
        /// Index of the first offending row.
        row: usize,
        /// Expected row length.
        expected: usize,
        /// Actual row length.
        got: usize,
    },

    /// An internal invariant of the ranking engine was broken.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl Error {
    /// Returns `true` if the error signals a bug in this crate rather than
    /// bad input.
    pub fn is_defect(&self) -> bool {
        matches!(self, Error::InvariantViolation(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
