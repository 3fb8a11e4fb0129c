// ============================================================================
// Magnitude Errors
// Error types for construction, parsing, arithmetic and sampling
// ============================================================================

use std::fmt;

/// Which bound check a sampling request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeViolation {
    /// Lower bound compares greater than the upper bound
    Inverted,
    /// Lower bound has a negative mantissa
    NegativeLower,
    /// Upper bound has a negative mantissa
    NegativeUpper,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeViolation::Inverted => write!(f, "upper bound cannot be less than lower bound"),
            RangeViolation::NegativeLower => write!(f, "lower bound cannot be less than 0"),
            RangeViolation::NegativeUpper => write!(f, "upper bound cannot be less than 0"),
        }
    }
}

/// Errors that can occur while building or combining scaled magnitudes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MagnitudeError {
    /// Tier outside `[0, MAX_TIER]`
    InvalidTier { tier: i32 },
    /// Input text is not `<number><suffix>?`
    Parse { input: String },
    /// Sampling bounds are inverted or negative
    InvalidRange(RangeViolation),
    /// Division would need a tier below zero
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
}

impl fmt::Display for MagnitudeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagnitudeError::InvalidTier { tier } => write!(
                f,
                "invalid tier {}: must be between 0 and {}",
                tier,
                super::MAX_TIER
            ),
            MagnitudeError::Parse { input } => {
                write!(f, "invalid input: could not parse {:?} as a magnitude", input)
            },
            MagnitudeError::InvalidRange(violation) => write!(f, "invalid range: {}", violation),
            MagnitudeError::Underflow => {
                write!(f, "arithmetic underflow: resulting tier is below zero")
            },
            MagnitudeError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for MagnitudeError {}

/// Result type alias for magnitude operations
pub type MagnitudeResult<T> = Result<T, MagnitudeError>;
