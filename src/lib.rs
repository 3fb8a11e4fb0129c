// ============================================================================
// Scaled Magnitude Library
// Compact arbitrary-magnitude numbers with suffix notation
// ============================================================================

//! # Scaled Magnitude
//!
//! A compact number type for values that span an astronomically wide range,
//! such as idle-game currency counters, without bignum arithmetic.
//!
//! ## Features
//!
//! - **(mantissa, tier) representation** worth `mantissa × 1000^tier`,
//!   renormalized after every operation
//! - **Bounded precision loss**: addition ignores operands more than
//!   `THRESHOLD_DIFFERENCE` tiers smaller
//! - **Suffix notation** (`1.50a`, `68.0b`, …, `Z`) and exponential notation
//!   (`1.50e3`) for persistence and display
//! - **Bounded random sampling** between two magnitudes
//!
//! ## Example
//!
//! ```rust
//! use scaled_magnitude::prelude::*;
//!
//! let balance = ScaledMagnitude::new(1500.0, 0).unwrap();
//! assert_eq!(balance.to_string(), "1.50a");
//!
//! let reward: ScaledMagnitude = "68a".parse().unwrap();
//! let total = balance + reward;
//! assert_eq!(total.to_string(), "69.5a");
//! assert_eq!(format!("{:e}", total), "69.5e3");
//!
//! // Division can underflow below tier 0
//! let tiny = ScaledMagnitude::new(1.0, 0).unwrap();
//! assert_eq!(tiny.divide(total), Err(MagnitudeError::Underflow));
//! ```

pub mod config;
pub mod magnitude;

pub use magnitude::{MagnitudeError, MagnitudeResult, ScaledMagnitude};

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{DisplayConfig, Notation};
    pub use crate::magnitude::{
        MagnitudeError, MagnitudeResult, RangeViolation, ScaledMagnitude, MAX_TIER, SUFFIXES,
        THRESHOLD_DIFFERENCE,
    };
}
