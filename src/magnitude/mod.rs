// ============================================================================
// Magnitude Module
// Scaled-magnitude numbers for values spanning an astronomically wide range
// ============================================================================
//
// This module provides:
// - ScaledMagnitude: a (mantissa, tier) pair worth mantissa × 1000^tier
// - MagnitudeError: error types for construction, parsing and arithmetic
// - Suffix/exponential notation for persistence and display
// - Bounded random sampling between two magnitudes
//
// Design principles:
// - Every operation yields a new, renormalized value
// - Precision loss is deliberate and bounded (see THRESHOLD_DIFFERENCE)
// - Fallible operations return Result (no panics)
// - Tiers saturate at MAX_TIER instead of overflowing

mod arithmetic;
mod compare;
mod errors;
mod notation;
mod sampler;
mod scaled;
mod stored;

pub use errors::{MagnitudeError, MagnitudeResult, RangeViolation};
pub use notation::SUFFIXES;
pub use scaled::{ScaledMagnitude, MAX_TIER, THRESHOLD_DIFFERENCE};
