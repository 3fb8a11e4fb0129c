// ============================================================================
// Range Sampler
// Bounded random magnitudes
// ============================================================================

use super::errors::{MagnitudeError, MagnitudeResult, RangeViolation};
use super::scaled::ScaledMagnitude;
use rand::Rng;

impl ScaledMagnitude {
    /// Random value between `lower` and `upper` using the thread-local RNG.
    ///
    /// See [`random_next_with`](Self::random_next_with).
    pub fn random_next(lower: Self, upper: Self) -> MagnitudeResult<Self> {
        Self::random_next_with(&mut rand::thread_rng(), lower, upper)
    }

    /// Random value between `lower` and `upper`.
    ///
    /// The tier is drawn uniformly from `[lower.tier, upper.tier]` and the
    /// mantissa independently from `[lower.mantissa, upper.mantissa)`. When
    /// the bounds sit at different tiers this is not uniform over the
    /// numeric range, and a drawn value can land outside it.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `lower` compares greater than `upper` or
    /// either bound is negative.
    pub fn random_next_with<R: Rng + ?Sized>(
        rng: &mut R,
        lower: Self,
        upper: Self,
    ) -> MagnitudeResult<Self> {
        let violation = if lower.is_greater(upper) {
            Some(RangeViolation::Inverted)
        } else if lower.is_negative() {
            Some(RangeViolation::NegativeLower)
        } else if upper.is_negative() {
            Some(RangeViolation::NegativeUpper)
        } else {
            None
        };

        if let Some(violation) = violation {
            tracing::debug!(%lower, %upper, ?violation, "rejected sampling range");
            return Err(MagnitudeError::InvalidRange(violation));
        }

        // lower <= upper implies lower.tier <= upper.tier
        let tier = rng.gen_range(lower.tier()..=upper.tier());
        let span = upper.mantissa() - lower.mantissa();
        let mantissa = rng.gen::<f64>() * span + lower.mantissa();

        Ok(Self::normalized(mantissa, tier))
    }
}
