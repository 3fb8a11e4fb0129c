// ============================================================================
// Comparator
// Tier-first ordering and structural equality
// ============================================================================

use super::scaled::ScaledMagnitude;
use std::cmp::Ordering;

impl ScaledMagnitude {
    /// `self > other`: a higher tier always wins, otherwise the mantissa
    /// decides.
    ///
    /// The rule assumes normalized operands. A negative value at a high tier
    /// still compares above a positive value at a lower tier.
    #[inline]
    pub fn is_greater(self, other: Self) -> bool {
        self.tier() > other.tier()
            || (self.mantissa() > other.mantissa() && self.tier() >= other.tier())
    }

    /// `self < other`, defined as "not greater". Equal values are therefore
    /// also "less"; use [`compare`](Self::compare) for a strict ordering.
    #[inline]
    pub fn is_less(self, other: Self) -> bool {
        !self.is_greater(other)
    }

    /// Exact structural equality of the normalized `(mantissa, tier)` pair.
    #[inline]
    pub fn equals(self, other: Self) -> bool {
        self.tier() == other.tier() && self.mantissa() == other.mantissa()
    }

    /// Equality between optional values. True only when both are present
    /// and structurally equal.
    pub fn equals_opt(a: Option<&Self>, b: Option<&Self>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a.equals(*b),
            _ => false,
        }
    }

    /// Three-way comparison: `Greater` by [`is_greater`](Self::is_greater),
    /// `Equal` by [`equals`](Self::equals), `Less` otherwise.
    pub fn compare(self, other: Self) -> Ordering {
        if self.is_greater(other) {
            Ordering::Greater
        } else if self.equals(other) {
            Ordering::Equal
        } else {
            Ordering::Less
        }
    }

    /// Returns the smaller of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.is_greater(other) {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.is_greater(other) {
            self
        } else {
            other
        }
    }
}

impl PartialOrd for ScaledMagnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // A NaN mantissa only has a defined position against another tier
        if self.tier() == other.tier()
            && self.mantissa().partial_cmp(&other.mantissa()).is_none()
        {
            return None;
        }
        Some(self.compare(*other))
    }
}
