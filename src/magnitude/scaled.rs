// ============================================================================
// Scaled Magnitude
// Representation and normalization of (mantissa, tier) pairs
// ============================================================================

use super::errors::{MagnitudeError, MagnitudeResult};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Highest tier; one per symbol of the suffix alphabet (`a`..`z`, `A`..`Z`).
pub const MAX_TIER: u8 = 52;

/// Largest tier gap at which addition still combines both operands.
///
/// When the gap is wider the smaller operand is below representable
/// precision and the larger operand is returned unchanged.
pub const THRESHOLD_DIFFERENCE: u8 = 5;

/// Scale between neighbouring tiers
pub(crate) const TIER_SCALE: f64 = 1000.0;

/// A number stored as `mantissa × 1000^tier`.
///
/// In canonical form `|mantissa|` lies in `[1, 1000)`. Two exceptions:
/// tier 0 may hold anything below 1 (zero is always `(0, 0)`), and
/// `MAX_TIER` may hold anything at or above 1000 because there is no
/// higher tier to carry into. The mantissa is always finite: past
/// `f64::MAX` it saturates there.
///
/// # Example
/// ```rust
/// use scaled_magnitude::ScaledMagnitude;
///
/// let coins = ScaledMagnitude::new(1500.0, 0).unwrap(); // 1.5 × 1000^1
/// assert_eq!(coins.tier(), 1);
/// assert_eq!(coins.to_string(), "1.50a");
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct ScaledMagnitude {
    mantissa: f64,
    tier: u8,
}

impl ScaledMagnitude {
    /// Zero
    pub const MIN: Self = Self {
        mantissa: 0.0,
        tier: 0,
    };

    /// Largest expressible value. Deliberately outside canonical form.
    pub const MAX: Self = Self {
        mantissa: TIER_SCALE,
        tier: MAX_TIER,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a normalized value worth `mantissa × 1000^tier`.
    ///
    /// # Errors
    /// Returns `InvalidTier` if `tier` is negative or above `MAX_TIER`.
    pub fn new(mantissa: f64, tier: i32) -> MagnitudeResult<Self> {
        if !(0..=MAX_TIER as i32).contains(&tier) {
            return Err(MagnitudeError::InvalidTier { tier });
        }

        Ok(Self::normalized(mantissa, tier as u8))
    }

    /// Normalize a pair whose tier is already known to be in range.
    pub(crate) fn normalized(mantissa: f64, tier: u8) -> Self {
        let mut value = Self { mantissa, tier };
        value.normalize();
        value
    }

    /// Normalize a raw pair whose tier may exceed `MAX_TIER`.
    ///
    /// Excess tiers are folded back into the mantissa, so the result sits at
    /// `MAX_TIER` with a mantissa of 1000 or more, capped at `f64::MAX`.
    pub(crate) fn saturating(mantissa: f64, tier: u32) -> Self {
        if tier <= MAX_TIER as u32 {
            return Self::normalized(mantissa, tier as u8);
        }

        let excess = tier - MAX_TIER as u32;
        tracing::trace!(tier, excess, "tier saturated at MAX_TIER");
        Self::normalized(
            mantissa * TIER_SCALE.powi(excess as i32),
            MAX_TIER,
        )
    }

    /// Carry into higher tiers while the mantissa is too large, borrow from
    /// lower tiers while it is too small. Stops at either tier boundary.
    fn normalize(&mut self) {
        while self.mantissa.abs() >= TIER_SCALE && self.tier < MAX_TIER {
            self.mantissa /= TIER_SCALE;
            self.tier += 1;
        }

        // An infinite mantissa always carries up to MAX_TIER
        if self.mantissa.is_infinite() {
            tracing::trace!(tier = self.tier, "mantissa saturated at f64::MAX");
            self.mantissa = f64::MAX.copysign(self.mantissa);
        }

        while self.mantissa.abs() < 1.0 && self.tier > 0 {
            self.mantissa *= TIER_SCALE;
            self.tier -= 1;
        }

        // -0.0 and 0.0 must be indistinguishable
        if self.mantissa == 0.0 {
            self.mantissa = 0.0;
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The base value, in `[1, 1000)` for canonical values.
    #[inline]
    pub const fn mantissa(self) -> f64 {
        self.mantissa
    }

    /// The power-of-1000 scale.
    #[inline]
    pub const fn tier(self) -> u8 {
        self.tier
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.mantissa == 0.0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.mantissa < 0.0
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.mantissa > 0.0
    }

    /// Check the canonical-form invariant, including its two boundary
    /// exceptions.
    pub fn is_canonical(self) -> bool {
        let abs = self.mantissa.abs();
        let lower_ok = abs >= 1.0 || self.tier == 0;
        let upper_ok = abs < TIER_SCALE || self.tier == MAX_TIER;
        lower_ok && upper_ok
    }

    /// Approximate value as a float. Canonical values below `MAX_TIER` are
    /// always finite; at `MAX_TIER` a mantissa above roughly `1.8e152`
    /// overflows to infinity.
    pub fn to_f64(self) -> f64 {
        self.mantissa * TIER_SCALE.powi(self.tier as i32)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for ScaledMagnitude {
    #[inline]
    fn default() -> Self {
        Self::MIN
    }
}

// Normalization folds -0.0 into 0.0. A NaN mantissa is not equal to itself.
impl Eq for ScaledMagnitude {}

impl Hash for ScaledMagnitude {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mantissa.to_bits().hash(state);
        self.tier.hash(state);
    }
}

impl fmt::Debug for ScaledMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScaledMagnitude({}, mantissa={}, tier={})",
            self, self.mantissa, self.tier
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
