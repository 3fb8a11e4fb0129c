// ============================================================================
// Arithmetic Engine
// Add, subtract, multiply, divide and modulo over scaled magnitudes
// ============================================================================

use super::errors::{MagnitudeError, MagnitudeResult};
use super::scaled::{ScaledMagnitude, THRESHOLD_DIFFERENCE, TIER_SCALE};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl ScaledMagnitude {
    // ========================================================================
    // Additive Operations
    // ========================================================================

    /// Addition with a bounded precision window.
    ///
    /// Equal tiers add mantissas directly. Otherwise the smaller operand is
    /// scaled down to the larger operand's tier; if the tiers are more than
    /// `THRESHOLD_DIFFERENCE` apart the larger operand is returned as is.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: Self) -> Self {
        if self.tier() == rhs.tier() {
            return Self::normalized(self.mantissa() + rhs.mantissa(), self.tier());
        }

        let (big, small) = if self.is_greater(rhs) {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let difference = big.tier() - small.tier();
        if difference > THRESHOLD_DIFFERENCE {
            tracing::trace!(
                big_tier = big.tier(),
                small_tier = small.tier(),
                "addition dropped operand below precision window"
            );
            return big;
        }

        let scaled = small.mantissa() / TIER_SCALE.powi(difference as i32);
        Self::normalized(big.mantissa() + scaled, big.tier())
    }

    /// `self + (-rhs)`
    pub fn subtract(self, rhs: Self) -> Self {
        self.add(rhs.negate())
    }

    /// Flip the sign of the mantissa. The tier is unchanged.
    pub fn negate(self) -> Self {
        Self::normalized(-self.mantissa(), self.tier())
    }

    /// Absolute value at the same tier.
    pub fn abs(self) -> Self {
        Self::normalized(self.mantissa().abs(), self.tier())
    }

    /// Add 1 to the mantissa in place, then renormalize.
    ///
    /// The step is one unit of the current tier, not one unit of value.
    pub fn increment(&mut self) {
        *self = Self::normalized(self.mantissa() + 1.0, self.tier());
    }

    /// Subtract 1 from the mantissa in place, then renormalize.
    pub fn decrement(&mut self) {
        *self = Self::normalized(self.mantissa() - 1.0, self.tier());
    }

    // ========================================================================
    // Multiplicative Operations
    // ========================================================================

    /// Multiply mantissas and add tiers. A tier sum above `MAX_TIER`
    /// saturates silently.
    pub fn multiply(self, rhs: Self) -> Self {
        Self::saturating(
            self.mantissa() * rhs.mantissa(),
            self.tier() as u32 + rhs.tier() as u32,
        )
    }

    /// Divide mantissas and subtract tiers.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Underflow` if `rhs` has a higher tier than `self`
    pub fn divide(self, rhs: Self) -> MagnitudeResult<Self> {
        if rhs.is_zero() {
            return Err(MagnitudeError::DivisionByZero);
        }

        let tier = self.tier() as i32 - rhs.tier() as i32;
        if tier < 0 {
            tracing::debug!(
                dividend_tier = self.tier(),
                divisor_tier = rhs.tier(),
                "division underflow"
            );
            return Err(MagnitudeError::Underflow);
        }

        Ok(Self::normalized(self.mantissa() / rhs.mantissa(), tier as u8))
    }

    /// Remainder of `self / rhs`.
    ///
    /// Returns `self` when `rhs` is greater. Otherwise only the integer part
    /// of the quotient's mantissa is kept, so the result is exact only when
    /// the quotient lands at tier 0.
    ///
    /// # Errors
    /// Same as [`divide`](Self::divide).
    pub fn modulo(self, rhs: Self) -> MagnitudeResult<Self> {
        if rhs.is_greater(self) {
            return Ok(self);
        }

        let quotient = self.divide(rhs)?;
        let floored = Self::normalized(quotient.mantissa().floor(), quotient.tier());
        let remultiplied = floored.multiply(rhs);

        Ok(self.subtract(remultiplied))
    }
}

// ============================================================================
// Operator Traits
// ============================================================================

// Division and modulo stay as named methods because they can fail
impl Add for ScaledMagnitude {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        ScaledMagnitude::add(self, rhs)
    }
}

impl Sub for ScaledMagnitude {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Mul for ScaledMagnitude {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Neg for ScaledMagnitude {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl AddAssign for ScaledMagnitude {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = ScaledMagnitude::add(*self, rhs);
    }
}

impl SubAssign for ScaledMagnitude {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.subtract(rhs);
    }
}

impl MulAssign for ScaledMagnitude {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(rhs);
    }
}

impl Sum for ScaledMagnitude {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::MIN, ScaledMagnitude::add)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magnitude::MAX_TIER;

    fn sm(mantissa: f64, tier: i32) -> ScaledMagnitude {
        ScaledMagnitude::new(mantissa, tier).unwrap()
    }

    fn assert_close(actual: ScaledMagnitude, mantissa: f64, tier: u8) {
        assert_eq!(actual.tier(), tier, "tier of {:?}", actual);
        let tolerance = mantissa.abs().max(1.0) * 1e-9;
        assert!(
            (actual.mantissa() - mantissa).abs() <= tolerance,
            "mantissa of {:?}, expected {}",
            actual,
            mantissa
        );
    }

    #[test]
    fn test_add_same_tier() {
        assert_eq!(sm(2.0, 3) + sm(3.5, 3), sm(5.5, 3));
        assert_eq!(sm(999.0, 1) + sm(1.0, 1), sm(1.0, 2));
    }

    #[test]
    fn test_add_neighbouring_tiers() {
        assert_eq!(sm(1.0, 1) + sm(500.0, 0), sm(1.5, 1));
        assert_eq!(sm(500.0, 0) + sm(1.0, 1), sm(1.5, 1));
    }

    #[test]
    fn test_add_beyond_threshold_keeps_larger() {
        let big = sm(1.0, 10);
        assert_eq!(sm(1.0, 0) + big, big);
        assert_eq!(big + sm(1.0, 0), big);

        // Exactly at the threshold the small operand still counts
        let at_threshold = sm(1.0, 5) + sm(1.0, 0);
        assert_close(at_threshold, 1.000_000_000_000_001, 5);
        assert!(at_threshold.mantissa() > 1.0);
    }

    #[test]
    fn test_add_min_is_identity() {
        for x in [sm(1.0, 0), sm(42.5, 3), sm(-7.0, 9), ScaledMagnitude::MAX] {
            assert_eq!(x + ScaledMagnitude::MIN, x);
            assert_eq!(ScaledMagnitude::MIN + x, x);
        }
    }

    #[test]
    fn test_subtract() {
        assert_eq!(sm(5.0, 2) - sm(2.0, 2), sm(3.0, 2));
        assert_eq!(sm(5.0, 2) - sm(5.0, 2), ScaledMagnitude::MIN);
        assert_close(sm(1.0, 2) - sm(1.0, 1), 999.0, 1);

        let negative = sm(2.0, 2) - sm(5.0, 2);
        assert_eq!(negative, sm(-3.0, 2));
        assert!(negative.is_negative());
    }

    #[test]
    fn test_negate_and_abs() {
        let x = sm(12.0, 4);
        assert_eq!(-x, sm(-12.0, 4));
        assert_eq!(-(-x), x);
        assert_eq!((-x).abs(), x);
        assert_eq!(x.abs(), x);
        assert_eq!(-ScaledMagnitude::MIN, ScaledMagnitude::MIN);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(sm(2.0, 1) * sm(3.0, 1), sm(6.0, 2));
        assert_eq!(sm(500.0, 1) * sm(4.0, 1), sm(2.0, 3));
        assert_eq!(sm(5.0, 7) * ScaledMagnitude::MIN, ScaledMagnitude::MIN);
        assert_eq!(sm(-2.0, 1) * sm(3.0, 0), sm(-6.0, 1));
    }

    #[test]
    fn test_multiply_saturates_at_max_tier() {
        let product = sm(5.0, 30) * sm(2.0, 30);
        assert_eq!(product.tier(), MAX_TIER);
        assert!((product.mantissa() / 1e25 - 1.0).abs() < 1e-9);
        assert!(product.is_canonical());
    }

    #[test]
    fn test_repeated_saturation_stays_finite() {
        let max = ScaledMagnitude::MAX;
        let x = max * max * max;
        assert_eq!(x.tier(), MAX_TIER);
        assert!(x.mantissa().is_finite());
        assert_eq!(ScaledMagnitude::from_stored(&x.to_stored()).unwrap(), x);
        assert_eq!(x - x, ScaledMagnitude::MIN);
        assert_eq!(x + x, x);

        let mut value = sm(2.0, 1);
        for _ in 0..20 {
            value *= sm(1.0, 20);
            assert!(value.mantissa().is_finite(), "{:?}", value);
        }
        assert_eq!(value.mantissa(), f64::MAX);
    }

    #[test]
    fn test_divide() {
        assert_eq!(sm(6.0, 2).divide(sm(3.0, 1)).unwrap(), sm(2.0, 1));
        assert_eq!(sm(1.0, 1).divide(sm(4.0, 0)).unwrap(), sm(250.0, 0));
        assert_eq!(sm(3.0, 0).divide(sm(4.0, 0)).unwrap(), sm(0.75, 0));
    }

    #[test]
    fn test_divide_underflow() {
        assert_eq!(
            sm(1.0, 0).divide(sm(1.0, 1)),
            Err(MagnitudeError::Underflow)
        );
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            sm(1.0, 4).divide(ScaledMagnitude::MIN),
            Err(MagnitudeError::DivisionByZero)
        );
    }

    #[test]
    fn test_modulo() {
        assert_eq!(sm(7.0, 0).modulo(sm(3.0, 0)).unwrap(), sm(1.0, 0));
        assert_eq!(sm(5.0, 1).modulo(sm(2.0, 1)).unwrap(), sm(1.0, 1));
        assert_eq!(sm(6.0, 1).modulo(sm(2.0, 1)).unwrap(), ScaledMagnitude::MIN);

        // Divisor greater than dividend
        assert_eq!(sm(3.0, 0).modulo(sm(5.0, 0)).unwrap(), sm(3.0, 0));
        assert_eq!(sm(3.0, 1).modulo(sm(5.0, 2)).unwrap(), sm(3.0, 1));
    }

    #[test]
    fn test_modulo_by_zero() {
        assert_eq!(
            sm(3.0, 1).modulo(ScaledMagnitude::MIN),
            Err(MagnitudeError::DivisionByZero)
        );
    }

    #[test]
    fn test_increment_renormalizes() {
        let mut x = ScaledMagnitude::MIN;
        x.increment();
        assert_eq!(x, sm(1.0, 0));

        let mut y = sm(999.5, 2);
        y.increment();
        assert_eq!(y.tier(), 3);
        assert!(y.is_canonical());

        for _ in 0..2000 {
            y.increment();
            assert!(y.is_canonical());
        }
    }

    #[test]
    fn test_decrement_renormalizes() {
        let mut x = sm(1.0, 1);
        x.decrement();
        assert_eq!(x, ScaledMagnitude::MIN);

        let mut y = sm(1.5, 2);
        y.decrement();
        assert_close(y, 500.0, 1);
        assert!(y.is_canonical());
    }

    #[test]
    fn test_assign_operators() {
        let mut x = sm(1.0, 1);
        x += sm(1.0, 1);
        assert_eq!(x, sm(2.0, 1));
        x -= sm(500.0, 0);
        assert_eq!(x, sm(1.5, 1));
        x *= sm(2.0, 2);
        assert_eq!(x, sm(3.0, 3));
    }

    #[test]
    fn test_sum() {
        let total: ScaledMagnitude = [sm(1.0, 1), sm(500.0, 0), sm(500.0, 0)]
            .into_iter()
            .sum();
        assert_eq!(total, sm(2.0, 1));

        let empty: ScaledMagnitude = std::iter::empty::<ScaledMagnitude>().sum();
        assert_eq!(empty, ScaledMagnitude::MIN);
    }
}
