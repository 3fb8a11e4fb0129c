// ============================================================================
// Stored Form
// Conversion and comparison for persisting magnitudes as text
// ============================================================================
//
// A persistence layer keeps the suffix-notation string and rebuilds the
// value with `parse` on load. Because formatting rounds the mantissa, stored
// equality is coarser than structural equality.

use super::errors::MagnitudeResult;
use super::scaled::ScaledMagnitude;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

impl ScaledMagnitude {
    /// The persisted text form (suffix notation).
    #[inline]
    pub fn to_stored(&self) -> String {
        self.format(false)
    }

    /// Rebuild a value from its persisted text form.
    #[inline]
    pub fn from_stored(text: &str) -> MagnitudeResult<Self> {
        Self::parse(text)
    }

    /// True when both values are present and persist to the same text.
    pub fn stored_eq(a: Option<&Self>, b: Option<&Self>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a.to_stored() == b.to_stored(),
            _ => false,
        }
    }

    /// Hash of the persisted text form, `0` when absent.
    /// Values that are [`stored_eq`](Self::stored_eq) hash alike.
    pub fn stored_hash(value: Option<&Self>) -> u64 {
        match value {
            Some(value) => {
                let mut hasher = DefaultHasher::new();
                value.to_stored().hash(&mut hasher);
                hasher.finish()
            },
            None => 0,
        }
    }
}

// ============================================================================
// Serde (stored form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for ScaledMagnitude {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_stored())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ScaledMagnitude {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_stored(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magnitude::MagnitudeError;

    fn sm(mantissa: f64, tier: i32) -> ScaledMagnitude {
        ScaledMagnitude::new(mantissa, tier).unwrap()
    }

    #[test]
    fn test_stored_round_trip() {
        let balance = sm(68.0, 1);
        assert_eq!(balance.to_stored(), "68.0a");
        assert_eq!(ScaledMagnitude::from_stored("68.0a").unwrap(), balance);
        assert_eq!(
            ScaledMagnitude::from_stored("68.0?"),
            Err(MagnitudeError::Parse {
                input: "68.0?".to_string()
            })
        );
    }

    #[test]
    fn test_stored_round_trip_is_lossy() {
        let precise = sm(1.234_567, 3);
        let restored = ScaledMagnitude::from_stored(&precise.to_stored()).unwrap();
        assert_ne!(restored, precise);
        assert_eq!(restored, sm(1.23, 3));
    }

    #[test]
    fn test_stored_eq_uses_formatting_precision() {
        let a = sm(1.231, 2);
        let b = sm(1.229, 2);
        assert_ne!(a, b);
        assert!(ScaledMagnitude::stored_eq(Some(&a), Some(&b)));
        assert!(!ScaledMagnitude::stored_eq(Some(&a), Some(&sm(1.24, 2))));
        assert!(!ScaledMagnitude::stored_eq(Some(&a), None));
        assert!(!ScaledMagnitude::stored_eq(None, None));
    }

    #[test]
    fn test_stored_hash() {
        let a = sm(1.231, 2);
        let b = sm(1.229, 2);
        assert_eq!(
            ScaledMagnitude::stored_hash(Some(&a)),
            ScaledMagnitude::stored_hash(Some(&b))
        );
        assert_eq!(ScaledMagnitude::stored_hash(None), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_stored_form() {
        let value = sm(1500.0, 0);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"1.50a\"");

        let back: ScaledMagnitude = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        let bad: Result<ScaledMagnitude, _> = serde_json::from_str("\"12?\"");
        assert!(bad.is_err());
    }
}
