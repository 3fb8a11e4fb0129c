// ============================================================================
// Display Configuration
// How scaled magnitudes are rendered for presentation
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Notation
// ============================================================================

/// Text form used when rendering a magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    /// Mantissa followed by the tier's suffix symbol, e.g. `1.50a`.
    /// This is also the persisted form.
    #[default]
    Suffix,

    /// Mantissa followed by `e` and the decimal exponent, e.g. `1.50e3`
    Exponential,
}

// ============================================================================
// Display Configuration
// ============================================================================

/// Rendering options for [`ScaledMagnitude::format_with`](crate::ScaledMagnitude::format_with)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Suffix or exponential notation
    pub notation: Notation,

    /// Insert `,` between groups of three integer digits.
    /// Only a mantissa clamped at `MAX_TIER` is ever wide enough to show it.
    pub group_separators: bool,
}

impl DisplayConfig {
    /// Create a configuration for the given notation with group separators on
    pub fn new(notation: Notation) -> Self {
        Self {
            notation,
            group_separators: true,
        }
    }

    /// Builder method: Set notation
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Builder method: Enable or disable group separators
    pub fn with_group_separators(mut self, enabled: bool) -> Self {
        self.group_separators = enabled;
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::suffix()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl DisplayConfig {
    /// Suffix notation with group separators (the default and persisted form)
    pub fn suffix() -> Self {
        Self::new(Notation::Suffix)
    }

    /// Exponential notation with group separators
    pub fn exponential() -> Self {
        Self::new(Notation::Exponential)
    }

    /// Suffix notation without group separators
    pub fn plain_suffix() -> Self {
        Self::suffix().with_group_separators(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_suffix() {
        let config = DisplayConfig::default();
        assert_eq!(config.notation, Notation::Suffix);
        assert!(config.group_separators);
        assert_eq!(config, DisplayConfig::suffix());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DisplayConfig::suffix()
            .with_notation(Notation::Exponential)
            .with_group_separators(false);

        assert_eq!(config.notation, Notation::Exponential);
        assert!(!config.group_separators);
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(DisplayConfig::exponential().notation, Notation::Exponential);
        assert!(!DisplayConfig::plain_suffix().group_separators);
        assert_eq!(DisplayConfig::plain_suffix().notation, Notation::Suffix);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() {
        let config: DisplayConfig = serde_json::from_str(r#"{"notation":"Exponential"}"#).unwrap();
        assert_eq!(config, DisplayConfig::exponential());
    }
}
