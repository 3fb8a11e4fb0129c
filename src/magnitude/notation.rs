// ============================================================================
// Notation
// Suffix and exponential text forms for scaled magnitudes
// ============================================================================
//
// Grammar: `<number><suffix>?`
// - <number>: decimal literal with optional sign and fraction
// - <suffix>: one symbol from SUFFIXES, tier 1..=52 (absent means tier 0)
//
// Formatting keeps two decimals below 10 and one decimal otherwise, so
// parse(format(x)) only reproduces x up to that precision.

use super::errors::{MagnitudeError, MagnitudeResult};
use super::scaled::{ScaledMagnitude, MAX_TIER};
use crate::config::{DisplayConfig, Notation};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Suffix alphabet. `SUFFIXES[i]` denotes tier `i + 1`.
pub const SUFFIXES: [char; MAX_TIER as usize] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Suffix symbol for a tier; tier 0 has none.
fn suffix_for(tier: u8) -> Option<char> {
    tier.checked_sub(1)
        .and_then(|index| SUFFIXES.get(index as usize))
        .copied()
}

fn tier_for(symbol: char) -> Option<u8> {
    SUFFIXES
        .iter()
        .position(|&c| c == symbol)
        .map(|index| index as u8 + 1)
}

/// Parse a finite plain number. Accepts exponent notation (`68.0e3`).
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_error(input: &str) -> MagnitudeError {
    tracing::debug!(input, "failed to parse magnitude");
    MagnitudeError::Parse {
        input: input.to_string(),
    }
}

// ============================================================================
// Mantissa Formatting
// ============================================================================

/// Render a mantissa with 2 decimals below 10 and 1 decimal otherwise,
/// rounding half away from zero.
fn format_mantissa(mantissa: f64, group_separators: bool) -> String {
    let places: u32 = if mantissa < 10.0 { 2 } else { 1 };

    let text = match Decimal::from_f64(mantissa) {
        Some(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(places);
            rounded.to_string()
        },
        // Out of Decimal range: only a saturated mantissa at MAX_TIER
        None => format!("{:.*}", places as usize, mantissa),
    };

    if group_separators {
        group_thousands(&text)
    } else {
        text
    }
}

/// Insert `,` between every three digits of the integer part.
fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(pos) => unsigned.split_at(pos),
        None => (unsigned, ""),
    };

    if integer.len() <= 3 || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return text.to_string();
    }

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);
    grouped
}

impl ScaledMagnitude {
    // ========================================================================
    // Formatting
    // ========================================================================

    /// Format in suffix notation (`1.50a`) or, when `exponential` is set, in
    /// exponential notation (`1.50e3`).
    pub fn format(&self, exponential: bool) -> String {
        let config = if exponential {
            DisplayConfig::exponential()
        } else {
            DisplayConfig::suffix()
        };
        self.format_with(&config)
    }

    /// Format according to a display configuration.
    pub fn format_with(&self, config: &DisplayConfig) -> String {
        let mut number = format_mantissa(self.mantissa(), config.group_separators);

        match config.notation {
            Notation::Suffix => {
                if let Some(symbol) = suffix_for(self.tier()) {
                    number.push(symbol);
                }
                number
            },
            Notation::Exponential => {
                number.push('e');
                number.push_str(&(self.tier() as u32 * 3).to_string());
                number
            },
        }
    }

    // ========================================================================
    // Parsing
    // ========================================================================

    /// Parse suffix or exponential notation.
    ///
    /// Surrounding whitespace, internal spaces and `,` group separators are
    /// ignored. The whole text is first read as a plain number at tier 0;
    /// failing that, the last character is taken as the tier suffix.
    ///
    /// # Errors
    /// Returns `Parse` for empty input, an unknown suffix, a non-numeric
    /// prefix, or a non-finite number.
    ///
    /// # Examples
    /// - "1500" -> 1.5 at tier 1
    /// - "68a" -> 68 at tier 1
    /// - "2.5e6" -> 2.5 at tier 2
    pub fn parse(text: &str) -> MagnitudeResult<Self> {
        let cleaned: String = text
            .trim()
            .chars()
            .filter(|&c| c != ' ' && c != ',')
            .collect();

        if let Some(value) = parse_number(&cleaned) {
            return Ok(Self::normalized(value, 0));
        }

        let mut chars = cleaned.chars();
        let symbol = chars.next_back().ok_or_else(|| parse_error(text))?;
        let tier = tier_for(symbol).ok_or_else(|| parse_error(text))?;
        let mantissa = parse_number(chars.as_str()).ok_or_else(|| parse_error(text))?;

        Ok(Self::normalized(mantissa, tier))
    }

    /// Non-failing [`parse`](Self::parse): `None` when the text is malformed.
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Display for ScaledMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

/// `{:e}` renders exponential notation.
impl fmt::LowerExp for ScaledMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(true))
    }
}

impl FromStr for ScaledMagnitude {
    type Err = MagnitudeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
