// ============================================================================
// Converter Configuration
// Digit-count bounds applied by a configured converter
// ============================================================================

use super::grammar::{MAX_BINARY_DIGITS, MAX_HEX_DIGITS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`RadixConverter`](crate::engine::RadixConverter).
///
/// The bounds can only tighten the numeral grammars: binary bodies never
/// exceed 31 digits and hex bodies never exceed 8.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Longest binary body accepted or emitted (1-31)
    pub max_binary_digits: usize,

    /// Longest hex body accepted or emitted (1-8)
    pub max_hex_digits: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConverterConfig {
    /// Create a configuration with explicit bounds
    pub fn new(max_binary_digits: usize, max_hex_digits: usize) -> Self {
        Self {
            max_binary_digits,
            max_hex_digits,
        }
    }

    /// Builder method: Set the binary body bound
    pub fn with_max_binary_digits(mut self, digits: usize) -> Self {
        self.max_binary_digits = digits;
        self
    }

    /// Builder method: Set the hex body bound
    pub fn with_max_hex_digits(mut self, digits: usize) -> Self {
        self.max_hex_digits = digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_binary_digits == 0 || self.max_binary_digits > MAX_BINARY_DIGITS {
            return Err(format!(
                "Binary digit bound must be between 1 and {}",
                MAX_BINARY_DIGITS
            ));
        }

        if self.max_hex_digits == 0 || self.max_hex_digits > MAX_HEX_DIGITS {
            return Err(format!(
                "Hex digit bound must be between 1 and {}",
                MAX_HEX_DIGITS
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Full grammar: 31 binary digits, 8 hex digits
    pub fn standard() -> Self {
        Self::new(MAX_BINARY_DIGITS, MAX_HEX_DIGITS)
    }

    /// 16-bit word: 16 binary digits, 4 hex digits
    pub fn word() -> Self {
        Self::new(16, 4)
    }

    /// 8-bit byte: 8 binary digits, 2 hex digits
    pub fn byte() -> Self {
        Self::new(8, 2)
    }
}
