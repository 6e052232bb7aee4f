// ============================================================================
// Conversion Errors
// Error kinds for radix conversions
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while converting between numeral systems.
///
/// `NullArgument` and `InvalidArgument` are the two conditions raised by
/// [`binary_to_decimal`](crate::engine::binary_to_decimal). The remaining
/// kinds are only surfaced by [`RadixConverter`](crate::engine::RadixConverter);
/// the free functions report them as an absent result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionError {
    /// No input string was supplied
    NullArgument,
    /// Missing prefix, or a body outside its grammar
    InvalidArgument,
    /// Decimal input below zero
    NegativeValue,
    /// Value does not fit the target representation
    Overflow,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::NullArgument => write!(f, "null argument: no input string"),
            ConversionError::InvalidArgument => {
                write!(f, "invalid argument: malformed numeral")
            },
            ConversionError::NegativeValue => {
                write!(f, "negative value: only non-negative values convert")
            },
            ConversionError::Overflow => write!(
                f,
                "overflow: value does not fit the target representation"
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type alias for conversions
pub type ConversionResult<T> = Result<T, ConversionError>;
