// ============================================================================
// Radix
// The numeral systems handled by the converter
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A supported numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Radix {
    /// Base 2, written `0b` followed by `0`/`1` digits
    Binary,
    /// Base 10, written as plain ASCII digits
    Decimal,
    /// Base 16, written `0x` followed by `0-9` and uppercase `A-F`
    Hex,
}

impl Radix {
    /// Binary numeral prefix
    pub const BINARY_PREFIX: &'static str = "0b";

    /// Hexadecimal numeral prefix
    pub const HEX_PREFIX: &'static str = "0x";

    /// Textual prefix; decimal numerals carry none.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => Self::BINARY_PREFIX,
            Radix::Decimal => "",
            Radix::Hex => Self::HEX_PREFIX,
        }
    }

    /// Detect the radix of a numeral from its prefix.
    ///
    /// Anything without a `0b` or `0x` prefix is taken as decimal; whether
    /// it is a well-formed decimal is decided by the parser.
    pub fn detect(numeral: &str) -> Self {
        if numeral.starts_with(Self::BINARY_PREFIX) {
            Radix::Binary
        } else if numeral.starts_with(Self::HEX_PREFIX) {
            Radix::Hex
        } else {
            Radix::Decimal
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Binary => write!(f, "binary"),
            Radix::Decimal => write!(f, "decimal"),
            Radix::Hex => write!(f, "hex"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(Radix::detect("0b101"), Radix::Binary);
        assert_eq!(Radix::detect("0xFF"), Radix::Hex);
        assert_eq!(Radix::detect("42"), Radix::Decimal);
        assert_eq!(Radix::detect("0"), Radix::Decimal);
        // Uppercase prefixes are not prefixes
        assert_eq!(Radix::detect("0B1"), Radix::Decimal);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(Radix::Binary.prefix(), "0b");
        assert_eq!(Radix::Hex.prefix(), "0x");
        assert_eq!(Radix::Decimal.prefix(), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(Radix::Binary.to_string(), "binary");
        assert_eq!(Radix::Hex.to_string(), "hex");
    }
}
