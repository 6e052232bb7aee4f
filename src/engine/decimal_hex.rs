// ============================================================================
// Decimal <-> Hex
// Composed from the binary conversions
// ============================================================================

use super::binary_decimal::format_binary;
use super::binary_hex::{hex_body, hex_from_binary_body};
use crate::domain::grammar::{MAX_BINARY_DIGITS, MAX_HEX_DIGITS};
use crate::domain::Nibble;
use crate::numeric::{ConversionError, ConversionResult, Radix};

/// Convert a decimal value to a `0x` numeral.
///
/// Same result as `binary_to_hex(decimal_to_binary(decimal))`: no leading
/// zero digit except for zero itself. Returns `None` for negative input.
///
/// # Example
/// ```
/// use radix_converter::engine::decimal_to_hex;
///
/// assert_eq!(decimal_to_hex(255).as_deref(), Some("0xFF"));
/// assert_eq!(decimal_to_hex(16).as_deref(), Some("0x10"));
/// assert_eq!(decimal_to_hex(-5), None);
/// ```
pub fn decimal_to_hex(decimal: i32) -> Option<String> {
    format_hex(decimal, MAX_HEX_DIGITS).ok()
}

/// Convert a `0x` numeral to its decimal value.
///
/// Returns `None` on malformed input, and for values above `i32::MAX`
/// (eight-digit numerals from `0x80000000` upward).
///
/// # Example
/// ```
/// use radix_converter::engine::hex_to_decimal;
///
/// assert_eq!(hex_to_decimal("0xFF"), Some(255));
/// assert_eq!(hex_to_decimal("0x7FFFFFFF"), Some(i32::MAX));
/// assert_eq!(hex_to_decimal("0x80000000"), None);
/// ```
pub fn hex_to_decimal<'a>(hex: impl Into<Option<&'a str>>) -> Option<i32> {
    parse_hex(hex.into(), MAX_HEX_DIGITS).ok()
}

// ============================================================================
// Checked Cores (shared with RadixConverter)
// ============================================================================

/// # Errors
/// - `NegativeValue` if `decimal < 0`
/// - `Overflow` if the hex body would exceed `max_digits`
pub(crate) fn format_hex(decimal: i32, max_digits: usize) -> ConversionResult<String> {
    let binary = format_binary(decimal, MAX_BINARY_DIGITS)?;
    let body = &binary[Radix::BINARY_PREFIX.len()..];
    let hex = hex_from_binary_body(body)?;

    if hex.len() - Radix::HEX_PREFIX.len() > max_digits {
        return Err(ConversionError::Overflow);
    }

    Ok(hex)
}

pub(crate) fn parse_hex(hex: Option<&str>, max_digits: usize) -> ConversionResult<i32> {
    let body = hex_body(hex, max_digits)?;

    let mut value: u32 = 0;
    for digit in body.bytes() {
        let nibble = Nibble::from_hex_digit(digit).ok_or(ConversionError::InvalidArgument)?;
        value = (value << Nibble::BITS) | u32::from(nibble.value());
    }

    i32::try_from(value).map_err(|_| ConversionError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{binary_to_hex, decimal_to_binary};

    #[test]
    fn test_decimal_to_hex_values() {
        assert_eq!(decimal_to_hex(0).as_deref(), Some("0x0"));
        assert_eq!(decimal_to_hex(10).as_deref(), Some("0xA"));
        assert_eq!(decimal_to_hex(4096).as_deref(), Some("0x1000"));
        assert_eq!(decimal_to_hex(i32::MAX).as_deref(), Some("0x7FFFFFFF"));
        assert_eq!(decimal_to_hex(i32::MIN), None);
    }

    #[test]
    fn test_decimal_to_hex_matches_composition() {
        for value in [0, 1, 5, 15, 16, 17, 255, 256, 65_535, 1 << 30] {
            let composed = binary_to_hex(decimal_to_binary(value).as_deref());
            assert_eq!(decimal_to_hex(value), composed, "value {}", value);
        }
    }

    #[test]
    fn test_hex_to_decimal_values() {
        assert_eq!(hex_to_decimal("0x0"), Some(0));
        assert_eq!(hex_to_decimal("0xA"), Some(10));
        assert_eq!(hex_to_decimal("0x00FF"), Some(255));
        assert_eq!(hex_to_decimal("0x1000"), Some(4096));
    }

    #[test]
    fn test_hex_to_decimal_out_of_range() {
        assert_eq!(hex_to_decimal("0x80000000"), None);
        assert_eq!(hex_to_decimal("0xFFFFFFFF"), None);
        assert_eq!(
            parse_hex(Some("0xFFFFFFFF"), MAX_HEX_DIGITS),
            Err(ConversionError::Overflow)
        );
    }

    #[test]
    fn test_hex_to_decimal_malformed() {
        assert_eq!(hex_to_decimal(None::<&str>), None);
        assert_eq!(hex_to_decimal("0x"), None);
        assert_eq!(hex_to_decimal("0xg"), None);
        assert_eq!(hex_to_decimal("FF"), None);
    }

    #[test]
    fn test_format_hex_bounded() {
        assert_eq!(format_hex(255, 2).as_deref(), Ok("0xFF"));
        assert_eq!(format_hex(256, 2), Err(ConversionError::Overflow));
        assert_eq!(format_hex(-1, 2), Err(ConversionError::NegativeValue));
    }
}
