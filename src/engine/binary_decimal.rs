// ============================================================================
// Binary <-> Decimal
// Positional summation and repeated division by two
// ============================================================================

use crate::domain::grammar::{is_valid_binary_body_within, MAX_BINARY_DIGITS};
use crate::numeric::{ConversionError, ConversionResult, Radix};
use arrayvec::ArrayVec;

/// Convert a `0b` numeral to its non-negative decimal value.
///
/// This is the one conversion that reports failures as errors rather than
/// an absent result.
///
/// # Errors
/// - `NullArgument` if no string is supplied
/// - `InvalidArgument` if the `0b` prefix is missing or the body is not
///   1 to 31 binary digits
///
/// # Example
/// ```
/// use radix_converter::engine::binary_to_decimal;
/// use radix_converter::numeric::ConversionError;
///
/// assert_eq!(binary_to_decimal("0b101"), Ok(5));
/// assert_eq!(binary_to_decimal("0b"), Err(ConversionError::InvalidArgument));
/// assert_eq!(binary_to_decimal(None::<&str>), Err(ConversionError::NullArgument));
/// ```
pub fn binary_to_decimal<'a>(binary: impl Into<Option<&'a str>>) -> ConversionResult<i32> {
    parse_binary(binary.into(), MAX_BINARY_DIGITS)
}

/// Convert a decimal value to a minimal `0b` numeral.
///
/// Returns `None` for negative input. Zero is `"0b0"`; every other value
/// has no leading zero.
///
/// # Example
/// ```
/// use radix_converter::engine::decimal_to_binary;
///
/// assert_eq!(decimal_to_binary(5).as_deref(), Some("0b101"));
/// assert_eq!(decimal_to_binary(0).as_deref(), Some("0b0"));
/// assert_eq!(decimal_to_binary(-1), None);
/// ```
pub fn decimal_to_binary(decimal: i32) -> Option<String> {
    format_binary(decimal, MAX_BINARY_DIGITS).ok()
}

// ============================================================================
// Checked Cores (shared with RadixConverter)
// ============================================================================

/// Strip the `0b` prefix and validate the body against `max_digits`.
pub(crate) fn binary_body(binary: Option<&str>, max_digits: usize) -> ConversionResult<&str> {
    let binary = binary.ok_or(ConversionError::NullArgument)?;
    let body = binary
        .strip_prefix(Radix::BINARY_PREFIX)
        .ok_or(ConversionError::InvalidArgument)?;

    if !is_valid_binary_body_within(body, max_digits) {
        return Err(ConversionError::InvalidArgument);
    }

    Ok(body)
}

pub(crate) fn parse_binary(binary: Option<&str>, max_digits: usize) -> ConversionResult<i32> {
    let body = binary_body(binary, max_digits)?;
    Ok(binary_body_value(body))
}

/// Sum of `2^(len - 1 - i)` over every `1` at index `i`.
///
/// The body must already be validated; at most 31 digits keeps the sum
/// within `i32`.
fn binary_body_value(body: &str) -> i32 {
    let len = body.len();
    body.bytes()
        .enumerate()
        .filter(|&(_, bit)| bit == b'1')
        .fold(0i32, |acc, (i, _)| acc | (1i32 << (len - 1 - i)))
}

/// Format a non-negative value as a minimal `0b` numeral.
///
/// # Errors
/// - `NegativeValue` if `decimal < 0`
/// - `Overflow` if the body would exceed `max_digits`
pub(crate) fn format_binary(decimal: i32, max_digits: usize) -> ConversionResult<String> {
    if decimal < 0 {
        return Err(ConversionError::NegativeValue);
    }

    if decimal == 0 {
        return Ok(format!("{}0", Radix::BINARY_PREFIX));
    }

    // Remainders, least significant first
    let mut bits: ArrayVec<u8, MAX_BINARY_DIGITS> = ArrayVec::new();
    let mut quotient = decimal;
    while quotient > 1 {
        let bit = if quotient % 2 == 0 { b'0' } else { b'1' };
        bits.try_push(bit).map_err(|_| ConversionError::Overflow)?;
        quotient /= 2;
    }
    // The final quotient is 1 and becomes the leading digit
    bits.try_push(b'1').map_err(|_| ConversionError::Overflow)?;

    if bits.len() > max_digits {
        return Err(ConversionError::Overflow);
    }

    let mut binary = String::with_capacity(Radix::BINARY_PREFIX.len() + bits.len());
    binary.push_str(Radix::BINARY_PREFIX);
    binary.extend(bits.iter().rev().map(|&bit| bit as char));
    Ok(binary)
}
