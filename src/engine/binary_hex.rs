// ============================================================================
// Binary <-> Hex
// Nibble-aligned regrouping through the shared nibble table
// ============================================================================
//
// The two directions normalize differently:
// - binary -> hex pads the body to a nibble boundary and never trims, so the
//   digit count follows the padded bit length ("0b00000101" -> "0x05")
// - hex -> binary trims leading zeros from the whole expansion
//   ("0x0A" -> "0b1010", "0x00" -> "0b0")
//
// hex_to_binary(binary_to_hex(b)) is therefore numerically equal to `b`
// but minimal, not necessarily identical.

use super::binary_decimal::binary_body;
use crate::domain::grammar::{is_valid_hex_body_within, MAX_BINARY_DIGITS, MAX_HEX_DIGITS};
use crate::domain::Nibble;
use crate::numeric::{ConversionError, ConversionResult, Radix};
use smallvec::SmallVec;

/// Bits produced by the longest hex body.
const MAX_EXPANDED_BITS: usize = MAX_HEX_DIGITS * Nibble::BITS;

/// Convert a `0b` numeral to a `0x` numeral.
///
/// The body is left-padded with zeros to a multiple of four digits, then
/// each group of four maps to one hex digit. Returns `None` on any
/// malformed input.
///
/// # Example
/// ```
/// use radix_converter::engine::binary_to_hex;
///
/// assert_eq!(binary_to_hex("0b1010").as_deref(), Some("0xA"));
/// assert_eq!(binary_to_hex("0b101").as_deref(), Some("0x5"));
/// assert_eq!(binary_to_hex("0bXYZ"), None);
/// ```
pub fn binary_to_hex<'a>(binary: impl Into<Option<&'a str>>) -> Option<String> {
    binary_hex(binary.into(), MAX_BINARY_DIGITS).ok()
}

/// Convert a `0x` numeral to a minimal `0b` numeral.
///
/// Each hex digit expands to four bits; leading zeros of the whole
/// expansion are then trimmed. Returns `None` on any malformed input.
///
/// # Example
/// ```
/// use radix_converter::engine::hex_to_binary;
///
/// assert_eq!(hex_to_binary("0xA").as_deref(), Some("0b1010"));
/// assert_eq!(hex_to_binary("0x0").as_deref(), Some("0b0"));
/// assert_eq!(hex_to_binary("0xa"), None);
/// ```
pub fn hex_to_binary<'a>(hex: impl Into<Option<&'a str>>) -> Option<String> {
    hex_binary(hex.into(), MAX_HEX_DIGITS).ok()
}

// ============================================================================
// Checked Cores (shared with RadixConverter)
// ============================================================================

pub(crate) fn binary_hex(binary: Option<&str>, max_digits: usize) -> ConversionResult<String> {
    let body = binary_body(binary, max_digits)?;
    hex_from_binary_body(body)
}

pub(crate) fn hex_binary(hex: Option<&str>, max_digits: usize) -> ConversionResult<String> {
    let body = hex_body(hex, max_digits)?;
    binary_from_hex_body(body)
}

/// Strip the `0x` prefix and validate the body against `max_digits`.
pub(crate) fn hex_body(hex: Option<&str>, max_digits: usize) -> ConversionResult<&str> {
    let hex = hex.ok_or(ConversionError::NullArgument)?;
    let body = hex
        .strip_prefix(Radix::HEX_PREFIX)
        .ok_or(ConversionError::InvalidArgument)?;

    if !is_valid_hex_body_within(body, max_digits) {
        return Err(ConversionError::InvalidArgument);
    }

    Ok(body)
}

/// Regroup a validated binary body into hex digits.
///
/// Callers pass bodies already checked by the grammar, so the
/// `InvalidArgument` branch is unreachable in practice.
pub(crate) fn hex_from_binary_body(body: &str) -> ConversionResult<String> {
    let pad = (Nibble::BITS - body.len() % Nibble::BITS) % Nibble::BITS;

    let mut padded: SmallVec<[u8; MAX_EXPANDED_BITS]> = SmallVec::new();
    padded.extend(std::iter::repeat(b'0').take(pad));
    padded.extend_from_slice(body.as_bytes());

    let mut hex = String::with_capacity(Radix::HEX_PREFIX.len() + padded.len() / Nibble::BITS);
    hex.push_str(Radix::HEX_PREFIX);
    for group in padded.chunks_exact(Nibble::BITS) {
        let nibble = Nibble::from_bits(group).ok_or(ConversionError::InvalidArgument)?;
        hex.push(nibble.hex_digit());
    }

    Ok(hex)
}

/// Expand a validated hex body and trim it to a minimal binary numeral.
///
/// As above, the body is pre-validated; `InvalidArgument` cannot occur.
pub(crate) fn binary_from_hex_body(body: &str) -> ConversionResult<String> {
    let mut bits: SmallVec<[u8; MAX_EXPANDED_BITS]> = SmallVec::new();
    for digit in body.bytes() {
        let nibble = Nibble::from_hex_digit(digit).ok_or(ConversionError::InvalidArgument)?;
        bits.extend_from_slice(nibble.bits().as_bytes());
    }

    // Keep at least one digit so zero stays "0"
    let first_significant = bits
        .iter()
        .position(|&bit| bit == b'1')
        .unwrap_or_else(|| bits.len().saturating_sub(1));
    let trimmed = &bits[first_significant..];

    let mut binary = String::with_capacity(Radix::BINARY_PREFIX.len() + trimmed.len());
    binary.push_str(Radix::BINARY_PREFIX);
    binary.extend(trimmed.iter().map(|&bit| bit as char));
    Ok(binary)
}
