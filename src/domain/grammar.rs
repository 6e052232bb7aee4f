// ============================================================================
// Numeral Grammar
// Validation of bare binary and hexadecimal digit bodies
// ============================================================================
//
// A body is the digit sequence of a numeral with its two-character prefix
// already stripped. Validation is pure and never fails loudly; callers decide
// which error convention to report.

/// Most binary digits a body may carry (31 significant bits).
pub const MAX_BINARY_DIGITS: usize = 31;

/// Most hexadecimal digits a body may carry (32 bits).
pub const MAX_HEX_DIGITS: usize = 8;

/// Check a bare binary body against the full grammar.
///
/// True iff the body holds 1 to 31 characters, all `0` or `1`.
///
/// # Example
/// ```
/// use radix_converter::domain::is_valid_binary_body;
///
/// assert!(is_valid_binary_body("101"));
/// assert!(!is_valid_binary_body(""));
/// assert!(!is_valid_binary_body("102"));
/// ```
#[inline]
pub fn is_valid_binary_body(body: &str) -> bool {
    is_valid_binary_body_within(body, MAX_BINARY_DIGITS)
}

/// Check a bare hexadecimal body against the full grammar.
///
/// True iff the body holds 1 to 8 characters from `0-9` and `A-F`.
/// Lowercase digits are rejected.
///
/// # Example
/// ```
/// use radix_converter::domain::is_valid_hex_body;
///
/// assert!(is_valid_hex_body("1F"));
/// assert!(!is_valid_hex_body("1f"));
/// assert!(!is_valid_hex_body("123456789"));
/// ```
#[inline]
pub fn is_valid_hex_body(body: &str) -> bool {
    is_valid_hex_body_within(body, MAX_HEX_DIGITS)
}

/// Binary grammar with a tighter length bound.
///
/// `max_digits` above [`MAX_BINARY_DIGITS`] is clamped.
pub fn is_valid_binary_body_within(body: &str, max_digits: usize) -> bool {
    let max_digits = max_digits.min(MAX_BINARY_DIGITS);
    if body.is_empty() || body.len() > max_digits {
        return false;
    }
    body.bytes().all(|b| b == b'0' || b == b'1')
}

/// Hexadecimal grammar with a tighter length bound.
///
/// `max_digits` above [`MAX_HEX_DIGITS`] is clamped.
pub fn is_valid_hex_body_within(body: &str, max_digits: usize) -> bool {
    let max_digits = max_digits.min(MAX_HEX_DIGITS);
    if body.is_empty() || body.len() > max_digits {
        return false;
    }
    body.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
}
