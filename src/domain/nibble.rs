// ============================================================================
// Nibble Table
// Total bidirectional mapping between 4-bit groups and hex digits
// ============================================================================

/// Hex digit for each nibble value, indexed by the value itself.
const HEX_DIGITS: [u8; 16] = *b"0123456789ABCDEF";

/// Four-character binary group for each nibble value.
const NIBBLE_BITS: [&str; 16] = [
    "0000", "0001", "0010", "0011", "0100", "0101", "0110", "0111", "1000", "1001", "1010",
    "1011", "1100", "1101", "1110", "1111",
];

/// A 4-bit group, the unit linking binary and hexadecimal numerals.
///
/// Every nibble maps to exactly one hex digit and one four-character
/// binary group, in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Nibble(u8);

impl Nibble {
    /// Number of binary digits in a nibble
    pub const BITS: usize = 4;

    /// Create from a value in `0..=15`.
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value < 16 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value of the nibble.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Parse a four-character group of `0`/`1` digits, most significant first.
    pub fn from_bits(group: &[u8]) -> Option<Self> {
        if group.len() != Self::BITS {
            return None;
        }
        group
            .iter()
            .try_fold(0u8, |acc, &bit| match bit {
                b'0' => Some(acc << 1),
                b'1' => Some((acc << 1) | 1),
                _ => None,
            })
            .map(Self)
    }

    /// Parse a single uppercase hex digit.
    pub fn from_hex_digit(digit: u8) -> Option<Self> {
        HEX_DIGITS
            .iter()
            .position(|&d| d == digit)
            .map(|value| Self(value as u8))
    }

    /// The uppercase hex digit for this nibble.
    #[inline]
    pub const fn hex_digit(self) -> char {
        HEX_DIGITS[self.0 as usize] as char
    }

    /// The four-character binary group for this nibble.
    #[inline]
    pub const fn bits(self) -> &'static str {
        NIBBLE_BITS[self.0 as usize]
    }
}
