// ============================================================================
// Domain Module
// Numeral grammars, the nibble table and converter configuration
// ============================================================================

pub mod config;
pub mod grammar;
pub mod nibble;

pub use config::ConverterConfig;
pub use grammar::{
    is_valid_binary_body, is_valid_binary_body_within, is_valid_hex_body,
    is_valid_hex_body_within, MAX_BINARY_DIGITS, MAX_HEX_DIGITS,
};
pub use nibble::Nibble;
