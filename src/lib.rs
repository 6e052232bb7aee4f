// ============================================================================
// Radix Converter Library
// Strict conversion between decimal, binary and hexadecimal numerals
// ============================================================================

//! # Radix Converter
//!
//! Pure, stateless conversion of non-negative whole numbers between three
//! representations:
//!
//! - **Decimal**: a native `i32`
//! - **Binary**: `0b` followed by 1 to 31 digits from `0`/`1`
//! - **Hexadecimal**: `0x` followed by 1 to 8 digits from `0-9` and `A-F`
//!
//! ## Error conventions
//!
//! The free functions in [`engine`] keep two conventions side by side.
//! [`binary_to_decimal`](engine::binary_to_decimal) returns a
//! [`ConversionError`](numeric::ConversionError) that tells an absent input
//! apart from a malformed one; every other conversion returns `None`.
//! [`RadixConverter`](engine::RadixConverter) reports every failure as a
//! `ConversionError` and emits an event per call.
//!
//! ## Example
//!
//! ```rust
//! use radix_converter::prelude::*;
//!
//! assert_eq!(binary_to_decimal("0b101"), Ok(5));
//! assert_eq!(decimal_to_binary(5).as_deref(), Some("0b101"));
//! assert_eq!(binary_to_hex("0b101").as_deref(), Some("0x5"));
//! assert_eq!(hex_to_binary("0x0A").as_deref(), Some("0b1010"));
//!
//! let converter = RadixConverter::standard();
//! assert_eq!(converter.convert("0xFF", Radix::Decimal).unwrap(), "255");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{is_valid_binary_body, is_valid_hex_body, ConverterConfig, Nibble};
    pub use crate::engine::{
        binary_to_decimal, binary_to_hex, create_from_config, decimal_to_binary, decimal_to_hex,
        hex_to_binary, hex_to_decimal, RadixConverter, RadixConverterBuilder,
    };
    pub use crate::interfaces::{
        ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{ConversionError, ConversionResult, Radix};
}
