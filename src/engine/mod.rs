// ============================================================================
// Engine Module
// Contains the radix conversion logic
// ============================================================================
//
// The free functions keep two error conventions side by side:
// - binary_to_decimal reports NullArgument / InvalidArgument as errors
// - every other conversion returns None on malformed or out-of-domain input
//
// RadixConverter offers the same conversions with one Result-based
// convention, configurable bounds and event reporting.

mod binary_decimal;
mod binary_hex;
mod converter;
mod decimal_hex;

pub mod factory;

pub use binary_decimal::{binary_to_decimal, decimal_to_binary};
pub use binary_hex::{binary_to_hex, hex_to_binary};
pub use converter::RadixConverter;
pub use decimal_hex::{decimal_to_hex, hex_to_decimal};
pub use factory::{create_from_config, RadixConverterBuilder};
