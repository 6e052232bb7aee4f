// ============================================================================
// Numeric Module
// Error types and radix descriptors shared by every conversion
// ============================================================================
//
// This module provides:
// - ConversionError: Error kinds reported by conversions
// - ConversionResult: Result alias used across the crate
// - Radix: The three supported numeral systems and their prefixes

mod errors;
mod radix;

pub use errors::{ConversionError, ConversionResult};
pub use radix::Radix;
