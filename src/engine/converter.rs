// ============================================================================
// Radix Converter
// Configured converter with a single error convention and event reporting
// ============================================================================

use super::binary_decimal::{binary_body, format_binary, parse_binary};
use super::binary_hex::{binary_hex, hex_binary, hex_body};
use super::decimal_hex::{format_hex, parse_hex};
use super::factory::create_from_config;
use crate::domain::ConverterConfig;
use crate::interfaces::{ConversionEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{ConversionError, ConversionResult, Radix};
use chrono::Utc;
use std::sync::Arc;

/// Converter applying a [`ConverterConfig`] and reporting every call.
///
/// Unlike the free functions in [`engine`](crate::engine), every method
/// returns a [`ConversionResult`], so malformed input, negative values and
/// overflow are all reported the same way. Each call emits exactly one
/// [`ConversionEvent`] to the event handler.
///
/// The converter holds no mutable state and can be shared across threads.
///
/// # Example
/// ```
/// use radix_converter::prelude::*;
///
/// let converter = RadixConverter::standard();
/// assert_eq!(converter.binary_to_hex("0b101").unwrap(), "0x5");
/// assert_eq!(converter.convert("255", Radix::Hex).unwrap(), "0xFF");
/// assert_eq!(
///     converter.decimal_to_binary(-1),
///     Err(ConversionError::NegativeValue)
/// );
/// ```
pub struct RadixConverter {
    /// Digit bounds; validated before construction
    config: ConverterConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl RadixConverter {
    /// Create a converter from an already validated configuration
    pub(crate) fn new(config: ConverterConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Create a converter, rejecting an invalid configuration
    ///
    /// # Errors
    /// Returns the validation message from [`ConverterConfig::validate`].
    pub fn from_config(
        config: ConverterConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, String> {
        create_from_config(config, event_handler)
    }

    /// Full-grammar converter that discards its events
    pub fn standard() -> Self {
        Self::new(ConverterConfig::standard(), Arc::new(NoOpEventHandler))
    }

    /// Get the active configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    pub fn binary_to_decimal<'a>(
        &self,
        binary: impl Into<Option<&'a str>>,
    ) -> ConversionResult<i32> {
        let binary = binary.into();
        let result = parse_binary(binary, self.config.max_binary_digits);
        self.observe(Radix::Binary, Radix::Decimal, binary, result)
    }

    pub fn decimal_to_binary(&self, decimal: i32) -> ConversionResult<String> {
        let input = decimal.to_string();
        let result = format_binary(decimal, self.config.max_binary_digits);
        self.observe(Radix::Decimal, Radix::Binary, Some(&input), result)
    }

    /// # Errors
    /// `Overflow` if the padded hex body exceeds `max_hex_digits`, which
    /// only happens when the configured bounds are narrower for hex than
    /// for binary.
    pub fn binary_to_hex<'a>(
        &self,
        binary: impl Into<Option<&'a str>>,
    ) -> ConversionResult<String> {
        let binary = binary.into();
        let result = self.bounded_binary_hex(binary);
        self.observe(Radix::Binary, Radix::Hex, binary, result)
    }

    /// The output is not bounded by `max_binary_digits`: eight hex digits
    /// legitimately expand to 32 bits.
    pub fn hex_to_binary<'a>(&self, hex: impl Into<Option<&'a str>>) -> ConversionResult<String> {
        let hex = hex.into();
        let result = hex_binary(hex, self.config.max_hex_digits);
        self.observe(Radix::Hex, Radix::Binary, hex, result)
    }

    pub fn decimal_to_hex(&self, decimal: i32) -> ConversionResult<String> {
        let input = decimal.to_string();
        let result = format_hex(decimal, self.config.max_hex_digits);
        self.observe(Radix::Decimal, Radix::Hex, Some(&input), result)
    }

    /// # Errors
    /// `Overflow` for values above `i32::MAX`.
    pub fn hex_to_decimal<'a>(&self, hex: impl Into<Option<&'a str>>) -> ConversionResult<i32> {
        let hex = hex.into();
        let result = parse_hex(hex, self.config.max_hex_digits);
        self.observe(Radix::Hex, Radix::Decimal, hex, result)
    }

    /// Convert a numeral of any radix into `target`.
    ///
    /// The source radix comes from the prefix: `0b` is binary, `0x` is hex,
    /// anything else must be a decimal literal of ASCII digits (a leading
    /// `-` is reported as `NegativeValue`).
    ///
    /// Converting to the source radix validates the numeral. Binary and hex
    /// numerals come back unchanged; decimals come back in canonical form.
    pub fn convert(&self, numeral: &str, target: Radix) -> ConversionResult<String> {
        let source = Radix::detect(numeral);
        let result = self.dispatch(numeral, source, target);
        self.observe(source, target, Some(numeral), result)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn dispatch(&self, numeral: &str, source: Radix, target: Radix) -> ConversionResult<String> {
        let binary_digits = self.config.max_binary_digits;
        let hex_digits = self.config.max_hex_digits;
        let input = Some(numeral);

        match (source, target) {
            (Radix::Binary, Radix::Binary) => {
                binary_body(input, binary_digits).map(|_| numeral.to_string())
            },
            (Radix::Binary, Radix::Decimal) => {
                parse_binary(input, binary_digits).map(|value| value.to_string())
            },
            (Radix::Binary, Radix::Hex) => self.bounded_binary_hex(input),
            (Radix::Decimal, Radix::Binary) => {
                parse_decimal(numeral).and_then(|value| format_binary(value, binary_digits))
            },
            (Radix::Decimal, Radix::Decimal) => {
                parse_decimal(numeral).map(|value| value.to_string())
            },
            (Radix::Decimal, Radix::Hex) => {
                parse_decimal(numeral).and_then(|value| format_hex(value, hex_digits))
            },
            (Radix::Hex, Radix::Binary) => hex_binary(input, hex_digits),
            (Radix::Hex, Radix::Decimal) => {
                parse_hex(input, hex_digits).map(|value| value.to_string())
            },
            (Radix::Hex, Radix::Hex) => hex_body(input, hex_digits).map(|_| numeral.to_string()),
        }
    }

    fn bounded_binary_hex(&self, binary: Option<&str>) -> ConversionResult<String> {
        let hex = binary_hex(binary, self.config.max_binary_digits)?;
        if hex.len() - Radix::HEX_PREFIX.len() > self.config.max_hex_digits {
            return Err(ConversionError::Overflow);
        }
        Ok(hex)
    }

    /// Report the outcome to the event handler and pass it through
    fn observe<T: ToString>(
        &self,
        from: Radix,
        to: Radix,
        input: Option<&str>,
        result: ConversionResult<T>,
    ) -> ConversionResult<T> {
        let event = match &result {
            Ok(output) => ConversionEvent::Converted {
                from,
                to,
                input: input.map(str::to_owned).unwrap_or_default(),
                output: output.to_string(),
                timestamp: Utc::now(),
            },
            Err(error) => ConversionEvent::Rejected {
                from,
                to,
                input: input.map(str::to_owned),
                error: *error,
                timestamp: Utc::now(),
            },
        };
        self.event_handler.on_event(event);

        result
    }
}

/// Parse a decimal literal of ASCII digits.
fn parse_decimal(numeral: &str) -> ConversionResult<i32> {
    let (negative, digits) = match numeral.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, numeral),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::InvalidArgument);
    }

    // "-0" is still zero
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(ConversionError::NegativeValue);
    }

    digits.parse().map_err(|_| ConversionError::Overflow)
}
