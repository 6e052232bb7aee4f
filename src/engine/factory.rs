// ============================================================================
// Converter Factory
// Creates radix converters with validated configuration
// ============================================================================

use crate::domain::ConverterConfig;
use crate::engine::RadixConverter;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a radix converter from configuration
///
/// # Arguments
/// * `config` - Converter configuration
/// * `event_handler` - Event handler for conversion events
///
/// # Returns
/// * `Result<RadixConverter, String>` - Configured converter or the validation error
///
/// # Example
/// ```
/// use radix_converter::prelude::*;
/// use radix_converter::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = ConverterConfig::byte();
/// let converter = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(converter.decimal_to_hex(255).unwrap(), "0xFF");
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<RadixConverter, String> {
    // Validate configuration first
    config.validate()?;

    tracing::debug!(
        max_binary_digits = config.max_binary_digits,
        max_hex_digits = config.max_hex_digits,
        "Creating radix converter"
    );

    Ok(RadixConverter::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating radix converters with fluent API
///
/// # Example
/// ```
/// use radix_converter::prelude::*;
/// use radix_converter::engine::factory::RadixConverterBuilder;
/// use std::sync::Arc;
///
/// let converter = RadixConverterBuilder::new()
///     .with_max_binary_digits(12)
///     .with_max_hex_digits(3)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert!(converter.binary_to_decimal("0b1111111111111").is_err());
/// ```
pub struct RadixConverterBuilder {
    config: ConverterConfig,
}

impl Default for RadixConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixConverterBuilder {
    /// Create a new builder with the full grammar bounds
    pub fn new() -> Self {
        Self {
            config: ConverterConfig::standard(),
        }
    }

    // ========================================================================
    // Bounds
    // ========================================================================

    /// Set the longest binary body
    pub fn with_max_binary_digits(mut self, digits: usize) -> Self {
        self.config.max_binary_digits = digits;
        self
    }

    /// Set the longest hex body
    pub fn with_max_hex_digits(mut self, digits: usize) -> Self {
        self.config.max_hex_digits = digits;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply 16-bit word bounds
    pub fn word() -> Self {
        Self {
            config: ConverterConfig::word(),
        }
    }

    /// Apply 8-bit byte bounds
    pub fn byte() -> Self {
        Self {
            config: ConverterConfig::byte(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<RadixConverter, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}
