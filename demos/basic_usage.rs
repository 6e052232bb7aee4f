// ============================================================================
// Basic Usage Example
// ============================================================================

use radix_converter::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Radix Converter Example ===\n");

    // Free functions: binary_to_decimal errors, the rest return None
    println!("Free functions:");
    for binary in ["0b0", "0b101", "0b1111111111111111111111111111111"] {
        println!("  {} -> {:?}", binary, binary_to_decimal(binary));
    }
    println!("  0b -> {:?}", binary_to_decimal("0b"));
    println!("  5 -> {:?}", decimal_to_binary(5));
    println!("  -1 -> {:?}", decimal_to_binary(-1));
    println!("  0b101 -> {:?}", binary_to_hex("0b101"));
    println!("  0x0A -> {:?}", hex_to_binary("0x0A"));

    // Round trip through hex drops padding zeros
    let hex = binary_to_hex("0b00101").unwrap();
    println!(
        "\nRound trip: 0b00101 -> {} -> {}",
        hex,
        hex_to_binary(hex.as_str()).unwrap()
    );

    // Configured converter with a single error convention
    println!("\n=== Byte Converter ===");
    let converter = RadixConverterBuilder::byte()
        .build(Arc::new(LoggingEventHandler))
        .unwrap();

    for numeral in ["200", "0xC8", "0b11001000", "256", "-3", "0xc8"] {
        for target in [Radix::Binary, Radix::Decimal, Radix::Hex] {
            match converter.convert(numeral, target) {
                Ok(output) => println!("  {} as {}: {}", numeral, target, output),
                Err(error) => println!("  {} as {}: error: {}", numeral, target, error),
            }
        }
    }
}
