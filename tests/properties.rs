// ============================================================================
// Property Tests
// Round trips and grammar boundaries across the public conversions
// ============================================================================

use proptest::prelude::*;
use radix_converter::prelude::*;

/// Minimal binary numerals: "0b0" or a body starting with 1
fn minimal_binary() -> impl Strategy<Value = String> {
    prop_oneof![Just("0b0".to_string()), "1[01]{0,30}".prop_map(|body| format!("0b{}", body))]
}

proptest! {
    #[test]
    fn decimal_binary_decimal(value in 0i32..=(1 << 30)) {
        let binary = decimal_to_binary(value).unwrap();
        prop_assert_eq!(binary_to_decimal(binary.as_str()), Ok(value));
    }

    #[test]
    fn binary_decimal_binary(binary in minimal_binary()) {
        let value = binary_to_decimal(binary.as_str()).unwrap();
        prop_assert_eq!(decimal_to_binary(value), Some(binary));
    }

    #[test]
    fn binary_to_decimal_matches_std(body in "[01]{1,31}") {
        let expected = i32::from_str_radix(&body, 2).unwrap();
        prop_assert_eq!(binary_to_decimal(format!("0b{}", body).as_str()), Ok(expected));
    }

    #[test]
    fn binary_hex_preserves_padded_digit_count(body in "[01]{1,31}") {
        let hex = binary_to_hex(format!("0b{}", body).as_str()).unwrap();
        let digits = &hex[2..];

        prop_assert_eq!(digits.len(), (body.len() + 3) / 4);
        prop_assert_eq!(
            u32::from_str_radix(digits, 16).unwrap(),
            u32::from_str_radix(&body, 2).unwrap()
        );
    }

    #[test]
    fn hex_binary_roundtrip_is_minimal(body in "[01]{1,31}") {
        let binary = format!("0b{}", body);
        let roundtrip = hex_to_binary(binary_to_hex(binary.as_str()).as_deref()).unwrap();

        let trimmed = body.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(roundtrip, format!("0b{}", expected));
    }

    #[test]
    fn hex_to_binary_matches_std(body in "[0-9A-F]{1,8}") {
        let binary = hex_to_binary(format!("0x{}", body).as_str()).unwrap();
        let value = u32::from_str_radix(&body, 16).unwrap();
        prop_assert_eq!(binary, format!("0b{:b}", value));
    }

    #[test]
    fn decimal_hex_matches_std(value in 0i32..=i32::MAX) {
        let hex = decimal_to_hex(value).unwrap();
        prop_assert_eq!(&hex, &format!("0x{:X}", value));
        prop_assert_eq!(hex_to_decimal(hex.as_str()), Some(value));
    }

    #[test]
    fn negative_decimals_are_absent(value in i32::MIN..0) {
        prop_assert_eq!(decimal_to_binary(value), None);
        prop_assert_eq!(decimal_to_hex(value), None);
    }

    #[test]
    fn lowercase_hex_is_rejected(body in "[0-9A-F]{0,7}[a-f]") {
        prop_assert!(!is_valid_hex_body(&body));
        prop_assert_eq!(hex_to_binary(format!("0x{}", body).as_str()), None);
    }

    #[test]
    fn foreign_characters_are_rejected(body in "[01]{0,10}[2-9a-zA-Z ][01]{0,10}") {
        let binary = format!("0b{}", body);
        prop_assert_eq!(binary_to_decimal(binary.as_str()), Err(ConversionError::InvalidArgument));
        prop_assert_eq!(binary_to_hex(binary.as_str()), None);
    }

    #[test]
    fn converter_agrees_with_free_functions(value in 0i32..=i32::MAX) {
        let converter = RadixConverter::standard();
        let text = value.to_string();

        prop_assert_eq!(converter.convert(&text, Radix::Binary).ok(), decimal_to_binary(value));
        prop_assert_eq!(converter.convert(&text, Radix::Hex).ok(), decimal_to_hex(value));
    }
}

#[test]
fn overlong_bodies_are_rejected() {
    let binary = format!("0b{}", "0".repeat(32));
    assert_eq!(
        binary_to_decimal(binary.as_str()),
        Err(ConversionError::InvalidArgument)
    );
    assert_eq!(binary_to_hex(binary.as_str()), None);
    assert_eq!(hex_to_binary("0x000000000"), None);
}
