// ============================================================================
// Radix Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Free functions - Each conversion over short and full-length numerals
// 2. Configured converter - Dispatch through RadixConverter::convert
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use radix_converter::prelude::*;
use std::hint::black_box;

// ============================================================================
// Free Function Benchmarks
// ============================================================================

fn benchmark_binary_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_conversions");

    for digits in [4usize, 16, 31].iter() {
        let binary = format!("0b1{}", "01".repeat(31).get(..digits - 1).unwrap_or(""));

        group.bench_with_input(
            BenchmarkId::new("binary_to_decimal", digits),
            &binary,
            |b, binary| b.iter(|| black_box(binary_to_decimal(binary.as_str()))),
        );

        group.bench_with_input(
            BenchmarkId::new("binary_to_hex", digits),
            &binary,
            |b, binary| b.iter(|| black_box(binary_to_hex(binary.as_str()))),
        );
    }

    group.finish();
}

fn benchmark_decimal_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_conversions");

    for value in [5i32, 65_535, i32::MAX].iter() {
        group.bench_with_input(
            BenchmarkId::new("decimal_to_binary", value),
            value,
            |b, &value| b.iter(|| black_box(decimal_to_binary(black_box(value)))),
        );

        group.bench_with_input(
            BenchmarkId::new("decimal_to_hex", value),
            value,
            |b, &value| b.iter(|| black_box(decimal_to_hex(black_box(value)))),
        );
    }

    group.finish();
}

fn benchmark_hex_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_conversions");

    for hex in ["0xA", "0x0FF0", "0x7FFFFFFF"].iter() {
        group.bench_with_input(BenchmarkId::new("hex_to_binary", hex), hex, |b, &hex| {
            b.iter(|| black_box(hex_to_binary(hex)))
        });

        group.bench_with_input(BenchmarkId::new("hex_to_decimal", hex), hex, |b, &hex| {
            b.iter(|| black_box(hex_to_decimal(hex)))
        });
    }

    group.finish();
}

// ============================================================================
// Configured Converter Benchmarks
// ============================================================================

fn benchmark_converter_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("converter_dispatch");
    let converter = RadixConverter::standard();

    let cases = [
        ("decimal_to_hex", "2147483647", Radix::Hex),
        ("hex_to_binary", "0x7FFFFFFF", Radix::Binary),
        ("binary_to_decimal", "0b1010101010101010", Radix::Decimal),
    ];

    for (name, numeral, target) in cases.iter() {
        group.bench_function(*name, |b| {
            b.iter(|| black_box(converter.convert(black_box(numeral), *target)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_binary_conversions,
    benchmark_decimal_conversions,
    benchmark_hex_conversions,
    benchmark_converter_dispatch,
);

criterion_main!(benches);
