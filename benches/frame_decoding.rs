//! Benchmarks for whole-frame decoding
//!
//! Tests decoding performance for:
//! - The 11-byte telemetry header on its own
//! - Frames carrying increasing numbers of playback records
//! - The request-object adapter, including error shaping

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pico_uplink::test_utils::{TELEMETRY_SAMPLE, frame_with_playback, init_test_tracing};
use pico_uplink::{Decoder, DecoderConfig, UplinkRequest};
use std::hint::black_box;

fn bench_header_decode(c: &mut Criterion) {
    init_test_tracing();
    let decoder = Decoder::default();

    c.bench_function("header_only", |b| {
        b.iter(|| {
            let telemetry = decoder.decode(black_box(&TELEMETRY_SAMPLE[..]), black_box(99)).unwrap();
            black_box(telemetry)
        })
    });
}

fn bench_playback_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("playback_records");

    let with_playback = Decoder::default();
    let without_playback = Decoder::new(DecoderConfig::default().without_playback());

    // Firmware sends 13 records by default; 25 fills the largest LoRaWAN payload
    for records in [0usize, 1, 13, 25] {
        let frame = frame_with_playback(records);

        group.bench_with_input(BenchmarkId::new("enabled", records), &frame, |b, frame| {
            b.iter(|| black_box(with_playback.decode(black_box(frame.as_slice()), 99).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("disabled", records), &frame, |b, frame| {
            b.iter(|| black_box(without_playback.decode(black_box(frame.as_slice()), 99).unwrap()))
        });
    }

    group.finish();
}

fn bench_request_adapter(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_adapter");
    let decoder = Decoder::default();

    let valid = UplinkRequest::new(frame_with_playback(13), 99);
    group.bench_function("valid_port", |b| {
        b.iter(|| black_box(decoder.decode_request(black_box(&valid))))
    });

    let unknown = UplinkRequest::new(TELEMETRY_SAMPLE, 12);
    group.bench_function("unknown_port", |b| {
        b.iter(|| black_box(decoder.decode_request(black_box(&unknown))))
    });

    group.finish();
}

criterion_group!(benches, bench_header_decode, bench_playback_records, bench_request_adapter);
criterion_main!(benches);
