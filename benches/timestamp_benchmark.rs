use criterion::{criterion_group, criterion_main, Criterion};
use snapshot_finder::timestamp::{default_templates, parse_timestamp};
use std::hint::black_box;

fn bench_timestamps(c: &mut Criterion) {
    let templates = default_templates();

    c.bench_function("parse_scheduled_name", |b| {
        b.iter(|| parse_timestamp(black_box("scheduled-2026-01-23-04_00_40_UTC"), &templates))
    });

    c.bench_function("parse_padded_name", |b| {
        b.iter(|| parse_timestamp(black_box("_scheduled-2026-01-24-04_00_40_UTC_1"), &templates))
    });

    // Worst case: every template and every segmentation is tried
    c.bench_function("parse_unmatched_name", |b| {
        let name = "weekly-backup-of-home-directory-20260124T040040Z";
        b.iter(|| parse_timestamp(black_box(name), &templates))
    });
}

criterion_group!(benches, bench_timestamps);
criterion_main!(benches);
