//! Report engine throughput benchmarks.
//!
//! A check on a busy host can list tens of thousands of changed entries, and
//! the whole output is normalized in one call, so throughput is measured over
//! synthetic reports of growing size.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `classify` | One line per encoding through the classifier cascade |
//! | `normalize` | Full engine pass over 100 / 1 000 / 10 000 entry reports |
//! | `capture` | Capture filter over the same reports |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench report_bench
//! open target/criterion/report/index.html
//! ```

use aidr::feeds::CaptureFilter;
use aidr::ReportEngine;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Build a captured-style report with `n` changed entries, each with a
/// detailed record.
fn synthetic_report(n: usize) -> Vec<String> {
    let mut lines = vec![
        "WARNING: preamble".to_string(),
        "Start timestamp: 2024-03-05 09:15:02 +0000 (AIDE 0.18.6)".to_string(),
        "AIDE found differences between database and filesystem!!".to_string(),
        format!("Total number of entries: {}", n * 10),
        format!("Added entries: {}", n / 10),
        format!("Changed entries: {n}"),
        "---------------------------------------------------".to_string(),
        "Added entries:".to_string(),
    ];
    lines.extend((0..n / 10).map(|i| format!("f++++++++++++++++: /srv/new/{i}")));
    lines.push("Changed entries:".to_string());
    lines.extend((0..n).map(|i| format!("f...m.c.........: /srv/data/file-{i}.dat")));
    lines.push("Detailed information about changes:".to_string());
    for i in 0..n {
        lines.push(format!("File: /srv/data/file-{i}.dat"));
        lines.push(
            "  Mtime     : 2024-03-01 10:00:00 +0000 | 2024-03-05 08:59:41 +0000".to_string(),
        );
        lines.push("  SHA256    : 9f86d081884c7d65 | 60303ae22b998861".to_string());
    }
    lines.push("End timestamp: 2024-03-05 09:15:40 +0000 (duration: 0m 38s)".to_string());
    lines
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

fn classify_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let engine = ReportEngine::default();

    let cases = [
        ("decorative", "---------------------------------------------------"),
        ("status_flags", "f...m.c.........: /etc/passwd"),
        ("decoded", "File (Modified, permissions) - /etc/sudoers"),
        ("bare_path", "/etc/motd"),
        ("fallback", "something odd happened"),
    ];

    group.throughput(Throughput::Elements(1));
    for (name, line) in cases {
        group.bench_with_input(BenchmarkId::new(name, ""), &line, |b, line| {
            b.iter(|| engine.classifier().classify(black_box(line)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Full engine pass
// ---------------------------------------------------------------------------

fn normalize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let engine = ReportEngine::default();

    for n in [100usize, 1_000, 10_000] {
        let lines = synthetic_report(n);
        group.throughput(Throughput::Elements(lines.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &lines, |b, lines| {
            b.iter(|| engine.normalize(black_box(lines)))
        });
    }

    group.finish();
}

fn capture_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture");
    let filter = CaptureFilter::new();

    for n in [100usize, 1_000, 10_000] {
        let lines = synthetic_report(n);
        group.throughput(Throughput::Elements(lines.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &lines, |b, lines| {
            b.iter(|| filter.apply(black_box(lines)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion registration
// ---------------------------------------------------------------------------

criterion_group!(report_benches, classify_bench, normalize_bench, capture_bench);
criterion_main!(report_benches);
