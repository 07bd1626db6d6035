//! Criterion benchmarks for multi_sink_logger

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use multi_sink_logger::core::{format_line_at, Timestamp};
use multi_sink_logger::prelude::*;
use multi_sink_logger::interpolate;
use std::io;
use std::sync::Arc;
use std::thread;

fn sink_logger() -> Logger {
    Logger::builder()
        .app_name("bench")
        .primary_streams(ConsoleAppender::with_writers(io::sink(), io::sink()))
        .build()
        .expect("console-only logger")
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate");
    group.throughput(Throughput::Elements(1));

    group.bench_function("no_directives", |b| {
        b.iter(|| interpolate(black_box("plain message without directives"), &[]));
    });

    group.bench_function("three_args", |b| {
        b.iter(|| {
            interpolate(
                black_box("user %s took %d ms (%.2f%%)"),
                &[&"alice", &42, &12.5],
            )
        });
    });

    group.bench_function("width_and_flags", |b| {
        b.iter(|| interpolate(black_box("[%-10s|%08d|%+d]"), &[&"id", &-42, &7]));
    });

    group.finish();
}

fn bench_format_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_line");
    group.throughput(Throughput::Elements(1));

    let local = NaiveDate::from_ymd_opt(2025, 1, 8)
        .and_then(|d| d.and_hms_milli_opt(10, 30, 45, 123))
        .unwrap();
    let ts = Timestamp::from_parts(local, "CET");

    group.bench_function("fixed_timestamp", |b| {
        b.iter(|| format_line_at(Severity::Warning, black_box("disk low"), &[], &ts));
    });

    group.bench_function("clock_read", |b| {
        b.iter(Timestamp::now);
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger();

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("errorf", |b| {
        b.iter(|| logger.errorf(black_box("request %s failed: %d"), &[&"GET /", &503]));
    });

    group.bench_function("printf_raw", |b| {
        b.iter(|| logger.printf(black_box("n=%d"), &[&3]));
    });

    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_logger = Logger::builder()
        .file_path(temp_dir.path().join("bench.log"))
        .primary_output(false)
        .build()
        .expect("file logger");

    group.bench_function("file_only", |b| {
        b.iter(|| file_logger.warn(black_box("disk low")));
    });

    group.finish();
}

fn bench_concurrent(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            let logger = Arc::new(sink_logger());
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        thread::spawn(move || {
                            for i in 0..100 {
                                logger.infof("message %d", &[&i]);
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_interpolate,
    bench_format_line,
    bench_dispatch,
    bench_concurrent
);
criterion_main!(benches);
