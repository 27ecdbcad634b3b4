//! Combinator-pipeline benchmarks against hand-written imperative loops.
//!
//! The two workloads mirror the crate's canonical pipelines: an arithmetic
//! map/filter/take/reduce chain over an unbounded range, and warn/error
//! aggregation over in-memory line-delimited-JSON log data.

use std::{collections::HashMap, io::Cursor};

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pullseq::{prelude::*, record::LogRecord};

fn arithmetic_seq() -> i64 {
    range_from(19i64, 1)
        .map(|v| v * 3)
        .filter(|v| v % 2 == 0)
        .take(17)
        .reduce(None, |sum, v| sum + v)
        .unwrap()
}

fn arithmetic_loop() -> i64 {
    let mut count = 0;
    let mut i = 19i64;
    let mut sum = 0;

    loop {
        let v = i * 3;
        if v % 2 == 0 {
            sum += v;
            count += 1;
            if count == 17 {
                return sum;
            }
        }
        i += 1;
    }
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    group.bench_function("seq", |b| b.iter(|| black_box(arithmetic_seq())));
    group.bench_function("loop", |b| b.iter(|| black_box(arithmetic_loop())));

    group.finish();
}

/// Deterministic in-memory log data; no disk I/O in the measured path.
fn log_data(records: usize) -> Vec<u8> {
    const APPS: &[&str] = &["", "service", "api_gateway", "auth", "repository"];
    const SEVERITIES: &[&str] = &["debug", "info", "warn", "error"];

    let mut out = Vec::new();
    for i in 0..records {
        let line = format!(
            r#"{{"timestamp":"2026-03-14T09:26:{:02}Z","app":"{}","severity":"{}","msg":"synthetic event {}"}}"#,
            i % 60,
            APPS[i % APPS.len()],
            SEVERITIES[i % SEVERITIES.len()],
            i,
        );
        out.extend_from_slice(line.as_bytes());
        out.push(b'\n');
    }
    out
}

fn stats_seq(data: &[u8]) -> HashMap<String, usize> {
    lines(Cursor::new(data))
        .try_map(|line| LogRecord::parse(&line))
        .filter(|r| !r.app.is_empty() && r.severity.is_actionable())
        .reduce(None, |mut stats: HashMap<String, usize>, r| {
            *stats.entry(r.app).or_insert(0) += 1;
            stats
        })
        .unwrap()
}

fn stats_loop(data: &[u8]) -> HashMap<String, usize> {
    let mut stats = HashMap::new();
    for line in data.split(|&b| b == b'\n') {
        if line.is_empty() {
            continue;
        }
        let record = LogRecord::parse(line).unwrap();
        if record.app.is_empty() || !record.severity.is_actionable() {
            continue;
        }
        *stats.entry(record.app).or_insert(0) += 1;
    }
    stats
}

fn bench_log_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_stats");

    for records in [1_000, 10_000] {
        let data = log_data(records);
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(BenchmarkId::new("seq", records), &data, |b, data| {
            b.iter(|| black_box(stats_seq(black_box(data))));
        });
        group.bench_with_input(BenchmarkId::new("loop", records), &data, |b, data| {
            b.iter(|| black_box(stats_loop(black_box(data))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_log_stats);
criterion_main!(benches);
