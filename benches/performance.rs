//! Performance benchmarks for the report generator
//!
//! Measures summary parsing, value extraction and Markdown rendering on
//! summaries of increasing size.

use clap::Parser;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use loadtest_report::{
    cli::Cli,
    config::parser::ConfigParser,
    models::{Config, MetricsDocument, ScenarioInfo},
    ReportGenerator,
};
use serde_json::{json, Map, Value};
use std::hint::black_box;

/// Create a summary with the report metrics plus `extra` unrelated metrics
fn create_sample_summary(extra: usize) -> Value {
    let mut metrics = Map::new();
    metrics.insert("http_reqs".to_string(), json!({"count": 12345, "rate": 1234.5}));
    metrics.insert("http_req_failed".to_string(), json!({"rate": 0.0123}));
    metrics.insert("http_req_duration".to_string(), json!({"avg": 40.2, "p(95)": 87.654}));
    metrics.insert("order_ok".to_string(), json!({"count": 900}));
    metrics.insert("order_sold_out".to_string(), json!({"count": 80}));
    metrics.insert("order_busy".to_string(), json!({"count": 15}));
    metrics.insert("order_other_fail".to_string(), json!({"count": 5}));

    for i in 0..extra {
        metrics.insert(
            format!("custom_trend_{}", i),
            json!({"type": "trend", "values": {"avg": i, "p(95)": i * 2, "max": i * 3}}),
        );
    }

    json!({"metrics": metrics})
}

/// Benchmark parsing summary text into a document
fn benchmark_summary_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary_parsing");

    for size in [0usize, 100, 1000] {
        let text = create_sample_summary(size).to_string();
        group.bench_with_input(BenchmarkId::new("from_json_str", size), &text, |b, text| {
            b.iter(|| {
                let document = MetricsDocument::from_json_str(black_box(text)).unwrap();
                black_box(document);
            });
        });
    }

    group.finish();
}

/// Benchmark extraction and rendering
fn benchmark_extract_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_render");
    let generator = ReportGenerator::new(Config { enable_color: false, ..Default::default() });
    let scenario = ScenarioInfo::default();

    for size in [0usize, 100, 1000] {
        let document = MetricsDocument::from_value(create_sample_summary(size)).unwrap();

        group.bench_with_input(BenchmarkId::new("extract", size), &document, |b, document| {
            b.iter(|| black_box(generator.extract(black_box(document))));
        });

        group.bench_with_input(BenchmarkId::new("extract_and_render", size), &document, |b, document| {
            b.iter(|| {
                let values = generator.extract(black_box(document));
                black_box(generator.render(&values, &scenario).unwrap())
            });
        });
    }

    group.finish();
}

/// Benchmark configuration building from CLI arguments
fn benchmark_config_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("config_parsing");

    group.bench_function("cli_and_env", |b| {
        let args = [
            "loadtest-report",
            "summary.json",
            "REPORT.md",
            "--vus", "1000",
            "--stock", "100",
            "--no-color",
        ];
        let vars = [("DURATION", "10s"), ("TARGET_ENDPOINT", "POST /orders")];
        b.iter(|| {
            let cli = Cli::try_parse_from(black_box(args)).unwrap();
            let config = ConfigParser::new(cli).parse_with_vars(black_box(vars)).unwrap();
            black_box(config);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_summary_parsing,
    benchmark_extract_and_render,
    benchmark_config_parsing
);

criterion_main!(benches);
