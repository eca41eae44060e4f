use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use guardtext::{format_debug_text, to_debug_text, DebugTextOptions, DebugValue, TextExt};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct Request {
    method: String,
    path: String,
    status: u16,
    trace_id: Option<String>,
    tags: Vec<String>,
}

fn benchmark_format_pairs(c: &mut Criterion) {
    let pairs = [
        ("method", DebugValue::from("GET")),
        ("path", DebugValue::from("/api/users")),
        ("trace_id", DebugValue::Null),
        ("tags", DebugValue::from(vec![Some("a"), None, Some("b")])),
    ];

    c.bench_function("format_debug_text_small", |b| {
        b.iter(|| format_debug_text(black_box(&pairs), true, Some("Request")))
    });
}

fn benchmark_format_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_sequence");

    for size in [10, 100, 1000].iter() {
        let items: Vec<Option<u32>> = (0..*size)
            .map(|i| if i % 3 == 0 { None } else { Some(i) })
            .collect();
        let pairs = [("items", DebugValue::from(items))];

        group.bench_with_input(BenchmarkId::from_parameter(size), &pairs, |b, pairs| {
            b.iter(|| format_debug_text(black_box(pairs), false, None))
        });
    }

    group.finish();
}

fn benchmark_struct_debug_text(c: &mut Criterion) {
    let request = Request {
        method: "POST".to_string(),
        path: "/api/orders".to_string(),
        status: 201,
        trace_id: None,
        tags: vec!["checkout".to_string(), "mobile".to_string()],
    };
    let options = DebugTextOptions::new().excluding_nulls();

    c.bench_function("to_debug_text_struct", |b| {
        b.iter(|| to_debug_text(black_box(&request), &options))
    });
}

fn benchmark_blank_check(c: &mut Criterion) {
    let text = format!("{}x", " ".repeat(64));

    c.bench_function("is_blank_leading_whitespace", |b| {
        b.iter(|| black_box(text.as_str()).is_blank())
    });
}

criterion_group!(
    benches,
    benchmark_format_pairs,
    benchmark_format_sequence,
    benchmark_struct_debug_text,
    benchmark_blank_check
);
criterion_main!(benches);
