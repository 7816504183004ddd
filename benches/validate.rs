use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;
use tyexpr::{compile, schema_def, validate};

fn criterion_benchmark(c: &mut Criterion) {
    let schema = compile(schema_def!({
        "name": "string",
        "age": "number",
        "hobbies": "string[]",
        "status": "'active' | 'inactive'",
        "location": "[number, number]",
        "nickname?": "string",
        "languages": schema_def!({
            "name": "string",
            "liked": "boolean",
            "experience": "number | undefined",
        }),
    }));

    let doc = serde_json::json!({
        "name": "Alexander",
        "age": 27,
        "hobbies": [
            "Music",
            "Programming",
            "Reading"
        ],
        "status": "active",
        "location": [151.2, -33.9],
        "languages": {
            "name": "Rust",
            "liked": true,
            "experience": 5
        }
    });

    let mut group = c.benchmark_group("validate");
    group.measurement_time(Duration::from_secs(30));
    group.bench_function("validate_schema", |b| {
        b.iter(|| black_box(&schema).apply(black_box(&doc)))
    });
    group.bench_function("validate_expr", |b| {
        b.iter(|| validate(black_box("(string | number)[]"), black_box(&doc["location"])))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
