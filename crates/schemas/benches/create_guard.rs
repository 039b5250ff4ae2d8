use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::Utc;
use idconsole_schemas::{validate_create_input_at, LOGS};
use serde_json::{json, Map, Value};

fn log_candidate(payload_keys: usize) -> Value {
    let payload: Map<String, Value> = (0..payload_keys)
        .map(|i| (format!("key_{i}"), json!({ "index": i, "ok": true })))
        .collect();

    json!({
        "id": "log_bench",
        "type": "SignInUsernamePassword",
        "payload": payload,
    })
}

fn bench_log_guard(c: &mut Criterion) {
    let guard = LOGS.create_guard();
    let now = Utc::now();

    let mut group = c.benchmark_group("logs_create_guard");
    for payload_keys in [0usize, 16, 256] {
        let candidate = log_candidate(payload_keys);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("validate", payload_keys),
            &candidate,
            |b, candidate| {
                b.iter(|| validate_create_input_at(guard, black_box(candidate), now).is_ok())
            },
        );
    }
    group.finish();

    let missing = json!({ "id": "log_bench" });
    c.bench_function("logs_create_guard/reject_missing_type", |b| {
        b.iter(|| validate_create_input_at(guard, black_box(&missing), now).is_err())
    });
}

criterion_group!(benches, bench_log_guard);
criterion_main!(benches);
