use arith_eval::{Evaluator, Registry};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::*;

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let mut evaluator = Evaluator::new();

    let expr = "2 + 3";
    let compiled = evaluator.compile(expr).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("eager_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)))
    });

    group.bench_function("precompiled_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_compiled(black_box(&compiled)))
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0) + black_box(3.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let mut evaluator = Evaluator::new();

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    let compiled = evaluator.compile(expr).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("eager_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)))
    });

    group.bench_function("precompiled_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_compiled(black_box(&compiled)))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_complex_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_complex_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark function calls and constants
fn benchmark_function_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function Call Evaluation");

    let mut evaluator = Evaluator::new();
    evaluator.register_function("square", |x| x * x);

    let expr = "square(4) + sin(pi / 2) * sqrt(144)";
    let compiled = evaluator.compile(expr).unwrap();

    group.bench_function("eager_function_call", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)))
    });

    group.bench_function("precompiled_function_call", |b| {
        b.iter(|| evaluator.evaluate_compiled(black_box(&compiled)))
    });

    group.bench_function("registry_construction", |b| {
        b.iter(Registry::with_defaults)
    });
}

/// Benchmark batch evaluation
fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");

    let evaluator = Evaluator::new();
    let expressions: Vec<String> = (0..1000)
        .map(|i| format!("sqrt({i}) * ({i} + 1) / 3 - ln({i} + 1)"))
        .collect();

    group.bench_function("parallel_batch", |b| {
        b.iter(|| evaluator.evaluate_batch(black_box(&expressions)))
    });

    group.bench_function("sequential_batch", |b| {
        b.iter(|| {
            expressions
                .iter()
                .map(|expression| evaluator.evaluate(black_box(expression)))
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_function_calls,
    benchmark_batch,
);
criterion_main!(benches);
