use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pacepilot::{assess, format_pace, solve, RunWalkPlan};

/// Benchmarks for the solver and the full assessment path

fn create_plan_dataset(size: usize) -> Vec<RunWalkPlan> {
    (0..size)
        .map(|i| {
            let step = i as f64 / size.max(1) as f64;
            RunWalkPlan::new(1.0 + 9.0 * step, 0.5 + step, 9.0 + step, 5.0 + 8.0 * step)
        })
        .collect()
}

fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve_reference", |b| {
        b.iter(|| solve(black_box(4.0), black_box(7.5), black_box(10.0), black_box(1.0)))
    });
}

fn bench_assess(c: &mut Criterion) {
    let mut group = c.benchmark_group("Assessment");

    for &size in &[1, 100, 10_000] {
        let plans = create_plan_dataset(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("assess", size), &plans, |b, plans| {
            b.iter(|| {
                for plan in plans {
                    black_box(assess(plan));
                }
            });
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    c.bench_function("format_pace", |b| b.iter(|| format_pace(black_box(Some(7.0588)))));
}

criterion_group!(benches, bench_solve, bench_assess, bench_format);
criterion_main!(benches);
