use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fibonacci_bounded::boxed::{self, AllocationLedger};
use fibonacci_bounded::{guarded, limits, pool};

fn criterion_benchmark(c: &mut Criterion) {
    let n = black_box(10u64);

    c.bench_function(format!("fib_boxed {n}").as_str(), |b| {
        b.iter(|| {
            let ledger = AllocationLedger::new();
            let result = boxed::evaluate(n, &ledger).expect("budget covers the bench input");
            result.release(&ledger);
        })
    });

    c.bench_function(format!("fib_guarded {n}").as_str(), |b| {
        b.iter(|| guarded::evaluate(n, 0))
    });

    let base_n = black_box(3u64);
    c.bench_function(
        format!("fib_pool {}workers base{base_n}", limits::MAX_WORKERS).as_str(),
        |b| b.iter(|| pool::run(base_n, limits::MAX_WORKERS)),
    );
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
