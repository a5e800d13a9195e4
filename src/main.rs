use fibonacci_bounded::boxed::{self, AllocationLedger};
use fibonacci_bounded::{guarded, limits, pool};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("====================================================");
    println!(" bounded fibonacci kernel - strategy demonstration");
    println!(" safety limits: depth {}, workers {}, allocations {}", limits::MAX_DEPTH, limits::MAX_WORKERS, limits::MAX_ITERATIONS);
    println!("====================================================");

    let n = 5;

    println!();
    println!("Pattern 1: boxed-result recursion (ownership transfer)");
    demo_boxed(n);

    println!();
    println!("Pattern 2: depth-guarded recursion");
    demo_guarded(n);

    println!();
    println!("Pattern 3: bounded worker pool");
    demo_pool(3);

    println!();
    println!("all demonstrations completed (safety limits active)");
}

fn demo_boxed(n: u64) {
    let ledger = AllocationLedger::new();
    match boxed::evaluate(n, &ledger) {
        Some(result) => {
            println!("  fib({n}) = {}", result.value());
            println!(
                "  containers: {} allocated, {} released, {} live",
                ledger.allocations(),
                ledger.releases(),
                ledger.live()
            );
            // The terminal container is ours now; settle the ledger.
            result.release(&ledger);
        }
        None => println!("  allocation budget exhausted before fib({n}) completed"),
    }
}

fn demo_guarded(n: u64) {
    let result = guarded::evaluate(n, 0);
    println!(
        "  fib({n}) = {result} (depth ceiling {})",
        limits::MAX_DEPTH
    );
}

fn demo_pool(base_n: u64) {
    match pool::run(base_n, limits::MAX_WORKERS) {
        Ok(items) => {
            for item in &items {
                if let Some(result) = item.result {
                    println!("  worker {}: fib({}) = {}", item.index, item.n, result);
                }
            }
        }
        Err(err) => println!("  worker pool failed: {err}"),
    }
}
