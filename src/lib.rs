//! # Bounded Fibonacci Kernel
//!
//! This library evaluates the Fibonacci sequence under three deliberately
//! constrained execution strategies, each instrumented with an explicit
//! safety ceiling. It is a deterministic, resource-bounded computational
//! kernel meant as a benchmark/demo target for automated code-quality
//! tooling rather than a numeric library.
//!
//! ## Key Features
//! - **Explicit ownership accounting**: the boxed-result evaluator moves an
//!   owned container up the call tree and leaves exactly one container
//!   unreleased per top-level call, with the ledger keeping the score.
//! - **Hard recursion bound**: the depth-guarded evaluator aborts with an
//!   in-band sentinel rather than overflowing the stack.
//! - **Bounded fan-out, deterministic fan-in**: the worker pool spawns a
//!   fixed number of OS threads and joins them in index order before reading
//!   a single result.
//!
//! ## Overview of Strategies
//!
//! ### `boxed::evaluate`
//! Naive recursion over heap-allocated [`boxed::ComputationResult`]
//! containers drawn from an [`boxed::AllocationLedger`]. Parents release
//! their children after combining them; the final container is forwarded to
//! the caller unreleased. Allocation-budget exhaustion propagates as `None`
//! with every intermediate container released.
//!
//! ### `guarded::evaluate`
//! Naive recursion over inline integers with a strict depth ceiling
//! ([`limits::MAX_DEPTH`]). Crossing the ceiling returns
//! [`guarded::DEPTH_SENTINEL`], which ancestors silently sum into their own
//! results. Safety wins over correctness there, by contract.
//!
//! ### `pool::run`
//! A fixed worker set (at most [`limits::MAX_WORKERS`]) where worker `i`
//! computes the depth-guarded Fibonacci of `base_n + i` and writes its own
//! pre-allocated [`pool::WorkItem`]. Workers share no mutable state; the pool
//! joins every worker before reporting, in index order.
//!
//! ## Usage Example
//! ```rust
//! use fibonacci_bounded::boxed::{self, AllocationLedger};
//! use fibonacci_bounded::{guarded, pool};
//!
//! let ledger = AllocationLedger::new();
//! let result = boxed::evaluate(10, &ledger).expect("budget covers fib(10)");
//! assert_eq!(result.value(), 55);
//! result.release(&ledger);
//!
//! assert_eq!(guarded::evaluate(10, 0), 55);
//!
//! let items = pool::run(3, 4).expect("worker count is within the limit");
//! assert_eq!(items[3].result, Some(guarded::evaluate(6, 0)));
//! ```

pub mod boxed;
pub mod guarded;
pub mod limits;
pub mod pool;
