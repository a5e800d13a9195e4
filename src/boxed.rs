use std::cell::Cell;

use crate::limits;

/// A heap-allocated container holding a single computed Fibonacci value.
///
/// Containers are move-only: there is no `Clone`, so an unreleased container
/// is reachable from exactly one owner at a time. The only way to retire one
/// against its ledger is the consuming [`release`](ComputationResult::release);
/// dropping a container without releasing it leaves the ledger permanently
/// one release short, which is exactly the accounting leak [`evaluate`]
/// demonstrates at its top level.
#[derive(Debug)]
pub struct ComputationResult {
    value: i64,
}

impl ComputationResult {
    /// The computed value held by this container.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Consumes the container and records the release in the ledger.
    pub fn release(self: Box<Self>, ledger: &AllocationLedger) {
        ledger.releases.set(ledger.releases.get() + 1);
        drop(self);
    }
}

/// Tracks container allocations and releases for one evaluation context.
///
/// Safe Rust cannot observe a real allocator failure, so the ledger enforces
/// an allocation budget instead: once `budget` containers have been handed
/// out, further allocations fail and [`evaluate`] propagates `None` upward.
/// The counters use `Cell` since the boxed evaluator runs in a single
/// sequential context.
#[derive(Debug)]
pub struct AllocationLedger {
    budget: u64,
    allocations: Cell<u64>,
    releases: Cell<u64>,
}

impl AllocationLedger {
    /// Ledger with the process-wide default budget.
    pub fn new() -> Self {
        Self::with_budget(limits::MAX_ITERATIONS)
    }

    /// Ledger with an explicit allocation budget.
    pub fn with_budget(budget: u64) -> Self {
        AllocationLedger {
            budget,
            allocations: Cell::new(0),
            releases: Cell::new(0),
        }
    }

    fn try_allocate(&self, value: i64) -> Option<Box<ComputationResult>> {
        if self.allocations.get() >= self.budget {
            return None;
        }
        self.allocations.set(self.allocations.get() + 1);
        Some(Box::new(ComputationResult { value }))
    }

    /// Total containers handed out so far.
    pub fn allocations(&self) -> u64 {
        self.allocations.get()
    }

    /// Total containers released so far.
    pub fn releases(&self) -> u64 {
        self.releases.get()
    }

    /// Containers currently unreleased.
    pub fn live(&self) -> u64 {
        self.allocations.get() - self.releases.get()
    }
}

impl Default for AllocationLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes Fibonacci(n) via naive recursion over owned result containers.
///
/// Every call allocates its own container from the ledger. A parent reads and
/// releases both of its children, allocates a container for the sum, and
/// returns it unreleased: ownership of the final container transfers to the
/// caller, which must settle the ledger itself. Per successful top-level call
/// the ledger therefore ends at `releases == allocations - 1`.
///
/// Returns `None` when the ledger's budget is exhausted. Every successfully
/// allocated child is released before the failure propagates, so a failed
/// call leaves no live containers behind.
///
/// # Example
/// ```
/// use fibonacci_bounded::boxed::{self, AllocationLedger};
///
/// let ledger = AllocationLedger::new();
/// let result = boxed::evaluate(10, &ledger).expect("budget covers fib(10)");
/// assert_eq!(result.value(), 55);
/// assert_eq!(ledger.live(), 1);
/// result.release(&ledger);
/// assert_eq!(ledger.live(), 0);
/// ```
pub fn evaluate(n: u64, ledger: &AllocationLedger) -> Option<Box<ComputationResult>> {
    if n <= 1 {
        return ledger.try_allocate(n as i64);
    }

    let a = evaluate(n - 1, ledger);
    let b = evaluate(n - 2, ledger);

    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        (a, b) => {
            if let Some(child) = a {
                child.release(ledger);
            }
            if let Some(child) = b {
                child.release(ledger);
            }
            return None;
        }
    };

    let result = ledger.try_allocate(a.value() + b.value());
    a.release(ledger);
    b.release(ledger);

    // Even when the sum allocation failed, both children are settled by now;
    // on success the new container goes back to the caller unreleased.
    result
}
