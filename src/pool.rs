use kanal::{bounded, SendError};
use std::thread;
use tracing::debug;

use crate::guarded;
use crate::limits;

/// One unit of pool work: an input index, the input itself, and the result
/// slot its owning worker fills exactly once.
#[derive(Debug)]
pub struct WorkItem {
    pub index: usize,
    pub n: u64,
    pub result: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("worker count {requested} exceeds the limit of {limit}")]
    WorkerLimit { requested: usize, limit: usize },
    #[error("failed to start worker {index}: {source}")]
    Spawn {
        index: usize,
        source: std::io::Error,
    },
    #[error("worker {index} panicked: {message}")]
    Join { index: usize, message: String },
    #[error("send error: {0:?}")]
    Send(#[from] SendError),
}

/// Runs `worker_count` workers over the inputs `base_n .. base_n + worker_count`,
/// each computing the depth-guarded Fibonacci of its own input.
///
/// Returns the completed work items in index order. Workers may finish in any
/// real-time order; every started worker is joined, in index order, before a
/// single result is read, so the ordering is a reporting guarantee rather
/// than a completion guarantee.
pub fn run(base_n: u64, worker_count: usize) -> Result<Vec<WorkItem>, PoolError> {
    run_with(base_n, worker_count, |n| guarded::evaluate(n, 0))
}

/// Same pool lifecycle with a caller-supplied worker body.
pub fn run_with<F>(base_n: u64, worker_count: usize, work: F) -> Result<Vec<WorkItem>, PoolError>
where
    F: Fn(u64) -> i64 + Send + Clone + 'static,
{
    if worker_count > limits::MAX_WORKERS {
        return Err(PoolError::WorkerLimit {
            requested: worker_count,
            limit: limits::MAX_WORKERS,
        });
    }

    // One pre-allocated item per worker; each is moved into its worker,
    // mutated exactly once, and handed back over the channel.
    let items: Vec<WorkItem> = (0..worker_count)
        .map(|index| WorkItem {
            index,
            n: base_n + index as u64,
            result: None,
        })
        .collect();

    let (sender, receiver) = bounded::<WorkItem>(worker_count);
    let mut handles = Vec::with_capacity(worker_count);

    debug!(base_n, worker_count, "spawning workers");
    for mut item in items {
        let index = item.index;
        let sender = sender.clone();
        let work = work.clone();

        let spawned = thread::Builder::new()
            .name(format!("fib-worker-{index}"))
            .spawn(move || -> Result<(), PoolError> {
                item.result = Some(work(item.n));
                sender.send(item)?;
                Ok(())
            });

        match spawned {
            Ok(handle) => handles.push(handle),
            // Fail fast: report without joining already-started workers.
            // Their sends fail harmlessly once the receiver is dropped.
            Err(source) => return Err(PoolError::Spawn { index, source }),
        }
    }

    // Drop the pool's sender so the receiver drains once all workers finish
    drop(sender);

    debug!("joining workers");
    for (index, handle) in handles.into_iter().enumerate() {
        handle.join().map_err(|e| PoolError::Join {
            index,
            message: format!("{e:?}"),
        })??;
    }

    // Every worker has been joined; only now are results read.
    let mut completed: Vec<WorkItem> = Vec::with_capacity(worker_count);
    for item in receiver {
        completed.push(item);
    }
    completed.sort_by_key(|item| item.index);

    debug!(completed = completed.len(), "pool complete");
    Ok(completed)
}
