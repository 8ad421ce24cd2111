//! Bounded pool for blocking file operations.
//!
//! Store calls are synchronous; running one on the actix event loop would
//! stall every connected caller behind a single slow file. [`FileOpPool`]
//! pushes them onto tokio's blocking thread pool instead, capped to a fixed
//! number of slots plus a bounded pending queue. Submissions past the cap
//! are rejected rather than queued without limit.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;
use tokio::sync::Semaphore;

#[derive(Debug, Error)]
pub enum PoolError {
    /// Every worker slot is busy and the pending queue is full.
    #[error("file operation queue is full, try again shortly")]
    Saturated,
    #[error("file operation worker panicked")]
    Panicked,
}

pub struct FileOpPool {
    slots: Arc<Semaphore>,
    in_flight: Arc<AtomicUsize>,
    /// workers + max_pending: total submissions allowed in the pool at once.
    capacity: usize,
}

impl FileOpPool {
    pub fn new(workers: usize, max_pending: usize) -> Self {
        let workers = workers.max(1);
        FileOpPool {
            slots: Arc::new(Semaphore::new(workers)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            capacity: workers + max_pending,
        }
    }

    /// Run a blocking closure on a worker slot, waiting in the bounded queue
    /// while all slots are busy. Once the closure is handed to a worker it
    /// runs to completion even if the caller drops the future; the result is
    /// simply discarded.
    pub async fn run<T, F>(&self, f: F) -> Result<T, PoolError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        if self.in_flight.fetch_add(1, Ordering::SeqCst) + 1 > self.capacity {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            return Err(PoolError::Saturated);
        }
        // Releases the in-flight slot if the caller abandons the future while
        // still queued; once the closure starts, the worker owns the guard.
        let guard = InFlightGuard(Arc::clone(&self.in_flight));

        // The semaphore is never closed, so acquire cannot fail.
        let permit = Arc::clone(&self.slots)
            .acquire_owned()
            .await
            .expect("file op semaphore closed");

        // Permit and guard move into the blocking task: the worker slot stays
        // occupied until the operation finishes, not until the caller's future
        // is dropped. A disconnecting client cannot widen the pool.
        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let _guard = guard;
            f()
        })
        .await
        .map_err(|_| PoolError::Panicked)
    }
}

struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
