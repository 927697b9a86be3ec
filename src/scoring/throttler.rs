use std::sync::Arc;
use tokio::sync::Semaphore;

/// Limits how many metric computations run simultaneously.
///
/// Wrap in an `Arc` via [`Throttler::new`], then call [`Throttler::acquire`]
/// before each unit of work. At most `max_concurrent` tasks will run at a
/// time; the rest queue on the semaphore in submission order.
#[derive(Debug)]
pub struct Throttler {
    semaphore: Arc<Semaphore>,
}

impl Throttler {
    /// Create a new throttler that allows at most `max_concurrent` tasks at a time.
    #[must_use]
    pub fn new(max_concurrent: usize) -> Arc<Self> {
        Arc::new(Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent)),
        })
    }

    /// Acquire a concurrency slot.
    ///
    /// The returned permit must be held for the duration of the work. When it
    /// is dropped, the slot becomes available for another task.
    pub async fn acquire(&self) -> tokio::sync::OwnedSemaphorePermit {
        Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .expect("semaphore is never closed")
    }
}
