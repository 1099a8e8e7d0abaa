//! Bounded parallel execution that preserves input order.
//!
//! Used to fan out independent per-item lookups (one per repository during
//! access resolution) while keeping the result order equal to the input
//! order.

use std::future::Future;
use std::pin::Pin;

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

/// Type alias for boxed futures tagged with their input index
type IndexedFuture<R> = Pin<Box<dyn Future<Output = (usize, R)> + Send>>;

/// Run `task` for every item with at most `max_concurrent` in flight.
///
/// Results come back in input order, whatever the completion order was.
/// Tasks return plain values, so one task's failure is whatever the task
/// encodes in `R` and never cancels its siblings. `max_concurrent` of 0 is
/// treated as 1.
///
/// # Example
///
/// ```ignore
/// let grants = run_indexed(
///     repos,
///     |repo| {
///         let resolver = resolver.clone();
///         async move { resolver.grant_for(&repo).await }
///     },
///     8,
/// )
/// .await;
/// ```
pub async fn run_indexed<T, R, F, Fut>(items: Vec<T>, task: F, max_concurrent: usize) -> Vec<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> Fut,
    Fut: Future<Output = R> + Send + 'static,
{
    if items.is_empty() {
        return Vec::new();
    }

    let limit = max_concurrent.max(1);
    let total = items.len();
    debug!("Running {} tasks with max {} concurrent", total, limit);

    let mut results: Vec<(usize, R)> = Vec::with_capacity(total);
    let mut futures: FuturesUnordered<IndexedFuture<R>> = FuturesUnordered::new();
    let mut pending = items.into_iter().enumerate();

    let make_future = |index: usize, item: T| -> IndexedFuture<R> {
        let fut = task(item);
        Box::pin(async move { (index, fut.await) })
    };

    // Seed initial batch up to the limit
    for (index, item) in pending.by_ref().take(limit) {
        futures.push(make_future(index, item));
    }

    // Keep the pool full as tasks complete
    while let Some(done) = futures.next().await {
        results.push(done);
        if let Some((index, item)) = pending.next() {
            futures.push(make_future(index, item));
        }
    }

    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result).collect()
}
