//! Timing instrumentation for async operations.

use std::future::Future;
use std::time::Instant;
use tracing::debug;

/// Await a future and log how long it took.
///
/// The elapsed time is logged whether or not the future's output is an error,
/// and the output is returned unchanged.
///
/// # Example
/// ```rust,ignore
/// let report = measure("load_report", load_report(&config)).await?;
/// ```
pub async fn measure<F, T>(name: &str, future: F) -> T
where
    F: Future<Output = T>,
{
    let start = Instant::now();
    let result = future.await;
    debug!("{} took {}ms", name, start.elapsed().as_millis());
    result
}
