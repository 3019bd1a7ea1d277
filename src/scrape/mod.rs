pub mod details;
pub mod links;

use std::time::Duration;

/// Fixed delay tolerating the target site's client-side rendering latency.
pub(crate) async fn settle(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
