use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::FoodsApi;
use crate::auth::Session;
use crate::models::Order;

/// Refresh cadence the order-history screen uses.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Fixed-interval background refresh of the user's order history.
///
/// Cancellation is dropping the poller: the handle aborts the task, and a
/// fetch that completes after the last subscriber is gone updates nothing
/// observable. Fetch failures keep the previous snapshot and are reported as
/// a diagnostic line — there is no retry beyond the next tick.
pub struct OrderHistoryPoller {
    rx: watch::Receiver<Vec<Order>>,
    handle: JoinHandle<()>,
}

impl OrderHistoryPoller {
    /// Spawn the polling task. It fetches immediately, then every `interval`.
    ///
    /// FoodsApi is not Clone, so the task builds its own instance from the
    /// URL, same as any other background consumer of the API.
    pub fn spawn(api_url: &str, session: Session, interval: Duration) -> Self {
        let (tx, rx) = watch::channel(Vec::new());
        let api_url = api_url.to_string();

        let handle = tokio::spawn(async move {
            let api = FoodsApi::new(&api_url);
            loop {
                match api.order_history(&session).await {
                    Ok(orders) => {
                        if tx.send(orders).is_err() {
                            break;
                        }
                    }
                    Err(e) => eprintln!("[poll] order history fetch failed: {}", e),
                }
                if tx.is_closed() {
                    break;
                }
                tokio::time::sleep(interval).await;
            }
        });

        Self { rx, handle }
    }

    /// The most recent snapshot (empty until the first fetch lands).
    pub fn latest(&self) -> Vec<Order> {
        self.rx.borrow().clone()
    }

    /// Wait for the next snapshot. Returns `false` once the poller has shut
    /// down and no further updates will arrive.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

impl Drop for OrderHistoryPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
