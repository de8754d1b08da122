//! Minimum spacing between outbound lookups.
//!
//! The public Nominatim instance allows one request per second per client.
//! The lock is held across the sleep so concurrent callers queue in order.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

#[derive(Debug)]
pub(crate) struct Throttle {
    min_interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl Throttle {
    pub(crate) fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: Mutex::new(None),
        }
    }

    /// Waits until the next request slot is open, then reserves the one after.
    pub(crate) async fn acquire(&self) {
        if self.min_interval.is_zero() {
            return;
        }
        let mut next_slot = self.next_slot.lock().await;
        if let Some(at) = *next_slot {
            if at > Instant::now() {
                tokio::time::sleep_until(at).await;
            }
        }
        *next_slot = Some(Instant::now() + self.min_interval);
    }
}
