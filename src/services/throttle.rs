use std::time::Duration;
use tokio::time::sleep;

/// Fixed pause between consecutive detail fetches. The workflow is
/// sequential, so there is nothing to coordinate beyond sleeping.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval: Duration,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub async fn wait(&self) {
        if !self.interval.is_zero() {
            sleep(self.interval).await;
        }
    }
}
