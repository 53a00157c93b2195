use std::time::Duration;

use tokio::time::{Instant, sleep_until};
use tracing::trace;

/// Spaces loop iterations at least `interval` apart.
///
/// The server simulates at 20 ticks per second, so reading world state more
/// often than every 50ms only reprocesses stale data and steals CPU from the
/// other bots sharing the host.
#[derive(Debug, Clone)]
pub struct TickThrottle {
    interval: Duration,
    last_start: Option<Instant>,
}

impl TickThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_start: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleeps out the remainder of the interval since the previous start and
    /// records the new start. Returns how long it slept.
    pub async fn wait(&mut self) -> Duration {
        let mut waited = Duration::ZERO;
        if let Some(last) = self.last_start {
            let next = last + self.interval;
            let now = Instant::now();
            if next > now {
                waited = next - now;
                trace!("[Throttle] Waiting {}ms before next loop", waited.as_millis());
                sleep_until(next).await;
            }
        }
        self.last_start = Some(Instant::now());
        waited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_wait_is_immediate() {
        let mut throttle = TickThrottle::new(Duration::from_millis(50));
        assert_eq!(throttle.wait().await, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_starts_are_one_interval_apart() {
        let mut throttle = TickThrottle::new(Duration::from_millis(50));
        let mut starts = Vec::new();
        for _ in 0..5 {
            throttle.wait().await;
            starts.push(Instant::now());
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        for pair in starts.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(50));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_iterations_are_not_delayed() {
        let mut throttle = TickThrottle::new(Duration::from_millis(50));
        throttle.wait().await;
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(throttle.wait().await, Duration::ZERO);
    }
}
