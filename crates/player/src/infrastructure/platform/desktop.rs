//! Desktop platform implementations

use std::{future::Future, pin::Pin, time::Duration};

use crate::ports::outbound::SleepPort;

/// Desktop sleep using tokio timers
#[derive(Clone, Copy, Default)]
pub struct DesktopSleep;

impl SleepPort for DesktopSleep {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_waits_for_requested_duration() {
        let start = tokio::time::Instant::now();

        DesktopSleep.sleep_ms(3_000).await;

        assert!(start.elapsed() >= Duration::from_millis(3_000));
    }
}
