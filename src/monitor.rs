//! Progress monitoring.
//!
//! Polls the size probe on a fixed interval and raises the shared
//! cancellation token once the inserted volume reaches the target. The
//! probed figures come from statistics that lag actual contents, so the run
//! may over- or undershoot the target by roughly one polling interval's
//! worth of inserts; this approximation is accepted, not tightened.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::probe::SizeProbe;

/// Watches database growth and signals completion. Performs no inserts.
pub struct ProgressMonitor {
    probe: Arc<dyn SizeProbe>,
    interval: Duration,
    initial_size: u64,
    target_bytes: u64,
}

impl ProgressMonitor {
    pub fn new(
        probe: Arc<dyn SizeProbe>,
        interval: Duration,
        initial_size: u64,
        target_bytes: u64,
    ) -> Self {
        Self {
            probe,
            interval,
            initial_size,
            target_bytes,
        }
    }

    /// Tick until the target is reached, then cancel the shared token.
    /// Probe errors are logged and the next tick retried; they never abort
    /// the run. Returns early when the token is cancelled externally.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval);
        // The probe rebuilds table statistics; skip missed ticks instead of
        // bursting probes to catch up.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;

        let mut previous_size = self.initial_size;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => return,
                _ = ticker.tick() => {}
            }

            let current_size = match self.probe.current_size().await {
                Ok(size) => size,
                Err(err) => {
                    warn!("failed to read database size: {err}");
                    continue;
                }
            };

            let inserted = current_size.saturating_sub(self.initial_size);
            if current_size > previous_size {
                let percent = inserted as f64 * 100.0 / self.target_bytes as f64;
                info!(
                    "progress: {percent:.2}%, inserted {}, current size {}",
                    sizeunit::format_size(inserted),
                    sizeunit::format_size(current_size),
                );
                previous_size = current_size;
            }

            if inserted >= self.target_bytes {
                info!("target volume reached, stopping insertion");
                cancel.cancel();
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Probe whose reported size grows by a fixed step per read.
    struct GrowingProbe {
        size: AtomicU64,
        step: u64,
    }

    #[async_trait]
    impl SizeProbe for GrowingProbe {
        async fn current_size(&self) -> Result<u64, ProbeError> {
            Ok(self.size.fetch_add(self.step, Ordering::SeqCst))
        }
    }

    /// Probe that fails a number of reads before reporting completion.
    struct FlakyProbe {
        failures_left: AtomicU64,
        size: u64,
    }

    #[async_trait]
    impl SizeProbe for FlakyProbe {
        async fn current_size(&self) -> Result<u64, ProbeError> {
            if self.failures_left.load(Ordering::SeqCst) > 0 {
                self.failures_left.fetch_sub(1, Ordering::SeqCst);
                return Err(ProbeError {
                    reason: "statistics refresh failed".to_string(),
                });
            }
            Ok(self.size)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_monitor_cancels_once_target_reached() {
        let probe = Arc::new(GrowingProbe {
            size: AtomicU64::new(1000),
            step: 400,
        });
        let monitor = ProgressMonitor::new(probe, Duration::from_secs(1), 1000, 1000);

        let cancel = CancellationToken::new();
        monitor.run(cancel.clone()).await;

        assert!(cancel.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_monitor_tolerates_probe_errors() {
        let probe = Arc::new(FlakyProbe {
            failures_left: AtomicU64::new(3),
            size: 5000,
        });
        let monitor = ProgressMonitor::new(probe.clone(), Duration::from_secs(1), 0, 4096);

        let cancel = CancellationToken::new();
        monitor.run(cancel.clone()).await;

        assert!(cancel.is_cancelled());
        assert_eq!(probe.failures_left.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_monitor_stops_on_external_cancellation() {
        let probe = Arc::new(GrowingProbe {
            size: AtomicU64::new(0),
            step: 0,
        });
        let monitor = ProgressMonitor::new(probe, Duration::from_secs(1), 0, u64::MAX);

        let cancel = CancellationToken::new();
        let run = tokio::spawn({
            let cancel = cancel.clone();
            async move { monitor.run(cancel).await }
        });

        tokio::time::sleep(Duration::from_secs(3)).await;
        cancel.cancel();
        run.await.unwrap();
    }
}
