//! The fixed-size insertion worker pool.
//!
//! Exactly `concurrency` long-lived tasks repeatedly insert rows against
//! randomly chosen tables until the shared cancellation token fires. The
//! structural bound on worker count is also the bound on simultaneous
//! in-flight database operations; there is no semaphore and no unbounded
//! task creation.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::config::GenerationConfig;
use crate::error::InsertError;
use crate::sink::RowSink;

/// Fixed delay before retrying an insert that hit connection exhaustion.
pub const RETRY_BACKOFF: Duration = Duration::from_secs(5);

/// Attempts per logical insert before giving up on that row.
pub const MAX_INSERT_ATTEMPTS: u32 = 100;

/// Counters aggregated across all workers.
///
/// `active`/`peak` exist only for peak-concurrency reporting; correctness
/// never depends on them.
#[derive(Default)]
struct Counters {
    inserted: AtomicU64,
    failed: AtomicU64,
    active: AtomicUsize,
    peak: AtomicUsize,
}

/// Totals observed by the pool over one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    pub rows_inserted: u64,
    pub rows_failed: u64,
    pub peak_workers: usize,
}

/// Spawns and drains the insertion workers.
pub struct WorkerPool {
    sink: Arc<dyn RowSink>,
    tables: Arc<Vec<String>>,
    concurrency: usize,
}

impl WorkerPool {
    pub fn new(sink: Arc<dyn RowSink>, config: &GenerationConfig) -> Self {
        Self {
            sink,
            tables: Arc::new(config.table_names()),
            concurrency: config.concurrency,
        }
    }

    #[cfg(test)]
    fn with_tables(sink: Arc<dyn RowSink>, tables: Vec<String>, concurrency: usize) -> Self {
        Self {
            sink,
            tables: Arc::new(tables),
            concurrency,
        }
    }

    /// Run workers until the token is cancelled, then drain them and return
    /// the aggregated stats. The return happens-after every worker has
    /// observed cancellation and finished its in-flight insert.
    pub async fn run(&self, cancel: &CancellationToken) -> Result<WorkerStats, JoinError> {
        let counters = Arc::new(Counters::default());

        let handles: Vec<_> = (0..self.concurrency)
            .map(|_| {
                tokio::spawn(worker_loop(
                    Arc::clone(&self.sink),
                    Arc::clone(&self.tables),
                    Arc::clone(&counters),
                    cancel.clone(),
                ))
            })
            .collect();

        for handle in handles {
            handle.await?;
        }

        Ok(WorkerStats {
            rows_inserted: counters.inserted.load(Ordering::Relaxed),
            rows_failed: counters.failed.load(Ordering::Relaxed),
            peak_workers: counters.peak.load(Ordering::Relaxed),
        })
    }
}

async fn worker_loop(
    sink: Arc<dyn RowSink>,
    tables: Arc<Vec<String>>,
    counters: Arc<Counters>,
    cancel: CancellationToken,
) {
    let mut rng = StdRng::from_entropy();

    'rows: while !cancel.is_cancelled() {
        let table = &tables[rng.gen_range(0..tables.len())];
        let row = rowgen::random_row(&mut rng);

        let active = counters.active.fetch_add(1, Ordering::Relaxed) + 1;
        counters.peak.fetch_max(active, Ordering::Relaxed);

        let mut attempt = 1;
        let result = loop {
            match sink.insert_row(table, &row).await {
                Err(InsertError::Capacity(reason)) if attempt < MAX_INSERT_ATTEMPTS => {
                    warn!(%table, attempt, "connection capacity exhausted, backing off: {reason}");
                    counters.active.fetch_sub(1, Ordering::Relaxed);
                    tokio::select! {
                        _ = cancel.cancelled() => continue 'rows,
                        _ = tokio::time::sleep(RETRY_BACKOFF) => {}
                    }
                    counters.active.fetch_add(1, Ordering::Relaxed);
                    attempt += 1;
                }
                other => break other,
            }
        };
        counters.active.fetch_sub(1, Ordering::Relaxed);

        match result {
            Ok(()) => {
                counters.inserted.fetch_add(1, Ordering::Relaxed);
            }
            Err(err) => {
                // Best-effort volume generation: a failed row never aborts
                // the run, it is counted and the worker moves on.
                warn!(%table, "failed to insert row: {err}");
                counters.failed.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rowgen::Row;
    use std::sync::atomic::AtomicU32;

    /// Sink that records the number of simultaneously in-flight inserts.
    struct ConcurrencyTrackingSink {
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        total: AtomicU64,
    }

    #[async_trait]
    impl RowSink for ConcurrencyTrackingSink {
        async fn insert_row(&self, _table: &str, _row: &Row) -> Result<(), InsertError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.total.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Sink that fails with a capacity error a fixed number of times before
    /// succeeding.
    struct FlakyCapacitySink {
        failures_left: AtomicU32,
        attempts: AtomicU32,
    }

    #[async_trait]
    impl RowSink for FlakyCapacitySink {
        async fn insert_row(&self, _table: &str, _row: &Row) -> Result<(), InsertError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            let left = self.failures_left.load(Ordering::SeqCst);
            if left > 0 {
                self.failures_left.fetch_sub(1, Ordering::SeqCst);
                return Err(InsertError::Capacity("too many connections".to_string()));
            }
            // Keep the paused-clock runtime advancing between inserts.
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok(())
        }
    }

    /// Sink that always fails with a non-capacity error.
    struct BrokenSink;

    #[async_trait]
    impl RowSink for BrokenSink {
        async fn insert_row(&self, _table: &str, _row: &Row) -> Result<(), InsertError> {
            tokio::time::sleep(Duration::from_millis(1)).await;
            Err(InsertError::Other("table is read only".to_string()))
        }
    }

    fn tables(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("table{i}")).collect()
    }

    async fn cancel_after(cancel: CancellationToken, after: Duration) {
        tokio::time::sleep(after).await;
        cancel.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_in_flight_inserts_never_exceed_concurrency() {
        let sink = Arc::new(ConcurrencyTrackingSink {
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            total: AtomicU64::new(0),
        });
        let pool = WorkerPool::with_tables(sink.clone(), tables(2), 4);

        let cancel = CancellationToken::new();
        tokio::spawn(cancel_after(cancel.clone(), Duration::from_secs(1)));
        let stats = pool.run(&cancel).await.unwrap();

        let max = sink.max_in_flight.load(Ordering::SeqCst);
        assert!(max <= 4, "observed {max} concurrent inserts");
        assert!(stats.peak_workers <= 4);
        assert_eq!(stats.rows_inserted, sink.total.load(Ordering::SeqCst));
        assert_eq!(stats.rows_failed, 0);
        assert!(stats.rows_inserted > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_capacity_errors_are_retried_until_success() {
        // 99 capacity failures then success: the row still counts as
        // inserted and the run is not aborted.
        let sink = Arc::new(FlakyCapacitySink {
            failures_left: AtomicU32::new(99),
            attempts: AtomicU32::new(0),
        });
        let pool = WorkerPool::with_tables(sink.clone(), tables(1), 1);

        let cancel = CancellationToken::new();
        // Cancel after the first success; 99 backoffs take 495s of paused time.
        tokio::spawn(cancel_after(cancel.clone(), Duration::from_secs(496)));
        let stats = pool.run(&cancel).await.unwrap();

        assert!(stats.rows_inserted >= 1);
        assert_eq!(stats.rows_failed, 0);
        assert!(sink.attempts.load(Ordering::SeqCst) >= 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_capacity_errors_are_counted_and_skipped() {
        let pool = WorkerPool::with_tables(Arc::new(BrokenSink), tables(1), 2);

        let cancel = CancellationToken::new();
        tokio::spawn(cancel_after(cancel.clone(), Duration::from_millis(50)));
        let stats = pool.run(&cancel).await.unwrap();

        assert_eq!(stats.rows_inserted, 0);
        assert!(stats.rows_failed > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_workers_drain_promptly_on_cancellation() {
        let sink = Arc::new(ConcurrencyTrackingSink {
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            total: AtomicU64::new(0),
        });
        let pool = WorkerPool::with_tables(sink.clone(), tables(1), 8);

        let cancel = CancellationToken::new();
        cancel.cancel();
        let stats = pool.run(&cancel).await.unwrap();

        // Already-cancelled token: no worker starts an insert.
        assert_eq!(stats.rows_inserted, 0);
        assert_eq!(stats.rows_failed, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_interrupts_backoff() {
        // Endless capacity errors; cancellation during the backoff sleep
        // must end the run without waiting out all 100 attempts.
        let sink = Arc::new(FlakyCapacitySink {
            failures_left: AtomicU32::new(u32::MAX),
            attempts: AtomicU32::new(0),
        });
        let pool = WorkerPool::with_tables(sink.clone(), tables(1), 1);

        let cancel = CancellationToken::new();
        tokio::spawn(cancel_after(cancel.clone(), Duration::from_secs(7)));
        let stats = pool.run(&cancel).await.unwrap();

        assert_eq!(stats.rows_inserted, 0);
        let attempts = sink.attempts.load(Ordering::SeqCst);
        assert!(attempts < 5, "expected early exit, saw {attempts} attempts");
    }
}
