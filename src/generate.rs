//! The generation run controller.
//!
//! Drives one run end to end: provision the schema, take a baseline size
//! reading, run the worker pool and the progress monitor against one shared
//! cancellation token, drain, take the final reading and build the summary.

use std::sync::Arc;
use std::time::Instant;

use mysql_async::Pool;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::GenerationConfig;
use crate::error::GenerateError;
use crate::monitor::ProgressMonitor;
use crate::probe::{MySqlSizeProbe, SizeProbe};
use crate::provision;
use crate::report::RunSummary;
use crate::sink::MySqlRowSink;
use crate::workers::WorkerPool;

/// Run the generator to completion.
///
/// Returns the run summary and the closing per-schema size listing.
/// Provisioning and baseline/final probe failures are fatal; individual
/// insert failures are contained to their worker and only surface as the
/// failed-row count.
pub async fn run(
    config: &GenerationConfig,
) -> Result<(RunSummary, Vec<(String, u64)>), GenerateError> {
    let started = Instant::now();

    provision::ensure_database(config).await?;
    let pool = Pool::new(config.database_opts());
    provision::ensure_tables(&pool, config).await?;

    let probe = Arc::new(MySqlSizeProbe::new(pool.clone(), config));
    let initial_size = probe
        .current_size()
        .await
        .map_err(GenerateError::InitialProbe)?;
    info!(
        "current database size: {}, amount to insert: {}",
        sizeunit::format_size(initial_size),
        sizeunit::format_size(config.target_bytes),
    );

    let cancel = CancellationToken::new();
    let monitor = ProgressMonitor::new(
        Arc::clone(&probe) as Arc<dyn SizeProbe>,
        config.report_interval,
        initial_size,
        config.target_bytes,
    );
    let monitor_handle = tokio::spawn({
        let cancel = cancel.clone();
        async move { monitor.run(cancel).await }
    });

    info!("starting {} insertion workers", config.concurrency);
    let sink = Arc::new(MySqlRowSink::new(pool.clone()));
    let workers = WorkerPool::new(sink, config);
    let stats = workers.run(&cancel).await?;
    monitor_handle.await?;

    info!("workers drained, taking final size reading");
    let final_size = probe
        .current_size()
        .await
        .map_err(GenerateError::FinalProbe)?;
    let sizes = probe
        .database_sizes()
        .await
        .map_err(GenerateError::FinalProbe)?;
    pool.disconnect().await?;

    let summary = RunSummary::new(started.elapsed(), initial_size, final_size, stats);
    Ok((summary, sizes))
}
