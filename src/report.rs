//! Run summary reporting.

use std::time::Duration;

use sizeunit::format_size;

use crate::workers::WorkerStats;

/// Outcome of a completed generation run, computed once from the baseline
/// and final size reads plus the worker counters.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub elapsed: Duration,
    pub initial_size: u64,
    pub final_size: u64,
    pub rows_inserted: u64,
    pub rows_failed: u64,
    pub peak_workers: usize,
}

impl RunSummary {
    pub fn new(elapsed: Duration, initial_size: u64, final_size: u64, stats: WorkerStats) -> Self {
        Self {
            elapsed,
            initial_size,
            final_size,
            rows_inserted: stats.rows_inserted,
            rows_failed: stats.rows_failed,
            peak_workers: stats.peak_workers,
        }
    }

    /// Bytes of reported database growth over the run.
    pub fn bytes_inserted(&self) -> u64 {
        self.final_size.saturating_sub(self.initial_size)
    }

    /// Average throughput in bytes per second, 0 when no time elapsed.
    pub fn bytes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.bytes_inserted() as f64 / secs
        } else {
            0.0
        }
    }

    /// Render the user-facing summary block.
    pub fn render(&self) -> String {
        format!(
            "=========================== Summary ===========================\n\
             {:>35}: {}\n\
             {:>35}: {:.2?}\n\
             {:>35}: {}/s\n\
             {:>35}: {}\n\
             {:>35}: {}\n\
             {:>35}: {}",
            "Total data inserted",
            format_size(self.bytes_inserted()),
            "Total time taken",
            self.elapsed,
            "Speed",
            format_size(self.bytes_per_second() as u64),
            "Rows inserted",
            self.rows_inserted,
            "Rows failed",
            self.rows_failed,
            "Peak concurrent workers",
            self.peak_workers,
        )
    }
}

/// Render the per-schema size listing printed after the summary.
pub fn render_database_sizes(sizes: &[(String, u64)]) -> String {
    let mut out = String::from("====================== Current Database Sizes =================");
    for (schema, bytes) in sizes {
        out.push_str(&format!("\n{schema:>35}: {}", format_size(*bytes)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(inserted: u64, failed: u64, peak: usize) -> WorkerStats {
        WorkerStats {
            rows_inserted: inserted,
            rows_failed: failed,
            peak_workers: peak,
        }
    }

    #[test]
    fn test_bytes_inserted_never_negative() {
        // The final read can only shrink if someone else dropped data
        // mid-run; the summary saturates instead of wrapping.
        let summary = RunSummary::new(Duration::from_secs(1), 5000, 4000, stats(0, 0, 1));
        assert_eq!(summary.bytes_inserted(), 0);
    }

    #[test]
    fn test_throughput() {
        let summary = RunSummary::new(Duration::from_secs(10), 0, 10 * 1024, stats(10, 0, 4));
        assert_eq!(summary.bytes_per_second(), 1024.0);
    }

    #[test]
    fn test_throughput_guards_zero_elapsed() {
        let summary = RunSummary::new(Duration::ZERO, 0, 10 * 1024, stats(10, 0, 4));
        assert_eq!(summary.bytes_per_second(), 0.0);
    }

    #[test]
    fn test_render_contains_fields() {
        let summary = RunSummary::new(Duration::from_secs(2), 1024, 3 * 1024 * 1024, stats(7, 2, 3));
        let text = summary.render();
        assert!(text.contains("Total data inserted"));
        assert!(text.contains("Rows failed"));
        assert!(text.contains("Peak concurrent workers"));
        assert!(text.contains('7'));
    }

    #[test]
    fn test_render_database_sizes() {
        let text = render_database_sizes(&[
            ("mysql".to_string(), 123456),
            ("sampleData".to_string(), 128 * 1024 * 1024),
        ]);
        assert!(text.contains("mysql"));
        assert!(text.contains("sampleData"));
        assert!(text.contains("MB"));
    }
}
