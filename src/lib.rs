//! mysql-loadgen library
//!
//! Fills a MySQL deployment with synthetic rows until the database's own
//! reported storage footprint has grown by a target amount. Intended for
//! producing test/demo data volumes for capacity and performance testing.
//!
//! # How a run works
//!
//! 1. Provision the target database and `table{N}` tables (idempotent,
//!    optionally dropping prior state first)
//! 2. Take a baseline size reading from `information_schema`
//! 3. Run exactly `concurrency` persistent insertion workers alongside one
//!    progress monitor, all sharing a single cancellation token
//! 4. The monitor cancels the token once reported growth reaches the
//!    target; workers drain, a final reading is taken and summarized
//!
//! Termination is approximate by design: the size figures come from
//! refreshed-but-lagging table statistics, so a run converges on the target
//! within about one polling interval's worth of inserts.
//!
//! # CLI usage
//!
//! ```bash
//! mysql-loadgen \
//!   --size 1.5GB \
//!   --host mysql.example.com --port 3306 \
//!   --user root --password secret \
//!   --database sampleData \
//!   --tables 4 --concurrency 16 \
//!   --overwrite
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod monitor;
pub mod probe;
pub mod provision;
pub mod report;
pub mod sink;
pub mod workers;

pub use config::{GenerationConfig, GeneratorOpts};
pub use error::{GenerateError, InsertError, ProbeError, ProvisionError};
pub use report::RunSummary;
