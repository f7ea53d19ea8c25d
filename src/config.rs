//! CLI options and the immutable run configuration.

use std::time::Duration;

use clap::Parser;
use mysql_async::{Opts, OptsBuilder, PoolConstraints, PoolOpts};
use sizeunit::MalformedSizeError;

/// Command-line options for the generator.
#[derive(Parser, Clone, Debug)]
#[command(name = "mysql-loadgen")]
#[command(about = "Fills a MySQL deployment with synthetic rows up to a target data size")]
pub struct GeneratorOpts {
    /// Amount of data to insert, e.g. "128MB" or "1.5GB"
    #[arg(long, default_value = "128MB")]
    pub size: String,

    /// MySQL host address
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Port the MySQL server is listening on
    #[arg(long, default_value_t = 3306)]
    pub port: u16,

    /// Username to connect with
    #[arg(long, env = "USERNAME", default_value = "")]
    pub user: String,

    /// Password to connect with
    #[arg(long, env = "PASSWORD", default_value = "")]
    pub password: String,

    /// Name of the database to create and fill
    #[arg(long, default_value = "sampleData")]
    pub database: String,

    /// Number of parallel insertion workers
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub concurrency: u32,

    /// Number of tables to spread inserts across
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub tables: u32,

    /// Drop the target database (if it exists) before inserting
    #[arg(long)]
    pub overwrite: bool,

    /// Seconds between progress size probes
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=5))]
    pub report_interval: u64,
}

/// Immutable configuration for one generation run.
///
/// Built once from [`GeneratorOpts`] and passed by reference into every
/// component; the size string is resolved to bytes here so a malformed value
/// fails before any database connection is attempted.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub target_bytes: u64,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub table_count: usize,
    pub concurrency: usize,
    pub overwrite: bool,
    pub report_interval: Duration,
}

impl GenerationConfig {
    pub fn from_opts(opts: GeneratorOpts) -> Result<Self, MalformedSizeError> {
        let target_bytes = sizeunit::parse_size(&opts.size)?;
        Ok(Self {
            target_bytes,
            host: opts.host,
            port: opts.port,
            user: opts.user,
            password: opts.password,
            database: opts.database,
            table_count: opts.tables as usize,
            concurrency: opts.concurrency as usize,
            overwrite: opts.overwrite,
            report_interval: Duration::from_secs(opts.report_interval),
        })
    }

    /// Name of the N-th target table.
    pub fn table_name(index: usize) -> String {
        format!("table{index}")
    }

    /// Names of all target tables.
    pub fn table_names(&self) -> Vec<String> {
        (0..self.table_count).map(Self::table_name).collect()
    }

    /// Connection options for the server itself, with no database selected.
    /// Used by provisioning, which runs before the target database exists.
    pub fn server_opts(&self) -> Opts {
        self.opts_for(None).into()
    }

    /// Connection options for the target database, with the pool bounded
    /// slightly above the worker count so each worker can hold a connection
    /// while the monitor probes concurrently.
    pub fn database_opts(&self) -> Opts {
        let constraints = PoolConstraints::new(self.concurrency, self.concurrency + 10)
            .expect("pool minimum is always below pool maximum");
        self.opts_for(Some(self.database.as_str()))
            .pool_opts(PoolOpts::default().with_constraints(constraints))
            .into()
    }

    fn opts_for(&self, database: Option<&str>) -> OptsBuilder {
        OptsBuilder::default()
            .ip_or_hostname(self.host.clone())
            .tcp_port(self.port)
            .user(Some(self.user.clone()))
            .pass(Some(self.password.clone()))
            .db_name(database)
    }

    /// Connection target for logging, with the password masked.
    pub fn display_target(&self) -> String {
        format!(
            "mysql://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}
