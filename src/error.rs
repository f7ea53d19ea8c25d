//! Error types for the load generator.

use thiserror::Error;

/// MySQL server error codes this tool reacts to.
///
/// `ER_CON_COUNT_ERROR` / `ER_TOO_MANY_USER_CONNECTIONS` mark the transient
/// connection-exhaustion class that is retried with backoff;
/// `ER_DB_CREATE_EXISTS` / `ER_TABLE_EXISTS_ERROR` mark the conditions
/// provisioning tolerates as success.
const ER_CON_COUNT_ERROR: u16 = 1040;
const ER_DB_CREATE_EXISTS: u16 = 1007;
const ER_TABLE_EXISTS_ERROR: u16 = 1050;
const ER_TOO_MANY_USER_CONNECTIONS: u16 = 1203;

/// Errors during database/table provisioning. Always fatal to the run.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// Table creation failed for a reason other than "already exists".
    #[error("failed to create table `{table}`: {source}")]
    Table {
        table: String,
        #[source]
        source: mysql_async::Error,
    },
}

/// Error from a storage-size probe.
#[derive(Error, Debug)]
#[error("size probe failed: {reason}")]
pub struct ProbeError {
    pub reason: String,
}

impl From<mysql_async::Error> for ProbeError {
    fn from(err: mysql_async::Error) -> Self {
        ProbeError {
            reason: err.to_string(),
        }
    }
}

/// Error from a single row insert.
///
/// `Capacity` is the connection-exhaustion class retried with backoff by the
/// worker pool; anything else is logged, counted and skipped.
#[derive(Error, Debug)]
pub enum InsertError {
    /// The server ran out of connection capacity.
    #[error("connection capacity exhausted: {0}")]
    Capacity(String),

    /// Any other per-row failure.
    #[error("{0}")]
    Other(String),
}

impl From<mysql_async::Error> for InsertError {
    fn from(err: mysql_async::Error) -> Self {
        if is_capacity_error(&err) {
            InsertError::Capacity(err.to_string())
        } else {
            InsertError::Other(err.to_string())
        }
    }
}

/// Top-level error for a generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Schema or table provisioning failed before any worker started.
    #[error("provisioning failed: {0}")]
    Provision(#[from] ProvisionError),

    /// The baseline size read failed; there is no reference point to
    /// measure progress against.
    #[error("initial {0}")]
    InitialProbe(#[source] ProbeError),

    /// The mandatory size read after draining failed.
    #[error("final {0}")]
    FinalProbe(#[source] ProbeError),

    /// MySQL error outside provisioning and probing.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// A worker or monitor task panicked.
    #[error("task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Whether this error belongs to the connection-exhaustion class.
pub fn is_capacity_error(err: &mysql_async::Error) -> bool {
    matches!(
        err,
        mysql_async::Error::Server(server)
            if server.code == ER_CON_COUNT_ERROR || server.code == ER_TOO_MANY_USER_CONNECTIONS
    )
}

/// Whether this error reports an already existing database or table.
pub fn is_already_exists(err: &mysql_async::Error) -> bool {
    matches!(
        err,
        mysql_async::Error::Server(server)
            if server.code == ER_DB_CREATE_EXISTS || server.code == ER_TABLE_EXISTS_ERROR
    )
}
