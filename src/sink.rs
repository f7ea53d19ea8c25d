//! Row insertion seam.

use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::Pool;
use rowgen::Row;

use crate::error::InsertError;

/// Destination for generated rows. Abstract so the worker pool stays
/// independent of the driver and testable against fakes.
#[async_trait]
pub trait RowSink: Send + Sync {
    /// Insert one row into the named table.
    async fn insert_row(&self, table: &str, row: &Row) -> Result<(), InsertError>;
}

/// Sink writing through a shared `mysql_async` pool. Each in-flight insert
/// holds one pooled connection, so the pool constraints bound the number of
/// concurrent database connections.
pub struct MySqlRowSink {
    pool: Pool,
}

impl MySqlRowSink {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RowSink for MySqlRowSink {
    async fn insert_row(&self, table: &str, row: &Row) -> Result<(), InsertError> {
        let mut conn = self.pool.get_conn().await?;
        let sql = format!(
            "INSERT INTO `{table}` (name, height, weight, age, description) \
             VALUES (?, ?, ?, ?, ?)"
        );
        conn.exec_drop(
            sql,
            (
                row.name.as_str(),
                row.height,
                row.weight,
                row.age,
                row.description,
            ),
        )
        .await?;
        Ok(())
    }
}
