//! Storage-size probing.
//!
//! MySQL's `information_schema` figures lag behind actual table contents, so
//! every read is preceded by a `CHECK TABLE` + `ANALYZE TABLE` pass that
//! forces a statistics refresh. That makes the probe expensive: it is only
//! invoked from the monitor tick and the baseline/final reads, never per
//! insert.

use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::Pool;

use crate::config::GenerationConfig;
use crate::error::ProbeError;

/// Reported storage footprint of the target schema.
#[async_trait]
pub trait SizeProbe: Send + Sync {
    /// Current reported size of the target schema in bytes, 0 when no
    /// metadata exists yet.
    async fn current_size(&self) -> Result<u64, ProbeError>;
}

/// Probe backed by `information_schema.TABLES`.
pub struct MySqlSizeProbe {
    pool: Pool,
    database: String,
    tables: Vec<String>,
}

impl MySqlSizeProbe {
    pub fn new(pool: Pool, config: &GenerationConfig) -> Self {
        Self {
            pool,
            database: config.database.clone(),
            tables: config.table_names(),
        }
    }

    /// Reported size of every schema on the server, for the closing listing.
    pub async fn database_sizes(&self) -> Result<Vec<(String, u64)>, ProbeError> {
        let mut conn = self.pool.get_conn().await?;
        let sizes = conn
            .query(
                "SELECT table_schema, \
                 CAST(COALESCE(SUM(data_length + index_length), 0) AS UNSIGNED) \
                 FROM information_schema.TABLES GROUP BY table_schema",
            )
            .await?;
        Ok(sizes)
    }
}

#[async_trait]
impl SizeProbe for MySqlSizeProbe {
    async fn current_size(&self) -> Result<u64, ProbeError> {
        let mut conn = self.pool.get_conn().await?;

        // Refresh the statistics the size query reads from.
        let table_list = self
            .tables
            .iter()
            .map(|t| format!("`{t}`"))
            .collect::<Vec<_>>()
            .join(", ");
        conn.query_drop(format!("CHECK TABLE {table_list}")).await?;
        conn.query_drop(format!("ANALYZE TABLE {table_list}"))
            .await?;

        let size: Option<u64> = conn
            .exec_first(
                "SELECT CAST(COALESCE(SUM(data_length + index_length), 0) AS UNSIGNED) \
                 FROM information_schema.TABLES WHERE table_schema = ?",
                (self.database.as_str(),),
            )
            .await?;

        Ok(size.unwrap_or(0))
    }
}
