//! Database and table provisioning.
//!
//! Runs once before any worker starts. Creation is idempotent: an already
//! existing database or table counts as success, anything else aborts the
//! run.

use mysql_async::prelude::*;
use mysql_async::Pool;
use tracing::{debug, info};

use crate::config::GenerationConfig;
use crate::error::{is_already_exists, ProvisionError};

/// DDL statements run against the bare server, in execution order. With
/// `overwrite` set the drop must precede the create so a pre-existing
/// database starts the run empty.
fn database_statements(config: &GenerationConfig) -> Vec<String> {
    let mut statements = Vec::new();
    if config.overwrite {
        statements.push(format!("DROP DATABASE IF EXISTS `{}`", config.database));
    }
    statements.push(format!("CREATE DATABASE `{}`", config.database));
    statements
}

fn table_ddl(table: &str) -> String {
    format!(
        "CREATE TABLE `{table}` (\
         id INT NOT NULL AUTO_INCREMENT PRIMARY KEY, \
         name TEXT, height INT, weight INT, age INT, description TEXT)"
    )
}

/// Ensure the target database exists, dropping it first when `overwrite` is
/// set. Connects to the server without selecting a database.
pub async fn ensure_database(config: &GenerationConfig) -> Result<(), ProvisionError> {
    let pool = Pool::new(config.server_opts());
    let mut conn = pool.get_conn().await?;

    info!("pinging {}", config.display_target());
    conn.ping().await?;

    for statement in database_statements(config) {
        match conn.query_drop(statement.as_str()).await {
            Ok(()) => info!("ran `{statement}`"),
            Err(err) if is_already_exists(&err) => {
                info!("database `{}` already exists", config.database)
            }
            Err(err) => return Err(err.into()),
        }
    }

    drop(conn);
    pool.disconnect().await?;
    Ok(())
}

/// Ensure all target tables exist in the database.
pub async fn ensure_tables(pool: &Pool, config: &GenerationConfig) -> Result<(), ProvisionError> {
    let mut conn = pool.get_conn().await?;

    for table in config.table_names() {
        match conn.query_drop(table_ddl(&table)).await {
            Ok(()) => debug!("created table `{table}`"),
            Err(err) if is_already_exists(&err) => debug!("table `{table}` already exists"),
            Err(source) => return Err(ProvisionError::Table { table, source }),
        }
    }

    Ok(())
}
