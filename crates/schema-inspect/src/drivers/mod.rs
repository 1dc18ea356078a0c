//! Database driver implementations.
//!
//! This module provides database-specific implementations of the core traits:
//!
//! - [`mysql`]: MySQL/MariaDB driver
//! - [`postgres`]: PostgreSQL driver
//! - [`mssql`]: Microsoft SQL Server driver
//! - [`common`]: Shared catalog queries and literal helpers
//!
//! Each driver module implements `Dialect` and, where a Rust client is
//! available, a `CatalogExecutor` adapter. Executors wrap connections the
//! caller already opened.
//!
//! # Static dispatch
//!
//! [`DialectImpl`] is an enum over the concrete dialects; the compiler
//! generates a match statement instead of using vtable dispatch.

pub mod common;
pub mod mssql;
pub mod mysql;
pub mod postgres;

// Re-export driver types
pub use mssql::{MssqlClient, MssqlDialect, MssqlExecutor};
#[cfg(feature = "mysql")]
pub use mysql::MysqlExecutor;
pub use mysql::MysqlDialect;
pub use postgres::{PostgresDialect, PostgresExecutor};

use async_trait::async_trait;

use crate::core::schema::{CatalogColumnRow, ColumnSpec};
use crate::core::traits::{CatalogExecutor, Dialect};
use crate::core::value::CatalogQuery;
use crate::error::{InspectError, Result};

/// Enum-based static dispatch for dialects.
///
/// Note: We use a manual impl instead of a dispatch macro; the async
/// method goes through `async_trait` either way.
#[derive(Debug, Clone)]
pub enum DialectImpl {
    Mysql(MysqlDialect),
    Postgres(PostgresDialect),
    Mssql(MssqlDialect),
}

/// Kind of dialect named by a database type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DbKind {
    Mysql,
    Mariadb,
    Postgres,
    Mssql,
}

fn parse_db_type(db_type: &str) -> Result<DbKind> {
    match db_type.trim().to_lowercase().as_str() {
        "mysql" => Ok(DbKind::Mysql),
        "mariadb" => Ok(DbKind::Mariadb),
        "postgres" | "postgresql" | "pg" => Ok(DbKind::Postgres),
        "mssql" | "sqlserver" | "sql_server" => Ok(DbKind::Mssql),
        other => Err(InspectError::Config(format!(
            "Unknown database type: '{}'. Supported types: mysql, mariadb, postgres, mssql",
            other
        ))),
    }
}

impl DialectImpl {
    /// Create a dialect implementation from a database type string.
    ///
    /// No server round-trip: `mysql` yields a plain MySQL dialect and
    /// `mariadb` one with the MariaDB flag set.
    ///
    /// # Errors
    ///
    /// Returns an error if the database type is not recognized.
    pub fn from_db_type(db_type: &str) -> Result<Self> {
        Ok(match parse_db_type(db_type)? {
            DbKind::Mysql => DialectImpl::Mysql(MysqlDialect::new()),
            DbKind::Mariadb => DialectImpl::Mysql(MysqlDialect::mariadb()),
            DbKind::Postgres => DialectImpl::Postgres(PostgresDialect::new()),
            DbKind::Mssql => DialectImpl::Mssql(MssqlDialect::new()),
        })
    }

    /// Create a dialect implementation, asking a MySQL server whether it
    /// is MariaDB.
    ///
    /// Other types behave as [`from_db_type`](Self::from_db_type).
    pub async fn detect(db_type: &str, executor: &dyn CatalogExecutor) -> Result<Self> {
        match parse_db_type(db_type)? {
            DbKind::Mysql => Ok(DialectImpl::Mysql(MysqlDialect::detect(executor).await?)),
            _ => Self::from_db_type(db_type),
        }
    }

    /// Whether this is a MariaDB dialect.
    pub fn is_mariadb(&self) -> bool {
        matches!(self, DialectImpl::Mysql(d) if d.is_mariadb())
    }
}

#[async_trait]
impl Dialect for DialectImpl {
    fn name(&self) -> &str {
        match self {
            DialectImpl::Mysql(d) => d.name(),
            DialectImpl::Postgres(d) => d.name(),
            DialectImpl::Mssql(d) => d.name(),
        }
    }

    fn quote_prefix(&self) -> &'static str {
        match self {
            DialectImpl::Mysql(d) => d.quote_prefix(),
            DialectImpl::Postgres(d) => d.quote_prefix(),
            DialectImpl::Mssql(d) => d.quote_prefix(),
        }
    }

    fn quote_suffix(&self) -> &'static str {
        match self {
            DialectImpl::Mysql(d) => d.quote_suffix(),
            DialectImpl::Postgres(d) => d.quote_suffix(),
            DialectImpl::Mssql(d) => d.quote_suffix(),
        }
    }

    fn param_placeholder(&self, index: usize) -> String {
        match self {
            DialectImpl::Mysql(d) => d.param_placeholder(index),
            DialectImpl::Postgres(d) => d.param_placeholder(index),
            DialectImpl::Mssql(d) => d.param_placeholder(index),
        }
    }

    fn current_schema_query(&self) -> CatalogQuery {
        match self {
            DialectImpl::Mysql(d) => d.current_schema_query(),
            DialectImpl::Postgres(d) => d.current_schema_query(),
            DialectImpl::Mssql(d) => d.current_schema_query(),
        }
    }

    fn table_list_query(&self, schema: Option<&str>) -> CatalogQuery {
        match self {
            DialectImpl::Mysql(d) => d.table_list_query(schema),
            DialectImpl::Postgres(d) => d.table_list_query(schema),
            DialectImpl::Mssql(d) => d.table_list_query(schema),
        }
    }

    fn autoincrement_sql(&self) -> &'static str {
        match self {
            DialectImpl::Mysql(d) => d.autoincrement_sql(),
            DialectImpl::Postgres(d) => d.autoincrement_sql(),
            DialectImpl::Mssql(d) => d.autoincrement_sql(),
        }
    }

    fn extended_sql(&self) -> &'static str {
        match self {
            DialectImpl::Mysql(d) => d.extended_sql(),
            DialectImpl::Postgres(d) => d.extended_sql(),
            DialectImpl::Mssql(d) => d.extended_sql(),
        }
    }

    fn default_literal(&self, raw: Option<&str>) -> Option<String> {
        match self {
            DialectImpl::Mysql(d) => d.default_literal(raw),
            DialectImpl::Postgres(d) => d.default_literal(raw),
            DialectImpl::Mssql(d) => d.default_literal(raw),
        }
    }

    fn post_process(&self, spec: &mut ColumnSpec) {
        match self {
            DialectImpl::Mysql(d) => d.post_process(spec),
            DialectImpl::Postgres(d) => d.post_process(spec),
            DialectImpl::Mssql(d) => d.post_process(spec),
        }
    }

    async fn fetch_column_rows(
        &self,
        executor: &dyn CatalogExecutor,
        schema: Option<&str>,
        table: &str,
    ) -> Result<Vec<CatalogColumnRow>> {
        match self {
            DialectImpl::Mysql(d) => d.fetch_column_rows(executor, schema, table).await,
            DialectImpl::Postgres(d) => d.fetch_column_rows(executor, schema, table).await,
            DialectImpl::Mssql(d) => d.fetch_column_rows(executor, schema, table).await,
        }
    }
}
