//! # schema-inspect
//!
//! Catalog-driven column discovery for MySQL/MariaDB, PostgreSQL and
//! SQL Server.
//!
//! Each engine describes its tables differently: MySQL hides `unsigned` and
//! enum members in `column_type`, PostgreSQL reports defaults as cast
//! expressions, SQL Server needs two stored procedures and wraps defaults
//! in parentheses. This library reads those catalogs and returns one
//! dialect-independent [`ColumnDescriptor`] per column:
//!
//! - **Normalized types**: lower-cased base type with size and scale split out
//! - **Literal defaults**: coerced to the column's category, expressions dropped
//! - **Key flags**: autoincrement and (composite) primary-key membership
//! - **Declaration order**: columns iterate in ordinal order
//!
//! ## Example
//!
//! ```rust,no_run
//! use schema_inspect::{PostgresExecutor, SchemaInspector};
//!
//! # async fn run(client: tokio_postgres::Client) -> schema_inspect::Result<()> {
//! let inspector = SchemaInspector::connect(PostgresExecutor::new(client), "postgres").await?;
//! for (name, column) in inspector.fetch_table_columns("public.users").await? {
//!     println!("{}: {} (pk: {})", name, column.data_type, column.primary_key);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod drivers;
pub mod error;
pub mod inspector;

// Re-exports for convenient access
pub use config::InspectorConfig;
pub use crate::core::{
    CatalogExecutor, CatalogQuery, CatalogRow, CatalogValue, ColumnDescriptor, ColumnFactory,
    DefaultValue, Dialect,
};
pub use drivers::{
    DialectImpl, MssqlDialect, MssqlExecutor, MysqlDialect, PostgresDialect, PostgresExecutor,
};
#[cfg(feature = "mysql")]
pub use drivers::MysqlExecutor;
pub use error::{InspectError, Result};
pub use inspector::SchemaInspector;
