//! Schema inspection entry point.
//!
//! [`SchemaInspector`] pairs a [`CatalogExecutor`] with a [`DialectImpl`]
//! and turns catalog rows into [`ColumnDescriptor`]s:
//!
//! 1. split `schema.table` at the first dot
//! 2. fetch raw column rows through the dialect
//! 3. fold repeated rows per column ([`merge_rows`])
//! 4. parse the native type, extract the default literal, post-process
//! 5. build descriptors with the [`ColumnFactory`]

mod merge;

pub use merge::merge_rows;

use indexmap::IndexMap;
use tracing::debug;

use crate::config::InspectorConfig;
use crate::core::schema::{CatalogColumnRow, ColumnDescriptor, ColumnSpec};
use crate::core::traits::{CatalogExecutor, Dialect};
use crate::core::{identifier, parse_type_spec, ColumnFactory};
use crate::drivers::common::information_schema;
use crate::drivers::{DialectImpl, MysqlDialect};
use crate::error::Result;

/// Reads table and column metadata through a catalog executor.
pub struct SchemaInspector<E> {
    executor: E,
    dialect: DialectImpl,
    factory: ColumnFactory,
    default_schema: Option<String>,
}

impl<E: CatalogExecutor> SchemaInspector<E> {
    /// Create an inspector with an explicit dialect.
    pub fn new(executor: E, dialect: DialectImpl) -> Self {
        Self {
            executor,
            dialect,
            factory: ColumnFactory::new(),
            default_schema: None,
        }
    }

    /// Create an inspector for a database type, detecting MariaDB on MySQL
    /// servers.
    pub async fn connect(executor: E, db_type: &str) -> Result<Self> {
        let dialect = DialectImpl::detect(db_type, &executor).await?;
        Ok(Self::new(executor, dialect))
    }

    /// Create an inspector from configuration.
    ///
    /// An explicit `mariadb` setting skips server detection.
    pub async fn from_config(executor: E, config: &InspectorConfig) -> Result<Self> {
        config.validate()?;

        let dialect = match (DialectImpl::from_db_type(&config.r#type)?, config.mariadb) {
            (DialectImpl::Mysql(_), Some(flag)) => {
                DialectImpl::Mysql(MysqlDialect::with_mariadb(flag))
            }
            (DialectImpl::Mysql(_), None) => {
                DialectImpl::detect(&config.r#type, &executor).await?
            }
            (other, _) => other,
        };

        let mut inspector = Self::new(executor, dialect);
        inspector.default_schema = config.default_schema.clone();
        Ok(inspector)
    }

    /// Use `schema` for table specs that carry none.
    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = Some(schema.into());
        self
    }

    pub fn dialect(&self) -> &DialectImpl {
        &self.dialect
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn default_schema(&self) -> Option<&str> {
        self.default_schema.as_deref()
    }

    /// List table names.
    ///
    /// PostgreSQL without a schema returns `schema.table` names from every
    /// non-system schema. SQL Server ignores `schema` and lists all user
    /// tables.
    pub async fn fetch_table_list(&self, schema: Option<&str>) -> Result<Vec<String>> {
        let query = self.dialect.table_list_query(schema);
        self.executor.fetch_column(&query).await
    }

    /// The session's current schema.
    pub async fn fetch_current_schema(&self) -> Result<String> {
        information_schema::current_schema(&self.dialect, &self.executor).await
    }

    /// Describe the columns of `table` (`name` or `schema.name`).
    ///
    /// Columns come back in declaration order. An unknown table yields an
    /// empty map; executor errors are returned unchanged.
    pub async fn fetch_table_columns(
        &self,
        table: &str,
    ) -> Result<IndexMap<String, ColumnDescriptor>> {
        let (schema, name) = identifier::split_name(table);
        let schema = schema.or(self.default_schema.as_deref());

        let rows = self
            .dialect
            .fetch_column_rows(&self.executor, schema, name)
            .await?;

        let columns: IndexMap<String, ColumnDescriptor> = merge_rows(rows)
            .into_iter()
            .map(|(col_name, row)| (col_name, self.describe(row)))
            .collect();

        debug!(
            "Loaded {} columns for {}.{}",
            columns.len(),
            schema.unwrap_or("<current>"),
            name
        );

        Ok(columns)
    }

    /// Quote a possibly dotted identifier for this dialect.
    pub fn quote_name(&self, name: &str) -> String {
        self.dialect.quote_name(name)
    }

    fn describe(&self, row: CatalogColumnRow) -> ColumnDescriptor {
        let (data_type, parsed_size, parsed_scale) = parse_type_spec(&row.data_type);

        let mut spec = ColumnSpec {
            name: row.name,
            data_type,
            size: row.size.or(parsed_size),
            scale: row.scale.or(parsed_scale),
            not_null: row.not_null,
            default: self.dialect.default_literal(row.default.as_deref()),
            raw_default: row.default,
            auto_increment: row.auto_increment,
            primary_key: row.primary_key,
            options: None,
            extended: row.extended,
        };
        self.dialect.post_process(&mut spec);

        self.factory.build(spec)
    }
}
