//! Core traits for schema inspection.
//!
//! - [`CatalogExecutor`]: runs catalog SQL against a live connection
//! - [`Dialect`]: catalog SQL and normalization rules for one database engine
//!
//! # Design Patterns
//!
//! - **Strategy**: a `Dialect` is chosen once per inspector and supplies every
//!   engine-specific rule
//! - **Template Method**: provided trait methods (`quote_name`, `parse_default`,
//!   `fetch_column`) build on the few required ones

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

use super::identifier;
use super::schema::{CatalogColumnRow, ColumnSpec, DefaultValue};
use super::value::{CatalogQuery, CatalogRow, CatalogValue};

/// Execute catalog queries.
///
/// The inspector never opens connections; it hands SQL to an executor and
/// awaits the rows. Queries are issued one at a time. Errors are returned
/// as-is and never retried.
#[async_trait]
pub trait CatalogExecutor: Send + Sync {
    /// Run a query and return every row.
    async fn fetch_all(&self, query: &CatalogQuery) -> Result<Vec<CatalogRow>>;

    /// Run a query and return the first column of every row as text.
    ///
    /// NULL cells are skipped.
    async fn fetch_column(&self, query: &CatalogQuery) -> Result<Vec<String>> {
        let rows = self.fetch_all(query).await?;
        Ok(rows
            .iter()
            .filter_map(|row| row.first().and_then(|v| v.as_text()))
            .map(|v| v.into_owned())
            .collect())
    }

    /// Run a query and return the first cell of the first row.
    async fn fetch_value(&self, query: &CatalogQuery) -> Result<Option<CatalogValue>> {
        let rows = self.fetch_all(query).await?;
        Ok(rows.into_iter().next().and_then(|row| row.first().cloned()))
    }
}

#[async_trait]
impl<T: CatalogExecutor + ?Sized> CatalogExecutor for Arc<T> {
    async fn fetch_all(&self, query: &CatalogQuery) -> Result<Vec<CatalogRow>> {
        (**self).fetch_all(query).await
    }
}

/// Catalog SQL and normalization rules for one database engine.
///
/// Implementations are immutable once built; any server trait discovered at
/// connect time (the MariaDB flag) is a plain field.
#[async_trait]
pub trait Dialect: Send + Sync {
    /// Dialect name (e.g., "mysql", "postgres", "mssql").
    fn name(&self) -> &str;

    /// Opening identifier delimiter.
    fn quote_prefix(&self) -> &'static str;

    /// Closing identifier delimiter.
    fn quote_suffix(&self) -> &'static str;

    /// Quote a possibly dotted identifier.
    fn quote_name(&self, name: &str) -> String {
        identifier::quote_name(name, self.quote_prefix(), self.quote_suffix())
    }

    /// Get parameter placeholder for prepared statements (1-based).
    fn param_placeholder(&self, index: usize) -> String;

    /// Single-value query returning the session's current schema.
    fn current_schema_query(&self) -> CatalogQuery;

    /// Query listing the tables of `schema`, or of every visible schema.
    fn table_list_query(&self, schema: Option<&str>) -> CatalogQuery;

    /// SQL expression computing the `_autoinc` flag in the column query.
    fn autoincrement_sql(&self) -> &'static str;

    /// Extra select-list fragment appended to the column query.
    fn extended_sql(&self) -> &'static str {
        ""
    }

    /// Extract the literal from a raw catalog default.
    ///
    /// Returns `None` for a missing default and for anything that is not a
    /// literal (function calls, keywords, expressions).
    fn default_literal(&self, raw: Option<&str>) -> Option<String>;

    /// Extract and coerce a raw default against the declared type.
    ///
    /// Convenience wrapper for callers that only need a typed default. The
    /// inspector splits the two steps so that [`post_process`](Self::post_process)
    /// can see the extracted literal; both end in [`DefaultValue::coerce`],
    /// applied by [`ColumnFactory::build`](crate::core::ColumnFactory::build).
    fn parse_default(&self, raw: Option<&str>, declared_type: &str) -> Option<DefaultValue> {
        DefaultValue::coerce(self.default_literal(raw)?, declared_type)
    }

    /// Dialect-specific adjustments after the generic normalization.
    fn post_process(&self, _spec: &mut ColumnSpec) {}

    /// Fetch the raw column rows of a table.
    ///
    /// Rows come back in ordinal order and may repeat a column name when it
    /// matches several key constraints.
    async fn fetch_column_rows(
        &self,
        executor: &dyn CatalogExecutor,
        schema: Option<&str>,
        table: &str,
    ) -> Result<Vec<CatalogColumnRow>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed {
        rows: Vec<CatalogRow>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogExecutor for Fixed {
        async fn fetch_all(&self, _query: &CatalogQuery) -> Result<Vec<CatalogRow>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.rows.clone())
        }
    }

    fn fixed(rows: Vec<CatalogRow>) -> Fixed {
        Fixed {
            rows,
            calls: AtomicUsize::new(0),
        }
    }

    #[tokio::test]
    async fn test_fetch_column_skips_nulls() {
        let exec = fixed(vec![
            CatalogRow::new().with("name", "a"),
            CatalogRow::new().with("name", CatalogValue::Null),
            CatalogRow::new().with("name", "b"),
        ]);
        let names = exec.fetch_column(&CatalogQuery::new("SHOW TABLES")).await.unwrap();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(exec.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_value_first_cell() {
        let exec = fixed(vec![
            CatalogRow::new().with("db", "shop").with("x", 1),
            CatalogRow::new().with("db", "other"),
        ]);
        let value = exec.fetch_value(&CatalogQuery::new("SELECT DATABASE()")).await.unwrap();
        assert_eq!(value, Some(CatalogValue::from("shop")));

        let empty = fixed(Vec::new());
        assert_eq!(
            empty.fetch_value(&CatalogQuery::new("SELECT 1")).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_arc_executor_delegates() {
        let exec = Arc::new(fixed(vec![CatalogRow::new().with("v", 7)]));
        let value = exec.fetch_value(&CatalogQuery::new("SELECT 7")).await.unwrap();
        assert_eq!(value, Some(CatalogValue::Int(7)));
        assert_eq!(exec.calls.load(Ordering::SeqCst), 1);
    }
}
