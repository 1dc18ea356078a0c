//! PostgreSQL catalog dialect (Strategy pattern).
//!
//! PostgreSQL reports column defaults as expressions: string literals carry
//! an explicit cast (`'active'::character varying`) and serial columns a
//! `nextval(...)` call, which also drives autoincrement detection.

use async_trait::async_trait;

use crate::core::schema::CatalogColumnRow;
use crate::core::traits::{CatalogExecutor, Dialect};
use crate::core::value::CatalogQuery;
use crate::drivers::common::{information_schema, is_numeric, unquote};
use crate::error::Result;

/// PostgreSQL dialect implementation.
#[derive(Debug, Clone, Default)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Create a new PostgreSQL dialect instance.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Dialect for PostgresDialect {
    fn name(&self) -> &str {
        "postgres"
    }

    fn quote_prefix(&self) -> &'static str {
        "\""
    }

    fn quote_suffix(&self) -> &'static str {
        "\""
    }

    fn param_placeholder(&self, index: usize) -> String {
        format!("${}", index)
    }

    fn current_schema_query(&self) -> CatalogQuery {
        CatalogQuery::new("SELECT CURRENT_SCHEMA")
    }

    fn table_list_query(&self, schema: Option<&str>) -> CatalogQuery {
        match schema {
            Some(schema) => CatalogQuery::new(format!(
                "SELECT table_name FROM information_schema.tables WHERE table_schema = {}",
                self.param_placeholder(1)
            ))
            .bind("schema", schema),
            None => CatalogQuery::new(
                "SELECT table_schema || '.' || table_name \
                 FROM information_schema.tables \
                 WHERE table_schema != 'pg_catalog' \
                 AND table_schema != 'information_schema'",
            ),
        }
    }

    fn autoincrement_sql(&self) -> &'static str {
        "CASE
        WHEN SUBSTRING(columns.COLUMN_DEFAULT FROM 1 FOR 7) = 'nextval' THEN 1
        ELSE 0
    END"
    }

    fn default_literal(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw?.trim();

        if raw.eq_ignore_ascii_case("null") {
            return None;
        }

        if is_numeric(raw) {
            return Some(raw.to_string());
        }

        if raw.starts_with('\'') {
            // drop the trailing type cast; only a `::` after the closing quote is one
            let literal = match raw.rfind("'::") {
                Some(pos) => &raw[..=pos],
                None => raw,
            };
            return unquote(literal);
        }

        None
    }

    async fn fetch_column_rows(
        &self,
        executor: &dyn CatalogExecutor,
        schema: Option<&str>,
        table: &str,
    ) -> Result<Vec<CatalogColumnRow>> {
        information_schema::fetch_column_rows(self, executor, schema, table).await
    }
}
