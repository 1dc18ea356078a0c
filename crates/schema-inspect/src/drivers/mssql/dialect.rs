//! SQL Server catalog dialect (Strategy pattern).
//!
//! SQL Server has no usable join between its `information_schema` column and
//! key views for this purpose, so columns come from `sp_columns` and primary
//! keys from `sp_pkeys`, matched by name.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;

use crate::core::schema::CatalogColumnRow;
use crate::core::traits::{CatalogExecutor, Dialect};
use crate::core::value::{CatalogQuery, CatalogRow};
use crate::drivers::common::{is_numeric, unquote};
use crate::error::{InspectError, Result};

/// SQL Server dialect implementation.
#[derive(Debug, Clone, Default)]
pub struct MssqlDialect;

impl MssqlDialect {
    /// Create a new SQL Server dialect instance.
    pub fn new() -> Self {
        Self
    }

    fn columns_query(&self, schema: Option<&str>, table: &str) -> CatalogQuery {
        let mut sql = format!("exec sp_columns @table_name = {}", self.quote_name(table));
        if let Some(owner) = schema {
            sql.push_str(&format!(", @table_owner = {}", self.quote_name(owner)));
        }
        CatalogQuery::new(sql)
    }

    fn pkeys_query(&self, owner: &str, table: &str) -> CatalogQuery {
        CatalogQuery::new(format!(
            "exec sp_pkeys @table_owner = {}, @table_name = {}",
            self.quote_name(owner),
            self.quote_name(table)
        ))
    }
}

/// Read one `sp_columns` row.
fn column_row(row: &CatalogRow, keys: &HashSet<String>) -> Result<CatalogColumnRow> {
    let name = row
        .text("COLUMN_NAME")
        .ok_or_else(|| InspectError::MissingField("COLUMN_NAME".into()))?;
    let type_name = row
        .text("TYPE_NAME")
        .ok_or_else(|| InspectError::MissingField("TYPE_NAME".into()))?;

    // "int identity" -> "int"
    let data_type = type_name
        .split(' ')
        .next()
        .unwrap_or(type_name.as_str())
        .to_string();

    Ok(CatalogColumnRow {
        primary_key: keys.contains(&name),
        auto_increment: type_name.to_lowercase().contains("identity"),
        data_type,
        size: row.text("PRECISION"),
        scale: row.text("SCALE"),
        not_null: !row.flag("NULLABLE"),
        default: row.text("COLUMN_DEF"),
        extended: None,
        name,
    })
}

/// Strip parentheses that wrap the whole expression, repeatedly.
///
/// `((0))` becomes `0`; `(1)+(2)` is left alone.
fn strip_wrapping_parens(mut text: &str) -> &str {
    loop {
        text = text.trim();
        if !text.starts_with('(') || !closes_at_end(text) {
            return text;
        }
        text = &text[1..text.len() - 1];
    }
}

/// Check that the paren opened at position 0 is closed by the last char.
fn closes_at_end(text: &str) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    for (i, c) in text.char_indices() {
        match c {
            '\'' => in_string = !in_string,
            '(' if !in_string => depth += 1,
            ')' if !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == text.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

#[async_trait]
impl Dialect for MssqlDialect {
    fn name(&self) -> &str {
        "mssql"
    }

    fn quote_prefix(&self) -> &'static str {
        "["
    }

    fn quote_suffix(&self) -> &'static str {
        "]"
    }

    fn param_placeholder(&self, index: usize) -> String {
        format!("@P{}", index)
    }

    fn current_schema_query(&self) -> CatalogQuery {
        CatalogQuery::new("SELECT SCHEMA_NAME()")
    }

    fn table_list_query(&self, schema: Option<&str>) -> CatalogQuery {
        if let Some(schema) = schema {
            debug!(
                "SQL Server table listing does not filter by schema, ignoring '{}'",
                schema
            );
        }
        CatalogQuery::new("SELECT name FROM sysobjects WHERE type = 'U' ORDER BY name")
    }

    fn autoincrement_sql(&self) -> &'static str {
        "COLUMNPROPERTY(
        OBJECT_ID(COLUMNS.TABLE_SCHEMA + '.' + COLUMNS.TABLE_NAME),
        COLUMNS.COLUMN_NAME,
        'IsIdentity'
    )"
    }

    fn default_literal(&self, raw: Option<&str>) -> Option<String> {
        // SQL Server wraps non-null defaults in parens
        let text = strip_wrapping_parens(raw?);

        if text.eq_ignore_ascii_case("null") {
            return None;
        }

        if is_numeric(text) {
            return Some(text.to_string());
        }

        let quoted = text
            .strip_prefix('N')
            .or_else(|| text.strip_prefix('n'))
            .filter(|rest| rest.starts_with('\''))
            .unwrap_or(text);
        unquote(quoted)
    }

    async fn fetch_column_rows(
        &self,
        executor: &dyn CatalogExecutor,
        schema: Option<&str>,
        table: &str,
    ) -> Result<Vec<CatalogColumnRow>> {
        let raw_cols = executor.fetch_all(&self.columns_query(schema, table)).await?;

        let Some(first) = raw_cols.first() else {
            return Ok(Vec::new());
        };
        let owner = first
            .text("TABLE_OWNER")
            .ok_or_else(|| InspectError::MissingField("TABLE_OWNER".into()))?;

        let keys: HashSet<String> = executor
            .fetch_all(&self.pkeys_query(&owner, table))
            .await?
            .iter()
            .filter_map(|row| row.text("COLUMN_NAME"))
            .collect();

        raw_cols.iter().map(|row| column_row(row, &keys)).collect()
    }
}
