//! Column lookup through the ANSI `information_schema` views.
//!
//! MySQL and PostgreSQL both expose `columns`, `key_column_usage` and
//! `table_constraints`; the query below joins them so each column row
//! carries a primary-key flag. A column matching several key constraints
//! yields several rows, which the inspector folds back together.

use crate::core::schema::CatalogColumnRow;
use crate::core::traits::{CatalogExecutor, Dialect};
use crate::core::value::CatalogQuery;
use crate::error::{InspectError, Result};

/// Build the column query for `schema.table`.
pub fn column_query<D: Dialect + ?Sized>(dialect: &D, schema: &str, table: &str) -> CatalogQuery {
    let sql = format!(
        r#"
SELECT
    columns.column_name as _name,
    columns.data_type as _type,
    COALESCE(
        columns.character_maximum_length,
        columns.numeric_precision
    ) AS _size,
    columns.numeric_scale AS _scale,
    CASE
        WHEN columns.is_nullable = 'YES' THEN 0
        ELSE 1
    END AS _notnull,
    columns.column_default AS _default,
    {autoinc} AS _autoinc,
    CASE
        WHEN table_constraints.constraint_type = 'PRIMARY KEY' THEN 1
        ELSE 0
    END AS _primary{extended}
FROM information_schema.columns
    LEFT JOIN information_schema.key_column_usage
        ON columns.table_schema = key_column_usage.table_schema
        AND columns.table_name = key_column_usage.table_name
        AND columns.column_name = key_column_usage.column_name
    LEFT JOIN information_schema.table_constraints
        ON key_column_usage.table_schema = table_constraints.table_schema
        AND key_column_usage.table_name = table_constraints.table_name
        AND key_column_usage.constraint_name = table_constraints.constraint_name
WHERE columns.table_schema = {p_schema}
AND columns.table_name = {p_table}
ORDER BY columns.ordinal_position
"#,
        autoinc = dialect.autoincrement_sql(),
        extended = dialect.extended_sql(),
        p_schema = dialect.param_placeholder(1),
        p_table = dialect.param_placeholder(2),
    );

    CatalogQuery::new(sql)
        .bind("schema", schema)
        .bind("table", table)
}

/// Ask the server for the session's current schema.
///
/// # Errors
///
/// Returns `InspectError::SchemaExtraction` when the server answers NULL
/// (MySQL with no database selected).
pub async fn current_schema<D: Dialect + ?Sized>(
    dialect: &D,
    executor: &dyn CatalogExecutor,
) -> Result<String> {
    let value = executor.fetch_value(&dialect.current_schema_query()).await?;
    value
        .as_ref()
        .and_then(|v| v.as_text())
        .map(|v| v.into_owned())
        .ok_or_else(|| {
            InspectError::SchemaExtraction(format!(
                "{} server reported no current schema",
                dialect.name()
            ))
        })
}

/// Fetch the raw column rows of `table`.
///
/// Without a schema the session's current schema is used.
pub async fn fetch_column_rows<D: Dialect + ?Sized>(
    dialect: &D,
    executor: &dyn CatalogExecutor,
    schema: Option<&str>,
    table: &str,
) -> Result<Vec<CatalogColumnRow>> {
    let schema = match schema {
        Some(s) => s.to_string(),
        None => current_schema(dialect, executor).await?,
    };

    let rows = executor
        .fetch_all(&column_query(dialect, &schema, table))
        .await?;

    rows.iter().map(CatalogColumnRow::from_catalog_row).collect()
}
