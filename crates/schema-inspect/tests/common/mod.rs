//! Shared test helpers: a scripted in-memory catalog executor.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use schema_inspect::{CatalogExecutor, CatalogQuery, CatalogRow, CatalogValue, InspectError, Result};

enum Response {
    Rows(Vec<CatalogRow>),
    Fail(String),
}

/// Answers queries by SQL substring; the first matching rule wins.
///
/// Every query is recorded so tests can check what was issued and in
/// which order. A query no rule matches fails.
#[derive(Default)]
pub struct ScriptedExecutor {
    rules: Vec<(String, Response)>,
    log: Mutex<Vec<CatalogQuery>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, needle: &str, rows: Vec<CatalogRow>) -> Self {
        self.rules.push((needle.to_string(), Response::Rows(rows)));
        self
    }

    pub fn fail_on(mut self, needle: &str, message: &str) -> Self {
        self.rules
            .push((needle.to_string(), Response::Fail(message.to_string())));
        self
    }

    /// Queries issued so far.
    pub fn queries(&self) -> Vec<CatalogQuery> {
        self.log.lock().unwrap().clone()
    }

    pub fn issued(&self, needle: &str) -> bool {
        self.queries().iter().any(|q| q.sql.contains(needle))
    }
}

#[async_trait]
impl CatalogExecutor for ScriptedExecutor {
    async fn fetch_all(&self, query: &CatalogQuery) -> Result<Vec<CatalogRow>> {
        self.log.lock().unwrap().push(query.clone());

        match self.rules.iter().find(|(needle, _)| query.sql.contains(needle.as_str())) {
            Some((_, Response::Rows(rows))) => Ok(rows.clone()),
            Some((_, Response::Fail(message))) => Err(InspectError::executor(message.clone())),
            None => Err(InspectError::executor(format!(
                "no scripted response for: {}",
                query.sql
            ))),
        }
    }
}

/// A row of the information-schema column query.
pub struct InfoRow {
    row: CatalogRow,
}

impl InfoRow {
    pub fn new(name: &str, data_type: &str) -> Self {
        Self {
            row: CatalogRow::new().with("_name", name).with("_type", data_type),
        }
    }

    pub fn size(mut self, size: i64) -> Self {
        self.row.push("_size", size);
        self
    }

    pub fn scale(mut self, scale: i64) -> Self {
        self.row.push("_scale", scale);
        self
    }

    pub fn not_null(mut self) -> Self {
        self.row.push("_notnull", 1);
        self
    }

    pub fn default(mut self, default: &str) -> Self {
        self.row.push("_default", default);
        self
    }

    pub fn autoinc(mut self) -> Self {
        self.row.push("_autoinc", 1);
        self
    }

    pub fn primary(mut self) -> Self {
        self.row.push("_primary", 1);
        self
    }

    pub fn extended(mut self, column_type: &str) -> Self {
        self.row.push("_extended", column_type);
        self
    }

    pub fn build(self) -> CatalogRow {
        // unset flags read as 0, unset values as NULL
        let mut row = self.row;
        for label in ["_size", "_scale", "_default", "_extended"] {
            if row.get(label).is_none() {
                row.push(label, CatalogValue::Null);
            }
        }
        for label in ["_notnull", "_autoinc", "_primary"] {
            if row.get(label).is_none() {
                row.push(label, 0);
            }
        }
        row
    }
}

/// A row of `sp_columns`.
pub fn sp_column(
    name: &str,
    type_name: &str,
    precision: i64,
    scale: Option<i64>,
    nullable: bool,
    default: Option<&str>,
) -> CatalogRow {
    CatalogRow::new()
        .with("TABLE_QUALIFIER", "shop")
        .with("TABLE_OWNER", "sales")
        .with("TABLE_NAME", "orders")
        .with("COLUMN_NAME", name)
        .with("TYPE_NAME", type_name)
        .with("PRECISION", precision)
        .with("SCALE", scale)
        .with("NULLABLE", i64::from(nullable))
        .with("COLUMN_DEF", default)
}

/// A row of `sp_pkeys`.
pub fn sp_pkey(name: &str, seq: i64) -> CatalogRow {
    CatalogRow::new()
        .with("TABLE_OWNER", "sales")
        .with("COLUMN_NAME", name)
        .with("KEY_SEQ", seq)
}

/// `SHOW VARIABLES LIKE '%version%'` output.
pub fn version_rows(version: &str) -> Vec<CatalogRow> {
    vec![
        CatalogRow::new()
            .with("Variable_name", "protocol_version")
            .with("Value", "10"),
        CatalogRow::new()
            .with("Variable_name", "version")
            .with("Value", version),
    ]
}

/// A single-column result.
pub fn single(label: &str, values: &[&str]) -> Vec<CatalogRow> {
    values
        .iter()
        .map(|v| CatalogRow::new().with(label, *v))
        .collect()
}
