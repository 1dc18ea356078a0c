//! Catalog executor over an SQLx MySQL pool.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::{Column, Row, ValueRef};
use tracing::debug;

use crate::core::traits::CatalogExecutor;
use crate::core::value::{CatalogQuery, CatalogRow, CatalogValue};
use crate::error::Result;

/// Runs catalog queries on a caller-supplied pool.
///
/// Parameters bind positionally to the `?` placeholders.
#[derive(Debug, Clone)]
pub struct MysqlExecutor {
    pool: MySqlPool,
}

impl MysqlExecutor {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Convert a cell to a catalog value.
    ///
    /// Catalog views mix signed and unsigned integers, and some servers
    /// report text columns as binary, so decoding tries each shape in turn.
    fn convert_value(row: &MySqlRow, idx: usize) -> CatalogValue {
        let is_null: bool = row.try_get_raw(idx).map(|r| r.is_null()).unwrap_or(true);
        if is_null {
            return CatalogValue::Null;
        }

        if let Ok(v) = row.try_get::<i64, _>(idx) {
            return CatalogValue::Int(v);
        }
        if let Ok(v) = row.try_get::<u64, _>(idx) {
            return i64::try_from(v)
                .map(CatalogValue::Int)
                .unwrap_or_else(|_| CatalogValue::Text(v.to_string()));
        }
        if let Ok(v) = row.try_get::<f64, _>(idx) {
            return CatalogValue::Float(v);
        }
        if let Ok(v) = row.try_get::<String, _>(idx) {
            return CatalogValue::Text(v);
        }
        if let Ok(v) = row.try_get::<Vec<u8>, _>(idx) {
            return CatalogValue::Text(String::from_utf8_lossy(&v).into_owned());
        }

        debug!("Unsupported MySQL catalog value at column {}, read as NULL", idx);
        CatalogValue::Null
    }
}

#[async_trait]
impl CatalogExecutor for MysqlExecutor {
    async fn fetch_all(&self, query: &CatalogQuery) -> Result<Vec<CatalogRow>> {
        let mut q = sqlx::query(&query.sql);
        for value in query.values() {
            q = q.bind(value);
        }

        let rows: Vec<MySqlRow> = q.fetch_all(&self.pool).await?;

        Ok(rows
            .iter()
            .map(|row| {
                row.columns()
                    .iter()
                    .enumerate()
                    .map(|(idx, col)| (col.name().to_string(), Self::convert_value(row, idx)))
                    .collect()
            })
            .collect())
    }
}
