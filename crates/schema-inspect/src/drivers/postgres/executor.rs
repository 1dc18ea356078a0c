//! Catalog executor over a tokio-postgres client.
//!
//! Most `information_schema` columns are domains (`sql_identifier`,
//! `cardinal_number`, `character_data`), which the stock `FromSql`/`ToSql`
//! impls refuse. Cells and parameters therefore go through small wrappers
//! that resolve domains to their base type.

use std::error::Error;

use async_trait::async_trait;
use bytes::BytesMut;
use tokio_postgres::types::{to_sql_checked, FromSql, IsNull, Kind, ToSql, Type};
use tokio_postgres::Client;
use tracing::debug;

use crate::core::traits::CatalogExecutor;
use crate::core::value::{CatalogQuery, CatalogRow, CatalogValue};
use crate::error::Result;

type BoxError = Box<dyn Error + Sync + Send>;

/// Runs catalog queries on a caller-supplied client.
pub struct PostgresExecutor {
    client: Client,
}

impl PostgresExecutor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Give the client back.
    pub fn into_inner(self) -> Client {
        self.client
    }
}

/// Resolve a domain to its base type.
fn base_type(ty: &Type) -> &Type {
    match ty.kind() {
        Kind::Domain(inner) => base_type(inner),
        _ => ty,
    }
}

/// A catalog cell decoded from any column type.
struct PgCell(CatalogValue);

impl<'a> FromSql<'a> for PgCell {
    fn from_sql(ty: &Type, raw: &'a [u8]) -> std::result::Result<Self, BoxError> {
        let ty = base_type(ty);
        let value = match ty.name() {
            "bool" => CatalogValue::Bool(bool::from_sql(ty, raw)?),
            "int2" => CatalogValue::Int(i64::from(i16::from_sql(ty, raw)?)),
            "int4" => CatalogValue::Int(i64::from(i32::from_sql(ty, raw)?)),
            "int8" => CatalogValue::Int(i64::from_sql(ty, raw)?),
            "oid" => CatalogValue::Int(i64::from(u32::from_sql(ty, raw)?)),
            "float4" => CatalogValue::Float(f64::from(f32::from_sql(ty, raw)?)),
            "float8" => CatalogValue::Float(f64::from_sql(ty, raw)?),
            "text" | "varchar" | "bpchar" | "name" | "char" | "unknown" | "citext" => {
                CatalogValue::Text(String::from_utf8_lossy(raw).into_owned())
            }
            other => {
                debug!("Unsupported PostgreSQL catalog type {}, read as NULL", other);
                CatalogValue::Null
            }
        };
        Ok(PgCell(value))
    }

    fn from_sql_null(_ty: &Type) -> std::result::Result<Self, BoxError> {
        Ok(PgCell(CatalogValue::Null))
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }
}

/// A text parameter bound to any text-like column type.
#[derive(Debug)]
struct PgText<'a>(&'a str);

impl ToSql for PgText<'_> {
    fn to_sql(&self, _ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError> {
        // text, varchar, name and their domains share the UTF-8 wire format
        out.extend_from_slice(self.0.as_bytes());
        Ok(IsNull::No)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

#[async_trait]
impl CatalogExecutor for PostgresExecutor {
    async fn fetch_all(&self, query: &CatalogQuery) -> Result<Vec<CatalogRow>> {
        let texts: Vec<PgText<'_>> = query.values().map(PgText).collect();
        let params: Vec<&(dyn ToSql + Sync)> =
            texts.iter().map(|p| p as &(dyn ToSql + Sync)).collect();

        let rows = self.client.query(query.sql.as_str(), &params).await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut out = CatalogRow::new();
            for (idx, col) in row.columns().iter().enumerate() {
                let PgCell(value) = row.try_get(idx)?;
                out.push(col.name(), value);
            }
            result.push(out);
        }
        Ok(result)
    }
}
