//! Catalog executor over a Tiberius client.

use async_trait::async_trait;
use tiberius::{Client, ColumnData, Query, Row};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_util::compat::Compat;
use tracing::debug;

use crate::core::traits::CatalogExecutor;
use crate::core::value::{CatalogQuery, CatalogRow, CatalogValue};
use crate::error::Result;

/// Tiberius client over a Tokio TCP stream.
pub type MssqlClient = Client<Compat<TcpStream>>;

/// Runs catalog queries on a caller-supplied client.
///
/// Tiberius needs `&mut` access per query, so the client sits behind an
/// async mutex; queries from one inspector never overlap anyway.
pub struct MssqlExecutor {
    client: Mutex<MssqlClient>,
}

impl MssqlExecutor {
    pub fn new(client: MssqlClient) -> Self {
        Self {
            client: Mutex::new(client),
        }
    }

    /// Give the client back.
    pub fn into_inner(self) -> MssqlClient {
        self.client.into_inner()
    }

    fn convert_row(row: Row) -> CatalogRow {
        let names: Vec<String> = row.columns().iter().map(|c| c.name().to_string()).collect();
        names
            .into_iter()
            .zip(row.into_iter().map(Self::convert_value))
            .collect()
    }

    fn convert_value(data: ColumnData<'static>) -> CatalogValue {
        match data {
            ColumnData::U8(v) => v.map(i64::from).into(),
            ColumnData::I16(v) => v.map(i64::from).into(),
            ColumnData::I32(v) => v.map(i64::from).into(),
            ColumnData::I64(v) => v.into(),
            ColumnData::F32(v) => v.map(|f| CatalogValue::Float(f64::from(f))).into(),
            ColumnData::F64(v) => v.map(CatalogValue::Float).into(),
            ColumnData::Bit(v) => v.into(),
            ColumnData::String(v) => v.map(|s| s.into_owned()).into(),
            ColumnData::Numeric(v) => v.map(|n| n.to_string()).into(),
            other => {
                debug!("Unsupported SQL Server catalog value {:?}, read as NULL", other);
                CatalogValue::Null
            }
        }
    }
}

#[async_trait]
impl CatalogExecutor for MssqlExecutor {
    async fn fetch_all(&self, query: &CatalogQuery) -> Result<Vec<CatalogRow>> {
        let mut q = Query::new(query.sql.as_str());
        for value in query.values() {
            q.bind(value.to_string());
        }

        let mut client = self.client.lock().await;
        let stream = q.query(&mut *client).await?;
        let rows = stream.into_first_result().await?;

        Ok(rows.into_iter().map(Self::convert_row).collect())
    }
}
