//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Inspector configuration.
///
/// ```yaml
/// type: mysql
/// mariadb: true          # optional, skips server detection
/// default_schema: shop   # optional
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Database type: mysql, mariadb, postgres (postgresql, pg) or mssql
    /// (sqlserver, sql_server).
    pub r#type: String,

    /// Force the MariaDB flag instead of asking the server. MySQL types only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mariadb: Option<bool>,

    /// Schema used for table specs without one. Unset means the session's
    /// current schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_schema: Option<String>,
}

impl InspectorConfig {
    /// Configuration for a database type with everything else unset.
    pub fn new(db_type: impl Into<String>) -> Self {
        Self {
            r#type: db_type.into(),
            mariadb: None,
            default_schema: None,
        }
    }

    pub fn with_mariadb(mut self, mariadb: bool) -> Self {
        self.mariadb = Some(mariadb);
        self
    }

    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = Some(schema.into());
        self
    }
}
