//! MySQL/MariaDB catalog dialect (Strategy pattern).
//!
//! Column metadata comes from `information_schema`, with `column_type`
//! selected as the extended field: it is the only place MySQL reports the
//! `unsigned` modifier and the member list of `enum` columns.

use async_trait::async_trait;
use tracing::info;

use crate::core::schema::{CatalogColumnRow, ColumnSpec};
use crate::core::traits::{CatalogExecutor, Dialect};
use crate::core::value::CatalogQuery;
use crate::drivers::common::{information_schema, unquote};
use crate::error::Result;

/// Server variables listing, used to tell MariaDB from MySQL.
const VERSION_QUERY: &str = "SHOW VARIABLES LIKE '%version%'";

/// MySQL/MariaDB dialect implementation.
///
/// Compatible with MySQL 5.7+, 8.0+, and MariaDB 10.2+. The MariaDB flag is
/// fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct MysqlDialect {
    is_mariadb: bool,
}

impl MysqlDialect {
    /// Create a MySQL dialect instance.
    pub fn new() -> Self {
        Self { is_mariadb: false }
    }

    /// Create a MariaDB dialect instance.
    pub fn mariadb() -> Self {
        Self { is_mariadb: true }
    }

    pub fn with_mariadb(is_mariadb: bool) -> Self {
        Self { is_mariadb }
    }

    /// Build a dialect, asking the server whether it is MariaDB.
    pub async fn detect(executor: &dyn CatalogExecutor) -> Result<Self> {
        let rows = executor.fetch_all(&CatalogQuery::new(VERSION_QUERY)).await?;

        let is_mariadb = rows.iter().any(|row| {
            let is_version = row
                .first()
                .and_then(|k| k.as_text())
                .is_some_and(|k| k == "version");
            is_version
                && row
                    .second()
                    .and_then(|v| v.as_text())
                    .is_some_and(|v| v.to_lowercase().contains("maria"))
        });

        if is_mariadb {
            info!("MariaDB server detected");
        }

        Ok(Self::with_mariadb(is_mariadb))
    }

    pub fn is_mariadb(&self) -> bool {
        self.is_mariadb
    }
}

/// Check for `CURRENT_TIMESTAMP`, `current_timestamp()` or `CURRENT_TIMESTAMP(6)`.
fn is_current_timestamp(raw: &str) -> bool {
    let upper = raw.trim().to_ascii_uppercase();
    let Some(rest) = upper.strip_prefix("CURRENT_TIMESTAMP") else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }
    rest.strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .is_some_and(|digits| digits.chars().all(|c| c.is_ascii_digit()))
}

/// Parse the member list of an `enum(...)` column type.
///
/// Members are single-quoted and separated by commas; a doubled quote is an
/// escaped quote.
fn parse_enum_options(list: &str) -> Vec<String> {
    let list = list.trim();
    let list = list.strip_prefix('(').unwrap_or(list);
    let list = list.strip_suffix(')').unwrap_or(list);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quote(b'\'')
        .double_quote(true)
        .flexible(true)
        .from_reader(list.as_bytes());

    reader
        .records()
        .next()
        .and_then(|record| record.ok())
        .map(|record| record.iter().map(str::to_string).collect())
        .unwrap_or_default()
}

#[async_trait]
impl Dialect for MysqlDialect {
    fn name(&self) -> &str {
        "mysql"
    }

    fn quote_prefix(&self) -> &'static str {
        "`"
    }

    fn quote_suffix(&self) -> &'static str {
        "`"
    }

    fn param_placeholder(&self, _index: usize) -> String {
        // MySQL uses ? for all parameters
        "?".to_string()
    }

    fn current_schema_query(&self) -> CatalogQuery {
        CatalogQuery::new("SELECT DATABASE()")
    }

    fn table_list_query(&self, schema: Option<&str>) -> CatalogQuery {
        match schema {
            Some(schema) => CatalogQuery::new(format!("SHOW TABLES IN {}", self.quote_name(schema))),
            None => CatalogQuery::new("SHOW TABLES"),
        }
    }

    fn autoincrement_sql(&self) -> &'static str {
        "CASE
        WHEN LOCATE('auto_increment', columns.EXTRA) > 0 THEN 1
        ELSE 0
    END"
    }

    fn extended_sql(&self) -> &'static str {
        ",
    columns.column_type as _extended"
    }

    fn default_literal(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw?;

        // the only non-literal default MySQL allows
        if is_current_timestamp(raw) {
            return None;
        }

        if self.is_mariadb {
            if let Some(text) = unquote(raw.trim()) {
                return Some(text);
            }
        }

        Some(raw.to_string())
    }

    fn post_process(&self, spec: &mut ColumnSpec) {
        // MariaDB reports "no default" on nullable columns as bare NULL
        if self.is_mariadb && !spec.not_null && spec.raw_default.as_deref() == Some("NULL") {
            spec.default = None;
        }

        let Some(extended) = spec.extended.as_deref().map(str::trim) else {
            return;
        };

        if extended
            .get(..4)
            .is_some_and(|head| head.eq_ignore_ascii_case("enum"))
        {
            spec.options = Some(parse_enum_options(&extended[4..]));
            return;
        }

        if type_modifiers(extended)
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case("unsigned"))
        {
            spec.data_type.push_str(" unsigned");
        }
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

/// The part of a `column_type` after the type arguments, e.g. `unsigned zerofill`.
fn type_modifiers(column_type: &str) -> &str {
    match column_type.rfind(')') {
        Some(pos) => &column_type[pos + 1..],
        None => column_type,
    }
}
