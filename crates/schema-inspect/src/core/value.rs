//! Catalog value representation.
//!
//! Executors hand rows back as [`CatalogRow`]s: ordered `(label, value)`
//! pairs holding loosely-typed [`CatalogValue`] cells. Catalog views differ
//! between engines in how they type the same logical field (a nullable flag
//! may be `smallint`, `bigint` or `'YES'`), so the accessors here are
//! deliberately lenient.

use std::borrow::Cow;

/// A single cell returned by a catalog query.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CatalogValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CatalogValue::Null)
    }

    /// Render the value as text. `None` for SQL NULL.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            CatalogValue::Null => None,
            CatalogValue::Bool(b) => Some(Cow::Borrowed(if *b { "1" } else { "0" })),
            CatalogValue::Int(v) => Some(Cow::Owned(v.to_string())),
            CatalogValue::Float(v) => Some(Cow::Owned(v.to_string())),
            CatalogValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
        }
    }

    /// Interpret the value as an integer, parsing text if needed.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CatalogValue::Null => None,
            CatalogValue::Bool(b) => Some(i64::from(*b)),
            CatalogValue::Int(v) => Some(*v),
            CatalogValue::Float(v) => Some(*v as i64),
            CatalogValue::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Interpret the value as a flag. NULL is false.
    pub fn as_bool(&self) -> bool {
        match self {
            CatalogValue::Null => false,
            CatalogValue::Bool(b) => *b,
            CatalogValue::Int(v) => *v != 0,
            CatalogValue::Float(v) => *v != 0.0,
            CatalogValue::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "1" | "t" | "true" | "y" | "yes"
            ),
        }
    }
}

impl From<&str> for CatalogValue {
    fn from(v: &str) -> Self {
        CatalogValue::Text(v.to_string())
    }
}

impl From<String> for CatalogValue {
    fn from(v: String) -> Self {
        CatalogValue::Text(v)
    }
}

impl From<i64> for CatalogValue {
    fn from(v: i64) -> Self {
        CatalogValue::Int(v)
    }
}

impl From<i32> for CatalogValue {
    fn from(v: i32) -> Self {
        CatalogValue::Int(v as i64)
    }
}

impl From<bool> for CatalogValue {
    fn from(v: bool) -> Self {
        CatalogValue::Bool(v)
    }
}

impl<T: Into<CatalogValue>> From<Option<T>> for CatalogValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CatalogValue::Null)
    }
}

/// One row of a catalog result set.
///
/// Labels keep the order the server returned them in. Lookup by label is
/// case-insensitive: SQL Server procedures answer with upper-case labels
/// while the information-schema queries alias in lower case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogRow {
    cells: Vec<(String, CatalogValue)>,
}

impl CatalogRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<CatalogValue>) {
        self.cells.push((label.into(), value.into()));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, label: impl Into<String>, value: impl Into<CatalogValue>) -> Self {
        self.push(label, value);
        self
    }

    /// Look up a cell by label.
    pub fn get(&self, label: &str) -> Option<&CatalogValue> {
        self.cells
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(label))
            .map(|(_, value)| value)
    }

    /// Text of a cell, `None` when absent or NULL.
    pub fn text(&self, label: &str) -> Option<String> {
        self.get(label)
            .and_then(|v| v.as_text())
            .map(Cow::into_owned)
    }

    /// Flag value of a cell, false when absent or NULL.
    pub fn flag(&self, label: &str) -> bool {
        self.get(label).map(CatalogValue::as_bool).unwrap_or(false)
    }

    /// The first cell of the row.
    pub fn first(&self) -> Option<&CatalogValue> {
        self.cells.first().map(|(_, value)| value)
    }

    /// The second cell of the row (value column of key/value results).
    pub fn second(&self) -> Option<&CatalogValue> {
        self.cells.get(1).map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<CatalogValue>> FromIterator<(K, V)> for CatalogRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = CatalogRow::new();
        for (label, value) in iter {
            row.push(label, value);
        }
        row
    }
}

/// SQL text plus named parameters, in placeholder order.
///
/// Placeholders inside `sql` use the dialect's own style (`?`, `$1`, `@P1`);
/// executors bind `params` positionally. Names are kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub sql: String,
    pub params: Vec<(&'static str, String)>,
}

impl CatalogQuery {
    /// A query without parameters.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Append a named parameter.
    pub fn bind(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    /// Parameter values in binding order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_value_accessors() {
        assert_eq!(CatalogValue::Int(10).as_text().as_deref(), Some("10"));
        assert_eq!(CatalogValue::Null.as_text(), None);
        assert_eq!(CatalogValue::from(" 42 ").as_i64(), Some(42));
        assert_eq!(CatalogValue::from("abc").as_i64(), None);

        assert!(CatalogValue::Int(1).as_bool());
        assert!(!CatalogValue::Int(0).as_bool());
        assert!(CatalogValue::from("YES").as_bool());
        assert!(!CatalogValue::Null.as_bool());
    }

    #[test]
    fn test_catalog_row_lookup_is_case_insensitive() {
        let row = CatalogRow::new()
            .with("COLUMN_NAME", "id")
            .with("NULLABLE", 0)
            .with("COLUMN_DEF", CatalogValue::Null);

        assert_eq!(row.text("column_name").as_deref(), Some("id"));
        assert!(!row.flag("nullable"));
        assert_eq!(row.text("column_def"), None);
        assert!(row.get("missing").is_none());
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_catalog_row_positional_access() {
        let row: CatalogRow = [("Variable_name", "version"), ("Value", "10.11.2-MariaDB")]
            .into_iter()
            .collect();
        assert_eq!(row.first(), Some(&CatalogValue::from("version")));
        assert_eq!(row.second(), Some(&CatalogValue::from("10.11.2-MariaDB")));
    }

    #[test]
    fn test_catalog_query_bind_order() {
        let query = CatalogQuery::new("SELECT 1 WHERE a = $1 AND b = $2")
            .bind("schema", "public")
            .bind("table", "users");
        assert_eq!(query.values().collect::<Vec<_>>(), vec!["public", "users"]);
        assert_eq!(query.params[0].0, "schema");
    }
}
