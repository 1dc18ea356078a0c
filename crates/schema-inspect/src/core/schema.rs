//! Column metadata types.
//!
//! [`ColumnDescriptor`] is the canonical, dialect-independent column shape
//! returned to callers. [`CatalogColumnRow`] and [`ColumnSpec`] are the two
//! intermediate stages between a raw catalog row and a descriptor.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{InspectError, Result};

use super::value::CatalogRow;

/// A literal column default.
///
/// SQL expressions (function calls, keywords) have no representation here;
/// they normalize to the absence of a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl DefaultValue {
    /// Coerce an extracted literal to the coarse category of `declared_type`.
    ///
    /// Integer-like types yield [`DefaultValue::Int`], `float`/`double`/`real`
    /// yield [`DefaultValue::Float`], everything else stays text. A literal
    /// that cannot be read as a number of the required category yields `None`.
    /// An integer literal outside the `i64` range (e.g. the `bigint unsigned`
    /// maximum) is kept as text.
    pub fn coerce(literal: String, declared_type: &str) -> Option<Self> {
        let declared = declared_type.to_lowercase();
        let base = declared.split_whitespace().next().unwrap_or("");

        if is_integer_type(base) {
            let trimmed = literal.trim();
            if let Ok(v) = trimmed.parse::<i64>() {
                return Some(DefaultValue::Int(v));
            }
            let f = trimmed.parse::<f64>().ok().filter(|f| f.is_finite())?;
            // i64::MAX as f64 rounds up to 2^63
            if f >= i64::MIN as f64 && f < i64::MAX as f64 {
                return Some(DefaultValue::Int(f as i64));
            }
            trace!(
                "Default {} overflows a 64-bit integer, kept as text",
                trimmed
            );
            return Some(DefaultValue::Text(trimmed.to_string()));
        }

        if matches!(base, "float" | "double" | "real") {
            return literal.trim().parse::<f64>().ok().map(DefaultValue::Float);
        }

        Some(DefaultValue::Text(literal))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DefaultValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DefaultValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DefaultValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Check if a base type name is integer-like.
///
/// `interval` and the geometric `point` family contain "int" but are not.
fn is_integer_type(base: &str) -> bool {
    base.contains("int") && !base.starts_with("interval") && !base.contains("point")
}

/// Canonical column description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,

    /// Lower-cased base type, possibly augmented (e.g. "int unsigned").
    #[serde(rename = "type")]
    pub data_type: String,

    /// Character length or numeric precision.
    pub size: Option<u64>,

    /// Numeric scale. Never set without `size`.
    pub scale: Option<u32>,

    /// Whether the column rejects NULL.
    pub not_null: bool,

    /// Literal default value.
    pub default: Option<DefaultValue>,

    /// Whether the database assigns the value on insert.
    pub auto_increment: bool,

    /// Whether the column is part of the primary key.
    pub primary_key: bool,

    /// Allowed values for enumerated types.
    pub options: Option<Vec<String>>,
}

/// One catalog row, read into named fields but not yet merged or normalized.
///
/// Information-schema queries can return several rows per column (one per
/// matching key constraint); only `primary_key` differs between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogColumnRow {
    pub name: String,
    /// Native type name as reported by the catalog.
    pub data_type: String,
    pub size: Option<String>,
    pub scale: Option<String>,
    pub not_null: bool,
    /// Raw default expression as reported by the catalog.
    pub default: Option<String>,
    pub auto_increment: bool,
    pub primary_key: bool,
    /// Dialect-specific extra field (MySQL `column_type`).
    pub extended: Option<String>,
}

impl CatalogColumnRow {
    /// Read a row produced by the shared information-schema column query.
    pub fn from_catalog_row(row: &CatalogRow) -> Result<Self> {
        let name = row
            .text("_name")
            .ok_or_else(|| InspectError::MissingField("_name".into()))?;
        let data_type = row
            .text("_type")
            .ok_or_else(|| InspectError::MissingField("_type".into()))?;

        Ok(Self {
            name,
            data_type,
            size: row.text("_size"),
            scale: row.text("_scale"),
            not_null: row.flag("_notnull"),
            default: row.text("_default"),
            auto_increment: row.flag("_autoinc"),
            primary_key: row.flag("_primary"),
            extended: row.text("_extended"),
        })
    }
}

/// Normalized scalar fields of one column, ready for the column factory.
///
/// `size`, `scale` and `default` are still raw strings; they are coerced
/// exactly once, when the descriptor is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    /// Lower-cased type, size/scale stripped.
    pub data_type: String,
    pub size: Option<String>,
    pub scale: Option<String>,
    pub not_null: bool,
    /// Raw default as reported by the catalog.
    pub raw_default: Option<String>,
    /// Literal extracted from `raw_default` by the dialect.
    pub default: Option<String>,
    pub auto_increment: bool,
    pub primary_key: bool,
    pub options: Option<Vec<String>>,
    pub extended: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::CatalogValue;

    #[test]
    fn test_coerce_integer_types() {
        assert_eq!(
            DefaultValue::coerce("42".into(), "int"),
            Some(DefaultValue::Int(42))
        );
        assert_eq!(
            DefaultValue::coerce("-7".into(), "bigint"),
            Some(DefaultValue::Int(-7))
        );
        assert_eq!(
            DefaultValue::coerce("5".into(), "int unsigned"),
            Some(DefaultValue::Int(5))
        );
        assert_eq!(
            DefaultValue::coerce("3.9".into(), "integer"),
            Some(DefaultValue::Int(3))
        );
        assert_eq!(DefaultValue::coerce("abc".into(), "int"), None);
        assert_eq!(DefaultValue::coerce("inf".into(), "int"), None);
    }

    #[test]
    fn test_coerce_integer_overflow_kept_as_text() {
        assert_eq!(
            DefaultValue::coerce("18446744073709551615".into(), "bigint unsigned"),
            Some(DefaultValue::Text("18446744073709551615".into()))
        );
        assert_eq!(
            DefaultValue::coerce("9223372036854775807".into(), "bigint"),
            Some(DefaultValue::Int(i64::MAX))
        );
        assert_eq!(
            DefaultValue::coerce("1e30".into(), "int"),
            Some(DefaultValue::Text("1e30".into()))
        );
    }

    #[test]
    fn test_coerce_float_types() {
        assert_eq!(
            DefaultValue::coerce("0.25".into(), "real"),
            Some(DefaultValue::Float(0.25))
        );
        assert_eq!(
            DefaultValue::coerce("2.5".into(), "DOUBLE"),
            Some(DefaultValue::Float(2.5))
        );
        assert_eq!(
            DefaultValue::coerce("1".into(), "double precision"),
            Some(DefaultValue::Float(1.0))
        );
        assert_eq!(
            DefaultValue::coerce("0.5".into(), "float unsigned"),
            Some(DefaultValue::Float(0.5))
        );
    }

    #[test]
    fn test_coerce_other_types_stay_text() {
        assert_eq!(
            DefaultValue::coerce("10.50".into(), "numeric"),
            Some(DefaultValue::Text("10.50".into()))
        );
        assert_eq!(
            DefaultValue::coerce("1 day".into(), "interval"),
            Some(DefaultValue::Text("1 day".into()))
        );
        assert_eq!(
            DefaultValue::coerce("(0,0)".into(), "point"),
            Some(DefaultValue::Text("(0,0)".into()))
        );
    }

    #[test]
    fn test_default_value_serializes_as_bare_scalar() {
        let json = serde_json::to_string(&DefaultValue::Int(0)).unwrap();
        assert_eq!(json, "0");
        let json = serde_json::to_string(&DefaultValue::Text("active".into())).unwrap();
        assert_eq!(json, "\"active\"");
    }

    #[test]
    fn test_descriptor_serializes_type_field() {
        let col = ColumnDescriptor {
            name: "id".into(),
            data_type: "int".into(),
            size: Some(10),
            scale: Some(0),
            not_null: true,
            default: None,
            auto_increment: true,
            primary_key: true,
            options: None,
        };
        let json = serde_json::to_value(&col).unwrap();
        assert_eq!(json["type"], "int");
        assert_eq!(json["primary_key"], true);
        assert!(json["default"].is_null());
    }

    #[test]
    fn test_catalog_column_row_from_information_schema() {
        let row = CatalogRow::new()
            .with("_name", "id")
            .with("_type", "int")
            .with("_size", 10i64)
            .with("_scale", 0i64)
            .with("_notnull", 1i64)
            .with("_default", CatalogValue::Null)
            .with("_autoinc", 1i64)
            .with("_primary", 1i64)
            .with("_extended", "int(11) unsigned");

        let col = CatalogColumnRow::from_catalog_row(&row).unwrap();
        assert_eq!(col.name, "id");
        assert_eq!(col.size.as_deref(), Some("10"));
        assert_eq!(col.scale.as_deref(), Some("0"));
        assert!(col.not_null);
        assert!(col.default.is_none());
        assert!(col.auto_increment);
        assert!(col.primary_key);
        assert_eq!(col.extended.as_deref(), Some("int(11) unsigned"));
    }

    #[test]
    fn test_catalog_column_row_requires_name() {
        let row = CatalogRow::new().with("_type", "int");
        let err = CatalogColumnRow::from_catalog_row(&row).unwrap_err();
        assert!(err.to_string().contains("_name"));
    }
}
