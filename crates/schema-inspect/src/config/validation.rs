//! Configuration validation.

use super::InspectorConfig;
use crate::core::identifier::validate_identifier;
use crate::drivers::DialectImpl;
use crate::error::{InspectError, Result};

/// Validate the configuration.
pub fn validate(config: &InspectorConfig) -> Result<()> {
    if config.r#type.trim().is_empty() {
        return Err(InspectError::Config("type is required".into()));
    }

    let dialect = DialectImpl::from_db_type(&config.r#type)?;

    if config.mariadb.is_some() && !matches!(dialect, DialectImpl::Mysql(_)) {
        return Err(InspectError::Config(format!(
            "mariadb is only valid for MySQL types, got type '{}'",
            config.r#type
        )));
    }

    if let Some(ref schema) = config.default_schema {
        validate_identifier(schema)
            .map_err(|e| InspectError::Config(format!("default_schema: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> InspectorConfig {
        InspectorConfig::new("postgres").with_default_schema("public")
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&valid_config()).is_ok());
        assert!(validate(&InspectorConfig::new("mysql").with_mariadb(true)).is_ok());
        assert!(validate(&InspectorConfig::new("mariadb").with_mariadb(false)).is_ok());
        assert!(validate(&InspectorConfig::new("sqlserver")).is_ok());
    }

    #[test]
    fn test_missing_type() {
        let config = InspectorConfig::new("  ");
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("type is required"));
    }

    #[test]
    fn test_unknown_type() {
        let config = InspectorConfig::new("oracle");
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_mariadb_flag_on_non_mysql() {
        let config = valid_config().with_mariadb(true);
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("only valid for MySQL"));
    }

    #[test]
    fn test_bad_default_schema() {
        let config = InspectorConfig::new("pg").with_default_schema("");
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("default_schema"));

        let config = InspectorConfig::new("pg").with_default_schema("a".repeat(129));
        assert!(validate(&config).is_err());
    }
}
