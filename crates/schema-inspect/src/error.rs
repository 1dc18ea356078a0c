//! Error types for schema inspection.

use thiserror::Error;

/// Main error type for inspection operations.
///
/// Catalog executor failures are carried through unchanged: the driver
/// error converts into its variant via `?` and nothing is retried.
#[derive(Error, Debug)]
pub enum InspectError {
    /// Configuration error (invalid YAML, unknown dialect, bad schema name, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// PostgreSQL catalog query failed
    #[error("PostgreSQL catalog query failed: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// SQL Server catalog query failed
    #[error("SQL Server catalog query failed: {0}")]
    Mssql(#[from] tiberius::error::Error),

    /// MySQL/MariaDB catalog query failed
    #[cfg(feature = "mysql")]
    #[error("MySQL catalog query failed: {0}")]
    Mysql(#[from] sqlx::Error),

    /// A caller-supplied executor failed
    #[error("Catalog query failed: {0}")]
    Executor(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A catalog row did not carry a column the dialect relies on
    #[error("Catalog row is missing field '{0}'")]
    MissingField(String),

    /// The catalog could not tell us which schema to inspect
    #[error("Schema extraction failed: {0}")]
    SchemaExtraction(String),

    /// IO error (config file loading)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl InspectError {
    /// Wrap an arbitrary executor error.
    pub fn executor(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        InspectError::Executor(err.into())
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for inspection operations.
pub type Result<T> = std::result::Result<T, InspectError>;
