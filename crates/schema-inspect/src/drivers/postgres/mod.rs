//! PostgreSQL catalog driver.
//!
//! - [`PostgresDialect`]: catalog SQL and default normalization
//! - [`PostgresExecutor`]: executor over a `tokio_postgres::Client`

mod dialect;
mod executor;

pub use dialect::PostgresDialect;
pub use executor::PostgresExecutor;
