//! MySQL/MariaDB catalog driver.
//!
//! - [`MysqlDialect`]: catalog SQL and default normalization
//! - [`MysqlExecutor`]: executor over an SQLx pool (`mysql` feature)
//!
//! # Feature Flag
//!
//! The executor is only available when the `mysql` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! schema-inspect = { version = "0.1", features = ["mysql"] }
//! ```
//!
//! # Supported Versions
//!
//! - MySQL 5.7+, 8.0+
//! - MariaDB 10.2+

mod dialect;
#[cfg(feature = "mysql")]
mod executor;

pub use dialect::MysqlDialect;
#[cfg(feature = "mysql")]
pub use executor::MysqlExecutor;
