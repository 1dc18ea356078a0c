//! Microsoft SQL Server catalog driver.
//!
//! - [`MssqlDialect`]: `sp_columns`/`sp_pkeys` access and default normalization
//! - [`MssqlExecutor`]: executor over a Tiberius client

mod dialect;
mod executor;

pub use dialect::MssqlDialect;
pub use executor::{MssqlClient, MssqlExecutor};
