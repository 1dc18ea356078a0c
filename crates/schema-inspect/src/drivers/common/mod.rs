//! Common utilities shared across database drivers.
//!
//! - [`information_schema`]: the column lookup shared by MySQL and PostgreSQL
//! - [`literal`]: default-literal helpers

pub mod information_schema;
pub mod literal;

pub use literal::{is_numeric, unquote};
