//! Core abstractions for dialect-independent schema inspection.
//!
//! - [`schema`]: column descriptors and the intermediate row types
//! - [`value`]: loosely-typed catalog cells, rows and queries
//! - [`traits`]: the executor and dialect seams
//! - [`typespec`]: native type specification parsing
//! - [`identifier`]: identifier quoting and splitting
//! - [`factory`]: descriptor construction
//!
//! Driver modules (`drivers/mysql`, `drivers/postgres`, `drivers/mssql`)
//! implement [`Dialect`] against these types.

pub mod factory;
pub mod identifier;
pub mod schema;
pub mod traits;
pub mod typespec;
pub mod value;

// Re-export commonly used types for convenience
pub use factory::ColumnFactory;
pub use identifier::{quote_name, split_name, validate_identifier};
pub use schema::{CatalogColumnRow, ColumnDescriptor, ColumnSpec, DefaultValue};
pub use traits::{CatalogExecutor, Dialect};
pub use typespec::parse_type_spec;
pub use value::{CatalogQuery, CatalogRow, CatalogValue};
