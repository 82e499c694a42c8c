//! Repository implementations for domain entities
//!
//! Repositories encapsulate the SQL and map between database rows and
//! domain types. Queries are built at runtime with bound parameters.

pub mod supplier;

pub use supplier::{SupplierRepository, SupplierRow, SupplierListRecord, build_list_query};
