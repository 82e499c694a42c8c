//! Domain Adapters
//!
//! Adapter implementations for domain ports, connecting domain interfaces
//! to the PostgreSQL database layer. Each adapter implements the domain's
//! port trait, translates between domain types and row types, and uses the
//! repository layer for the SQL itself.

pub mod supplier;

pub use supplier::PostgresSupplierAdapter;
