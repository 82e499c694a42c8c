//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL persistence for the supplier backend
//! using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: [`repositories`] holds the SQL,
//! [`adapters`] implements the domain's `SupplierPort` on top of it, and
//! [`pool`] owns connection pool setup.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PostgresSupplierAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/suppliers")).await?;
//! let adapter = PostgresSupplierAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, DatabaseConfig, create_pool, create_pool_from_url, verify_connection};
pub use error::DatabaseError;
pub use repositories::SupplierRepository;
pub use adapters::PostgresSupplierAdapter;
