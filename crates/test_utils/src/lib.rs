//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! supplier backend test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for suppliers and their child records
//! - `builders`: Builder for supplier creation requests
//! - `database`: PostgreSQL testcontainer management
//! - `assertions`: Assertion helpers for response envelopes and phone numbers
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
