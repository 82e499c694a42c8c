//! Core Kernel - Foundational types for the supplier system
//!
//! This crate provides the building blocks shared by every other crate:
//! - Strongly-typed identifiers for store-assigned records
//! - Per-request trace identifiers for log correlation
//! - Port error and health-check types for the hexagonal boundary

pub mod identifiers;
pub mod ports;

pub use identifiers::{SupplierId, AddressId, ContactId, GroupId, TraceId, IdParseError};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
