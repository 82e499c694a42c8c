//! Request/response data transfer objects

pub mod envelope;

pub use envelope::{ApiResponse, LocalizedMessage, HealthCheckMessage, ReadinessResponse};
