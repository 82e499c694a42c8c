//! Supplier domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the supplier domain
#[derive(Debug, Error)]
pub enum SupplierError {
    /// A contact phone or mobile number failed the format check
    #[error("invalid phone number format for contact {field}: {value}")]
    InvalidPhoneNumber { field: &'static str, value: String },

    /// A contact email failed the format check
    #[error("invalid email format for contact: {0}")]
    InvalidEmail(String),

    /// Required request fields were missing or empty
    #[error("invalid supplier request: {0}")]
    InvalidRequest(String),

    /// Status label outside the known set
    #[error("unknown supplier status: {0}")]
    UnknownStatus(String),

    /// The request could not be serialized for the audit snapshot
    #[error("failed to serialize supplier request: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store rejected or could not run the operation
    #[error("store error: {0}")]
    Store(#[from] PortError),
}

impl SupplierError {
    /// Returns true if the caller sent data that can never succeed as is
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SupplierError::InvalidPhoneNumber { .. }
                | SupplierError::InvalidEmail(_)
                | SupplierError::InvalidRequest(_)
                | SupplierError::UnknownStatus(_)
        )
    }

    /// Returns true if the error came from the store gateway
    pub fn is_store(&self) -> bool {
        matches!(self, SupplierError::Store(_))
    }
}
