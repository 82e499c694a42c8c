//! API error handling
//!
//! Every failure is answered with the same envelope as a success, minus
//! `data`: the numeric status and a message in English and Indonesian.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use domain_supplier::SupplierError;

use crate::dto::{ApiResponse, LocalizedMessage};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body could not be decoded or is missing required fields
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    /// Supplier creation failed after validation
    #[error("Failed to create supplier: {0}")]
    CreateFailed(String),

    /// Listing failed; reported as not found regardless of cause
    #[error("Suppliers not found: {0}")]
    SuppliersNotFound(String),
}

impl ApiError {
    /// Maps a creation failure
    ///
    /// Only structural request problems are 400. Contact format failures
    /// surface as a failed creation, like store errors.
    pub fn from_create(err: SupplierError) -> Self {
        match err {
            SupplierError::InvalidRequest(_) => ApiError::InvalidPayload(err.to_string()),
            other => ApiError::CreateFailed(other.to_string()),
        }
    }

    /// Maps a listing failure
    pub fn from_list(err: SupplierError) -> Self {
        ApiError::SuppliersNotFound(err.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::CreateFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::SuppliersNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> LocalizedMessage {
        match self {
            ApiError::InvalidPayload(_) => LocalizedMessage::INVALID_PAYLOAD,
            ApiError::CreateFailed(_) => LocalizedMessage::CREATE_FAILED,
            ApiError::SuppliersNotFound(_) => LocalizedMessage::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiResponse::<()>::error(status, self.message());
        (status, Json(body)).into_response()
    }
}
