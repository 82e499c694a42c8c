//! Response envelope shared by every supplier endpoint

use axum::http::StatusCode;
use serde::Serialize;

/// A user-facing message in English and Indonesian
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedMessage {
    pub en: &'static str,
    pub id: &'static str,
}

impl LocalizedMessage {
    pub const CREATED: Self = Self {
        en: "Suppliers created successfully",
        id: "Supplier berhasil dibuat",
    };

    pub const RETRIEVED: Self = Self {
        en: "Suppliers retrieved successfully",
        id: "Suppplier berhasil diambil",
    };

    pub const INVALID_PAYLOAD: Self = Self {
        en: "Invalid request payload",
        id: "Muatan permintaan tidak valid",
    };

    pub const CREATE_FAILED: Self = Self {
        en: "Failed to create supplier",
        id: "Gagal membuat supplier",
    };

    pub const NOT_FOUND: Self = Self {
        en: "Suppliers not found",
        id: "Supplier tidak ditemukan",
    };
}

/// `{status, message, data}` envelope
///
/// `data` is omitted entirely on errors.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: LocalizedMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(status: StatusCode, message: LocalizedMessage, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message,
            data: Some(data),
        }
    }

    pub fn error(status: StatusCode, message: LocalizedMessage) -> Self {
        Self {
            status: status.as_u16(),
            message,
            data: None,
        }
    }
}

/// Body of the liveness probe at `/`
#[derive(Debug, Serialize)]
pub struct HealthCheckMessage {
    pub message: &'static str,
}

/// Body of the readiness probe
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_has_no_data() {
        let body = ApiResponse::<()>::error(StatusCode::NOT_FOUND, LocalizedMessage::NOT_FOUND);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["message"]["id"], "Supplier tidak ditemukan");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_success_envelope_carries_data() {
        let body = ApiResponse::success(StatusCode::OK, LocalizedMessage::RETRIEVED, vec![1, 2]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }
}
