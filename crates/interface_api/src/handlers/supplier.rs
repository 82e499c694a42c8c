//! Supplier handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::{error, info};

use core_kernel::TraceId;
use domain_supplier::{Supplier, SupplierFilter, SupplierListResponse, SupplierRequest};

use crate::dto::{ApiResponse, LocalizedMessage};
use crate::{AppState, error::ApiError};

/// Creates a supplier
///
/// Answers 201 as soon as the primary row exists; child records are
/// inserted in the background.
pub async fn create_supplier(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    payload: Result<Json<SupplierRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Supplier>>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        info!(%trace_id, error = %rejection.body_text(), "Error parsing request body");
        ApiError::InvalidPayload(rejection.body_text())
    })?;

    info!(%trace_id, request = ?request, "CreateSupplierHandler - start");

    let supplier = state
        .service
        .create_supplier(request, trace_id)
        .await
        .map_err(|e| {
            error!(%trace_id, error = %e, "CreateSupplierHandler - Error details");
            ApiError::from_create(e)
        })?;

    info!(%trace_id, response = ?supplier, "CreateSupplierHandler - Success - end");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(StatusCode::CREATED, LocalizedMessage::CREATED, supplier)),
    ))
}

/// Lists suppliers matching the filter in the body
pub async fn list_suppliers(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    payload: Result<Json<SupplierFilter>, JsonRejection>,
) -> Result<Json<ApiResponse<SupplierListResponse>>, ApiError> {
    let Json(filter) = payload.map_err(|rejection| {
        info!(%trace_id, error = %rejection.body_text(), "Error parsing request body");
        ApiError::InvalidPayload(rejection.body_text())
    })?;

    info!(%trace_id, request = ?filter, "GetListSuppliers - start");

    let suppliers = state
        .service
        .list_suppliers(&filter, trace_id)
        .await
        .map_err(|e| {
            error!(%trace_id, request = ?filter, error = %e, "GetListSuppliers - Error details");
            ApiError::from_list(e)
        })?;

    info!(%trace_id, rows = suppliers.total_data, "GetListSuppliers - Success - end");

    Ok(Json(ApiResponse::success(
        StatusCode::OK,
        LocalizedMessage::RETRIEVED,
        suppliers,
    )))
}
