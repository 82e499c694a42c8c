//! Supplier Service
//!
//! Orchestrates supplier creation and listing on top of a [`SupplierPort`].
//!
//! Creation persists the primary row synchronously and hands the child
//! records to a [`ChildRecordFanOut`]. The caller gets its answer as soon as
//! the primary row exists; addresses, contacts and groups follow in the
//! background, so a read issued right after creation may not see them yet.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{error, info, instrument};

use core_kernel::{HealthCheckResult, TraceId};

use crate::error::SupplierError;
use crate::fanout::{ChildRecordFanOut, ChildRecords, FanOutHandle, FanOutObserver};
use crate::listing::{SupplierFilter, SupplierListResponse};
use crate::ports::SupplierPort;
use crate::request::SupplierRequest;
use crate::supplier::{NewSupplier, Supplier, SupplierStatus};
use crate::validation::{validate_contacts, validate_request};

/// Application service for suppliers
#[derive(Clone)]
pub struct SupplierService {
    port: Arc<dyn SupplierPort>,
    fan_out: ChildRecordFanOut,
}

impl std::fmt::Debug for SupplierService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupplierService")
            .field("fan_out", &self.fan_out)
            .finish_non_exhaustive()
    }
}

impl SupplierService {
    pub fn new(port: Arc<dyn SupplierPort>) -> Self {
        let fan_out = ChildRecordFanOut::new(Arc::clone(&port));
        Self { port, fan_out }
    }

    /// Registers a hook that sees every failed background child insert
    pub fn with_observer(mut self, observer: Arc<dyn FanOutObserver>) -> Self {
        self.fan_out = self.fan_out.with_observer(observer);
        self
    }

    /// Creates a supplier and schedules its child records
    ///
    /// Returns once the primary row is stored. Child insert failures are
    /// logged and never surface here.
    pub async fn create_supplier(
        &self,
        request: SupplierRequest,
        trace_id: TraceId,
    ) -> Result<Supplier, SupplierError> {
        let (supplier, _detached) = self.create_supplier_tracked(request, trace_id).await?;
        Ok(supplier)
    }

    /// Same as [`SupplierService::create_supplier`], but also returns a handle
    /// on the background child inserts
    #[instrument(skip_all, fields(%trace_id, supplier_name = %request.supplier_name))]
    pub async fn create_supplier_tracked(
        &self,
        request: SupplierRequest,
        trace_id: TraceId,
    ) -> Result<(Supplier, FanOutHandle), SupplierError> {
        validate_request(&request)?;

        let snapshot = serde_json::to_string(&request)?;
        info!(%trace_id, request = %snapshot, "CreateSupplier - Request");

        if let Err(e) = validate_contacts(&request.contacts) {
            error!(%trace_id, request = %snapshot, error = %e, "CreateSupplier - Contact validation failed");
            return Err(e);
        }

        let now = Utc::now();
        let new_supplier = NewSupplier {
            supplier_name: request.supplier_name.clone(),
            logo: request.logo.clone(),
            nickname: request.nickname.clone(),
            status: SupplierStatus::initial(),
            created_at: now,
            updated_at: now,
            address: snapshot.clone(),
        };

        let supplier_id = match self.port.create_supplier(new_supplier.clone()).await {
            Ok(id) => id,
            Err(e) => {
                error!(%trace_id, request = %snapshot, error = %e, "CreateSupplier - Failed to create supplier");
                return Err(SupplierError::Store(e));
            }
        };

        let records = ChildRecords::from_request(supplier_id, &request);
        let handle = self
            .fan_out
            .spawn(supplier_id, records, trace_id, Arc::from(snapshot.as_str()));

        info!(%trace_id, %supplier_id, "CreateSupplier - Supplier created");

        Ok((new_supplier.into_supplier(supplier_id), handle))
    }

    /// Lists suppliers with their main address and contact
    #[instrument(skip_all, fields(%trace_id))]
    pub async fn list_suppliers(
        &self,
        filter: &SupplierFilter,
        trace_id: TraceId,
    ) -> Result<SupplierListResponse, SupplierError> {
        match self.port.list_suppliers(filter).await {
            Ok(rows) => {
                info!(%trace_id, rows = rows.len(), "ListSuppliers - Suppliers retrieved");
                Ok(SupplierListResponse::from_rows(rows))
            }
            Err(e) => {
                error!(%trace_id, ?filter, error = %e, "ListSuppliers - Failed to list suppliers");
                Err(SupplierError::Store(e))
            }
        }
    }

    /// Health of the underlying store
    pub async fn health_check(&self) -> HealthCheckResult {
        self.port.health_check().await
    }

    /// Number of background fan-outs still running
    pub fn pending_background_tasks(&self) -> usize {
        self.fan_out.in_flight()
    }

    /// Waits up to `grace` for background child inserts to drain
    ///
    /// Returns `true` if nothing was left running.
    pub async fn shutdown(&self, grace: Duration) -> bool {
        let drained = self.fan_out.shutdown(grace).await;
        if !drained {
            error!(
                pending = self.fan_out.in_flight(),
                "Background child inserts still running after grace period"
            );
        }
        drained
    }
}
