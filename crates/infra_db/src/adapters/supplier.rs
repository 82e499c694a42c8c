//! PostgreSQL Supplier Adapter
//!
//! This module provides the internal (database) adapter for the supplier
//! domain, implementing the `SupplierPort` trait using PostgreSQL via the
//! `SupplierRepository`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresSupplierAdapter;
//! use domain_supplier::{SupplierPort, SupplierService};
//! use std::sync::Arc;
//!
//! let port: Arc<dyn SupplierPort> = Arc::new(PostgresSupplierAdapter::new(pool));
//! let service = SupplierService::new(port);
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{
    SupplierId, AddressId, ContactId, GroupId,
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
use domain_supplier::{
    NewAddress, NewContact, NewGroup, NewSupplier,
    SupplierFilter, SupplierListRow, SupplierPort,
};

use crate::repositories::supplier::SupplierRepository;

const ADAPTER_ID: &str = "postgres-supplier-adapter";

/// PostgreSQL-backed implementation of the SupplierPort trait
///
/// Database errors are translated to `PortError` through
/// `From<DatabaseError>`: constraint violations become `Conflict`, pool
/// exhaustion becomes `Timeout`, everything else `Internal`.
#[derive(Debug, Clone)]
pub struct PostgresSupplierAdapter {
    repository: SupplierRepository,
    pool: PgPool,
}

impl PostgresSupplierAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SupplierRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &SupplierRepository {
        &self.repository
    }
}

impl DomainPort for PostgresSupplierAdapter {}

#[async_trait]
impl HealthCheckable for PostgresSupplierAdapter {
    /// Performs a `SELECT 1` round-trip
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(format!("Database error: {}", e)),
                checked_at: Utc::now(),
            },
        }
    }
}

#[async_trait]
impl SupplierPort for PostgresSupplierAdapter {
    #[instrument(skip(self, supplier), fields(supplier_name = %supplier.supplier_name))]
    async fn create_supplier(&self, supplier: NewSupplier) -> Result<SupplierId, PortError> {
        let id = self.repository.insert_supplier(&supplier).await?;
        debug!(supplier_id = id, "Inserted supplier row");
        Ok(SupplierId::new(id))
    }

    #[instrument(skip(self, address), fields(supplier_id = %address.supplier_id))]
    async fn create_address(&self, address: NewAddress) -> Result<AddressId, PortError> {
        let id = self.repository.insert_address(&address).await?;
        Ok(AddressId::new(id))
    }

    #[instrument(skip(self, contact), fields(supplier_id = %contact.supplier_id))]
    async fn create_contact(&self, contact: NewContact) -> Result<ContactId, PortError> {
        let id = self.repository.insert_contact(&contact).await?;
        Ok(ContactId::new(id))
    }

    #[instrument(skip(self, group), fields(supplier_id = %group.supplier_id))]
    async fn create_group(&self, group: NewGroup) -> Result<GroupId, PortError> {
        let id = self.repository.insert_group(&group).await?;
        Ok(GroupId::new(id))
    }

    #[instrument(skip(self))]
    async fn list_suppliers(&self, filter: &SupplierFilter) -> Result<Vec<SupplierListRow>, PortError> {
        let records = self.repository.list_suppliers(filter).await?;
        debug!(rows = records.len(), "Listed suppliers");
        Ok(records.into_iter().map(SupplierListRow::from).collect())
    }
}
