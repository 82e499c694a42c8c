//! Supplier Domain Ports
//!
//! This module defines the store gateway for the supplier domain. Every
//! operation is a single statement against the relational store: inserts
//! return the identifier the store generated, the list query returns rows.
//!
//! # Architecture
//!
//! - **Internal Adapter**: PostgreSQL via `infra_db::PostgresSupplierAdapter`
//! - **Mock Adapter**: [`mock::MockSupplierPort`], in-memory with failure
//!   injection (enabled by the `mock` feature)
//!
//! The service holds the port as `Arc<dyn SupplierPort>` because the same
//! instance is shared with the detached child-record fan-out.

use async_trait::async_trait;

use core_kernel::{
    SupplierId, AddressId, ContactId, GroupId,
    PortError, DomainPort, HealthCheckable,
};

use crate::listing::{SupplierFilter, SupplierListRow};
use crate::records::{NewAddress, NewContact, NewGroup};
use crate::supplier::NewSupplier;

/// Store gateway for supplier records
///
/// Implementations must not wrap these calls in a shared transaction: each
/// call acquires and releases its own connection.
#[async_trait]
pub trait SupplierPort: DomainPort + HealthCheckable {
    /// Inserts the primary supplier row and returns its new id
    async fn create_supplier(&self, supplier: NewSupplier) -> Result<SupplierId, PortError>;

    /// Inserts one supplier address
    async fn create_address(&self, address: NewAddress) -> Result<AddressId, PortError>;

    /// Inserts one supplier contact
    async fn create_contact(&self, contact: NewContact) -> Result<ContactId, PortError>;

    /// Inserts one supplier group
    async fn create_group(&self, group: NewGroup) -> Result<GroupId, PortError>;

    /// Lists suppliers joined with their main address and main contact
    ///
    /// An empty result is `Ok(vec![])`, never an error.
    async fn list_suppliers(&self, filter: &SupplierFilter) -> Result<Vec<SupplierListRow>, PortError>;
}

/// Mock implementation of SupplierPort for testing
///
/// Stores records in memory. Failures and latency can be injected to
/// exercise the error paths of the service and the HTTP layer.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use chrono::Utc;
    use tokio::sync::RwLock;

    use core_kernel::{AdapterHealth, HealthCheckResult};

    /// In-memory mock implementation of SupplierPort
    #[derive(Debug, Default)]
    pub struct MockSupplierPort {
        suppliers: RwLock<Vec<(SupplierId, NewSupplier)>>,
        addresses: RwLock<Vec<(AddressId, NewAddress)>>,
        contacts: RwLock<Vec<(ContactId, NewContact)>>,
        groups: RwLock<Vec<(GroupId, NewGroup)>>,
        supplier_seq: AtomicI64,
        address_seq: AtomicI64,
        contact_seq: AtomicI64,
        group_seq: AtomicI64,
        fail_supplier_insert: AtomicBool,
        fail_list: AtomicBool,
        failing_children: Mutex<HashSet<String>>,
        child_delay: Mutex<Option<Duration>>,
    }

    impl MockSupplierPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes every primary supplier insert fail with a connection error
        pub fn set_fail_supplier_insert(&self, fail: bool) {
            self.fail_supplier_insert.store(fail, Ordering::SeqCst);
        }

        /// Makes every list query fail with a connection error
        pub fn set_fail_list(&self, fail: bool) {
            self.fail_list.store(fail, Ordering::SeqCst);
        }

        /// Makes child inserts fail when the address/contact name or group name equals `name`
        pub fn fail_child_named(&self, name: impl Into<String>) {
            if let Ok(mut names) = self.failing_children.lock() {
                names.insert(name.into());
            }
        }

        /// Delays every child insert, so tests can observe the caller returning first
        pub fn set_child_delay(&self, delay: Duration) {
            if let Ok(mut slot) = self.child_delay.lock() {
                *slot = Some(delay);
            }
        }

        /// Number of supplier rows stored so far
        pub async fn supplier_count(&self) -> usize {
            self.suppliers.read().await.len()
        }

        /// Returns the stored supplier row for `id`
        pub async fn supplier(&self, id: SupplierId) -> Option<NewSupplier> {
            self.suppliers
                .read()
                .await
                .iter()
                .find(|(sid, _)| *sid == id)
                .map(|(_, s)| s.clone())
        }

        /// Addresses stored for a supplier
        pub async fn addresses_for(&self, id: SupplierId) -> Vec<NewAddress> {
            self.addresses
                .read()
                .await
                .iter()
                .filter(|(_, a)| a.supplier_id == id)
                .map(|(_, a)| a.clone())
                .collect()
        }

        /// Contacts stored for a supplier
        pub async fn contacts_for(&self, id: SupplierId) -> Vec<NewContact> {
            self.contacts
                .read()
                .await
                .iter()
                .filter(|(_, c)| c.supplier_id == id)
                .map(|(_, c)| c.clone())
                .collect()
        }

        /// Groups stored for a supplier
        pub async fn groups_for(&self, id: SupplierId) -> Vec<NewGroup> {
            self.groups
                .read()
                .await
                .iter()
                .filter(|(_, g)| g.supplier_id == id)
                .map(|(_, g)| g.clone())
                .collect()
        }

        async fn before_child_insert(&self, name: &str) -> Result<(), PortError> {
            let delay = self.child_delay.lock().ok().and_then(|slot| *slot);
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            let failing = self
                .failing_children
                .lock()
                .map(|names| names.contains(name))
                .unwrap_or(false);
            if failing {
                return Err(PortError::conflict(format!("injected failure for {name}")));
            }
            Ok(())
        }

        fn next(seq: &AtomicI64) -> i64 {
            seq.fetch_add(1, Ordering::SeqCst) + 1
        }
    }

    impl DomainPort for MockSupplierPort {}

    #[async_trait]
    impl HealthCheckable for MockSupplierPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-supplier-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl SupplierPort for MockSupplierPort {
        async fn create_supplier(&self, supplier: NewSupplier) -> Result<SupplierId, PortError> {
            if self.fail_supplier_insert.load(Ordering::SeqCst) {
                return Err(PortError::connection("mock store unavailable"));
            }
            let id = SupplierId::new(Self::next(&self.supplier_seq));
            self.suppliers.write().await.push((id, supplier));
            Ok(id)
        }

        async fn create_address(&self, address: NewAddress) -> Result<AddressId, PortError> {
            self.before_child_insert(&address.name).await?;
            let id = AddressId::new(Self::next(&self.address_seq));
            self.addresses.write().await.push((id, address));
            Ok(id)
        }

        async fn create_contact(&self, contact: NewContact) -> Result<ContactId, PortError> {
            self.before_child_insert(&contact.name).await?;
            let id = ContactId::new(Self::next(&self.contact_seq));
            self.contacts.write().await.push((id, contact));
            Ok(id)
        }

        async fn create_group(&self, group: NewGroup) -> Result<GroupId, PortError> {
            self.before_child_insert(&group.group_name).await?;
            let id = GroupId::new(Self::next(&self.group_seq));
            self.groups.write().await.push((id, group));
            Ok(id)
        }

        async fn list_suppliers(&self, filter: &SupplierFilter) -> Result<Vec<SupplierListRow>, PortError> {
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(PortError::connection("mock store unavailable"));
            }

            let page = filter.pagination();
            if page.skip < 0 || page.fetch < 0 {
                return Err(PortError::validation("OFFSET and FETCH must not be negative"));
            }

            let name_term = filter.name_term().map(str::to_lowercase);
            let status_term = filter.status_term();

            let suppliers = self.suppliers.read().await;
            let addresses = self.addresses.read().await;
            let contacts = self.contacts.read().await;

            let mut matching: Vec<_> = suppliers
                .iter()
                .filter(|(_, s)| {
                    if let Some(ref term) = name_term {
                        if !s.supplier_name.to_lowercase().contains(term.as_str()) {
                            return false;
                        }
                    }
                    if let Some(status) = status_term {
                        if s.status.as_str() != status {
                            return false;
                        }
                    }
                    true
                })
                .collect();
            matching.sort_by_key(|(id, _)| *id);

            Ok(matching
                .into_iter()
                .skip(page.skip as usize)
                .take(page.fetch as usize)
                .map(|(id, s)| SupplierListRow {
                    supplier_name: s.supplier_name.clone(),
                    logo: s.logo.clone(),
                    address: addresses
                        .iter()
                        .find(|(_, a)| a.supplier_id == *id && a.is_main)
                        .map(|(_, a)| a.address.clone()),
                    contact: contacts
                        .iter()
                        .find(|(_, c)| c.supplier_id == *id && c.is_main)
                        .map(|(_, c)| c.name.clone()),
                    status: s.status.as_str().to_string(),
                })
                .collect())
        }
    }
}
