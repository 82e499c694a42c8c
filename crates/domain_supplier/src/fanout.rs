//! Best-effort background insertion of supplier child records
//!
//! Once the primary supplier row exists, its addresses, contacts and groups
//! are inserted by a detached task. Inside that task every record gets its
//! own sub-task on a [`JoinSet`], so the inserts run concurrently and in no
//! particular order. A failed insert is logged, handed to the optional
//! [`FanOutObserver`] and recorded in the [`FanOutReport`]; it never cancels
//! its siblings and never reaches the original caller.
//!
//! Detached tasks are spawned on a [`TaskTracker`] owned by the fan-out, not
//! on the request task. Dropping the request (client disconnect, handler
//! cancellation) therefore leaves in-flight inserts running, and shutdown can
//! wait for them with a bounded grace period.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::task::{JoinHandle, JoinSet};
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info};

use core_kernel::{PortError, SupplierId, TraceId};

use crate::ports::SupplierPort;
use crate::records::{NewAddress, NewContact, NewGroup};
use crate::request::SupplierRequest;

/// Kind of child record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildKind {
    Address,
    Contact,
    Group,
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChildKind::Address => "address",
            ChildKind::Contact => "contact",
            ChildKind::Group => "group",
        };
        f.write_str(name)
    }
}

/// One child insert that did not make it into the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildInsertFailure {
    pub kind: ChildKind,
    /// Position of the record within its list in the original request
    pub index: usize,
    pub error: String,
}

/// Outcome of one supplier's fan-out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FanOutReport {
    pub supplier_id: SupplierId,
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<ChildInsertFailure>,
    /// Sub-tasks that panicked or were aborted before reporting
    pub aborted: usize,
}

impl FanOutReport {
    fn new(supplier_id: SupplierId, attempted: usize) -> Self {
        Self {
            supplier_id,
            attempted,
            succeeded: 0,
            failures: Vec::new(),
            aborted: 0,
        }
    }

    /// True when every attempted insert succeeded
    pub fn is_complete(&self) -> bool {
        self.succeeded == self.attempted
    }
}

/// Hook notified of each failed child insert
///
/// Use it to feed metrics or alerting; the fan-out already logs every
/// failure on its own.
pub trait FanOutObserver: Send + Sync {
    fn on_child_failure(&self, trace_id: TraceId, supplier_id: SupplierId, failure: &ChildInsertFailure);
}

/// Child records of one supplier, ready to insert
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildRecords {
    pub addresses: Vec<NewAddress>,
    pub contacts: Vec<NewContact>,
    pub groups: Vec<NewGroup>,
}

impl ChildRecords {
    /// Extracts the insertable children of `request` for `supplier_id`
    ///
    /// Contact numbers are normalized here. Materials and other attributes
    /// are not inserted.
    pub fn from_request(supplier_id: SupplierId, request: &SupplierRequest) -> Self {
        Self {
            addresses: request
                .address
                .iter()
                .map(|a| NewAddress::from_request(supplier_id, a))
                .collect(),
            contacts: request
                .contacts
                .iter()
                .map(|c| NewContact::from_request(supplier_id, c))
                .collect(),
            groups: request
                .groups
                .iter()
                .map(|g| NewGroup::from_request(supplier_id, g))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.addresses.len() + self.contacts.len() + self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle on a running fan-out
///
/// Dropping the handle detaches it; the inserts keep running.
#[derive(Debug)]
pub struct FanOutHandle(JoinHandle<FanOutReport>);

impl FanOutHandle {
    /// Waits for every child insert of this supplier to finish
    ///
    /// Returns `None` only if the detached task itself panicked.
    pub async fn wait(self) -> Option<FanOutReport> {
        self.0.await.ok()
    }
}

/// Spawns and supervises detached child-record inserts
#[derive(Clone)]
pub struct ChildRecordFanOut {
    port: Arc<dyn SupplierPort>,
    tracker: TaskTracker,
    observer: Option<Arc<dyn FanOutObserver>>,
}

impl fmt::Debug for ChildRecordFanOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildRecordFanOut")
            .field("in_flight", &self.tracker.len())
            .field("closed", &self.tracker.is_closed())
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl ChildRecordFanOut {
    pub fn new(port: Arc<dyn SupplierPort>) -> Self {
        Self {
            port,
            tracker: TaskTracker::new(),
            observer: None,
        }
    }

    /// Registers a hook for failed child inserts
    pub fn with_observer(mut self, observer: Arc<dyn FanOutObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Number of detached fan-outs still running
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Starts inserting `records` in the background and returns immediately
    ///
    /// `request_snapshot` is the serialized creation request; it is attached
    /// to every failure log line.
    pub fn spawn(
        &self,
        supplier_id: SupplierId,
        records: ChildRecords,
        trace_id: TraceId,
        request_snapshot: Arc<str>,
    ) -> FanOutHandle {
        let port = Arc::clone(&self.port);
        let observer = self.observer.clone();

        let handle = self.tracker.spawn(async move {
            run_fan_out(port, observer, supplier_id, records, trace_id, request_snapshot).await
        });

        FanOutHandle(handle)
    }

    /// Closes the tracker and waits for running fan-outs
    ///
    /// Returns `true` if everything finished within `grace`.
    pub async fn shutdown(&self, grace: Duration) -> bool {
        self.tracker.close();
        let pending = self.tracker.len();
        if pending > 0 {
            info!(pending, "Waiting for background child inserts to finish");
        }
        tokio::time::timeout(grace, self.tracker.wait()).await.is_ok()
    }
}

async fn run_fan_out(
    port: Arc<dyn SupplierPort>,
    observer: Option<Arc<dyn FanOutObserver>>,
    supplier_id: SupplierId,
    records: ChildRecords,
    trace_id: TraceId,
    request_snapshot: Arc<str>,
) -> FanOutReport {
    let mut report = FanOutReport::new(supplier_id, records.len());
    let mut inserts: JoinSet<(ChildKind, usize, Result<i64, PortError>)> = JoinSet::new();

    let ChildRecords { addresses, contacts, groups } = records;

    for (index, address) in addresses.into_iter().enumerate() {
        let port = Arc::clone(&port);
        inserts.spawn(async move {
            let result = port.create_address(address).await.map(i64::from);
            (ChildKind::Address, index, result)
        });
    }

    for (index, contact) in contacts.into_iter().enumerate() {
        let port = Arc::clone(&port);
        inserts.spawn(async move {
            let result = port.create_contact(contact).await.map(i64::from);
            (ChildKind::Contact, index, result)
        });
    }

    for (index, group) in groups.into_iter().enumerate() {
        let port = Arc::clone(&port);
        inserts.spawn(async move {
            let result = port.create_group(group).await.map(i64::from);
            (ChildKind::Group, index, result)
        });
    }

    while let Some(joined) = inserts.join_next().await {
        match joined {
            Ok((kind, index, Ok(child_id))) => {
                debug!(%trace_id, %supplier_id, %kind, index, child_id, "Child record created");
                report.succeeded += 1;
            }
            Ok((kind, index, Err(e))) => {
                error!(
                    %trace_id,
                    %supplier_id,
                    %kind,
                    index,
                    request = %request_snapshot,
                    error = %e,
                    "Failed to create {}", kind
                );
                let failure = ChildInsertFailure {
                    kind,
                    index,
                    error: e.to_string(),
                };
                if let Some(observer) = &observer {
                    observer.on_child_failure(trace_id, supplier_id, &failure);
                }
                report.failures.push(failure);
            }
            Err(e) => {
                error!(
                    %trace_id,
                    %supplier_id,
                    request = %request_snapshot,
                    error = %e,
                    "Background process error details"
                );
                report.aborted += 1;
            }
        }
    }

    info!(
        %trace_id,
        %supplier_id,
        attempted = report.attempted,
        succeeded = report.succeeded,
        failed = report.failures.len(),
        "Background child inserts finished"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::ports::mock::MockSupplierPort;

    #[derive(Default)]
    struct RecordingObserver {
        seen: Mutex<Vec<ChildInsertFailure>>,
    }

    impl FanOutObserver for RecordingObserver {
        fn on_child_failure(&self, _trace_id: TraceId, _supplier_id: SupplierId, failure: &ChildInsertFailure) {
            self.seen.lock().unwrap().push(failure.clone());
        }
    }

    fn records(supplier_id: SupplierId) -> ChildRecords {
        ChildRecords {
            addresses: vec![
                NewAddress {
                    supplier_id,
                    name: "HQ".to_string(),
                    address: "Jl. Pusat 1".to_string(),
                    is_main: true,
                },
                NewAddress {
                    supplier_id,
                    name: "Broken".to_string(),
                    address: "Jl. Rusak 9".to_string(),
                    is_main: false,
                },
            ],
            contacts: vec![NewContact {
                supplier_id,
                name: "Dewi".to_string(),
                job_position: "Owner".to_string(),
                email: "dewi@example.com".to_string(),
                phone_number: "62812345678".to_string(),
                mobile_number: "62898765432".to_string(),
                is_main: true,
            }],
            groups: vec![NewGroup {
                supplier_id,
                group_name: "Tier".to_string(),
                value: "Gold".to_string(),
                is_active: true,
            }],
        }
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_siblings() {
        let port = Arc::new(MockSupplierPort::new());
        port.fail_child_named("Broken");
        let observer = Arc::new(RecordingObserver::default());

        let fan_out = ChildRecordFanOut::new(port.clone()).with_observer(observer.clone());
        let supplier_id = SupplierId::new(1);

        let report = fan_out
            .spawn(supplier_id, records(supplier_id), TraceId::generate(), Arc::from("{}"))
            .wait()
            .await
            .unwrap();

        assert_eq!(report.attempted, 4);
        assert_eq!(report.succeeded, 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].kind, ChildKind::Address);
        assert_eq!(report.failures[0].index, 1);
        assert!(!report.is_complete());

        assert_eq!(port.addresses_for(supplier_id).await.len(), 1);
        assert_eq!(port.contacts_for(supplier_id).await.len(), 1);
        assert_eq!(port.groups_for(supplier_id).await.len(), 1);
        assert_eq!(observer.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_fan_out_completes() {
        let port = Arc::new(MockSupplierPort::new());
        let fan_out = ChildRecordFanOut::new(port);

        let report = fan_out
            .spawn(SupplierId::new(5), ChildRecords::default(), TraceId::generate(), Arc::from("{}"))
            .wait()
            .await
            .unwrap();

        assert_eq!(report.attempted, 0);
        assert!(report.is_complete());
    }

    #[tokio::test]
    async fn test_dropped_handle_keeps_running_and_shutdown_waits() {
        let port = Arc::new(MockSupplierPort::new());
        port.set_child_delay(Duration::from_millis(50));
        let fan_out = ChildRecordFanOut::new(port.clone());
        let supplier_id = SupplierId::new(3);

        drop(fan_out.spawn(supplier_id, records(supplier_id), TraceId::generate(), Arc::from("{}")));
        assert_eq!(fan_out.in_flight(), 1);

        assert!(fan_out.shutdown(Duration::from_secs(5)).await);
        assert_eq!(fan_out.in_flight(), 0);
        assert_eq!(port.contacts_for(supplier_id).await.len(), 1);
    }

    #[tokio::test]
    async fn test_shutdown_reports_timeout() {
        let port = Arc::new(MockSupplierPort::new());
        port.set_child_delay(Duration::from_secs(5));
        let fan_out = ChildRecordFanOut::new(port);
        let supplier_id = SupplierId::new(4);

        let _handle = fan_out.spawn(supplier_id, records(supplier_id), TraceId::generate(), Arc::from("{}"));
        assert!(!fan_out.shutdown(Duration::from_millis(10)).await);
    }
}
