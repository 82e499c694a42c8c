//! Supplier Management Domain
//!
//! This crate owns everything the supplier backend knows about suppliers:
//! the record types, the format checks applied to incoming contacts, the
//! port through which records are persisted, and the service that
//! orchestrates creation and listing.
//!
//! # Creation Flow
//!
//! Creating a supplier is split in two:
//!
//! 1. The primary supplier row is inserted synchronously and its new id is
//!    returned to the caller right away.
//! 2. Addresses, contacts and groups are handed to a background fan-out that
//!    inserts them concurrently. Failures there are logged and reported to an
//!    optional observer but never reach the caller and never undo step 1.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use core_kernel::TraceId;
//! use domain_supplier::{SupplierService, SupplierFilter};
//!
//! let service = SupplierService::new(Arc::new(adapter));
//! let supplier = service.create_supplier(request, TraceId::generate()).await?;
//! let page = service.list_suppliers(&SupplierFilter::default(), TraceId::generate()).await?;
//! ```

pub mod supplier;
pub mod records;
pub mod request;
pub mod listing;
pub mod validation;
pub mod error;
pub mod ports;
pub mod fanout;
pub mod service;

pub use supplier::{Supplier, SupplierStatus, NewSupplier};
pub use records::{
    Address, Contact, Group, Material, OtherAttribute,
    NewAddress, NewContact, NewGroup,
};
pub use request::SupplierRequest;
pub use listing::{SupplierFilter, SupplierListRow, SupplierListResponse, Pagination};
pub use validation::{is_phone_number, is_valid_email, format_phone_number, validate_contacts};
pub use error::SupplierError;
pub use ports::SupplierPort;
pub use fanout::{
    ChildRecordFanOut, ChildRecords, ChildKind, ChildInsertFailure,
    FanOutReport, FanOutHandle, FanOutObserver,
};
pub use service::SupplierService;

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockSupplierPort;
