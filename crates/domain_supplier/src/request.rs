//! Supplier creation payload

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::records::{Address, Contact, Group, Material, OtherAttribute};

/// Full payload of a create-supplier call
///
/// The three scalar fields must be non-empty. Every nested list must be
/// present in the body (an empty list is fine); a missing list is a decode
/// error before validation ever runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SupplierRequest {
    #[validate(length(min = 1, message = "supplier_name is required"))]
    pub supplier_name: String,
    #[validate(length(min = 1, message = "logo is required"))]
    pub logo: String,
    #[validate(length(min = 1, message = "nickname is required"))]
    pub nickname: String,
    pub address: Vec<Address>,
    pub contacts: Vec<Contact>,
    pub groups: Vec<Group>,
    pub materials: Vec<Material>,
    pub others: Vec<OtherAttribute>,
}

impl SupplierRequest {
    /// Number of child rows the background fan-out will attempt
    pub fn child_record_count(&self) -> usize {
        self.address.len() + self.contacts.len() + self.groups.len()
    }
}
