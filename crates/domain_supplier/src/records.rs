//! Child records owned by a supplier
//!
//! The request-side types (`Address`, `Contact`, ...) are what callers send
//! nested inside a [`crate::SupplierRequest`]. The `New*` types carry the
//! owning supplier id and are what the store gateway inserts.
//!
//! Fields default to empty values when omitted, matching the lenient body
//! parsing the API has always had for nested items.

use serde::{Deserialize, Serialize};

use core_kernel::SupplierId;

use crate::validation::format_phone_number;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub name: String,
    pub address: String,
    pub is_main: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub job_position: String,
    pub email: String,
    pub phone_number: String,
    pub mobile_number: String,
    pub is_main: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub group_name: String,
    pub value: String,
    pub is_active: bool,
}

/// Material supplied by the vendor
///
/// Only retained in the request snapshot; there is no insert path for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub material_group: String,
    pub material_name: String,
    pub material_code: String,
    pub is_active: bool,
}

/// Free-form supplier attribute
///
/// Only retained in the request snapshot; there is no insert path for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherAttribute {
    pub attribute_name: String,
    pub value: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
    pub supplier_id: SupplierId,
    pub name: String,
    pub address: String,
    pub is_main: bool,
}

impl NewAddress {
    pub fn from_request(supplier_id: SupplierId, address: &Address) -> Self {
        Self {
            supplier_id,
            name: address.name.clone(),
            address: address.address.clone(),
            is_main: address.is_main,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub supplier_id: SupplierId,
    pub name: String,
    pub job_position: String,
    pub email: String,
    pub phone_number: String,
    pub mobile_number: String,
    pub is_main: bool,
}

impl NewContact {
    /// Builds the insert payload, normalizing both numbers to the `62` form
    pub fn from_request(supplier_id: SupplierId, contact: &Contact) -> Self {
        Self {
            supplier_id,
            name: contact.name.clone(),
            job_position: contact.job_position.clone(),
            email: contact.email.clone(),
            phone_number: format_phone_number(&contact.phone_number),
            mobile_number: format_phone_number(&contact.mobile_number),
            is_main: contact.is_main,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGroup {
    pub supplier_id: SupplierId,
    pub group_name: String,
    pub value: String,
    pub is_active: bool,
}

impl NewGroup {
    pub fn from_request(supplier_id: SupplierId, group: &Group) -> Self {
        Self {
            supplier_id,
            group_name: group.group_name.clone(),
            value: group.value.clone(),
            is_active: group.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contact_normalizes_numbers() {
        let contact = Contact {
            name: "Budi".to_string(),
            job_position: "Sales".to_string(),
            email: "budi@example.co.id".to_string(),
            phone_number: "0812345678".to_string(),
            mobile_number: "+62898765432".to_string(),
            is_main: true,
        };

        let new_contact = NewContact::from_request(SupplierId::new(9), &contact);
        assert_eq!(new_contact.supplier_id, SupplierId::new(9));
        assert_eq!(new_contact.phone_number, "62812345678");
        assert_eq!(new_contact.mobile_number, "62898765432");
        assert!(new_contact.is_main);
    }

    #[test]
    fn test_missing_item_fields_default() {
        let group: Group = serde_json::from_str(r#"{"group_name":"Tier"}"#).unwrap();
        assert_eq!(group.group_name, "Tier");
        assert_eq!(group.value, "");
        assert!(!group.is_active);
    }

    #[test]
    fn test_unknown_item_fields_ignored() {
        let address: Address =
            serde_json::from_str(r#"{"address_id":4,"supplier_id":2,"name":"HQ","address":"Jl. Sudirman 1","is_main":true}"#)
                .unwrap();
        assert_eq!(address.name, "HQ");
        assert!(address.is_main);
    }
}
