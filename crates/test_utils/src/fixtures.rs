//! Pre-built Test Fixtures
//!
//! Ready-to-use supplier data. Values are fixed so tests can assert on them
//! directly.

use domain_supplier::{
    Address, Contact, Group, Material, OtherAttribute, SupplierFilter, SupplierRequest,
};

/// Fixture for supplier request data
pub struct SupplierFixtures;

impl SupplierFixtures {
    /// Main head-office address
    pub fn main_address() -> Address {
        Address {
            name: "Head Office".to_string(),
            address: "Jl. Jend. Sudirman No. 1, Jakarta".to_string(),
            is_main: true,
        }
    }

    /// Secondary warehouse address
    pub fn warehouse_address() -> Address {
        Address {
            name: "Warehouse".to_string(),
            address: "Jl. Industri Raya 12, Bekasi".to_string(),
            is_main: false,
        }
    }

    /// Main contact with local-format numbers
    pub fn main_contact() -> Contact {
        Contact {
            name: "Rina Wulandari".to_string(),
            job_position: "Sales Manager".to_string(),
            email: "rina@majujaya.co.id".to_string(),
            phone_number: "0812345678".to_string(),
            mobile_number: "+62898765432".to_string(),
            is_main: true,
        }
    }

    /// Contact whose phone number is too short
    pub fn contact_with_invalid_phone() -> Contact {
        Contact {
            phone_number: "0812".to_string(),
            ..Self::main_contact()
        }
    }

    /// Contact whose email has no domain
    pub fn contact_with_invalid_email() -> Contact {
        Contact {
            email: "rina-at-majujaya".to_string(),
            ..Self::main_contact()
        }
    }

    pub fn tier_group() -> Group {
        Group {
            group_name: "Tier".to_string(),
            value: "Gold".to_string(),
            is_active: true,
        }
    }

    pub fn steel_material() -> Material {
        Material {
            material_group: "Raw".to_string(),
            material_name: "Steel Plate".to_string(),
            material_code: "STL-001".to_string(),
            is_active: true,
        }
    }

    pub fn payment_terms() -> OtherAttribute {
        OtherAttribute {
            attribute_name: "Payment Terms".to_string(),
            value: "NET 30".to_string(),
            is_active: true,
        }
    }

    /// Request with every nested list populated
    pub fn full_request() -> SupplierRequest {
        SupplierRequest {
            supplier_name: "PT Maju Jaya".to_string(),
            logo: "maju-jaya.png".to_string(),
            nickname: "majujaya".to_string(),
            address: vec![Self::main_address(), Self::warehouse_address()],
            contacts: vec![Self::main_contact()],
            groups: vec![Self::tier_group()],
            materials: vec![Self::steel_material()],
            others: vec![Self::payment_terms()],
        }
    }

    /// Request with only the required scalar fields and empty lists
    pub fn minimal_request() -> SupplierRequest {
        SupplierRequest {
            supplier_name: "CV Sederhana".to_string(),
            logo: "sederhana.png".to_string(),
            nickname: "sederhana".to_string(),
            address: vec![],
            contacts: vec![],
            groups: vec![],
            materials: vec![],
            others: vec![],
        }
    }

    /// JSON body of [`SupplierFixtures::full_request`]
    pub fn full_request_json() -> serde_json::Value {
        serde_json::json!({
            "supplier_name": "PT Maju Jaya",
            "logo": "maju-jaya.png",
            "nickname": "majujaya",
            "address": [
                {"name": "Head Office", "address": "Jl. Jend. Sudirman No. 1, Jakarta", "is_main": true},
                {"name": "Warehouse", "address": "Jl. Industri Raya 12, Bekasi", "is_main": false}
            ],
            "contacts": [{
                "name": "Rina Wulandari",
                "job_position": "Sales Manager",
                "email": "rina@majujaya.co.id",
                "phone_number": "0812345678",
                "mobile_number": "+62898765432",
                "is_main": true
            }],
            "groups": [{"group_name": "Tier", "value": "Gold", "is_active": true}],
            "materials": [{
                "material_group": "Raw",
                "material_name": "Steel Plate",
                "material_code": "STL-001",
                "is_active": true
            }],
            "others": [{"attribute_name": "Payment Terms", "value": "NET 30", "is_active": true}]
        })
    }
}

/// Fixture for list filters
pub struct FilterFixtures;

impl FilterFixtures {
    pub fn by_name(name: &str) -> SupplierFilter {
        SupplierFilter::by_name(name)
    }

    pub fn page(offset: i64, limit: i64) -> SupplierFilter {
        SupplierFilter::default().paginate(offset, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_fixture_matches_struct_fixture() {
        let parsed: SupplierRequest =
            serde_json::from_value(SupplierFixtures::full_request_json()).unwrap();
        assert_eq!(parsed, SupplierFixtures::full_request());
    }

    #[test]
    fn test_invalid_contacts_fail_validation() {
        assert!(domain_supplier::validate_contacts(&[SupplierFixtures::main_contact()]).is_ok());
        assert!(domain_supplier::validate_contacts(&[SupplierFixtures::contact_with_invalid_phone()]).is_err());
        assert!(domain_supplier::validate_contacts(&[SupplierFixtures::contact_with_invalid_email()]).is_err());
    }
}
