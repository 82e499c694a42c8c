//! Test Data Builders
//!
//! Provides a builder for supplier creation requests. Tests set only the
//! fields they care about; everything else is filled with fake but valid
//! data.

use fake::faker::address::en::{CityName, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::job::en::Title;
use fake::faker::name::en::Name;
use fake::Fake;

use domain_supplier::{
    Address, Contact, Group, Material, OtherAttribute, SupplierRequest,
};

/// Builder for constructing supplier creation requests
pub struct SupplierRequestBuilder {
    supplier_name: String,
    logo: String,
    nickname: String,
    address: Vec<Address>,
    contacts: Vec<Contact>,
    groups: Vec<Group>,
    materials: Vec<Material>,
    others: Vec<OtherAttribute>,
}

impl Default for SupplierRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SupplierRequestBuilder {
    /// Creates a builder with a fake company name and no child records
    pub fn new() -> Self {
        let supplier_name: String = CompanyName().fake();
        let nickname = supplier_name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        Self {
            logo: format!("{nickname}.png"),
            supplier_name,
            nickname,
            address: Vec::new(),
            contacts: Vec::new(),
            groups: Vec::new(),
            materials: Vec::new(),
            others: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.supplier_name = name.into();
        self
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = logo.into();
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address.push(address);
        self
    }

    /// Adds a fake address
    pub fn with_random_address(self, is_main: bool) -> Self {
        let street: String = StreetName().fake();
        let city: String = CityName().fake();
        self.with_address(Address {
            name: if is_main { "Head Office".to_string() } else { city.clone() },
            address: format!("{street}, {city}"),
            is_main,
        })
    }

    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contacts.push(contact);
        self
    }

    /// Adds a fake contact whose numbers and email pass validation
    pub fn with_random_contact(self, is_main: bool) -> Self {
        let subscriber: u64 = (10_000_000..99_999_999).fake();
        self.with_contact(Contact {
            name: Name().fake(),
            job_position: Title().fake(),
            email: format!("contact{subscriber}@example.com"),
            phone_number: format!("08{subscriber}"),
            mobile_number: format!("+628{subscriber}"),
            is_main,
        })
    }

    pub fn with_group(mut self, group_name: impl Into<String>, value: impl Into<String>) -> Self {
        self.groups.push(Group {
            group_name: group_name.into(),
            value: value.into(),
            is_active: true,
        });
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_other(mut self, other: OtherAttribute) -> Self {
        self.others.push(other);
        self
    }

    /// Builds the request
    pub fn build(self) -> SupplierRequest {
        SupplierRequest {
            supplier_name: self.supplier_name,
            logo: self.logo,
            nickname: self.nickname,
            address: self.address,
            contacts: self.contacts,
            groups: self.groups,
            materials: self.materials,
            others: self.others,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_supplier::validate_contacts;

    #[test]
    fn test_random_contacts_are_valid() {
        let request = SupplierRequestBuilder::new()
            .with_random_contact(true)
            .with_random_contact(false)
            .build();
        assert_eq!(request.contacts.len(), 2);
        assert!(validate_contacts(&request.contacts).is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let request = SupplierRequestBuilder::new()
            .with_name("PT Acme")
            .with_logo("acme.png")
            .with_nickname("acme")
            .with_random_address(true)
            .with_group("Tier", "Silver")
            .build();
        assert_eq!(request.supplier_name, "PT Acme");
        assert_eq!(request.logo, "acme.png");
        assert_eq!(request.nickname, "acme");
        assert!(request.address[0].is_main);
        assert_eq!(request.child_record_count(), 2);
    }
}
