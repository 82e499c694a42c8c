//! Supplier aggregate and lifecycle status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::SupplierId;

use crate::error::SupplierError;

/// Lifecycle status of a supplier
///
/// Suppliers always start in [`SupplierStatus::Draft`]. The expected
/// progression is Draft → In Review → In Assessment → Active, and a supplier
/// can be Blocked from any state. Nothing in this crate performs the
/// transitions yet; [`SupplierStatus::can_transition_to`] records the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplierStatus {
    #[serde(rename = "Draft")]
    Draft,
    #[serde(rename = "In Review")]
    InReview,
    #[serde(rename = "In Assessment")]
    InAssessment,
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "Blocked")]
    Blocked,
}

impl SupplierStatus {
    /// All statuses in code order
    pub const ALL: [SupplierStatus; 5] = [
        SupplierStatus::Draft,
        SupplierStatus::InReview,
        SupplierStatus::InAssessment,
        SupplierStatus::Active,
        SupplierStatus::Blocked,
    ];

    /// Status assigned to every newly created supplier
    pub fn initial() -> Self {
        SupplierStatus::Draft
    }

    /// Label stored in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierStatus::Draft => "Draft",
            SupplierStatus::InReview => "In Review",
            SupplierStatus::InAssessment => "In Assessment",
            SupplierStatus::Active => "Active",
            SupplierStatus::Blocked => "Blocked",
        }
    }

    /// Legacy numeric code (1 = Draft .. 5 = Blocked)
    pub fn code(&self) -> u8 {
        match self {
            SupplierStatus::Draft => 1,
            SupplierStatus::InReview => 2,
            SupplierStatus::InAssessment => 3,
            SupplierStatus::Active => 4,
            SupplierStatus::Blocked => 5,
        }
    }

    /// Looks up a status by its legacy numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Checks whether moving from `self` to `next` is an allowed transition
    pub fn can_transition_to(&self, next: SupplierStatus) -> bool {
        use SupplierStatus::*;
        match (self, next) {
            (Blocked, _) => false,
            (_, Blocked) => true,
            (Draft, InReview) | (InReview, InAssessment) | (InAssessment, Active) => true,
            _ => false,
        }
    }
}

impl Default for SupplierStatus {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for SupplierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupplierStatus {
    type Err = SupplierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| SupplierError::UnknownStatus(s.to_string()))
    }
}

/// A persisted supplier as returned to API callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub logo: String,
    pub nickname: String,
    pub status: SupplierStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// JSON snapshot of the creation request, kept verbatim for audit
    pub address: String,
}

/// Data for inserting the primary supplier row
#[derive(Debug, Clone, PartialEq)]
pub struct NewSupplier {
    pub supplier_name: String,
    pub logo: String,
    pub nickname: String,
    pub status: SupplierStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub address: String,
}

impl NewSupplier {
    /// Attaches the id the store assigned and produces the caller-facing record
    pub fn into_supplier(self, supplier_id: SupplierId) -> Supplier {
        Supplier {
            supplier_id,
            supplier_name: self.supplier_name,
            logo: self.logo,
            nickname: self.nickname,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            address: self.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_status_is_draft() {
        assert_eq!(SupplierStatus::initial(), SupplierStatus::Draft);
        assert_eq!(SupplierStatus::default().code(), 1);
    }

    #[test]
    fn test_status_labels_round_trip() {
        for status in SupplierStatus::ALL {
            assert_eq!(status.as_str().parse::<SupplierStatus>().unwrap(), status);
            assert_eq!(SupplierStatus::from_code(status.code()), Some(status));
        }
        assert!("Pending".parse::<SupplierStatus>().is_err());
        assert_eq!(SupplierStatus::from_code(0), None);
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&SupplierStatus::InAssessment).unwrap();
        assert_eq!(json, "\"In Assessment\"");
    }

    #[test]
    fn test_transitions() {
        use SupplierStatus::*;
        assert!(Draft.can_transition_to(InReview));
        assert!(InReview.can_transition_to(InAssessment));
        assert!(InAssessment.can_transition_to(Active));
        assert!(Active.can_transition_to(Blocked));
        assert!(!Draft.can_transition_to(Active));
        assert!(!Blocked.can_transition_to(Draft));
    }
}
