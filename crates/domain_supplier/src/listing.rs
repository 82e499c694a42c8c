//! Supplier listing: filter, pagination and result rows

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not supply a usable offset/limit pair
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Page number used when the caller does not supply a usable offset/limit pair
pub const DEFAULT_PAGE: i64 = 1;

/// Optional criteria for listing suppliers
///
/// Every field may be omitted or `null`. `offset` is a 1-based page number,
/// not a row count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierFilter {
    pub supplier_name: Option<String>,
    pub status: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// Rows to skip and rows to fetch for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: i64,
    pub fetch: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: (DEFAULT_PAGE - 1) * DEFAULT_PAGE_SIZE,
            fetch: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SupplierFilter {
    /// Creates a filter matching suppliers whose name contains `name`
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            supplier_name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Creates a filter matching one exact status label
    pub fn by_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }

    /// Adds pagination to the filter
    pub fn paginate(mut self, offset: i64, limit: i64) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }

    /// Name substring to match, if present and non-empty
    pub fn name_term(&self) -> Option<&str> {
        self.supplier_name.as_deref().filter(|s| !s.is_empty())
    }

    /// Status label to match exactly, if present and non-empty
    pub fn status_term(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }

    /// Resolves the page to read
    ///
    /// Both `offset` and `limit` must be present and non-zero, otherwise the
    /// first page of [`DEFAULT_PAGE_SIZE`] rows is used. Negative values are
    /// passed through and rejected by the store.
    pub fn pagination(&self) -> Pagination {
        match (self.offset, self.limit) {
            (Some(offset), Some(limit)) if offset != 0 && limit != 0 => Pagination {
                skip: offset.saturating_sub(1).saturating_mul(limit),
                fetch: limit,
            },
            _ => Pagination::default(),
        }
    }
}

/// One row of the supplier list
///
/// `address` and `contact` come from the supplier's main address and main
/// contact and are `None` when the supplier has none flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierListRow {
    pub supplier_name: String,
    pub logo: String,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub status: String,
}

/// One page of the supplier list
///
/// `total_data` is the number of rows in this page, not the number of
/// suppliers matching the filter overall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierListResponse {
    pub total_data: i64,
    pub data: Vec<SupplierListRow>,
}

impl SupplierListResponse {
    pub fn from_rows(data: Vec<SupplierListRow>) -> Self {
        Self {
            total_data: data.len() as i64,
            data,
        }
    }
}
