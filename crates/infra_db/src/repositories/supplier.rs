//! Supplier repository implementation
//!
//! Every method here is a single statement against the pool. Nothing is
//! wrapped in a transaction: the primary supplier row and its child rows are
//! written by independent statements, possibly on different connections.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use domain_supplier::{
    NewAddress, NewContact, NewGroup, NewSupplier, SupplierFilter, SupplierListRow,
};

use crate::error::DatabaseError;

const INSERT_SUPPLIER: &str = r#"
    INSERT INTO suppliers (
        supplier_id, supplier_name, nickname, logo, status,
        created_at, updated_at, address
    ) VALUES (nextval('suppliers_supplier_id_seq'::regclass), $1, $2, $3, $4, $5, $6, $7)
    RETURNING supplier_id
"#;

const INSERT_ADDRESS: &str = r#"
    INSERT INTO supplier_addresses (address_id, supplier_id, "name", address, is_main)
    VALUES (nextval('supplier_addresses_address_id_seq'::regclass), $1, $2, $3, $4)
    RETURNING address_id
"#;

const INSERT_CONTACT: &str = r#"
    INSERT INTO supplier_contacts (
        contact_id, supplier_id, "name", job_position, email, phone, mobile, is_main
    ) VALUES (nextval('supplier_contacts_contact_id_seq'::regclass), $1, $2, $3, $4, $5, $6, $7)
    RETURNING contact_id
"#;

const INSERT_GROUP: &str = r#"
    INSERT INTO supplier_groups (group_id, supplier_id, group_name, value, active)
    VALUES (nextval('supplier_groups_group_id_seq'::regclass), $1, $2, $3, $4)
    RETURNING group_id
"#;

/// Supplier joined with its main address and main contact
pub const BASE_LIST_QUERY: &str = "SELECT s.supplier_name, s.logo, sa.address, sc.\"name\" AS contact, s.status \
     FROM suppliers s \
     LEFT JOIN supplier_addresses sa ON sa.supplier_id = s.supplier_id AND sa.is_main = true \
     LEFT JOIN supplier_contacts sc ON sc.supplier_id = s.supplier_id AND sc.is_main = true";

const NAME_PREDICATE: &str = "s.supplier_name ILIKE '%' || ";
const NAME_PREDICATE_END: &str = " || '%'";
const STATUS_PREDICATE: &str = "s.status = ";
const LIST_ORDER: &str = " ORDER BY s.supplier_id";

/// Stored supplier row
#[derive(Debug, Clone, FromRow)]
pub struct SupplierRow {
    pub supplier_id: i64,
    pub supplier_name: String,
    pub nickname: String,
    pub logo: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub address: String,
}

/// One row of the supplier list query
#[derive(Debug, Clone, FromRow)]
pub struct SupplierListRecord {
    pub supplier_name: String,
    pub logo: String,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub status: String,
}

impl From<SupplierListRecord> for SupplierListRow {
    fn from(record: SupplierListRecord) -> Self {
        SupplierListRow {
            supplier_name: record.supplier_name,
            logo: record.logo,
            address: record.address,
            contact: record.contact,
            status: record.status,
        }
    }
}

/// Builds the parameterized list statement for `filter`
///
/// Name and status predicates are added only for present, non-empty values.
/// Every value, including the page bounds, is a bind parameter.
pub fn build_list_query(filter: &SupplierFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(BASE_LIST_QUERY);
    let mut predicates = 0;

    if let Some(name) = filter.name_term() {
        builder.push(if predicates == 0 { " WHERE " } else { " AND " });
        predicates += 1;
        builder
            .push(NAME_PREDICATE)
            .push_bind(name.to_string())
            .push(NAME_PREDICATE_END);
    }

    if let Some(status) = filter.status_term() {
        builder.push(if predicates == 0 { " WHERE " } else { " AND " });
        builder.push(STATUS_PREDICATE).push_bind(status.to_string());
    }

    let page = filter.pagination();
    builder
        .push(LIST_ORDER)
        .push(" OFFSET ")
        .push_bind(page.skip)
        .push(" ROWS FETCH NEXT ")
        .push_bind(page.fetch)
        .push(" ROWS ONLY");

    builder
}

/// Repository for supplier records
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: PgPool,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts the primary supplier row and returns the sequence-assigned id
    pub async fn insert_supplier(&self, supplier: &NewSupplier) -> Result<i64, DatabaseError> {
        sqlx::query_scalar::<_, i64>(INSERT_SUPPLIER)
            .bind(&supplier.supplier_name)
            .bind(&supplier.nickname)
            .bind(&supplier.logo)
            .bind(supplier.status.as_str())
            .bind(supplier.created_at)
            .bind(supplier.updated_at)
            .bind(&supplier.address)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::classify)
    }

    pub async fn insert_address(&self, address: &NewAddress) -> Result<i64, DatabaseError> {
        sqlx::query_scalar::<_, i64>(INSERT_ADDRESS)
            .bind(address.supplier_id.value())
            .bind(&address.name)
            .bind(&address.address)
            .bind(address.is_main)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::classify)
    }

    pub async fn insert_contact(&self, contact: &NewContact) -> Result<i64, DatabaseError> {
        sqlx::query_scalar::<_, i64>(INSERT_CONTACT)
            .bind(contact.supplier_id.value())
            .bind(&contact.name)
            .bind(&contact.job_position)
            .bind(&contact.email)
            .bind(&contact.phone_number)
            .bind(&contact.mobile_number)
            .bind(contact.is_main)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::classify)
    }

    pub async fn insert_group(&self, group: &NewGroup) -> Result<i64, DatabaseError> {
        sqlx::query_scalar::<_, i64>(INSERT_GROUP)
            .bind(group.supplier_id.value())
            .bind(&group.group_name)
            .bind(&group.value)
            .bind(group.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::classify)
    }

    /// Reads one supplier row back by id
    pub async fn find_supplier(&self, supplier_id: i64) -> Result<SupplierRow, DatabaseError> {
        sqlx::query_as::<_, SupplierRow>(
            r#"
            SELECT supplier_id, supplier_name, nickname, logo, status,
                   created_at, updated_at, address
            FROM suppliers
            WHERE supplier_id = $1
            "#,
        )
        .bind(supplier_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::classify)?
        .ok_or_else(|| DatabaseError::not_found("Supplier", supplier_id))
    }

    /// Runs the list query; zero rows is an empty vector
    pub async fn list_suppliers(
        &self,
        filter: &SupplierFilter,
    ) -> Result<Vec<SupplierListRecord>, DatabaseError> {
        let mut builder = build_list_query(filter);
        builder
            .build_query_as::<SupplierListRecord>()
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::classify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_without_filters_uses_default_page() {
        let builder = build_list_query(&SupplierFilter::default());
        let sql = builder.sql();
        assert!(sql.starts_with(BASE_LIST_QUERY));
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY s.supplier_id OFFSET $1 ROWS FETCH NEXT $2 ROWS ONLY"));
    }

    #[test]
    fn test_list_query_joins_predicates_with_and() {
        let filter = SupplierFilter {
            supplier_name: Some("acme".to_string()),
            status: Some("Draft".to_string()),
            offset: Some(2),
            limit: Some(5),
        };
        let builder = build_list_query(&filter);
        let sql = builder.sql();
        assert!(sql.contains(" WHERE s.supplier_name ILIKE '%' || $1 || '%' AND s.status = $2"));
        assert!(sql.contains("OFFSET $3 ROWS FETCH NEXT $4 ROWS ONLY"));
    }

    #[test]
    fn test_list_query_skips_empty_name() {
        let filter = SupplierFilter {
            supplier_name: Some(String::new()),
            status: Some("Active".to_string()),
            ..Default::default()
        };
        let builder = build_list_query(&filter);
        let sql = builder.sql();
        assert!(!sql.contains("ILIKE"));
        assert!(sql.contains(" WHERE s.status = $1"));
    }
}
