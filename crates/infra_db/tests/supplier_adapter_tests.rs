//! PostgreSQL adapter tests
//!
//! These start a PostgreSQL container and are ignored by default. Run them
//! with `cargo test -p infra_db -- --ignored` on a machine with Docker.

use std::sync::Arc;

use core_kernel::{AdapterHealth, HealthCheckable, SupplierId, TraceId};
use domain_supplier::{
    NewAddress, NewSupplier, SupplierFilter, SupplierPort, SupplierRequest, SupplierService,
    SupplierStatus,
};
use infra_db::PostgresSupplierAdapter;
use test_utils::{
    assert_fan_out_complete, assert_normalized_phone, create_isolated_test_database,
    SupplierFixtures, SupplierRequestBuilder,
};

fn new_supplier(name: &str) -> NewSupplier {
    let now = chrono::Utc::now();
    NewSupplier {
        supplier_name: name.to_string(),
        logo: format!("{}-logo.png", name.to_lowercase()),
        nickname: format!("{}-nick", name.to_lowercase()),
        status: SupplierStatus::Draft,
        created_at: now,
        updated_at: now,
        address: "{}".to_string(),
    }
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_insert_assigns_increasing_ids_and_binds_columns() {
    let db = create_isolated_test_database().await.unwrap();
    let adapter = PostgresSupplierAdapter::new(db.pool().clone());

    let first = adapter.create_supplier(new_supplier("Acme")).await.unwrap();
    let second = adapter.create_supplier(new_supplier("Globex")).await.unwrap();
    assert!(second > first);

    let row = adapter.repository().find_supplier(first.value()).await.unwrap();
    assert_eq!(row.logo, "acme-logo.png");
    assert_eq!(row.nickname, "acme-nick");
    assert_eq!(row.status, "Draft");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_clear_data_empties_tables_and_restarts_ids() {
    let db = create_isolated_test_database().await.unwrap();
    let adapter = PostgresSupplierAdapter::new(db.pool().clone());

    adapter.create_supplier(new_supplier("Acme")).await.unwrap();
    adapter.create_supplier(new_supplier("Globex")).await.unwrap();
    assert_eq!(db.count_rows("suppliers").await.unwrap(), 2);

    db.clear_data().await.unwrap();
    assert_eq!(db.count_rows("suppliers").await.unwrap(), 0);

    let id = adapter.create_supplier(new_supplier("Initech")).await.unwrap();
    assert_eq!(id, SupplierId::new(1));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_child_insert_for_unknown_supplier_is_conflict() {
    let db = create_isolated_test_database().await.unwrap();
    let adapter = PostgresSupplierAdapter::new(db.pool().clone());

    let result = adapter
        .create_address(NewAddress {
            supplier_id: SupplierId::new(999),
            name: "HQ".to_string(),
            address: "Nowhere".to_string(),
            is_main: true,
        })
        .await;

    assert!(matches!(result, Err(core_kernel::PortError::Conflict { .. })));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_service_persists_children_and_lists_main_records() {
    let db = create_isolated_test_database().await.unwrap();
    let adapter = Arc::new(PostgresSupplierAdapter::new(db.pool().clone()));
    let service = SupplierService::new(adapter.clone());

    let (supplier, handle) = service
        .create_supplier_tracked(SupplierFixtures::full_request(), TraceId::generate())
        .await
        .unwrap();
    assert_eq!(supplier.status, SupplierStatus::Draft);

    let report = handle.wait().await.unwrap();
    assert_fan_out_complete(&report);
    assert_eq!(db.count_rows("supplier_addresses").await.unwrap(), 2);
    assert_eq!(db.count_rows("supplier_contacts").await.unwrap(), 1);
    assert_eq!(db.count_rows("supplier_groups").await.unwrap(), 1);

    let phone: String = sqlx::query_scalar("SELECT phone FROM supplier_contacts LIMIT 1")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_normalized_phone(&phone);

    let page = service
        .list_suppliers(&SupplierFilter::by_name("maju"), TraceId::generate())
        .await
        .unwrap();
    assert_eq!(page.total_data, 1);
    let row = &page.data[0];
    assert_eq!(row.supplier_name, "PT Maju Jaya");
    assert_eq!(row.logo, "maju-jaya.png");
    assert_eq!(row.address.as_deref(), Some("Jl. Jend. Sudirman No. 1, Jakarta"));
    assert_eq!(row.contact.as_deref(), Some("Rina Wulandari"));

    let snapshot: SupplierRequest = serde_json::from_str(&supplier.address).unwrap();
    assert_eq!(snapshot, SupplierFixtures::full_request());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_list_pagination_and_filters() {
    let db = create_isolated_test_database().await.unwrap();
    let adapter = Arc::new(PostgresSupplierAdapter::new(db.pool().clone()));

    for i in 0..12 {
        adapter
            .create_supplier(new_supplier(&format!("Vendor{i:02}")))
            .await
            .unwrap();
    }
    adapter.create_supplier(new_supplier("ACME Corp")).await.unwrap();

    let first = adapter.list_suppliers(&SupplierFilter::default()).await.unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].supplier_name, "Vendor00");
    assert_eq!(first[0].address, None);
    assert_eq!(first[0].contact, None);

    let third = adapter
        .list_suppliers(&SupplierFilter::default().paginate(3, 5))
        .await
        .unwrap();
    assert_eq!(third.len(), 3);
    assert_eq!(third[0].supplier_name, "Vendor10");

    let acme = adapter.list_suppliers(&SupplierFilter::by_name("acme")).await.unwrap();
    assert_eq!(acme.len(), 1);

    let none = adapter
        .list_suppliers(&SupplierFilter::by_status("Blocked"))
        .await
        .unwrap();
    assert!(none.is_empty());

    let negative = adapter
        .list_suppliers(&SupplierFilter::default().paginate(-1, 10))
        .await;
    assert!(negative.is_err());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_health_check_reports_healthy() {
    let db = create_isolated_test_database().await.unwrap();
    let adapter = PostgresSupplierAdapter::new(db.pool().clone());

    let result = adapter.health_check().await;
    assert_eq!(result.status, AdapterHealth::Healthy);
    assert!(result.is_available());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_generated_requests_round_trip() {
    let db = create_isolated_test_database().await.unwrap();
    let service = SupplierService::new(Arc::new(PostgresSupplierAdapter::new(db.pool().clone())));

    let request = SupplierRequestBuilder::new()
        .with_random_address(true)
        .with_random_contact(true)
        .with_random_contact(false)
        .build();

    let (supplier, handle) = service
        .create_supplier_tracked(request.clone(), TraceId::generate())
        .await
        .unwrap();
    assert_fan_out_complete(&handle.wait().await.unwrap());

    let page = service
        .list_suppliers(&SupplierFilter::by_name(request.supplier_name.clone()), TraceId::generate())
        .await
        .unwrap();
    assert!(page.data.iter().any(|row| row.supplier_name == supplier.supplier_name));
    assert_eq!(db.count_rows("supplier_contacts").await.unwrap(), 2);
}
