//! End-to-end stock scenarios through the public API.

use stockroom_core::{DomainError, Entity};
use stockroom_inventory::{AddProduct, CollectingSink, InventoryService, parse_delta, parse_quantity};

fn seeded() -> (InventoryService, CollectingSink) {
    let sink = CollectingSink::new();
    let mut service = InventoryService::new(sink.clone());
    service
        .add_product(AddProduct::new("001", "TestProduct", 20))
        .unwrap();
    (service, sink)
}

#[test]
fn add_product_is_stored_and_retrievable() {
    let (service, sink) = seeded();

    let products: Vec<_> = service.list_all().collect();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id().as_str(), "001");
    assert_eq!(service.get("001").unwrap().name(), "TestProduct");
    assert!(service.tracker().is_empty());
    assert!(sink.is_empty());
}

#[test]
fn low_stock_round_trip() {
    let (mut service, sink) = seeded();

    assert_eq!(service.update_quantity("001", -15).unwrap(), 5);
    let low: Vec<_> = service.low_stock().into_iter().map(|p| p.name()).collect();
    assert_eq!(low, ["TestProduct"]);
    assert_eq!(
        sink.last().as_deref(),
        Some("The following items are low on stock: TestProduct")
    );

    assert_eq!(service.update_quantity("001", 20).unwrap(), 25);
    assert!(service.low_stock().is_empty());
}

#[test]
fn remove_after_low_stock_forgets_product() {
    let (mut service, _) = seeded();
    service.update_quantity("001", -15).unwrap();
    service.update_quantity("001", 20).unwrap();

    service.remove_product("001").unwrap();
    match service.get("001") {
        Err(DomainError::NotFound(id)) => assert_eq!(id, "001"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
    assert!(!service.tracker().contains("001"));
}

#[test]
fn update_quantity_is_cumulative() {
    let (mut service, _) = seeded();
    service.update_quantity("001", 5).unwrap();
    assert_eq!(service.get("001").unwrap().quantity(), 25);
    service.update_quantity("001", -10).unwrap();
    assert_eq!(service.get("001").unwrap().quantity(), 15);
}

#[test]
fn raw_text_input_flows_through_validation() {
    let (mut service, _) = seeded();

    let quantity = parse_quantity("7").unwrap();
    service
        .add_product(AddProduct::new("002", "Milk", quantity).with_expiry("2026-11-01"))
        .unwrap();
    assert_eq!(
        service.get("002").unwrap().to_string(),
        "Milk - 7 left. Expires on: 2026-11-01"
    );

    assert!(matches!(parse_delta("lots"), Err(DomainError::Validation(_))));

    let delta = parse_delta("-3").unwrap();
    assert_eq!(service.update_quantity("002", delta).unwrap(), 4);
}

#[test]
fn independent_services_do_not_share_state() {
    let (mut first, _) = seeded();
    let (second, _) = seeded();

    first.remove_product("001").unwrap();
    assert!(first.is_empty());
    assert_eq!(second.len(), 1);
}
