//! 集成測試

use canteen::catalog::{seed_menu, OrderListing, OrderSort, OrderSubmission};
use canteen::domain::{NewCustomer, NewOrder, NewOrderItem};
use canteen::optimizer::OptimizeOutcome;
use canteen::*;
use rstest::rstest;
use rust_decimal::Decimal;
use serde_json::json;

/// 透過下單流程建立訂單，回傳訂單 ID
fn place(catalog: &mut InMemoryCatalog, name: &str, items: serde_json::Value, total: i64) -> u64 {
    let payload = json!({"customer_name": name, "items": items, "total": total});
    OrderSubmission::from_json(&payload)
        .unwrap()
        .place(catalog)
        .unwrap()
        .order
        .id
}

/// 三張訂單：件數 10 / 20 / 30，總額 60 / 100 / 120
fn classic_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    seed_menu(&mut catalog);
    place(&mut catalog, "A", json!([{"id": 11, "quantity": 10}]), 60);
    place(&mut catalog, "B", json!([{"id": 6, "quantity": 5}, {"id": 7, "quantity": 15}]), 100);
    place(&mut catalog, "C", json!([{"id": 1, "quantity": 30}]), 120);
    catalog
}

fn success(outcome: OptimizeOutcome) -> canteen::optimizer::OptimizationReport {
    match outcome {
        OptimizeOutcome::Success(report) => report,
        OptimizeOutcome::Failure(failure) => panic!("unexpected failure: {}", failure.error),
    }
}

#[rstest]
#[case(50, vec![3, 2], 220, 50)]
#[case(10, vec![1], 60, 10)]
#[case(30, vec![2, 1], 160, 30)]
#[case(9, vec![], 0, 0)]
fn test_end_to_end_selection(
    #[case] capacity: u32,
    #[case] expected_ids: Vec<u64>,
    #[case] expected_value: i64,
    #[case] expected_weight: u64,
) {
    let catalog = classic_catalog();
    let service = OptimizationService::default();

    let report = success(service.run(
        &catalog,
        &json!({"order_ids": [1, 2, 3], "capacity": capacity}),
    ));

    let ids: Vec<_> = report.optimized_orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, expected_ids);
    assert_eq!(report.total_value, Decimal::from(expected_value));
    assert_eq!(report.total_weight, expected_weight);
    assert!(report.total_weight <= capacity as u64);
}

#[test]
fn test_removed_orders_are_dropped_silently() {
    let mut catalog = classic_catalog();
    catalog.remove_order(3);

    let payload = json!({"order_ids": [1, 2, 3], "capacity": 50});
    let report = success(OptimizationService::default().run(&catalog, &payload));

    let ids: Vec<_> = report.optimized_orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(report.total_value, Decimal::from(160));
    assert!((report.capacity_utilization - 60.0).abs() < 1e-9);
}

#[test]
fn test_duplicate_ids_are_not_deduplicated() {
    let catalog = classic_catalog();

    let report = success(
        OptimizationService::default().run(&catalog, &json!({"order_ids": [1, 1], "capacity": 20})),
    );

    // 同一張訂單被選兩次：呼叫端必須自行去重
    let ids: Vec<_> = report.optimized_orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 1]);
    assert_eq!(report.total_value, Decimal::from(120));
}

#[rstest]
#[case(json!({"order_ids": [], "capacity": 50}), "No valid orders selected")]
#[case(json!({"order_ids": [1, 2], "capacity": -5}), "capacity must be a positive number")]
#[case(json!({"order_ids": [77], "capacity": 50}), "No valid orders selected")]
#[case(json!({"order_ids": {"1": true}}), "order_ids must be an array")]
fn test_invalid_requests(#[case] payload: serde_json::Value, #[case] message: &str) {
    let outcome = OptimizationService::default().run(&classic_catalog(), &payload);

    match outcome {
        OptimizeOutcome::Failure(failure) => {
            assert!(!failure.success);
            assert!(!failure.internal);
            assert_eq!(failure.error, message);
        }
        OptimizeOutcome::Success(_) => panic!("expected failure for {payload}"),
    }
}

#[test]
fn test_capacity_hardening_limits() {
    let catalog = classic_catalog();
    let service = OptimizationService::new(
        OptimizerConfig::new()
            .with_max_capacity(1_000)
            .with_max_table_cells(100_000),
    );

    let outcome = service.run(&catalog, &json!({"order_ids": [1, 2, 3], "capacity": 5_000}));
    assert!(!outcome.is_success());
    assert!(!outcome.is_internal_failure());

    let outcome = service.run(&catalog, &json!({"order_ids": [1, 2, 3], "capacity": 1_000}));
    assert!(outcome.is_success());
}

#[test]
fn test_catalog_built_directly() {
    // 直接使用目錄介面建立資料（不經過下單流程）
    let mut catalog = InMemoryCatalog::new();
    let customer = catalog.add_customer(NewCustomer::new("Zoya"));
    let order = catalog.add_order(NewOrder::new(customer.id, Decimal::new(4550, 2)));
    catalog
        .add_order_item(NewOrderItem::new(order.id, 1, 3, Decimal::new(4550, 2)))
        .unwrap();

    let summaries = OrderSummarizer::resolve(&catalog, &[order.id]);
    let result = CapacityOptimizer::default().optimize(&summaries, 3.0).unwrap();

    assert_eq!(result.selected_ids(), vec![order.id]);
    assert_eq!(result.total_value, Decimal::new(4550, 2));
    assert_eq!(result.selected[0].customer_name, "Zoya");
}

#[test]
fn test_listing_reflects_submitted_orders() {
    let catalog = classic_catalog();

    let sort = OrderSort::from_params(Some("total_price"), Some("desc"));
    let by_price = OrderListing::list(&catalog, sort);
    let ids: Vec<_> = by_price.iter().map(|d| d.order.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert_eq!(by_price[1].lines.len(), 2);
}
