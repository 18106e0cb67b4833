//! 訂單產能最佳化示例

use canteen::catalog::{seed_menu, OrderSubmission};
use canteen::{InMemoryCatalog, OptimizationService, OptimizerConfig, OrderCatalog, OrderSummarizer};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 訂單產能最佳化示例 ===\n");

    let mut catalog = InMemoryCatalog::new();
    seed_menu(&mut catalog);

    // (顧客, 菜單品項, 數量)
    let orders = [
        ("Asha", 1, 4),
        ("Ravi", 9, 2),
        ("Meera", 11, 10),
        ("Kiran", 3, 6),
        ("Dev", 6, 8),
    ];

    for (name, menu_item_id, quantity) in orders {
        let payload = serde_json::json!({
            "customer_name": name,
            "items": [{"id": menu_item_id, "quantity": quantity}],
        });
        OrderSubmission::from_json(&payload)?.place(&mut catalog)?;
    }

    println!("訂單清單:");
    let ids: Vec<_> = catalog.orders().iter().map(|o| o.id).collect();
    for summary in OrderSummarizer::resolve(&catalog, &ids) {
        println!(
            "  - #{} {}: {} 件, 總額 {}",
            summary.order_id, summary.customer_name, summary.item_count, summary.total_price
        );
    }

    let service = OptimizationService::new(OptimizerConfig::default());
    let job = service.prepare(&catalog, &serde_json::json!({"order_ids": ids, "capacity": 20}))?;
    let result = service.execute(&job)?;

    println!("\n產能 20 件的最佳組合:");
    for summary in &result.selected {
        println!("  - #{} {} ({} 件)", summary.order_id, summary.customer_name, summary.item_count);
    }
    println!(
        "總額 {}，件數 {}，使用率 {:.1}%",
        result.total_value.round_dp(2),
        result.total_weight,
        result.capacity_utilization
    );
    assert!(result.total_value > Decimal::ZERO);

    Ok(())
}
