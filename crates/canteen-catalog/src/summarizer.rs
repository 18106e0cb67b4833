//! 訂單摘要投影

use canteen_core::order::UNKNOWN_CUSTOMER;
use canteen_core::{OrderId, OrderSummary};

use crate::OrderCatalog;

/// 訂單摘要計算器
pub struct OrderSummarizer;

impl OrderSummarizer {
    /// 將訂單投影為摘要；訂單不存在時回傳 `None`
    ///
    /// `item_count` 為各明細數量加總，`total_price` 取訂單儲存的總額。
    pub fn summarize<C: OrderCatalog + ?Sized>(
        catalog: &C,
        order_id: OrderId,
    ) -> Option<OrderSummary> {
        let order = catalog.order(order_id)?;

        let item_count: u64 = catalog
            .order_items(order_id)
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum();

        let customer_name = catalog
            .customer(order.customer_id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_CUSTOMER);

        Some(
            OrderSummary::new(order.id, item_count, order.total_price)
                .with_customer_name(customer_name)
                .with_date(order.order_date.date_naive()),
        )
    }

    /// 依請求順序解析多筆訂單
    ///
    /// 找不到的訂單直接略過；重複的 ID 會產生重複的摘要，不做去重。
    pub fn resolve<C: OrderCatalog + ?Sized>(
        catalog: &C,
        order_ids: &[OrderId],
    ) -> Vec<OrderSummary> {
        let summaries: Vec<OrderSummary> = order_ids
            .iter()
            .filter_map(|&id| Self::summarize(catalog, id))
            .collect();

        let dropped = order_ids.len() - summaries.len();
        if dropped > 0 {
            tracing::warn!("略過 {} 筆不存在的訂單", dropped);
        }

        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryCatalog;
    use canteen_core::{NewCustomer, NewOrder, NewOrderItem};
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn catalog_with_order() -> InMemoryCatalog {
        let mut catalog = InMemoryCatalog::new();
        let customer = catalog.add_customer(NewCustomer::new("Meera"));
        let order = catalog.add_order(
            NewOrder::new(customer.id, Decimal::new(1455, 1))
                .with_order_date(Utc.with_ymd_and_hms(2025, 11, 3, 9, 15, 0).unwrap()),
        );
        catalog
            .add_order_item(NewOrderItem::new(order.id, 1, 2, Decimal::from(80)))
            .unwrap();
        catalog
            .add_order_item(NewOrderItem::new(order.id, 11, 3, Decimal::from(45)))
            .unwrap();
        catalog
    }

    #[test]
    fn test_summarize_sums_quantities() {
        let catalog = catalog_with_order();

        let summary = OrderSummarizer::summarize(&catalog, 1).unwrap();
        assert_eq!(summary.order_id, 1);
        assert_eq!(summary.item_count, 5);
        assert_eq!(summary.total_price, Decimal::new(1455, 1));
        assert_eq!(summary.customer_name, "Meera");
        assert_eq!(summary.date, NaiveDate::from_ymd_opt(2025, 11, 3));
    }

    #[test]
    fn test_summarize_missing_order() {
        let catalog = catalog_with_order();
        assert!(OrderSummarizer::summarize(&catalog, 2).is_none());
    }

    #[test]
    fn test_summarize_unknown_customer() {
        let mut catalog = InMemoryCatalog::new();
        let order = catalog.add_order(NewOrder::new(99, Decimal::from(10)));

        let summary = OrderSummarizer::summarize(&catalog, order.id).unwrap();
        assert_eq!(summary.customer_name, UNKNOWN_CUSTOMER);
        assert_eq!(summary.item_count, 0);
    }

    #[test]
    fn test_resolve_keeps_order_and_duplicates() {
        let mut catalog = catalog_with_order();
        catalog.add_order(NewOrder::new(1, Decimal::from(30)));

        let summaries = OrderSummarizer::resolve(&catalog, &[2, 7, 1, 2]);
        let ids: Vec<_> = summaries.iter().map(|s| s.order_id).collect();
        assert_eq!(ids, vec![2, 1, 2]);
    }
}
