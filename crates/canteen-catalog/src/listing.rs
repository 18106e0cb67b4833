//! 訂單查詢與排序

use std::cmp::Ordering;
use std::str::FromStr;

use canteen_core::{CanteenError, Customer, MenuItem, Order, OrderId, OrderItem};

use crate::OrderCatalog;

/// 排序欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// 下單時間
    #[default]
    OrderDate,
    /// 訂單總額
    TotalPrice,
    /// 狀態
    Status,
    /// 不排序，維持下單順序
    Unsorted,
}

impl FromStr for SortKey {
    type Err = CanteenError;

    /// 未知欄位視為不排序
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "order_date" => SortKey::OrderDate,
            "total_price" => SortKey::TotalPrice,
            "status" => SortKey::Status,
            _ => SortKey::Unsorted,
        })
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = CanteenError;

    /// 只有 `desc` 為遞減，其餘皆為遞增
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        })
    }
}

/// 訂單排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl OrderSort {
    /// 由查詢參數建立，缺少時使用預設值（下單時間遞減）
    pub fn from_params(sort_by: Option<&str>, direction: Option<&str>) -> Self {
        let key = sort_by
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let direction = direction
            .and_then(|d| d.parse().ok())
            .unwrap_or_default();
        Self { key, direction }
    }

    fn compare(&self, a: &OrderDetail, b: &OrderDetail) -> Ordering {
        let ordering = match self.key {
            SortKey::OrderDate => a.order.order_date.cmp(&b.order.order_date),
            SortKey::TotalPrice => a.order.total_price.cmp(&b.order.total_price),
            SortKey::Status => a.order.status.as_str().cmp(b.order.status.as_str()),
            SortKey::Unsorted => Ordering::Equal,
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// 訂單明細與對應菜單品項
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub item: OrderItem,
    pub menu_item: Option<MenuItem>,
}

/// 訂單完整資料
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub order: Order,
    pub customer: Option<Customer>,
    pub lines: Vec<OrderLine>,
}

/// 訂單查詢
pub struct OrderListing;

impl OrderListing {
    /// 單筆訂單完整資料
    pub fn detail<C: OrderCatalog + ?Sized>(catalog: &C, order_id: OrderId) -> Option<OrderDetail> {
        let order = catalog.order(order_id)?;

        let lines = catalog
            .order_items(order_id)
            .into_iter()
            .map(|item| OrderLine {
                item: item.clone(),
                menu_item: catalog.menu_item(item.menu_item_id).cloned(),
            })
            .collect();

        Some(OrderDetail {
            order: order.clone(),
            customer: catalog.customer(order.customer_id).cloned(),
            lines,
        })
    }

    /// 所有訂單，依指定方式穩定排序
    pub fn list<C: OrderCatalog + ?Sized>(catalog: &C, sort: OrderSort) -> Vec<OrderDetail> {
        let mut details: Vec<OrderDetail> = catalog
            .orders()
            .into_iter()
            .filter_map(|order| Self::detail(catalog, order.id))
            .collect();

        details.sort_by(|a, b| sort.compare(a, b));
        details
    }
}
