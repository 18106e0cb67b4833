//! 訂單模型

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CustomerId, MenuItemId, OrderId, OrderItemId};

/// 查無顧客時顯示的名稱
pub const UNKNOWN_CUSTOMER: &str = "Unknown";

/// 訂單日期的顯示格式
pub const ORDER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 訂單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// 新訂單
    New,
    /// 製作中
    Preparing,
    /// 已完成
    Completed,
    /// 已取消
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// 訂單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// 訂單ID
    pub id: OrderId,

    /// 顧客ID
    pub customer_id: CustomerId,

    /// 下單時間
    pub order_date: DateTime<Utc>,

    /// 訂單總額
    pub total_price: Decimal,

    /// 狀態
    pub status: OrderStatus,

    /// 特殊需求備註
    pub special_instructions: Option<String>,
}

impl Order {
    /// 以新訂單資料與指定 ID 建立訂單
    pub fn from_new(id: OrderId, new_order: NewOrder) -> Self {
        Self {
            id,
            customer_id: new_order.customer_id,
            order_date: new_order.order_date,
            total_price: new_order.total_price,
            status: new_order.status,
            special_instructions: new_order.special_instructions,
        }
    }

    /// 格式化的下單時間
    pub fn formatted_date(&self) -> String {
        self.order_date.format(ORDER_DATE_FORMAT).to_string()
    }
}

/// 新增訂單的資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub order_date: DateTime<Utc>,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub special_instructions: Option<String>,
}

impl NewOrder {
    /// 創建新的訂單資料（下單時間為現在）
    pub fn new(customer_id: CustomerId, total_price: Decimal) -> Self {
        Self {
            customer_id,
            order_date: Utc::now(),
            total_price,
            status: OrderStatus::New,
            special_instructions: None,
        }
    }

    /// 建構器模式：設置下單時間
    pub fn with_order_date(mut self, order_date: DateTime<Utc>) -> Self {
        self.order_date = order_date;
        self
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// 建構器模式：設置備註，空字串視為未提供
    pub fn with_special_instructions(mut self, instructions: impl Into<String>) -> Self {
        let instructions = instructions.into();
        self.special_instructions = if instructions.trim().is_empty() {
            None
        } else {
            Some(instructions)
        };
        self
    }
}

/// 訂單明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// 明細ID
    pub id: OrderItemId,

    /// 所屬訂單ID
    pub order_id: OrderId,

    /// 菜單品項ID
    pub menu_item_id: MenuItemId,

    /// 數量
    pub quantity: u32,

    /// 小計
    pub subtotal: Decimal,
}

impl OrderItem {
    pub fn from_new(id: OrderItemId, new_item: NewOrderItem) -> Self {
        Self {
            id,
            order_id: new_item.order_id,
            menu_item_id: new_item.menu_item_id,
            quantity: new_item.quantity,
            subtotal: new_item.subtotal,
        }
    }
}

/// 新增訂單明細的資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
    pub subtotal: Decimal,
}

impl NewOrderItem {
    pub fn new(
        order_id: OrderId,
        menu_item_id: MenuItemId,
        quantity: u32,
        subtotal: Decimal,
    ) -> Self {
        Self {
            order_id,
            menu_item_id,
            quantity,
            subtotal,
        }
    }
}

/// 訂單摘要（最佳化器的輸入）
///
/// `item_count` 為重量，`total_price` 為價值；`customer_name` 與 `date`
/// 只用於顯示。每次最佳化請求都重新計算，不快取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// 訂單ID
    pub order_id: OrderId,

    /// 品項總件數（明細數量加總）
    pub item_count: u64,

    /// 訂單總額
    pub total_price: Decimal,

    /// 顧客名稱
    pub customer_name: String,

    /// 下單日期
    pub date: Option<NaiveDate>,
}

impl OrderSummary {
    /// 創建新的訂單摘要
    pub fn new(order_id: OrderId, item_count: u64, total_price: Decimal) -> Self {
        Self {
            order_id,
            item_count,
            total_price,
            customer_name: UNKNOWN_CUSTOMER.to_string(),
            date: None,
        }
    }

    /// 建構器模式：設置顧客名稱
    pub fn with_customer_name(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = customer_name.into();
        self
    }

    /// 建構器模式：設置下單日期
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}
