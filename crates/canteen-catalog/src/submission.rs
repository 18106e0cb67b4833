//! 訂單提交

use canteen_core::{
    CanteenError, Customer, MenuItemId, NewCustomer, NewOrder, NewOrderItem, Order, OrderItem,
    Result, ANONYMOUS_CUSTOMER,
};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::OrderCatalog;

pub const NO_DATA: &str = "No data provided";
pub const INVALID_ITEMS_FORMAT: &str = "Invalid items format";
pub const INVALID_ORDER_ITEMS: &str = "Invalid order items";
pub const INVALID_TOTAL: &str = "Invalid order total";

/// 提交的訂單品項
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedItem {
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
}

/// 已驗證的訂單提交內容
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    pub customer: NewCustomer,
    pub instructions: String,
    /// 前端計算的總額；未提供時以明細小計加總
    pub total: Option<Decimal>,
    pub items: Vec<SubmittedItem>,
}

/// 下單結果
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub order: Order,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    /// 找不到而略過的菜單品項
    pub skipped_menu_items: Vec<MenuItemId>,
}

impl OrderSubmission {
    /// 解析並驗證 JSON 請求
    ///
    /// `items` 可以是陣列，也可以是內容為陣列的 JSON 字串。每個品項需有
    /// `id` 與正整數 `quantity`。只有缺少 `customer_name` 時才以匿名顧客
    /// 下單，空字串照樣保存。
    pub fn from_json(payload: &Value) -> Result<Self> {
        let data = payload
            .as_object()
            .ok_or_else(|| CanteenError::invalid_input(NO_DATA))?;

        let items = Self::parse_items(data.get("items"))?;

        let name = match data.get("customer_name") {
            None | Some(Value::Null) => ANONYMOUS_CUSTOMER.to_string(),
            Some(_) => Self::text(data, "customer_name"),
        };
        let customer = NewCustomer::new(name)
            .with_email(Self::text(data, "email"))
            .with_phone(Self::text(data, "phone"))
            .with_address(Self::text(data, "address"));

        let total = match data.get("total") {
            None | Some(Value::Null) => None,
            Some(value) => Some(Self::parse_total(value)?),
        };

        Ok(Self {
            customer,
            instructions: Self::text(data, "instructions"),
            total,
            items,
        })
    }

    fn parse_items(raw: Option<&Value>) -> Result<Vec<SubmittedItem>> {
        let decoded;
        let entries = match raw {
            Some(Value::Array(entries)) => entries,
            Some(Value::String(encoded)) => {
                decoded = serde_json::from_str::<Value>(encoded)
                    .map_err(|_| CanteenError::invalid_input(INVALID_ITEMS_FORMAT))?;
                decoded
                    .as_array()
                    .ok_or_else(|| CanteenError::invalid_input(INVALID_ITEMS_FORMAT))?
            }
            _ => return Err(CanteenError::invalid_input(INVALID_ITEMS_FORMAT)),
        };

        if entries.is_empty() {
            return Err(CanteenError::invalid_input(INVALID_ORDER_ITEMS));
        }

        entries
            .iter()
            .map(|entry| {
                let menu_item_id = entry.get("id").and_then(Self::as_count);
                let quantity = entry
                    .get("quantity")
                    .and_then(Self::as_count)
                    .and_then(|q| u32::try_from(q).ok())
                    .filter(|&q| q > 0);

                match (menu_item_id, quantity) {
                    (Some(menu_item_id), Some(quantity)) => Ok(SubmittedItem {
                        menu_item_id,
                        quantity,
                    }),
                    _ => Err(CanteenError::invalid_input(INVALID_ORDER_ITEMS)),
                }
            })
            .collect()
    }

    /// 非負整數，接受數字或數字字串
    fn as_count(value: &Value) -> Option<u64> {
        match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn parse_total(value: &Value) -> Result<Decimal> {
        let total = match value {
            Value::Number(n) => n
                .as_i64()
                .map(Decimal::from)
                .or_else(|| n.as_f64().and_then(Decimal::from_f64)),
            Value::String(s) => s.trim().parse::<Decimal>().ok(),
            _ => None,
        };

        total
            .filter(|t| !t.is_sign_negative())
            .ok_or_else(|| CanteenError::invalid_input(INVALID_TOTAL))
    }

    fn text(data: &Map<String, Value>, key: &str) -> String {
        data.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// 建立顧客、訂單與明細
    ///
    /// 找不到的菜單品項會被略過；小計為單價乘以數量。
    pub fn place<C: OrderCatalog + ?Sized>(self, catalog: &mut C) -> Result<PlacedOrder> {
        let mut lines = Vec::with_capacity(self.items.len());
        let mut skipped_menu_items = Vec::new();

        for item in &self.items {
            match catalog.menu_item(item.menu_item_id) {
                Some(menu_item) => {
                    lines.push((menu_item.id, item.quantity, menu_item.subtotal(item.quantity)))
                }
                None => {
                    tracing::warn!("略過不存在的菜單品項 {}", item.menu_item_id);
                    skipped_menu_items.push(item.menu_item_id);
                }
            }
        }

        let total = self
            .total
            .unwrap_or_else(|| lines.iter().map(|(_, _, subtotal)| *subtotal).sum());

        let customer = catalog.add_customer(self.customer);
        let order = catalog.add_order(
            NewOrder::new(customer.id, total).with_special_instructions(self.instructions),
        );

        let items = lines
            .into_iter()
            .map(|(menu_item_id, quantity, subtotal)| {
                let line = NewOrderItem::new(order.id, menu_item_id, quantity, subtotal);
                catalog.add_order_item(line)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            "訂單 {} 建立成功：顧客 {}，明細 {} 筆，總額 {}",
            order.id,
            customer.name,
            items.len(),
            order.total_price
        );

        Ok(PlacedOrder {
            order,
            customer,
            items,
            skipped_menu_items,
        })
    }
}
