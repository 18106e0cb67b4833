//! API 回應結構

use canteen_catalog::{OrderDetail, OrderLine, PlacedOrder};
use canteen_core::{Customer, MenuItem, MenuItemId, OrderId};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemDto {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub location: String,
    pub is_vegetarian: bool,
    pub promotion: Option<String>,
}

impl From<&MenuItem> for MenuItemDto {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            category: item.category.clone(),
            image_url: item.image_url.clone(),
            is_available: item.is_available,
            location: item.location.clone(),
            is_vegetarian: item.is_vegetarian,
            promotion: item.promotion.clone(),
        }
    }
}

/// 訂單列表中的顧客聯絡資訊，查無顧客時使用預設值
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerDto {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl From<Option<&Customer>> for CustomerDto {
    fn from(customer: Option<&Customer>) -> Self {
        match customer {
            Some(c) => Self {
                name: c.name.clone(),
                phone: c.phone.clone(),
                email: c.email.clone(),
                address: c.address.clone(),
            },
            None => Self {
                name: "Unknown".to_string(),
                phone: "N/A".to_string(),
                email: String::new(),
                address: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLineDto {
    pub menu_item: Option<MenuItemDto>,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

impl From<&OrderLine> for OrderLineDto {
    fn from(line: &OrderLine) -> Self {
        Self {
            menu_item: line.menu_item.as_ref().map(MenuItemDto::from),
            quantity: line.item.quantity,
            subtotal: line.item.subtotal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDto {
    pub id: OrderId,
    pub customer: CustomerDto,
    pub order_date: String,
    pub items: Vec<OrderLineDto>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub status: String,
    pub special_instructions: Option<String>,
}

impl From<&OrderDetail> for OrderDto {
    fn from(detail: &OrderDetail) -> Self {
        Self {
            id: detail.order.id,
            customer: CustomerDto::from(detail.customer.as_ref()),
            order_date: detail.order.formatted_date(),
            items: detail.lines.iter().map(OrderLineDto::from).collect(),
            total_price: detail.order.total_price,
            status: detail.order.status.as_str().to_string(),
            special_instructions: detail.order.special_instructions.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceOrderResponse {
    pub status: String,
    pub order_id: OrderId,
    pub redirect: String,
}

impl From<&PlacedOrder> for PlaceOrderResponse {
    fn from(placed: &PlacedOrder) -> Self {
        Self {
            status: "success".to_string(),
            order_id: placed.order.id,
            redirect: format!("/order/{}", placed.order.id),
        }
    }
}
