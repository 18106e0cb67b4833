//! 目錄存取介面與記憶體實作

use std::collections::BTreeMap;

use canteen_core::{
    CanteenError, Customer, CustomerId, MenuItem, MenuItemId, NewCustomer, NewMenuItem, NewOrder,
    NewOrderItem, Order, OrderId, OrderItem, OrderItemId, Result,
};

/// 訂單目錄
///
/// 每種實體各自配發遞增 ID（從 1 開始）。查詢結果依 ID 排序。
pub trait OrderCatalog {
    /// 新增菜單品項
    fn add_menu_item(&mut self, item: NewMenuItem) -> MenuItem;

    /// 新增顧客
    fn add_customer(&mut self, customer: NewCustomer) -> Customer;

    /// 新增訂單
    fn add_order(&mut self, order: NewOrder) -> Order;

    /// 新增訂單明細，所屬訂單必須存在
    fn add_order_item(&mut self, item: NewOrderItem) -> Result<OrderItem>;

    fn menu_item(&self, id: MenuItemId) -> Option<&MenuItem>;

    fn customer(&self, id: CustomerId) -> Option<&Customer>;

    fn order(&self, id: OrderId) -> Option<&Order>;

    /// 所有菜單品項
    fn menu_items(&self) -> Vec<&MenuItem>;

    /// 所有訂單（依下單順序）
    fn orders(&self) -> Vec<&Order>;

    /// 某張訂單的所有明細
    fn order_items(&self, order_id: OrderId) -> Vec<&OrderItem>;
}

/// 以 `BTreeMap` 保存的記憶體目錄
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    menu_items: BTreeMap<MenuItemId, MenuItem>,
    customers: BTreeMap<CustomerId, Customer>,
    orders: BTreeMap<OrderId, Order>,
    order_items: BTreeMap<OrderId, Vec<OrderItem>>,
    next_menu_item_id: MenuItemId,
    next_customer_id: CustomerId,
    next_order_id: OrderId,
    next_order_item_id: OrderItemId,
}

impl InMemoryCatalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self {
            menu_items: BTreeMap::new(),
            customers: BTreeMap::new(),
            orders: BTreeMap::new(),
            order_items: BTreeMap::new(),
            next_menu_item_id: 1,
            next_customer_id: 1,
            next_order_id: 1,
            next_order_item_id: 1,
        }
    }

    /// 訂單數量
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// 移除訂單與其明細，回傳被移除的訂單
    pub fn remove_order(&mut self, id: OrderId) -> Option<Order> {
        self.order_items.remove(&id);
        self.orders.remove(&id)
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderCatalog for InMemoryCatalog {
    fn add_menu_item(&mut self, item: NewMenuItem) -> MenuItem {
        let id = self.next_menu_item_id;
        self.next_menu_item_id += 1;

        let menu_item = MenuItem::from_new(id, item);
        self.menu_items.insert(id, menu_item.clone());
        menu_item
    }

    fn add_customer(&mut self, customer: NewCustomer) -> Customer {
        let id = self.next_customer_id;
        self.next_customer_id += 1;

        let customer = Customer::from_new(id, customer);
        self.customers.insert(id, customer.clone());
        customer
    }

    fn add_order(&mut self, order: NewOrder) -> Order {
        let id = self.next_order_id;
        self.next_order_id += 1;

        let order = Order::from_new(id, order);
        self.orders.insert(id, order.clone());
        order
    }

    fn add_order_item(&mut self, item: NewOrderItem) -> Result<OrderItem> {
        if !self.orders.contains_key(&item.order_id) {
            return Err(CanteenError::NotFound(format!(
                "order {} not found",
                item.order_id
            )));
        }

        let id = self.next_order_item_id;
        self.next_order_item_id += 1;

        let order_item = OrderItem::from_new(id, item);
        self.order_items
            .entry(order_item.order_id)
            .or_default()
            .push(order_item.clone());
        Ok(order_item)
    }

    fn menu_item(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.menu_items.get(&id)
    }

    fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    fn menu_items(&self) -> Vec<&MenuItem> {
        self.menu_items.values().collect()
    }

    fn orders(&self) -> Vec<&Order> {
        self.orders.values().collect()
    }

    fn order_items(&self, order_id: OrderId) -> Vec<&OrderItem> {
        self.order_items
            .get(&order_id)
            .map(|items| items.iter().collect())
            .unwrap_or_default()
    }
}
