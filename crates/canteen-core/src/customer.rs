//! 顧客模型

use serde::{Deserialize, Serialize};

use crate::CustomerId;

/// 請求未帶 `customer_name` 時使用的顧客名稱
pub const ANONYMOUS_CUSTOMER: &str = "Anonymous";

/// 顧客
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// 顧客ID
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Customer {
    /// 以新顧客資料與指定 ID 建立顧客
    pub fn from_new(id: CustomerId, new_customer: NewCustomer) -> Self {
        Self {
            id,
            name: new_customer.name,
            email: new_customer.email,
            phone: new_customer.phone,
            address: new_customer.address,
        }
    }
}

/// 新增顧客的資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl NewCustomer {
    /// 創建新的顧客資料，姓名原樣保存
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
        }
    }

    /// 建構器模式：設置電子郵件
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// 建構器模式：設置電話
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// 建構器模式：設置地址
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}
