//! # Canteen Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod customer;
pub mod menu;
pub mod order;

// Re-export 主要類型
pub use config::OptimizerConfig;
pub use customer::{Customer, NewCustomer, ANONYMOUS_CUSTOMER};
pub use menu::{MenuFilter, MenuItem, NewMenuItem};
pub use order::{NewOrder, NewOrderItem, Order, OrderItem, OrderStatus, OrderSummary};

/// 菜單品項 ID
pub type MenuItemId = u64;
/// 顧客 ID
pub type CustomerId = u64;
/// 訂單 ID
pub type OrderId = u64;
/// 訂單明細 ID
pub type OrderItemId = u64;

/// Canteen 錯誤類型
///
/// 錯誤訊息會直接回傳給 API 呼叫端，內容須保持穩定。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanteenError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("internal failure: {0}")]
    InternalFailure(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CanteenError {
    /// 建立輸入錯誤
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// 建立內部錯誤
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalFailure(message.into())
    }

    /// 是否為呼叫端造成的錯誤
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, CanteenError>;
