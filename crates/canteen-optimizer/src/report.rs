//! 最佳化回應格式

use canteen_core::{CanteenError, OrderId, OrderSummary, Result};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::OptimizationResult;

/// 內部錯誤時回傳給呼叫端的訊息
pub const INTERNAL_FAILURE_MESSAGE: &str = "Failed to run optimization";

/// 回應中的單筆訂單
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedOrder {
    pub id: OrderId,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub items_count: u64,
    pub customer: String,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
}

impl From<&OrderSummary> for OptimizedOrder {
    fn from(summary: &OrderSummary) -> Self {
        Self {
            id: summary.order_id,
            total_price: summary.total_price,
            items_count: summary.item_count,
            customer: summary.customer_name.clone(),
            date: summary.date.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// 成功回應
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    pub success: bool,
    pub optimized_orders: Vec<OptimizedOrder>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
    pub total_weight: u64,
    pub capacity: f64,
    pub capacity_utilization: f64,
}

impl From<&OptimizationResult> for OptimizationReport {
    fn from(result: &OptimizationResult) -> Self {
        Self {
            success: true,
            optimized_orders: result.selected.iter().map(OptimizedOrder::from).collect(),
            total_value: result.total_value,
            total_weight: result.total_weight,
            capacity: result.capacity,
            capacity_utilization: result.capacity_utilization,
        }
    }
}

/// 失敗回應
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub success: bool,
    pub error: String,
    /// 是否為內部錯誤（不輸出）
    #[serde(skip)]
    pub internal: bool,
}

impl FailureReport {
    /// 由錯誤建立失敗回應；內部錯誤只回傳通用訊息
    pub fn from_error(error: &CanteenError) -> Self {
        match error {
            CanteenError::InternalFailure(_) | CanteenError::Config(_) => Self {
                success: false,
                error: INTERNAL_FAILURE_MESSAGE.to_string(),
                internal: true,
            },
            CanteenError::InvalidInput(message) | CanteenError::NotFound(message) => Self {
                success: false,
                error: message.clone(),
                internal: false,
            },
        }
    }
}

/// 最佳化請求的結果，成功與失敗使用相同的 `success` 旗標
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptimizeOutcome {
    Success(OptimizationReport),
    Failure(FailureReport),
}

impl OptimizeOutcome {
    pub fn from_result(result: Result<OptimizationResult>) -> Self {
        match result {
            Ok(result) => OptimizeOutcome::Success(OptimizationReport::from(&result)),
            Err(error) => {
                if error.is_client_error() {
                    tracing::warn!("最佳化請求無效: {}", error);
                } else {
                    tracing::error!("最佳化失敗: {}", error);
                }
                OptimizeOutcome::Failure(FailureReport::from_error(&error))
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OptimizeOutcome::Success(_))
    }

    /// 是否為內部錯誤（HTTP 500）
    pub fn is_internal_failure(&self) -> bool {
        matches!(self, OptimizeOutcome::Failure(f) if f.internal)
    }
}
