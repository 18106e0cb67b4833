//! # Canteen Optimizer
//!
//! 訂單產能最佳化（0/1 背包問題）
//!
//! 給定一組訂單摘要與產能上限（可製作的品項件數），選出總件數不超過上限、
//! 總金額最大的訂單組合。

pub mod knapsack;
pub mod report;
pub mod request;
pub mod service;

// Re-export 主要類型
pub use knapsack::CapacityOptimizer;
pub use report::{FailureReport, OptimizationReport, OptimizeOutcome, OptimizedOrder};
pub use request::OptimizeRequest;
pub use service::{OptimizationJob, OptimizationService};

use canteen_core::OrderSummary;
use rust_decimal::Decimal;

/// 最佳化結果
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// 選中的訂單（由最後一筆候選往前）
    pub selected: Vec<OrderSummary>,

    /// 選中訂單的總金額
    pub total_value: Decimal,

    /// 選中訂單的總件數，不超過 `floor(capacity)`
    pub total_weight: u64,

    /// 呼叫端提供的原始產能（未取整）
    pub capacity: f64,

    /// 產能使用率（%）
    pub capacity_utilization: f64,
}

impl OptimizationResult {
    /// 創建未選中任何訂單的結果
    pub fn empty(capacity: f64) -> Self {
        Self {
            selected: Vec::new(),
            total_value: Decimal::ZERO,
            total_weight: 0,
            capacity,
            capacity_utilization: 0.0,
        }
    }

    /// 由選中訂單建立結果，使用率以原始產能計算
    pub fn from_selection(
        selected: Vec<OrderSummary>,
        total_value: Decimal,
        capacity: f64,
    ) -> Self {
        let total_weight: u64 = selected.iter().map(|s| s.item_count).sum();
        let capacity_utilization = if capacity > 0.0 {
            total_weight as f64 / capacity * 100.0
        } else {
            0.0
        };

        Self {
            selected,
            total_value,
            total_weight,
            capacity,
            capacity_utilization,
        }
    }

    /// 選中訂單的 ID
    pub fn selected_ids(&self) -> Vec<canteen_core::OrderId> {
        self.selected.iter().map(|s| s.order_id).collect()
    }
}
