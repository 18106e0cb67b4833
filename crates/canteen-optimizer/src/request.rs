//! 最佳化請求解析

use canteen_core::{CanteenError, OptimizerConfig, OrderId, Result};
use serde_json::Value;

use crate::knapsack::INVALID_CAPACITY;

pub const NO_DATA: &str = "No data provided";
pub const ORDER_IDS_NOT_ARRAY: &str = "order_ids must be an array";

/// 已驗證的最佳化請求
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeRequest {
    /// 依請求順序的訂單 ID（保留重複）
    pub order_ids: Vec<OrderId>,

    /// 產能（正的有限數）
    pub capacity: f64,
}

impl OptimizeRequest {
    pub fn new(order_ids: Vec<OrderId>, capacity: f64) -> Self {
        Self {
            order_ids,
            capacity,
        }
    }

    /// 解析 `{ "order_ids": [...], "capacity": n }`
    ///
    /// 缺少 `order_ids` 視為空陣列，缺少 `capacity` 使用配置的預設產能。
    /// ID 接受非負整數，以及小數部分為零的數字（`1.0` 視同 `1`）；其餘
    /// 無法對應任何訂單，直接略過。
    pub fn from_json(payload: &Value, config: &OptimizerConfig) -> Result<Self> {
        let data = payload
            .as_object()
            .filter(|data| !data.is_empty())
            .ok_or_else(|| CanteenError::invalid_input(NO_DATA))?;

        let order_ids = match data.get("order_ids") {
            None => Vec::new(),
            Some(Value::Array(raw_ids)) => {
                let ids: Vec<OrderId> = raw_ids.iter().filter_map(Self::order_id).collect();
                if ids.len() < raw_ids.len() {
                    tracing::warn!("略過 {} 個無效的訂單 ID", raw_ids.len() - ids.len());
                }
                ids
            }
            Some(_) => return Err(CanteenError::invalid_input(ORDER_IDS_NOT_ARRAY)),
        };

        let capacity = match data.get("capacity") {
            None => config.default_capacity,
            Some(Value::Number(n)) => n
                .as_f64()
                .filter(|c| c.is_finite() && *c > 0.0)
                .ok_or_else(|| CanteenError::invalid_input(INVALID_CAPACITY))?,
            Some(_) => return Err(CanteenError::invalid_input(INVALID_CAPACITY)),
        };

        Ok(Self {
            order_ids,
            capacity,
        })
    }

    fn order_id(value: &Value) -> Option<OrderId> {
        value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|id| id.fract() == 0.0 && *id >= 0.0 && *id <= u64::MAX as f64)
                .map(|id| id as OrderId)
        })
    }
}
