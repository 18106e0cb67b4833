//! 最佳化服務入口：請求解析 → 訂單解析 → 最佳化 → 回應

use canteen_catalog::{OrderCatalog, OrderSummarizer};
use canteen_core::{CanteenError, OptimizerConfig, OrderSummary, Result};
use serde_json::Value;

use crate::knapsack::NO_VALID_ORDERS;
use crate::{CapacityOptimizer, OptimizationResult, OptimizeOutcome, OptimizeRequest};

/// 已解析好的最佳化工作（訂單摘要快照 + 產能）
///
/// 不持有目錄的參照，可在釋放目錄鎖之後再執行。
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationJob {
    pub candidates: Vec<OrderSummary>,
    pub capacity: f64,
}

/// 最佳化服務
#[derive(Debug, Clone, Default)]
pub struct OptimizationService {
    optimizer: CapacityOptimizer,
}

impl OptimizationService {
    pub fn new(config: OptimizerConfig) -> Self {
        Self {
            optimizer: CapacityOptimizer::new(config),
        }
    }

    pub fn config(&self) -> &OptimizerConfig {
        self.optimizer.config()
    }

    /// 解析請求並取得訂單摘要快照
    pub fn prepare<C: OrderCatalog + ?Sized>(
        &self,
        catalog: &C,
        payload: &Value,
    ) -> Result<OptimizationJob> {
        let request = OptimizeRequest::from_json(payload, self.config())?;
        let candidates = OrderSummarizer::resolve(catalog, &request.order_ids);

        if candidates.is_empty() {
            return Err(CanteenError::invalid_input(NO_VALID_ORDERS));
        }

        tracing::debug!(
            "請求 {} 筆訂單，解析出 {} 筆候選",
            request.order_ids.len(),
            candidates.len()
        );

        Ok(OptimizationJob {
            candidates,
            capacity: request.capacity,
        })
    }

    /// 對快照執行最佳化
    pub fn execute(&self, job: &OptimizationJob) -> Result<OptimizationResult> {
        self.optimizer.optimize(&job.candidates, job.capacity)
    }

    /// 完整流程，所有失敗都轉為 `success = false` 的結果
    pub fn run<C: OrderCatalog + ?Sized>(&self, catalog: &C, payload: &Value) -> OptimizeOutcome {
        let result = self
            .prepare(catalog, payload)
            .and_then(|job| self.execute(&job));
        OptimizeOutcome::from_result(result)
    }
}
