//! 0/1 背包動態規劃

use canteen_core::{CanteenError, OptimizerConfig, OrderSummary, Result};
use rust_decimal::Decimal;

use crate::OptimizationResult;

pub const INVALID_CAPACITY: &str = "capacity must be a positive number";
pub const NO_VALID_ORDERS: &str = "No valid orders selected";

/// 產能最佳化器
///
/// 每次呼叫各自配置 DP 表格，不共用可變狀態，可在多執行緒中同時使用。
#[derive(Debug, Clone, Default)]
pub struct CapacityOptimizer {
    config: OptimizerConfig,
}

impl CapacityOptimizer {
    /// 創建新的最佳化器
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// 選出總件數不超過產能、總金額最大的訂單組合
    ///
    /// 產能向下取整為整數上限 `W`；件數大於 `W` 的訂單不可能被選中。
    /// 金額相同時偏好不選（後面的候選先被捨棄）。重複的候選視為獨立的
    /// 項目，可能被重複選中，呼叫端應自行去重。
    pub fn optimize(
        &self,
        candidates: &[OrderSummary],
        capacity: f64,
    ) -> Result<OptimizationResult> {
        let bound = self.validate(candidates, capacity)?;

        tracing::debug!(
            "開始最佳化：候選 {} 筆，產能 {}（上限 {}）",
            candidates.len(),
            capacity,
            bound
        );

        let table = DpTable::build(candidates, bound)?;
        let selected = table.reconstruct(candidates);
        let total_value = table.best_value();

        let result = if selected.is_empty() {
            OptimizationResult::empty(capacity)
        } else {
            OptimizationResult::from_selection(selected, total_value, capacity)
        };

        tracing::info!(
            "最佳化完成：選中 {} / {} 筆，總額 {}，件數 {}，使用率 {:.1}%",
            result.selected.len(),
            candidates.len(),
            result.total_value,
            result.total_weight,
            result.capacity_utilization
        );

        Ok(result)
    }

    /// 驗證輸入並回傳整數產能上限
    fn validate(&self, candidates: &[OrderSummary], capacity: f64) -> Result<usize> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(CanteenError::invalid_input(INVALID_CAPACITY));
        }

        let floored = capacity.floor();
        if floored > self.config.max_capacity as f64 {
            return Err(CanteenError::invalid_input(format!(
                "capacity must not exceed {}",
                self.config.max_capacity
            )));
        }

        if candidates.is_empty() {
            return Err(CanteenError::invalid_input(NO_VALID_ORDERS));
        }

        if let Some(negative) = candidates.iter().find(|c| c.total_price.is_sign_negative()) {
            return Err(CanteenError::invalid_input(format!(
                "order {} has a negative total price",
                negative.order_id
            )));
        }

        let bound = floored as u64;
        let cells = (candidates.len() as u64 + 1).checked_mul(bound + 1);
        match cells {
            Some(cells) if cells <= self.config.max_table_cells => {}
            _ => {
                return Err(CanteenError::invalid_input(format!(
                    "too many orders ({}) for capacity {}: limit is {} table cells",
                    candidates.len(),
                    bound,
                    self.config.max_table_cells
                )));
            }
        }

        usize::try_from(bound).map_err(|_| CanteenError::invalid_input(INVALID_CAPACITY))
    }
}

/// DP 表格，`(n+1) × (W+1)`，以列優先攤平儲存
struct DpTable {
    values: Vec<Decimal>,
    rows: usize,
    width: usize,
}

impl DpTable {
    /// `dp[i][c]` 為前 `i` 筆候選在產能 `c` 下的最大金額
    fn build(candidates: &[OrderSummary], bound: usize) -> Result<Self> {
        let rows = candidates.len() + 1;
        let width = bound + 1;
        let mut values = vec![Decimal::ZERO; rows * width];

        for (i, candidate) in candidates.iter().enumerate() {
            let prev = i * width;
            let curr = prev + width;
            let weight = Self::weight(candidate);

            for c in 0..width {
                let exclude = values[prev + c];
                values[curr + c] = match weight {
                    Some(w) if w <= c => {
                        let include = values[prev + c - w]
                            .checked_add(candidate.total_price)
                            .ok_or_else(|| {
                                CanteenError::internal(format!(
                                    "order value overflow at order {}",
                                    candidate.order_id
                                ))
                            })?;
                        exclude.max(include)
                    }
                    _ => exclude,
                };
            }
        }

        Ok(Self {
            values,
            rows,
            width,
        })
    }

    /// 件數轉為索引；超出 `usize` 的件數一定放不下
    fn weight(candidate: &OrderSummary) -> Option<usize> {
        usize::try_from(candidate.item_count).ok()
    }

    fn get(&self, i: usize, c: usize) -> Decimal {
        self.values[i * self.width + c]
    }

    fn best_value(&self) -> Decimal {
        self.get(self.rows - 1, self.width - 1)
    }

    /// 由 `i = n` 往回走，只有選入使格值改變時才算選中
    fn reconstruct(&self, candidates: &[OrderSummary]) -> Vec<OrderSummary> {
        let mut selected = Vec::new();
        let mut c = self.width - 1;

        for i in (1..self.rows).rev() {
            if self.get(i, c) != self.get(i - 1, c) {
                let candidate = &candidates[i - 1];
                selected.push(candidate.clone());
                // 格值改變代表 weight <= c
                c -= Self::weight(candidate).unwrap_or(c);
            }
        }

        selected
    }
}
