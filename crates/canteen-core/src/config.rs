//! 最佳化參數配置

use serde::{Deserialize, Serialize};

use crate::{CanteenError, Result};

/// 產能最佳化器參數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// 請求未提供 capacity 時的預設產能
    pub default_capacity: f64,

    /// 可接受的最大產能（件數）
    pub max_capacity: u64,

    /// DP 表格的最大格數 `(n+1) × (W+1)`
    ///
    /// 限制單次請求的記憶體與計算時間上限。
    pub max_table_cells: u64,
}

impl OptimizerConfig {
    /// 創建新的最佳化配置
    pub fn new() -> Self {
        Self {
            default_capacity: 50.0,
            max_capacity: 100_000,
            max_table_cells: 4_000_000,
        }
    }

    /// 建構器模式：設置預設產能
    pub fn with_default_capacity(mut self, capacity: f64) -> Self {
        self.default_capacity = capacity;
        self
    }

    /// 建構器模式：設置最大產能
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// 建構器模式：設置 DP 表格格數上限
    pub fn with_max_table_cells(mut self, max_table_cells: u64) -> Self {
        self.max_table_cells = max_table_cells;
        self
    }

    /// 檢查配置是否一致
    pub fn validate(&self) -> Result<()> {
        if !self.default_capacity.is_finite() || self.default_capacity <= 0.0 {
            return Err(CanteenError::Config(format!(
                "default capacity must be a positive number, got {}",
                self.default_capacity
            )));
        }
        if self.max_capacity == 0 {
            return Err(CanteenError::Config(
                "max capacity must be greater than zero".to_string(),
            ));
        }
        if self.default_capacity.floor() > self.max_capacity as f64 {
            return Err(CanteenError::Config(format!(
                "default capacity {} exceeds max capacity {}",
                self.default_capacity, self.max_capacity
            )));
        }
        if self.max_table_cells == 0 {
            return Err(CanteenError::Config(
                "max table cells must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new()
    }
}
