//! # Canteen
//!
//! 食堂點餐系統：菜單、訂單目錄與訂單產能最佳化

pub use canteen_catalog as catalog;
pub use canteen_core as domain;
pub use canteen_optimizer as optimizer;

pub use canteen_catalog::{InMemoryCatalog, OrderCatalog, OrderSummarizer};
pub use canteen_core::{CanteenError, OptimizerConfig, OrderSummary, Result};
pub use canteen_optimizer::{CapacityOptimizer, OptimizationResult, OptimizationService};
