//! # Canteen Server
//!
//! HTTP 綁定層（axum）

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use canteen_catalog::InMemoryCatalog;
use canteen_optimizer::OptimizationService;
use tokio::sync::RwLock;

pub use config::ServerConfig;
pub use error::ApiError;

/// 共享目錄
pub type SharedCatalog = Arc<RwLock<InMemoryCatalog>>;

/// 處理器共用狀態
#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub optimizer: OptimizationService,
}

impl AppState {
    pub fn new(catalog: InMemoryCatalog, optimizer: OptimizationService) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            optimizer,
        }
    }
}

/// 建立路由
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health_check))
        .route("/api/menu", get(routes::list_menu))
        .route("/api/menu/categories", get(routes::list_categories))
        .route("/api/menu/featured", get(routes::list_featured))
        .route("/api/menu/filter", get(routes::filter_menu))
        .route("/submit-order", post(routes::submit_order))
        .route("/api/orders", get(routes::list_orders))
        .route("/api/orders/:order_id", get(routes::get_order))
        .route("/api/optimize-order", post(routes::optimize_orders))
        .with_state(state)
}
