//! Canteen Server
//!
//! # Environment Variables
//! - `CANTEEN_BIND_ADDR` - 監聽位址（預設 127.0.0.1:5000）
//! - `CANTEEN_DEFAULT_CAPACITY` / `CANTEEN_MAX_CAPACITY` / `CANTEEN_MAX_TABLE_CELLS` - 最佳化參數
//! - `CANTEEN_SEED_MENU` - 是否載入預設菜單（預設 true）
//! - `RUST_LOG` - 日誌等級（預設 info）

use anyhow::Result;
use canteen_catalog::{seed_menu, InMemoryCatalog};
use canteen_optimizer::OptimizationService;
use canteen_server::{build_router, AppState, ServerConfig};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!("Canteen Server {} 啟動中...", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::from_env()?;
    info!(
        "配置：位址 {}，預設產能 {}，產能上限 {}，表格上限 {}",
        config.bind_addr,
        config.optimizer.default_capacity,
        config.optimizer.max_capacity,
        config.optimizer.max_table_cells
    );

    let mut catalog = InMemoryCatalog::new();
    if config.seed_menu {
        seed_menu(&mut catalog);
    }

    let state = AppState::new(catalog, OptimizationService::new(config.optimizer));
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("監聽 {}", config.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("收到關閉訊號，停止服務");
        })
        .await?;

    Ok(())
}
