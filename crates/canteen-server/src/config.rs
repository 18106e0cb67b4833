//! 服務配置（環境變數）

use std::net::SocketAddr;
use std::str::FromStr;

use canteen_core::{CanteenError, OptimizerConfig, Result};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// HTTP 服務配置
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// 監聽位址（`CANTEEN_BIND_ADDR`）
    pub bind_addr: SocketAddr,

    /// 最佳化參數（`CANTEEN_DEFAULT_CAPACITY`、`CANTEEN_MAX_CAPACITY`、`CANTEEN_MAX_TABLE_CELLS`）
    pub optimizer: OptimizerConfig,

    /// 啟動時是否載入預設菜單（`CANTEEN_SEED_MENU`）
    pub seed_menu: bool,
}

impl ServerConfig {
    /// 從行程環境變數讀取
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 從任意查詢函式讀取，未設定的值使用預設
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = OptimizerConfig::default();

        let bind_addr: SocketAddr =
            parse_or(&lookup, "CANTEEN_BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?;
        let optimizer = OptimizerConfig::new()
            .with_default_capacity(parse_or(
                &lookup,
                "CANTEEN_DEFAULT_CAPACITY",
                Some(defaults.default_capacity),
            )?)
            .with_max_capacity(parse_or(
                &lookup,
                "CANTEEN_MAX_CAPACITY",
                Some(defaults.max_capacity),
            )?)
            .with_max_table_cells(parse_or(
                &lookup,
                "CANTEEN_MAX_TABLE_CELLS",
                Some(defaults.max_table_cells),
            )?);
        optimizer.validate()?;

        let seed_menu = parse_or(&lookup, "CANTEEN_SEED_MENU", Some(true))?;

        Ok(Self {
            bind_addr,
            optimizer,
            seed_menu,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Option<T>,
) -> Result<T> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| CanteenError::Config(format!("invalid {key}: {raw}"))),
        None => default.ok_or_else(|| CanteenError::Config(format!("missing {key}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.optimizer, OptimizerConfig::default());
        assert!(config.seed_menu);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CANTEEN_BIND_ADDR", "0.0.0.0:8080"),
            ("CANTEEN_DEFAULT_CAPACITY", "25"),
            ("CANTEEN_MAX_CAPACITY", "1000"),
            ("CANTEEN_MAX_TABLE_CELLS", "50000"),
            ("CANTEEN_SEED_MENU", "false"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.optimizer.default_capacity, 25.0);
        assert_eq!(config.optimizer.max_capacity, 1000);
        assert_eq!(config.optimizer.max_table_cells, 50_000);
        assert!(!config.seed_menu);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("CANTEEN_MAX_CAPACITY", "lots")]),
            Err(CanteenError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("CANTEEN_DEFAULT_CAPACITY", "-1")]),
            Err(CanteenError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("CANTEEN_BIND_ADDR", "localhost")]),
            Err(CanteenError::Config(_))
        ));
    }
}
