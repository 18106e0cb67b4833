//! 菜單瀏覽

use canteen_core::{MenuFilter, MenuItem};

use crate::OrderCatalog;

/// 首頁最多顯示的促銷品項數
pub const FEATURED_LIMIT: usize = 3;

/// 菜單查詢
pub struct MenuBrowser;

impl MenuBrowser {
    /// 不重複且排序後的分類列表
    pub fn categories<C: OrderCatalog + ?Sized>(catalog: &C) -> Vec<String> {
        let mut categories: Vec<String> = catalog
            .menu_items()
            .into_iter()
            .map(|item| item.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// 依條件篩選菜單
    pub fn filter<C: OrderCatalog + ?Sized>(catalog: &C, filter: &MenuFilter) -> Vec<MenuItem> {
        catalog
            .menu_items()
            .into_iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    /// 促銷品項（最多 [`FEATURED_LIMIT`] 項）
    pub fn featured<C: OrderCatalog + ?Sized>(catalog: &C) -> Vec<MenuItem> {
        catalog
            .menu_items()
            .into_iter()
            .filter(|item| item.is_featured())
            .take(FEATURED_LIMIT)
            .cloned()
            .collect()
    }
}
