//! 菜單模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::MenuItemId;

/// 預設供餐地點
pub const DEFAULT_LOCATION: &str = "Main Cafeteria";

/// 菜單品項
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// 品項ID
    pub id: MenuItemId,

    /// 名稱
    pub name: String,

    /// 說明
    pub description: String,

    /// 單價
    pub price: Decimal,

    /// 分類（如 Chinese、Snacks）
    pub category: String,

    /// 圖片網址
    pub image_url: Option<String>,

    /// 是否供應中
    pub is_available: bool,

    /// 供餐地點
    pub location: String,

    /// 是否為素食
    pub is_vegetarian: bool,

    /// 促銷文案
    pub promotion: Option<String>,
}

impl MenuItem {
    /// 以新品項資料與指定 ID 建立菜單品項
    pub fn from_new(id: MenuItemId, new_item: NewMenuItem) -> Self {
        Self {
            id,
            name: new_item.name,
            description: new_item.description,
            price: new_item.price,
            category: new_item.category,
            image_url: new_item.image_url,
            is_available: new_item.is_available,
            location: new_item.location,
            is_vegetarian: new_item.is_vegetarian,
            promotion: new_item.promotion,
        }
    }

    /// 是否為促銷品項
    pub fn is_featured(&self) -> bool {
        self.promotion.is_some()
    }

    /// 計算指定數量的小計
    pub fn subtotal(&self, quantity: u32) -> Decimal {
        self.price * Decimal::from(quantity)
    }
}

/// 新增菜單品項的資料（ID 由目錄配發）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub location: String,
    pub is_vegetarian: bool,
    pub promotion: Option<String>,
}

impl NewMenuItem {
    /// 創建新的菜單品項資料
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            image_url: None,
            is_available: true,
            location: DEFAULT_LOCATION.to_string(),
            is_vegetarian: false,
            promotion: None,
        }
    }

    /// 建構器模式：設置供餐地點
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// 建構器模式：設置素食標記
    pub fn with_vegetarian(mut self, is_vegetarian: bool) -> Self {
        self.is_vegetarian = is_vegetarian;
        self
    }

    /// 建構器模式：設置圖片網址
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// 建構器模式：設置促銷文案
    pub fn with_promotion(mut self, promotion: impl Into<String>) -> Self {
        self.promotion = Some(promotion.into());
        self
    }
}

/// 菜單篩選條件
///
/// `category` 與 `location` 為 `None` 或 `"all"`（不分大小寫）時不篩選。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFilter {
    pub category: Option<String>,
    pub location: Option<String>,
    pub vegetarian_only: bool,
}

impl MenuFilter {
    /// 建構器模式：依分類篩選
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// 建構器模式：依地點篩選
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// 建構器模式：只保留素食
    pub fn vegetarian_only(mut self) -> Self {
        self.vegetarian_only = true;
        self
    }

    /// 檢查品項是否符合條件
    pub fn matches(&self, item: &MenuItem) -> bool {
        if let Some(category) = Self::active(&self.category) {
            if item.category != category {
                return false;
            }
        }

        if let Some(location) = Self::active(&self.location) {
            if item.location != location {
                return false;
            }
        }

        !self.vegetarian_only || item.is_vegetarian
    }

    fn active(value: &Option<String>) -> Option<&str> {
        value
            .as_deref()
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
    }
}
