//! 預設菜單

use canteen_core::NewMenuItem;
use rust_decimal::Decimal;

use crate::OrderCatalog;

const MAIN_CAFETERIA: &str = "Main Cafeteria";
const FOOD_COURT: &str = "Food Court";

/// 食堂預設菜單
pub fn default_menu() -> Vec<NewMenuItem> {
    vec![
        item(
            "Masala Dosa",
            "Crispy South Indian dosa served with chutney and sambar",
            40,
            "South Indian",
        )
        .with_image_url(
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQ9tXNH_xCEYOU9wjkNFLKfCHUf1mvc8QmR4g&s",
        )
        .with_vegetarian(true),
        item("Veg Fried Rice", "Fried rice with vegetables and soy sauce", 60, "Chinese")
            .with_location(FOOD_COURT)
            .with_image_url(
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSrG5ozMx8Xc_ONg4SxEAtSu3Ptu6pbSAXa9A&s",
            )
            .with_vegetarian(true),
        item("Egg Fried Rice", "Fried rice with egg and vegetables", 70, "Chinese")
            .with_location(FOOD_COURT)
            .with_image_url(
                "https://www.allrecipes.com/thmb/GxHYGQD4Vh9BBu-EDlSv5XGBJNc=/1500x0/filters:no_upscale():max_bytes(150000):strip_icc()/ALR-23298-egg-fried-rice-VAT-4x3-2closeup-ab653366830b41cc8d62627939ccc6c7.jpg",
            ),
        item("Veg Chowmein", "Stir-fried noodles with veggies", 50, "Chinese")
            .with_image_url(
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTQkXt4dNj9WmZ7f955QsY3E7nStyG0ni78XA&s",
            )
            .with_vegetarian(true),
        item("Egg Chowmein", "Chowmein with scrambled egg", 60, "Chinese")
            .with_image_url("https://c.ndtvimg.com/2020-07/53l0lr2_noodle_625x300_06_July_20.jpg"),
        item("Soft Drink (Can)", "Chilled carbonated beverage", 30, "Beverage")
            .with_location(FOOD_COURT)
            .with_image_url(
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQ941Y5G3iSYeqYcTXdiNxsELeqIgGudsL3eg&s",
            )
            .with_vegetarian(true),
        item("Boiled Egg", "Protein-rich boiled egg", 20, "Snacks")
            .with_image_url(
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSzFQlL9vmImw9iIt3QFyJgT-YE3wo7FeCfGA&s",
            ),
        item("Ice Cream", "Classic vanilla cone", 40, "Dessert")
            .with_location(FOOD_COURT)
            .with_image_url(
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQYFULypZgudRiujz0RZgtiT5R7Z2rilcdcBQ&s",
            )
            .with_vegetarian(true),
        item("Cheese Pizza", "Cheesy pizza with tomato base", 90, "Fast Food")
            .with_location(FOOD_COURT)
            .with_image_url("https://upload.wikimedia.org/wikipedia/commons/d/d3/Supreme_pizza.jpg")
            .with_vegetarian(true),
        item("Veg Burger", "Burger with grilled vegetable patty", 80, "Fast Food")
            .with_image_url(
                "https://www.indianhealthyrecipes.com/wp-content/uploads/2016/02/veg-burger-recipe-1.jpg",
            )
            .with_vegetarian(true),
        item("Samosa", "Crispy fried potato-stuffed samosa", 15, "Snacks")
            .with_image_url(
                "https://vegecravings.com/wp-content/uploads/2017/03/Aloo-Samosa-Recipe-Step-By-Step-Instructions.jpg",
            )
            .with_vegetarian(true),
    ]
}

/// 預設在主餐廳供應、非素食的品項
fn item(name: &str, description: &str, price: i64, category: &str) -> NewMenuItem {
    NewMenuItem::new(name, description, Decimal::from(price), category)
        .with_location(MAIN_CAFETERIA)
}

/// 載入預設菜單；目錄已有品項時不做任何事
///
/// 回傳新增的品項數量。
pub fn seed_menu<C: OrderCatalog + ?Sized>(catalog: &mut C) -> usize {
    if !catalog.menu_items().is_empty() {
        return 0;
    }

    let menu = default_menu();
    let count = menu.len();
    for item in menu {
        catalog.add_menu_item(item);
    }

    tracing::info!("已載入預設菜單 {} 項", count);
    count
}
