//! Menu Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu categories in display order
pub const MENU_CATEGORIES: [&str; 5] = [
    "Appetizers",
    "Main Course",
    "Beverages",
    "Desserts",
    "Specials",
];

/// Modifier option (e.g. "Large", +1.50)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModifierOption {
    pub label: String,
    pub price: Decimal,
}

/// Modifier group attached to a menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuModifier {
    pub id: String,
    pub name: String,
    pub options: Vec<ModifierOption>,
}

/// Sellable menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<MenuModifier>>,
}

impl MenuItem {
    /// Case-insensitive substring match on the name
    pub fn matches_search(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

fn item(id: &str, name: &str, category: &str, cents: i64, description: Option<&str>) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price: Decimal::new(cents, 2),
        available: true,
        image: None,
        description: description.map(str::to_string),
        modifiers: None,
    }
}

/// Seed catalog written on first start
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        item("1", "Caesar Salad", "Appetizers", 1299, Some("Fresh romaine, parmesan, croutons")),
        item("2", "Garlic Bread", "Appetizers", 699, Some("Toasted with herb butter")),
        item("3", "Chicken Wings", "Appetizers", 1499, Some("Buffalo or BBQ")),
        item("4", "Mozzarella Sticks", "Appetizers", 999, None),
        item("5", "Grilled Salmon", "Main Course", 2499, Some("With seasonal vegetables")),
        item("6", "Ribeye Steak", "Main Course", 3299, Some("12oz premium cut")),
        item("7", "Pasta Carbonara", "Main Course", 1699, None),
        item("8", "Margherita Pizza", "Main Course", 1499, None),
        item("9", "Chicken Alfredo", "Main Course", 1899, None),
        item("10", "Veggie Burger", "Main Course", 1399, None),
        item("11", "Coca Cola", "Beverages", 299, None),
        item("12", "Iced Tea", "Beverages", 299, None),
        item("13", "Fresh Juice", "Beverages", 499, None),
        item("14", "Coffee", "Beverages", 399, None),
        item("15", "Beer", "Beverages", 599, None),
        item("16", "Chocolate Cake", "Desserts", 799, None),
        item("17", "Ice Cream", "Desserts", 599, None),
        item("18", "Tiramisu", "Desserts", 899, None),
        item("19", "Chef Special", "Specials", 2899, Some("Daily special - ask your server")),
    ]
}
