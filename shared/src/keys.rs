//! Key-value store keys
//!
//! Every record collection lives under one stable key and is replaced
//! wholesale on write.

/// Full order collection (`Vec<Order>`, newest first)
pub const ORDERS: &str = "orders";

/// Staff directory (`Vec<User>`)
pub const STAFF_USERS: &str = "staff-users";

/// User currently signed in at this terminal (`Option<User>`)
pub const CURRENT_USER: &str = "current-user";

/// Menu catalog (`Vec<MenuItem>`)
pub const MENU_ITEMS: &str = "menu-items";
