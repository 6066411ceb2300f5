//! Staff / User Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseEnumError;

/// Staff role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Cashier,
    Kitchen,
    Manager,
    Accountant,
    Waiter,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        Self::Cashier,
        Self::Kitchen,
        Self::Manager,
        Self::Accountant,
        Self::Waiter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cashier => "cashier",
            Self::Kitchen => "kitchen",
            Self::Manager => "manager",
            Self::Accountant => "accountant",
            Self::Waiter => "waiter",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("user role", s))
    }
}

/// Staff member (also the signed-in session user)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub active: bool,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            avatar: None,
            active: true,
        }
    }
}

/// Seed staff directory written on first start
pub fn default_staff() -> Vec<User> {
    vec![
        User::new("user-1", "John Manager", "manager@pos.com", UserRole::Manager),
        User::new("user-2", "Sarah Cashier", "cashier@pos.com", UserRole::Cashier),
        User::new("user-3", "Mike Chef", "chef@pos.com", UserRole::Kitchen),
        User::new("user-4", "Lisa Accountant", "accountant@pos.com", UserRole::Accountant),
        User::new("user-5", "Tom Waiter", "waiter@pos.com", UserRole::Waiter),
    ]
}
