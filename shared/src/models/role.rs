//! Role capability table
//!
//! Which screens a role may open. Queried by the presentation layer; the
//! order and reporting code never looks at roles.

use serde::{Deserialize, Serialize};

use super::UserRole;

/// Top-level screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Cashier order entry
    Pos,
    /// Kitchen display
    Kitchen,
    /// Manager analytics dashboard
    Manager,
    /// Accountant reconciliation
    Accountant,
}

impl View {
    /// Display order in the navigation bar
    pub const ALL: [View; 4] = [Self::Pos, Self::Kitchen, Self::Manager, Self::Accountant];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pos => "POS",
            Self::Kitchen => "Kitchen",
            Self::Manager => "Dashboard",
            Self::Accountant => "Finance",
        }
    }

    /// Roles allowed to open this view
    pub fn roles(&self) -> &'static [UserRole] {
        match self {
            Self::Pos => &[UserRole::Cashier, UserRole::Waiter],
            Self::Kitchen => &[UserRole::Kitchen, UserRole::Manager],
            Self::Manager => &[UserRole::Manager],
            Self::Accountant => &[UserRole::Accountant, UserRole::Manager],
        }
    }
}

impl UserRole {
    /// Views available to this role, in navigation order
    pub fn views(&self) -> Vec<View> {
        View::ALL
            .into_iter()
            .filter(|view| view.roles().contains(self))
            .collect()
    }

    pub fn can_access(&self, view: View) -> bool {
        view.roles().contains(self)
    }

    /// Screen shown right after sign-in
    pub fn landing_view(&self) -> View {
        match self {
            Self::Cashier | Self::Waiter => View::Pos,
            Self::Kitchen => View::Kitchen,
            Self::Manager => View::Manager,
            Self::Accountant => View::Accountant,
        }
    }
}
