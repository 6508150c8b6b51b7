//! Menu-builder value types.

use serde::{Deserialize, Serialize};

/// The selectable menu catalog, loaded from `menu-data.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuData {
    #[serde(default)]
    pub sandwiches: Vec<MenuItem>,
    #[serde(default)]
    pub soups: Vec<MenuItem>,
    #[serde(default)]
    pub desserts: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Only meaningful for soups; sandwiches and desserts leave it false.
    #[serde(default)]
    pub vegetarian: bool,
}
