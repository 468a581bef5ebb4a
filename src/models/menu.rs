use serde::{Deserialize, Serialize};

use super::Scalar;

/// `menu.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuContent {
    pub categories: Option<Vec<MenuCategory>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    /// Element id of the category's panel and target of its tab.
    pub id: Option<Scalar>,
    pub name: Option<Scalar>,
    pub items: Option<Vec<MenuItem>>,
    pub options_groups: Option<Vec<OptionGroup>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionGroup {
    pub heading: Option<Scalar>,
    pub options: Option<Vec<Scalar>>,
}

impl MenuContent {
    pub fn categories(&self) -> &[MenuCategory] {
        self.categories.as_deref().unwrap_or_default()
    }
}

impl MenuCategory {
    pub fn items(&self) -> &[MenuItem] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn options_groups(&self) -> &[OptionGroup] {
        self.options_groups.as_deref().unwrap_or_default()
    }
}

impl OptionGroup {
    pub fn options(&self) -> &[Scalar] {
        self.options.as_deref().unwrap_or_default()
    }
}
