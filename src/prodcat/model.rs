use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id,
            name: name.into(),
            sex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub title: String,
    pub icon: String,
    // May point at a user that does not exist; the join resolves that to no owner.
    pub owner_id: u32,
}

impl Category {
    pub fn new(id: u32, title: impl Into<String>, icon: impl Into<String>, owner_id: u32) -> Self {
        Self {
            id,
            title: title.into(),
            icon: icon.into(),
            owner_id,
        }
    }

    /// The label shown in the category column, e.g. `🍎 - Fruits`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, category_id: u32) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
        }
    }
}

/// One row of the catalog: a product with its category and that category's owner.
///
/// Either relation may be missing when the reference data points at an id that
/// does not exist. A missing category always implies a missing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinedItem {
    pub product: Product,
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl JoinedItem {
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    pub fn category_id(&self) -> Option<u32> {
        self.category.as_ref().map(|c| c.id)
    }
}
