use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category_{}", self.0)
    }
}

/// A menu category ("North Indian", "Pizza", …). Seeded once, read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// CSS class of the category icon, carried through to the UI layer.
    pub icon_class: String,
}

/// Payload for seeding a category.
#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
    pub icon_class: String,
}
