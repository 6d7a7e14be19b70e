use crate::model::{CategoryId, RestaurantId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// A dish on a restaurant's menu. Seeded once at startup, read-only
/// afterwards – the catalog is the source of truth for the item's existence
/// and its current price.
///
/// # Actor Framework
/// This struct implements the [`StoreEntity`](tiffin_actor::StoreEntity)
/// trait, allowing it to be managed by a
/// [`StoreActor`](tiffin_actor::StoreActor). Its store is queried with an
/// `Option<RestaurantId>` filter: `None` lists the full menu catalog,
/// `Some(id)` one restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub restaurant_id: RestaurantId,
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: String,
    /// Current price. Carts resolve this at read time; orders snapshot it at
    /// checkout.
    pub price: f64,
    pub is_veg: bool,
    pub image_url: String,
}

/// Payload for seeding a menu item.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub restaurant_id: RestaurantId,
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub is_veg: bool,
    pub image_url: String,
}
