use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for restaurants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub u32);

impl From<u32> for RestaurantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

/// A restaurant in the catalog. Seeded once at startup, read-only afterwards.
///
/// # Actor Framework
/// This struct implements the [`StoreEntity`](tiffin_actor::StoreEntity)
/// trait, allowing it to be managed by a
/// [`StoreActor`](tiffin_actor::StoreActor).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub cuisine: String,
    /// 0–5 star rating for display.
    pub rating: f32,
    /// Display string, e.g. "30-40 min".
    pub delivery_time: String,
    pub image_url: String,
}

/// Payload for seeding a restaurant.
#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
    pub delivery_time: String,
    pub image_url: String,
}
