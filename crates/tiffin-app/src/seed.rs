//! Catalog seeding.
//!
//! The catalog is populated once at startup and read-only afterwards. Seed
//! data comes from a JSON file (the same shape the original deployment
//! shipped: categories, restaurants, and menu items referencing their
//! restaurant and category by name), or from [`demo()`] when no file is
//! configured. [`apply`] resolves the name references to generated ids while
//! inserting, so the catalog itself only ever stores ids.

use crate::catalog_actor::CatalogError;
use crate::clients::CatalogClient;
use crate::model::{CategoryCreate, CategoryId, MenuItemCreate, RestaurantCreate, RestaurantId};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// The on-disk shape of a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub categories: Vec<CategorySeed>,
    pub restaurants: Vec<RestaurantSeed>,
    pub menu_items: Vec<MenuItemSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategorySeed {
    pub name: String,
    pub icon_class: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantSeed {
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
    pub delivery_time: String,
    pub image_url: String,
}

/// Menu items reference their restaurant and category by name; ids do not
/// exist until the rows are inserted.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemSeed {
    pub restaurant_name: String,
    pub category_name: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub is_veg: bool,
    pub image_url: String,
}

/// Errors that can occur while loading or applying seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed references unknown restaurant: {0}")]
    UnknownRestaurant(String),

    #[error("Seed references unknown category: {0}")]
    UnknownCategory(String),

    #[error("Catalog rejected seed record: {0}")]
    Catalog(#[from] CatalogError),
}

/// Load seed data from a JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<SeedData, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Populate the catalog, resolving name references to the generated ids.
pub async fn apply(catalog: &CatalogClient, data: SeedData) -> Result<(), SeedError> {
    let mut category_ids: HashMap<String, CategoryId> = HashMap::new();
    for category in data.categories {
        let id = catalog
            .add_category(CategoryCreate {
                name: category.name.clone(),
                icon_class: category.icon_class,
            })
            .await?;
        category_ids.insert(category.name, id);
    }

    let mut restaurant_ids: HashMap<String, RestaurantId> = HashMap::new();
    for restaurant in data.restaurants {
        let id = catalog
            .add_restaurant(RestaurantCreate {
                name: restaurant.name.clone(),
                cuisine: restaurant.cuisine,
                rating: restaurant.rating,
                delivery_time: restaurant.delivery_time,
                image_url: restaurant.image_url,
            })
            .await?;
        restaurant_ids.insert(restaurant.name, id);
    }

    let mut item_count = 0;
    for item in data.menu_items {
        let restaurant_id = restaurant_ids
            .get(&item.restaurant_name)
            .cloned()
            .ok_or_else(|| SeedError::UnknownRestaurant(item.restaurant_name.clone()))?;
        let category_id = match &item.category_name {
            Some(name) => Some(
                category_ids
                    .get(name)
                    .cloned()
                    .ok_or_else(|| SeedError::UnknownCategory(name.clone()))?,
            ),
            None => None,
        };
        catalog
            .add_menu_item(MenuItemCreate {
                restaurant_id,
                category_id,
                name: item.name,
                description: item.description,
                price: item.price,
                is_veg: item.is_veg,
                image_url: item.image_url,
            })
            .await?;
        item_count += 1;
    }

    info!(
        categories = category_ids.len(),
        restaurants = restaurant_ids.len(),
        menu_items = item_count,
        "Catalog seeded"
    );
    Ok(())
}

/// Built-in seed data so the demo binary and tests run without a file.
pub fn demo() -> SeedData {
    SeedData {
        categories: vec![
            CategorySeed {
                name: "North Indian".to_string(),
                icon_class: "fas fa-pepper-hot".to_string(),
            },
            CategorySeed {
                name: "Chinese".to_string(),
                icon_class: "fas fa-dragon".to_string(),
            },
            CategorySeed {
                name: "Biryani".to_string(),
                icon_class: "fas fa-bowl-rice".to_string(),
            },
        ],
        restaurants: vec![
            RestaurantSeed {
                name: "Spice Route".to_string(),
                cuisine: "North Indian".to_string(),
                rating: 4.4,
                delivery_time: "30-40 min".to_string(),
                image_url: "/static/images/spice-route.jpg".to_string(),
            },
            RestaurantSeed {
                name: "Golden Wok".to_string(),
                cuisine: "Chinese".to_string(),
                rating: 4.1,
                delivery_time: "25-35 min".to_string(),
                image_url: "/static/images/golden-wok.jpg".to_string(),
            },
        ],
        menu_items: vec![
            MenuItemSeed {
                restaurant_name: "Spice Route".to_string(),
                category_name: Some("North Indian".to_string()),
                name: "Paneer Tikka".to_string(),
                description: "Char-grilled cottage cheese with mint chutney".to_string(),
                price: 240.0,
                is_veg: true,
                image_url: "/static/images/paneer-tikka.jpg".to_string(),
            },
            MenuItemSeed {
                restaurant_name: "Spice Route".to_string(),
                category_name: Some("North Indian".to_string()),
                name: "Butter Chicken".to_string(),
                description: "Tandoori chicken simmered in tomato-butter gravy".to_string(),
                price: 320.0,
                is_veg: false,
                image_url: "/static/images/butter-chicken.jpg".to_string(),
            },
            MenuItemSeed {
                restaurant_name: "Spice Route".to_string(),
                category_name: Some("Biryani".to_string()),
                name: "Chicken Biryani".to_string(),
                description: "Dum-cooked basmati rice with spiced chicken".to_string(),
                price: 280.0,
                is_veg: false,
                image_url: "/static/images/chicken-biryani.jpg".to_string(),
            },
            MenuItemSeed {
                restaurant_name: "Golden Wok".to_string(),
                category_name: Some("Chinese".to_string()),
                name: "Veg Hakka Noodles".to_string(),
                description: "Wok-tossed noodles with seasonal vegetables".to_string(),
                price: 160.0,
                is_veg: true,
                image_url: "/static/images/hakka-noodles.jpg".to_string(),
            },
            MenuItemSeed {
                restaurant_name: "Golden Wok".to_string(),
                category_name: Some("Chinese".to_string()),
                name: "Chilli Paneer".to_string(),
                description: "Crisp paneer in a hot garlic sauce".to_string(),
                price: 210.0,
                is_veg: true,
                image_url: "/static/images/chilli-paneer.jpg".to_string(),
            },
        ],
    }
}
