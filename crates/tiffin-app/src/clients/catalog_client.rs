//! # Catalog Client
//!
//! Read access to the restaurant, category, and menu-item registries, plus
//! the create methods the seeding process uses at startup.

use crate::catalog_actor::CatalogError;
use crate::model::{
    Category, CategoryCreate, CategoryId, MenuItem, MenuItemCreate, MenuItemId, Restaurant,
    RestaurantCreate, RestaurantId,
};
use tiffin_actor::StoreClient;
use tracing::{debug, instrument};

/// Client for the three catalog stores.
///
/// Composite rather than a single-store wrapper: the catalog is one
/// component to its callers, but restaurants, categories, and menu items
/// each live in their own actor.
#[derive(Clone)]
pub struct CatalogClient {
    restaurants: StoreClient<Restaurant>,
    categories: StoreClient<Category>,
    menu_items: StoreClient<MenuItem>,
}

impl CatalogClient {
    pub fn new(
        restaurants: StoreClient<Restaurant>,
        categories: StoreClient<Category>,
        menu_items: StoreClient<MenuItem>,
    ) -> Self {
        Self {
            restaurants,
            categories,
            menu_items,
        }
    }

    // --- Seeding (startup only; the catalog is read-only afterwards) ---

    #[instrument(skip(self, params))]
    pub async fn add_restaurant(
        &self,
        params: RestaurantCreate,
    ) -> Result<RestaurantId, CatalogError> {
        debug!("Sending request");
        self.restaurants
            .create(params)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, params))]
    pub async fn add_category(&self, params: CategoryCreate) -> Result<CategoryId, CatalogError> {
        debug!("Sending request");
        self.categories.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, params))]
    pub async fn add_menu_item(&self, params: MenuItemCreate) -> Result<MenuItemId, CatalogError> {
        debug!("Sending request");
        self.menu_items.create(params).await.map_err(Self::map_error)
    }

    // --- Reads ---

    /// Fetch one restaurant by exact id.
    #[instrument(skip(self))]
    pub async fn restaurant(&self, id: RestaurantId) -> Result<Option<Restaurant>, CatalogError> {
        self.restaurants.get(id).await.map_err(Self::map_error)
    }

    /// List every restaurant, ordered by id.
    #[instrument(skip(self))]
    pub async fn restaurants(&self) -> Result<Vec<Restaurant>, CatalogError> {
        let mut all = self.restaurants.query(()).await.map_err(Self::map_error)?;
        all.sort_by_key(|restaurant| restaurant.id.0);
        Ok(all)
    }

    /// List every category, ordered by id.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        let mut all = self.categories.query(()).await.map_err(Self::map_error)?;
        all.sort_by_key(|category| category.id.0);
        Ok(all)
    }

    /// Fetch one menu item by exact id.
    #[instrument(skip(self))]
    pub async fn menu_item(&self, id: MenuItemId) -> Result<Option<MenuItem>, CatalogError> {
        self.menu_items.get(id).await.map_err(Self::map_error)
    }

    /// List menu items, optionally restricted to one restaurant, ordered by
    /// id. An unknown restaurant yields an empty list, not an error.
    #[instrument(skip(self))]
    pub async fn menu_items(
        &self,
        restaurant_id: Option<RestaurantId>,
    ) -> Result<Vec<MenuItem>, CatalogError> {
        let mut items = self
            .menu_items
            .query(restaurant_id)
            .await
            .map_err(Self::map_error)?;
        items.sort_by_key(|item| item.id.0);
        Ok(items)
    }

    fn map_error(e: tiffin_actor::StoreError) -> CatalogError {
        match e {
            tiffin_actor::StoreError::EntityError(inner) => match inner.downcast::<CatalogError>() {
                Ok(err) => *err,
                Err(other) => CatalogError::ActorCommunication(other.to_string()),
            },
            other => CatalogError::ActorCommunication(other.to_string()),
        }
    }
}
