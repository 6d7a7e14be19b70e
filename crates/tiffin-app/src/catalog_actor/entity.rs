//! Entity trait implementations for the catalog record types.
//!
//! Restaurants, categories, and menu items share a lifecycle: created by the
//! seeding process, read-only afterwards. Their `Update` DTOs are `()` and
//! none of them defines actions – after seeding, the catalog only answers
//! `Get` and `Query`.

use crate::catalog_actor::CatalogError;
use crate::model::{
    Category, CategoryCreate, MenuItem, MenuItemCreate, Restaurant, RestaurantCreate, RestaurantId,
};
use async_trait::async_trait;
use tiffin_actor::{StoreClient, StoreEntity};

#[async_trait]
impl StoreEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Filter = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error> {
        if !(0.0..=5.0).contains(&params.rating) {
            return Err(CatalogError::InvalidRating(params.rating));
        }
        Ok(Self {
            id,
            name: params.name,
            cuisine: params.cuisine,
            rating: params.rating,
            delivery_time: params.delivery_time,
            image_url: params.image_url,
        })
    }

    // The unit filter lists the whole registry.
    fn matches(&self, _filter: &()) -> bool {
        true
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[async_trait]
impl StoreEntity for Category {
    type Id = crate::model::CategoryId;
    type Create = CategoryCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Filter = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            icon_class: params.icon_class,
        })
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[async_trait]
impl StoreEntity for MenuItem {
    type Id = crate::model::MenuItemId;
    type Create = MenuItemCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    /// `None` lists every item, `Some(id)` one restaurant's menu.
    type Filter = Option<RestaurantId>;
    /// Reference checks run against the restaurant and category stores.
    type Context = (StoreClient<Restaurant>, StoreClient<Category>);
    type Error = CatalogError;

    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error> {
        if params.price < 0.0 {
            return Err(CatalogError::InvalidPrice(params.price));
        }
        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            category_id: params.category_id,
            name: params.name,
            description: params.description,
            price: params.price,
            is_veg: params.is_veg,
            image_url: params.image_url,
        })
    }

    fn matches(&self, filter: &Option<RestaurantId>) -> bool {
        match filter {
            Some(restaurant_id) => self.restaurant_id == *restaurant_id,
            None => true,
        }
    }

    /// A menu item never enters the catalog pointing at a restaurant or
    /// category that is not already seeded.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (restaurants, categories) = ctx;

        let known = restaurants
            .get(self.restaurant_id.clone())
            .await
            .map_err(|e| CatalogError::ActorCommunication(e.to_string()))?;
        if known.is_none() {
            return Err(CatalogError::RestaurantNotFound(self.restaurant_id.clone()));
        }

        if let Some(category_id) = &self.category_id {
            let known = categories
                .get(category_id.clone())
                .await
                .map_err(|e| CatalogError::ActorCommunication(e.to_string()))?;
            if known.is_none() {
                return Err(CatalogError::CategoryNotFound(category_id.clone()));
            }
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
