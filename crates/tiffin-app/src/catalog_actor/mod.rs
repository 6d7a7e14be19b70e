//! # Catalog Store
//!
//! The read-only registry of restaurants, categories, and menu items – the
//! source of truth for an item's existence and its current price.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](tiffin_actor::StoreEntity) implementations
//!   for [`Restaurant`], [`Category`], and [`MenuItem`]
//! - [`error`] - [`CatalogError`] for type-safe error handling
//! - factory functions below, one per backing actor
//!
//! ## Lifecycle
//!
//! The three actors accept `Create` requests from the seeding process at
//! startup (`seed::apply`) and serve `Get`/`Query` from then on. Nothing in
//! the system mutates or deletes a catalog record after seeding. Menu-item
//! creation validates its restaurant and category references, so the catalog
//! never holds a dangling reference.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (restaurant_actor, restaurant_store) = catalog_actor::restaurants();
//! let (category_actor, category_store) = catalog_actor::categories();
//! let (menu_item_actor, menu_item_store) = catalog_actor::menu_items();
//!
//! tokio::spawn(restaurant_actor.run(()));
//! tokio::spawn(category_actor.run(()));
//! // The menu-item actor checks references against the other two stores.
//! tokio::spawn(menu_item_actor.run((restaurant_store.clone(), category_store.clone())));
//!
//! let catalog = CatalogClient::new(restaurant_store, category_store, menu_item_store);
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Category, MenuItem, Restaurant};
use tiffin_actor::{StoreActor, StoreClient};

/// Creates the restaurant registry actor and its store client.
pub fn restaurants() -> (StoreActor<Restaurant>, StoreClient<Restaurant>) {
    StoreActor::new(32)
}

/// Creates the category registry actor and its store client.
pub fn categories() -> (StoreActor<Category>, StoreClient<Category>) {
    StoreActor::new(32)
}

/// Creates the menu-item registry actor and its store client.
pub fn menu_items() -> (StoreActor<MenuItem>, StoreClient<MenuItem>) {
    StoreActor::new(32)
}
