//! Error types for the cart actor.

use crate::model::{MenuItemId, RestaurantId};
use thiserror::Error;

/// Errors that can occur during cart operations and checkout.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The menu item is unknown to the catalog, or (for updates) not
    /// currently in the cart.
    #[error("Menu item not found: {0}")]
    ItemNotFound(MenuItemId),

    /// An add with quantity zero. Quantities are unsigned, so the negative
    /// case cannot occur.
    #[error("Quantity must be positive")]
    InvalidQuantity,

    /// Checkout attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout found lines from more than one restaurant. An order belongs
    /// to exactly one restaurant, so mixed carts are rejected at this
    /// transition.
    #[error("Cart spans multiple restaurants: {expected} and {found}")]
    MixedRestaurants {
        expected: RestaurantId,
        found: RestaurantId,
    },

    /// The restaurant owning the cart's items is unknown to the catalog.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(RestaurantId),

    /// The order ledger refused or failed to record the order. The cart is
    /// left untouched when this happens.
    #[error("Order could not be placed: {0}")]
    OrderFailed(String),

    /// An error occurred while communicating with the actor system.
    #[error("Cart communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunication(msg)
    }
}
