//! # Cart Actor
//!
//! The per-user cart store and the checkout path that turns a cart into an
//! order.
//!
//! ## Overview
//!
//! One actor holds every cart, keyed by [`UserId`](crate::model::UserId).
//! Carts are materialized lazily (`Ensure`) the first time a user touches
//! theirs, and are emptied but never removed. All operations – add, update,
//! remove, read, clear, checkout – are [`CartAction`]s handled inside the
//! actor, which makes each one a single logical transaction: the actor
//! processes one message at a time, so a checkout can never interleave with
//! another mutation of the same store.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](tiffin_actor::StoreEntity) implementation
//!   for [`Cart`]
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`checkout`] - the cart-to-order conversion routine
//! - [`error`] - [`CartError`] for type-safe error handling
//! - [`new()`] - factory function that creates the actor and its store client
//!
//! ## Dependencies
//!
//! The cart actor is the one store that talks to others: its context injects
//! the [`CatalogClient`] (current prices, existence checks) and the
//! [`OrderClient`] (recording checked-out orders).
//!
//! ```rust,ignore
//! let (cart_actor, cart_store) = cart_actor::new();
//! tokio::spawn(cart_actor.run((catalog_client.clone(), order_client.clone())));
//! let carts = CartClient::new(cart_store);
//! ```

pub mod actions;
pub mod checkout;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{CatalogClient, OrderClient};
use crate::model::Cart;
use tiffin_actor::{StoreActor, StoreClient};

/// Dependencies injected into the cart actor: the catalog for price
/// resolution and the ledger for checkout.
pub type CartContext = (CatalogClient, OrderClient);

/// Creates the cart actor and its store client.
pub fn new() -> (StoreActor<Cart>, StoreClient<Cart>) {
    StoreActor::new(32)
}
