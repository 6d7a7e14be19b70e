use crate::model::{MenuItemId, RestaurantId, UserId};
use serde::Serialize;

/// A user's staging area of selected items prior to ordering.
///
/// One cart per user, keyed by [`UserId`]: the cart store materializes it
/// lazily on first use and never removes it, only empties it. The cart holds
/// only `(menu item, quantity)` pairs – prices are not copied in, they are
/// resolved against the catalog whenever the cart is read.
///
/// # Actor Framework
/// This struct implements the [`StoreEntity`](tiffin_actor::StoreEntity)
/// trait, allowing it to be managed by a
/// [`StoreActor`](tiffin_actor::StoreActor). All mutations and checkout run
/// as actions inside that actor, so each one is a single logical
/// transaction.
#[derive(Debug, Clone)]
pub struct Cart {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
}

/// One line of a cart. At most one line per menu item: re-adding an item
/// raises the quantity instead of duplicating the line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
}

/// Payload for materializing a cart. Carts start empty, so there is nothing
/// to carry.
#[derive(Debug, Clone, Default)]
pub struct CartCreate;

/// A cart as presented to callers: lines with name, price, and restaurant
/// resolved fresh from the catalog, plus the recomputed total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub items: Vec<CartLine>,
    /// Always Σ(current catalog price × quantity); never stored.
    pub total: f64,
}

/// One resolved line of a [`CartView`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub menu_item_id: MenuItemId,
    pub name: String,
    /// The item's *current* catalog price, not a snapshot.
    pub price: f64,
    pub restaurant_id: RestaurantId,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
