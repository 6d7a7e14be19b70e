//! Cart-specific actions and their results.
//!
//! Every cart operation beyond materializing the cart itself – mutations,
//! reads, and checkout – travels through this enum, so the cart actor
//! processes each as one message and no operation ever interleaves with
//! another on the same store.

use crate::model::{CartView, MenuItemId, Order};

/// Operations on a user's cart.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add an item, merging into the existing line if the item is already
    /// present. Fails if the catalog does not know the item.
    AddItem {
        menu_item_id: MenuItemId,
        quantity: u32,
    },
    /// Set a line's quantity (not additive). Fails if the line is absent.
    /// A quantity of zero removes the line.
    UpdateItem {
        menu_item_id: MenuItemId,
        quantity: u32,
    },
    /// Drop a line. Removing an absent line is a no-op.
    RemoveItem { menu_item_id: MenuItemId },
    /// Read the cart with prices resolved from the catalog.
    View,
    /// Empty the cart. Idempotent.
    Clear,
    /// Convert the cart into an order and empty it (all-or-nothing).
    Checkout { delivery_address: String },
}

/// Results of cart actions.
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// Mutations and reads return the freshly recomputed view.
    View(CartView),
    /// Checkout returns the recorded order.
    Checkout(Order),
}
