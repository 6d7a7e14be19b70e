//! Cart-to-order conversion.
//!
//! Checkout runs inside the cart actor's message handler, so the whole
//! read–snapshot–record–clear sequence is one logical transaction: no other
//! mutation of any cart can interleave with it. Of two racing checkouts for
//! the same user, the second observes the emptied cart and fails with
//! [`CartError::EmptyCart`].

use crate::cart_actor::CartError;
use crate::clients::{CatalogClient, OrderClient};
use crate::model::{Cart, Order, OrderCreate, OrderItem, RestaurantId};

/// Convert `cart` into a recorded order and empty it.
///
/// Either every cart line becomes an order line and the cart is emptied, or
/// the cart is left exactly as it was: the ledger write happens before the
/// clear, and every validation failure aborts beforehand.
pub(super) async fn run(
    cart: &mut Cart,
    delivery_address: String,
    catalog: &CatalogClient,
    orders: &OrderClient,
) -> Result<Order, CartError> {
    if cart.items.is_empty() {
        return Err(CartError::EmptyCart);
    }

    // Resolve each line against the catalog and snapshot the current price.
    let mut lines = Vec::with_capacity(cart.items.len());
    let mut restaurant_id: Option<RestaurantId> = None;
    for item in &cart.items {
        let menu_item = catalog
            .menu_item(item.menu_item_id.clone())
            .await
            .map_err(|e| CartError::ActorCommunication(e.to_string()))?
            .ok_or_else(|| CartError::ItemNotFound(item.menu_item_id.clone()))?;

        match &restaurant_id {
            None => restaurant_id = Some(menu_item.restaurant_id.clone()),
            Some(expected) if *expected != menu_item.restaurant_id => {
                return Err(CartError::MixedRestaurants {
                    expected: expected.clone(),
                    found: menu_item.restaurant_id,
                });
            }
            Some(_) => {}
        }

        lines.push(OrderItem {
            menu_item_id: item.menu_item_id.clone(),
            quantity: item.quantity,
            price_at_order: menu_item.price,
        });
    }
    let restaurant_id = match restaurant_id {
        Some(id) => id,
        None => return Err(CartError::EmptyCart),
    };

    let owner = catalog
        .restaurant(restaurant_id.clone())
        .await
        .map_err(|e| CartError::ActorCommunication(e.to_string()))?;
    if owner.is_none() {
        return Err(CartError::RestaurantNotFound(restaurant_id));
    }

    let total_amount = lines
        .iter()
        .map(|line| line.price_at_order * f64::from(line.quantity))
        .sum();

    let order = orders
        .place(OrderCreate {
            user_id: cart.user_id.clone(),
            restaurant_id,
            delivery_address,
            total_amount,
            items: lines,
        })
        .await
        .map_err(|e| CartError::OrderFailed(e.to_string()))?;

    // The ledger write succeeded; only now does the cart forget its lines.
    cart.items.clear();
    Ok(order)
}
