//! # Cart Client
//!
//! The high-level API for a user's cart: mutations, reads, and checkout.
//! Every method takes the caller-supplied [`UserId`] and starts by ensuring
//! the user's cart exists – carts materialize lazily and are never removed,
//! so the ensure is a cheap no-op after the first call.

use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{Cart, CartCreate, CartView, MenuItemId, Order, UserId};
use async_trait::async_trait;
use tiffin_actor::{EntityClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<Cart>,
}

impl CartClient {
    pub fn new(inner: StoreClient<Cart>) -> Self {
        Self { inner }
    }

    async fn ensure_cart(&self, user_id: &UserId) -> Result<(), CartError> {
        self.inner
            .ensure(user_id.clone(), CartCreate)
            .await
            .map_err(Self::map_error)?;
        Ok(())
    }

    async fn view_action(&self, user_id: UserId, action: CartAction) -> Result<CartView, CartError> {
        self.ensure_cart(&user_id).await?;
        match self.inner.perform_action(user_id, action).await {
            Ok(CartActionResult::View(view)) => Ok(view),
            Ok(CartActionResult::Checkout(_)) => {
                unreachable!("cart mutations and reads return a view")
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Add `quantity` of a menu item, merging into an existing line. The
    /// external API defaults the quantity to 1.
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        user_id: UserId,
        menu_item_id: MenuItemId,
        quantity: u32,
    ) -> Result<CartView, CartError> {
        debug!("Sending request");
        self.view_action(
            user_id,
            CartAction::AddItem {
                menu_item_id,
                quantity,
            },
        )
        .await
    }

    /// Set a line's quantity. Zero removes the line; an absent line fails
    /// with [`CartError::ItemNotFound`].
    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        user_id: UserId,
        menu_item_id: MenuItemId,
        quantity: u32,
    ) -> Result<CartView, CartError> {
        debug!("Sending request");
        self.view_action(
            user_id,
            CartAction::UpdateItem {
                menu_item_id,
                quantity,
            },
        )
        .await
    }

    /// Drop a line. Removing an absent line is a no-op.
    #[instrument(skip(self))]
    pub async fn remove_item(
        &self,
        user_id: UserId,
        menu_item_id: MenuItemId,
    ) -> Result<CartView, CartError> {
        debug!("Sending request");
        self.view_action(user_id, CartAction::RemoveItem { menu_item_id })
            .await
    }

    /// Read the cart with prices resolved fresh from the catalog.
    #[instrument(skip(self))]
    pub async fn cart(&self, user_id: UserId) -> Result<CartView, CartError> {
        debug!("Sending request");
        self.view_action(user_id, CartAction::View).await
    }

    /// Empty the cart. Idempotent.
    #[instrument(skip(self))]
    pub async fn clear(&self, user_id: UserId) -> Result<CartView, CartError> {
        debug!("Sending request");
        self.view_action(user_id, CartAction::Clear).await
    }

    /// Convert the cart into an order delivered to `delivery_address`.
    ///
    /// All-or-nothing: on any failure the cart is unchanged and no order is
    /// recorded.
    #[instrument(skip(self, delivery_address))]
    pub async fn checkout(
        &self,
        user_id: UserId,
        delivery_address: impl Into<String> + Send,
    ) -> Result<Order, CartError> {
        debug!("Sending request");
        self.ensure_cart(&user_id).await?;
        match self
            .inner
            .perform_action(
                user_id,
                CartAction::Checkout {
                    delivery_address: delivery_address.into(),
                },
            )
            .await
        {
            Ok(CartActionResult::Checkout(order)) => Ok(order),
            Ok(CartActionResult::View(_)) => unreachable!("checkout returns the recorded order"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl EntityClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<Cart> {
        &self.inner
    }

    /// Entity errors cross the channel boxed; recover the typed `CartError`
    /// so callers can match on `EmptyCart`, `ItemNotFound`, etc.
    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(err) => *err,
                Err(other) => CartError::ActorCommunication(other.to_string()),
            },
            other => CartError::ActorCommunication(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartLine, RestaurantId};
    use tiffin_actor::mock::{create_mock_client, expect_action, expect_ensure};

    #[tokio::test]
    async fn test_add_item_ensures_cart_then_sends_action() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let add_task = tokio::spawn(async move {
            cart_client.add_item(UserId(1), MenuItemId(2), 3).await
        });

        // First message materializes the cart under the user's id.
        let (id, _params, responder) = expect_ensure(&mut receiver)
            .await
            .expect("Expected Ensure request");
        assert_eq!(id, UserId(1));
        responder.send(Ok(UserId(1))).unwrap();

        // Second message is the add itself.
        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, UserId(1));
        match action {
            CartAction::AddItem {
                menu_item_id,
                quantity,
            } => {
                assert_eq!(menu_item_id, MenuItemId(2));
                assert_eq!(quantity, 3);
            }
            _ => panic!("Expected AddItem action"),
        }
        responder
            .send(Ok(CartActionResult::View(CartView {
                items: vec![CartLine {
                    menu_item_id: MenuItemId(2),
                    name: "Masala Dosa".to_string(),
                    price: 120.0,
                    restaurant_id: RestaurantId(1),
                    quantity: 3,
                }],
                total: 360.0,
            })))
            .unwrap();

        let view = add_task.await.unwrap().unwrap();
        assert_eq!(view.total, 360.0);
        assert_eq!(view.items.len(), 1);
    }

    #[tokio::test]
    async fn test_entity_errors_come_back_typed() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let checkout_task =
            tokio::spawn(async move { cart_client.checkout(UserId(1), "42 Curry Lane").await });

        let (_, _, responder) = expect_ensure(&mut receiver)
            .await
            .expect("Expected Ensure request");
        responder.send(Ok(UserId(1))).unwrap();

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(StoreError::EntityError(Box::new(CartError::EmptyCart))))
            .unwrap();

        let result = checkout_task.await.unwrap();
        assert_eq!(result.unwrap_err(), CartError::EmptyCart);
    }
}
