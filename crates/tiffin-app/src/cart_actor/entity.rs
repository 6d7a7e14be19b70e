//! Entity trait implementation for the [`Cart`] type.
//!
//! The cart actor holds every user's cart, keyed by [`UserId`]. Its context
//! carries the catalog and ledger clients, so cart reads can resolve current
//! prices and checkout can record orders without leaving the actor's message
//! handler.

use crate::cart_actor::{checkout, CartAction, CartActionResult, CartContext, CartError};
use crate::model::{Cart, CartCreate, CartItem, CartLine, CartView, MenuItemId, UserId};
use async_trait::async_trait;
use tiffin_actor::StoreEntity;

#[async_trait]
impl StoreEntity for Cart {
    /// Carts are keyed by their owner: one active cart per user. They are
    /// materialized through `Ensure`, never through counter-assigned ids.
    type Id = UserId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Filter = ();
    type Context = CartContext;
    type Error = CartError;

    fn from_create_params(id: Self::Id, _params: Self::Create) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: id,
            items: Vec::new(),
        })
    }

    // Carts are addressed by owner, never enumerated.
    fn matches(&self, _filter: &()) -> bool {
        false
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &Self::Context,
    ) -> Result<CartActionResult, Self::Error> {
        let (catalog, orders) = ctx;
        match action {
            CartAction::AddItem {
                menu_item_id,
                quantity,
            } => {
                self.add_item(menu_item_id, quantity, ctx).await?;
                Ok(CartActionResult::View(self.view(ctx).await?))
            }
            CartAction::UpdateItem {
                menu_item_id,
                quantity,
            } => {
                self.update_item(menu_item_id, quantity)?;
                Ok(CartActionResult::View(self.view(ctx).await?))
            }
            CartAction::RemoveItem { menu_item_id } => {
                self.items.retain(|line| line.menu_item_id != menu_item_id);
                Ok(CartActionResult::View(self.view(ctx).await?))
            }
            CartAction::View => Ok(CartActionResult::View(self.view(ctx).await?)),
            CartAction::Clear => {
                self.items.clear();
                Ok(CartActionResult::View(self.view(ctx).await?))
            }
            CartAction::Checkout { delivery_address } => {
                let order = checkout::run(self, delivery_address, catalog, orders).await?;
                Ok(CartActionResult::Checkout(order))
            }
        }
    }
}

impl Cart {
    /// Merge `quantity` into the line for `menu_item_id`, inserting the line
    /// if absent. The item must exist in the catalog.
    async fn add_item(
        &mut self,
        menu_item_id: MenuItemId,
        quantity: u32,
        ctx: &CartContext,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let (catalog, _orders) = ctx;
        let known = catalog
            .menu_item(menu_item_id.clone())
            .await
            .map_err(|e| CartError::ActorCommunication(e.to_string()))?;
        if known.is_none() {
            return Err(CartError::ItemNotFound(menu_item_id));
        }

        match self
            .items
            .iter()
            .position(|line| line.menu_item_id == menu_item_id)
        {
            Some(position) => self.items[position].quantity += quantity,
            None => self.items.push(CartItem {
                menu_item_id,
                quantity,
            }),
        }
        Ok(())
    }

    /// Set the quantity of an existing line. Zero removes the line; an
    /// absent line is an error and leaves the cart unchanged.
    fn update_item(&mut self, menu_item_id: MenuItemId, quantity: u32) -> Result<(), CartError> {
        let position = self
            .items
            .iter()
            .position(|line| line.menu_item_id == menu_item_id)
            .ok_or_else(|| CartError::ItemNotFound(menu_item_id.clone()))?;

        if quantity == 0 {
            self.items.remove(position);
        } else {
            self.items[position].quantity = quantity;
        }
        Ok(())
    }

    /// Resolve every line against the catalog and recompute the total. The
    /// total is derived on every read; it is never cached on the cart.
    pub(super) async fn view(&self, ctx: &CartContext) -> Result<CartView, CartError> {
        let (catalog, _orders) = ctx;
        let mut items = Vec::with_capacity(self.items.len());
        for line in &self.items {
            let menu_item = catalog
                .menu_item(line.menu_item_id.clone())
                .await
                .map_err(|e| CartError::ActorCommunication(e.to_string()))?
                .ok_or_else(|| CartError::ItemNotFound(line.menu_item_id.clone()))?;
            items.push(CartLine {
                menu_item_id: line.menu_item_id.clone(),
                name: menu_item.name,
                price: menu_item.price,
                restaurant_id: menu_item.restaurant_id,
                quantity: line.quantity,
            });
        }
        let total = items.iter().map(CartLine::line_total).sum();
        Ok(CartView { items, total })
    }
}
