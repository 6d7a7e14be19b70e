//! Entity trait implementation for the [`Order`] type.
//!
//! The ledger stamps each incoming order with the next monotonic id, the
//! Pending status, and the creation timestamp. After that the record is
//! frozen: the `Update` DTO carries nothing but a status, so no other field
//! is reachable once an order exists.

use crate::model::{Order, OrderCreate, OrderStatus, OrderUpdate, UserId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use chrono::Utc;
use tiffin_actor::StoreEntity;

#[async_trait]
impl StoreEntity for Order {
    type Id = crate::model::OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    /// Orders are listed per user.
    type Filter = UserId;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::ValidationError("order has no items".into()));
        }
        if params.total_amount < 0.0 {
            return Err(OrderError::ValidationError(format!(
                "negative total: {}",
                params.total_amount
            )));
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            restaurant_id: params.restaurant_id,
            delivery_address: params.delivery_address,
            total_amount: params.total_amount,
            status: OrderStatus::Pending,
            order_date: Utc::now(),
            items: params.items,
        })
    }

    fn matches(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
