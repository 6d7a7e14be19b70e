//! # Order Client
//!
//! Read access to the order ledger, status updates, and the `place` path
//! used by checkout. `place` is not a general insert surface – only the cart
//! actor calls it, as the final step of converting a cart.

use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate, UserId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tiffin_actor::{EntityClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the order ledger actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Record an order and return it with its stamped id, status, and date.
    ///
    /// Used by the checkout path only.
    #[instrument(skip(self, params))]
    pub async fn place(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.inner
            .get(id.clone())
            .await
            .map_err(Self::map_error)?
            .ok_or(OrderError::NotFound(id))
    }

    /// Fetch one order by id.
    #[instrument(skip(self))]
    pub async fn order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await
    }

    /// List a user's orders, newest first.
    #[instrument(skip(self))]
    pub async fn orders(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.query(user_id).await?;
        orders.sort_by(|a, b| {
            b.order_date
                .cmp(&a.order_date)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        Ok(orders)
    }

    /// Move an order to a new status. Status is the only field this path can
    /// touch; anything outside [`OrderStatus`] already failed to parse.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id.clone(), OrderUpdate { status })
            .await
            .map_err(|e| match e {
                StoreError::NotFound(_) => OrderError::NotFound(id),
                other => Self::map_error(other),
            })
    }
}

#[async_trait]
impl EntityClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    /// Entity errors cross the channel boxed; recover the typed
    /// `OrderError` for callers.
    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunication(other.to_string()),
            },
            other => OrderError::ActorCommunication(other.to_string()),
        }
    }
}
