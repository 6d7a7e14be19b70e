//! # EntityClient Trait
//!
//! Common interface for record-specific client wrappers, providing default
//! `get` and `query` methods built on top of the generic [`StoreClient`].

use crate::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit the standard read operations.
///
/// Domain clients (`CatalogClient`, `OrderClient`, …) wrap a `StoreClient`
/// and add their own methods; implementing this trait gives them `get` and
/// `query` for free, with framework errors mapped into the domain error type.
///
/// # Example
///
/// ```rust,ignore
/// struct OrderClient { inner: StoreClient<Order> }
///
/// #[async_trait]
/// impl EntityClient<Order> for OrderClient {
///     type Error = OrderError;
///
///     fn inner(&self) -> &StoreClient<Order> { &self.inner }
///     fn map_error(e: StoreError) -> Self::Error { OrderError::ActorCommunication(e.to_string()) }
/// }
///
/// // get() and query() are provided automatically:
/// let order = client.get(OrderId(1)).await?;
/// let mine = client.query(UserId(7)).await?;
/// ```
#[async_trait]
pub trait EntityClient<T: StoreEntity>: Send + Sync {
    /// The record-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors into the record-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every record matching the filter.
    #[tracing::instrument(skip(self))]
    async fn query(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().query(filter).await.map_err(Self::map_error)
    }
}
