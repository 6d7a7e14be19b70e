//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every stored record type (Restaurant,
//! Cart, Order, …) must implement to be managed by the generic [`StoreActor`].
//! It specifies associated types for ids, DTOs, actions, filters, context, and
//! errors, and provides lifecycle hooks (`on_create`, `on_update`,
//! `handle_action`). Implementing this trait gives any record type the same
//! uniform store API.
//!
//! # Architecture Note
//! By defining one contract that all record types satisfy, the [`StoreActor`]
//! loop is written *once* and reused everywhere. Associated types keep the
//! surface type-safe: a `Cart` store only accepts `CartAction`s, and the
//! compiler rejects anything else.
//!
//! [`StoreActor`]: crate::actor::StoreActor

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `StoreActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so that hooks can perform asynchronous work
/// (e.g., calling the clients of other actors). The `Context` type is injected
/// into every hook, which allows "late binding" of dependencies: clients are
/// passed to `run()` rather than to the constructor, so dependency cycles
/// never form at construction time.
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from `u32` so the store can assign monotonic ids.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record (DTO).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// Enum of record-specific operations beyond CRUD (e.g., `Checkout`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The predicate type used to enumerate records (e.g., "menu items of
    /// restaurant 3", "orders of user 7").
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this record.
    ///
    /// # Design Note: Error Granularity
    /// One error enum per store, not one per message. `CartError` is the
    /// union of everything cart operations can fail with; clients pattern
    /// match on a single type. The trade-off is that the return type of any
    /// one action admits variants that action can never produce.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the id and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this record belongs to the result set of `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the record is constructed, before insertion.
    /// Use this hook for validation or side effects involving other actors.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    // --- Action Handler (Async) ---

    /// Handle a record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
