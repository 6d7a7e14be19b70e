//! # Store Messages
//!
//! The message types exchanged between a [`StoreClient`](crate::client::StoreClient)
//! and its [`StoreActor`](crate::actor::StoreActor).

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to a store actor to request an operation.
///
/// Each actor manages one kind of record (the [`StoreEntity`]), and instead of
/// ad-hoc messages per operation the variants standardize on the lifecycle a
/// persistent record actually has in this system:
///
/// - **Create**: insert a new record under the next generated id.
/// - **Ensure**: insert under a caller-chosen id if absent; a no-op if the id
///   already exists. This is how lazily materialized records (a user's cart)
///   come into being without racing a separate existence check.
/// - **Get (Read)**: fetch the current state of a record by id.
/// - **Query**: enumerate the records matching a [`StoreEntity::Filter`].
/// - **Update**: mutate an existing record through its
///   [`StoreEntity::Update`] DTO.
/// - **Action**: execute a record-specific [`StoreEntity::Action`].
///
/// There is deliberately no `Delete`: the catalog is immutable after seeding,
/// carts are emptied but never removed, and the order ledger is append-only.
///
/// The enum is generic over `T: StoreEntity` and uses the trait's associated
/// types, so a payload for one record type cannot be sent to another store.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Ensure {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Query {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
