//! # Order Ledger
//!
//! The append-only store of placed orders and their line items.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](tiffin_actor::StoreEntity) implementation
//!   for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - factory function that creates the actor and its store client
//!
//! ## Lifecycle
//!
//! Orders enter the ledger through checkout only – the cart actor holds the
//! [`OrderClient`](crate::clients::OrderClient) and records one order plus
//! its items as a single `Create`. Once recorded, an order's items and
//! amounts are frozen; the status field is the single thing `Update` can
//! reach, and the enumeration of statuses is closed
//! ([`OrderStatus`](crate::model::OrderStatus)).

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use tiffin_actor::{StoreActor, StoreClient};

/// Creates the order ledger actor and its store client.
pub fn new() -> (StoreActor<Order>, StoreClient<Order>) {
    StoreActor::new(32)
}
