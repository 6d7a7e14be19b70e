//! # Tiffin Actor
//!
//! Generic building blocks for the store actors that back the food-ordering
//! core. Each store (catalog, carts, order ledger) is an actor owning its
//! records and processing requests sequentially; this crate supplies the
//! machinery all of them share.
//!
//! ## Architecture Overview
//!
//! Three layers, so domain logic never touches channel plumbing:
//!
//! 1. **Entity layer** ([`StoreEntity`]) – the record types and their
//!    behavior (hooks, actions, filters).
//! 2. **Runtime layer** ([`StoreActor`]) – the message loop, id assignment,
//!    and record map.
//! 3. **Interface layer** ([`StoreClient`]) – cloneable, type-safe handles
//!    used by the rest of the application.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own tokio task.
//! - Messages are processed **sequentially** within an actor, so a multi-step
//!   handler is one logical transaction and no locks exist anywhere.
//! - Different actors run in parallel and communicate only through clients.
//!
//! ## Context Injection
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at
//! construction time. An actor whose records need other stores (the cart
//! actor reads the catalog and writes the ledger) declares a `Context` of
//! client handles and receives them when spawned:
//!
//! ```rust,ignore
//! let (cart_actor, cart_client) = StoreActor::<Cart>::new(32);
//! tokio::spawn(cart_actor.run((catalog_client.clone(), order_client.clone())));
//! ```
//!
//! ## Request Set
//!
//! [`StoreRequest`] covers Create / Ensure / Get / Query / Update / Action.
//! `Ensure` inserts under a caller-chosen id if absent (lazily materialized
//! records); `Query` enumerates by a per-entity filter. There is no delete:
//! nothing in this system removes records.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockClient`](mock::MockClient) with an
//! expectation-queue API plus channel-level helpers, so client logic can be
//! tested without spawning actors and failures can be injected directly.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::EntityClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
