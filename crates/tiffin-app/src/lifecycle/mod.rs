//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; wiring them together is where the
//! complexity lives. This module is the conductor: it creates every store
//! actor, injects dependencies, spawns the run loops, and coordinates
//! graceful shutdown.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created first with no dependencies, then started with their
//! context injected – the "late binding" that keeps the dependency graph
//! acyclic at construction time:
//!
//! ```rust,ignore
//! // No dependencies
//! impl StoreEntity for Restaurant {
//!     type Context = ();
//! }
//!
//! // The cart actor reads the catalog and writes the ledger
//! impl StoreEntity for Cart {
//!     type Context = (CatalogClient, OrderClient);
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** – closes the sender side of every channel.
//! 2. **Actors detect closure** – `receiver.recv()` returns `None`.
//! 3. **Actors finish up** – drain remaining messages, log final state.
//! 4. **Await completion** – wait for every actor task.
//!
//! Clients held inside actor contexts are clones; the graph is acyclic, so
//! each actor shuts down as soon as its own channel closes and its holders
//! are gone.

pub mod system;

pub use system::*;
