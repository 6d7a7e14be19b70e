//! # Tiffin
//!
//! The cart & order lifecycle core of a food-ordering backend: a read-only
//! catalog of restaurants and menus, per-user carts, and the checkout path
//! that converts a cart into an immutable order. The HTTP layer is a
//! separate concern that calls into the clients exposed here.
//!
//! ## Module Tour
//!
//! - **[`model`]** – the typed records: restaurants, categories, menu items,
//!   carts and their lines, orders and their lines, id newtypes.
//! - **[`catalog_actor`]** – the Catalog Store: seeded once, the source of
//!   truth for item existence and current prices.
//! - **[`cart_actor`]** – the Cart Store and checkout: every mutation and
//!   the cart-to-order conversion run as single messages, so each is one
//!   logical transaction.
//! - **[`order_actor`]** – the Order Ledger: append-only orders whose
//!   `price_at_order` snapshots decouple history from later price changes.
//! - **[`clients`]** – [`CatalogClient`](clients::CatalogClient),
//!   [`CartClient`](clients::CartClient), and
//!   [`OrderClient`](clients::OrderClient): the public surface.
//! - **[`lifecycle`]** – [`TiffinSystem`](lifecycle::TiffinSystem), which
//!   spawns and wires the actors and owns graceful shutdown.
//! - **[`seed`]** – catalog population from a JSON file or built-in demo
//!   data.
//!
//! ## Quick Start
//!
//! The demo binary in `main.rs` walks the whole flow: seed the catalog, fill
//! a cart, check out, list the user's orders.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Point at a seed file instead of the built-in data
//! TIFFIN_SEED=data.json RUST_LOG=info cargo run
//! ```
//!
//! ## Testing
//!
//! See `tiffin_actor::mock` for testing client logic without spawning
//! actors, and `tests/` for full-system coverage through `TiffinSystem`.

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod seed;
