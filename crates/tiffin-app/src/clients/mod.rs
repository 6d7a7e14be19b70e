//! Typed client wrappers over the generic store clients.
//!
//! The rest of the application (and the external API layer) never touches
//! raw message passing; these wrappers are the whole public surface of the
//! core.

pub mod cart_client;
pub mod catalog_client;
pub mod order_client;

pub use cart_client::*;
pub use catalog_client::*;
pub use order_client::*;
