//! Typed records for the food-ordering core.
//!
//! Every entity the original schema kept as a table (restaurants, categories,
//! menu items, carts, cart items, orders, order items) is an explicit struct
//! here, with `u32` id newtypes instead of raw integers.

pub mod cart;
pub mod category;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod user;

pub use cart::*;
pub use category::*;
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
pub use user::*;
