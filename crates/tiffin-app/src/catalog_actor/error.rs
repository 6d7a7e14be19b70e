//! Error types for the catalog stores.

use crate::model::{CategoryId, RestaurantId};
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// A menu item references a restaurant the catalog does not know.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(RestaurantId),

    /// A menu item references a category the catalog does not know.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// A seeded price was negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// A seeded rating fell outside the 0–5 range.
    #[error("Invalid rating: {0}")]
    InvalidRating(f32),

    /// An error occurred while communicating with a catalog actor.
    #[error("Catalog communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunication(msg)
    }
}
