//! # Store Errors
//!
//! Common error types shared by every store actor and client. Centralizing
//! them keeps error handling consistent across the system; record-specific
//! failures travel inside [`StoreError::EntityError`].

/// Errors that can occur within the store-actor machinery itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
