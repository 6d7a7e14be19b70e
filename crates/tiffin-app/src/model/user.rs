use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for users.
///
/// The core stores no user records: identity is supplied by the API layer
/// with each call, and account handling (credentials, profiles) lives behind
/// a separate trust boundary. Carts are keyed by this id and orders carry it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}
